//! In-memory scene-graph model produced by the bridge.
//!
//! These types describe what a host engine should realize: a [`SceneNode`] tree
//! with geometry, materials, lights and physics bodies. A host adapter mirrors
//! them into its renderer after [`crate::builder::create_node`] returns.

pub mod bounds;
pub mod geometry;
pub mod light;
pub mod line;
pub mod material;
pub mod node;
pub mod physics;

pub use bounds::Aabb;
pub use geometry::{Geometry, Primitive};
pub use light::{Light, LightType};
pub use line::Line;
pub use material::{Color, FillMode, LightingModel, Material, MaterialContents, MaterialProperty};
pub use node::{NodeKind, SceneNode};
pub use physics::{CollisionCategory, PhysicsBody, PhysicsBodyType, PhysicsShape};
