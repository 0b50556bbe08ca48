//! Schemas for the property bags the host sends across the boundary.
//!
//! Every bag is validated eagerly with `serde` into the structs below. Optional
//! keys are `Option`s and follow update-by-presence: `None` (absent or `null`)
//! leaves the corresponding node property at its construction default.

pub mod geometry;
pub mod light;
pub mod material;
pub mod node;
pub mod physics;

pub use geometry::GeometryDescriptor;
pub use light::LightDescriptor;
pub use material::{MaterialDescriptor, MaterialPropertyDescriptor, parse_materials};
pub use node::{
    AssetDescriptor, CommonProperties, GLTF_NODE_TYPE, LINE_NODE_TYPE, LineDescriptor,
    NodeDescriptor, REFERENCE_NODE_TYPE, ReferenceDescriptor, VariantDescriptor,
};
pub use physics::{PhysicsBodyDescriptor, PhysicsShapeDescriptor};
