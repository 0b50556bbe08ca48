//! Ray-casting against tracked surfaces and scene nodes.

pub mod node_probe;
pub mod ray;
pub mod tracker;
pub mod types;

pub use node_probe::{NodeHit, hit_test_node};
pub use ray::Ray;
pub use tracker::{EstimatedPlane, StaticSurfaceTracker, SurfaceTracker};
pub use types::{Anchor, AnchorKind, HitTestResult, HitTestResultType, PlaneAlignment};
