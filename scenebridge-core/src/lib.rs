pub mod assets;
pub mod builder;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod events;
pub mod hit_test;
pub mod math;
pub mod scene;
pub mod viewer;

pub use assets::{AssetLocation, AssetRequest, LoadedAsset, SceneFragment, SceneLoader};
pub use builder::{BuildContext, GeometryBuilder, RenderDevice, create_node, update_node};
pub use config::{PlatformCapabilities, SceneBridgeDesc};
pub use descriptor::{NodeDescriptor, VariantDescriptor};
pub use error::SceneBridgeError;
pub use events::{ErrorChannel, SceneBridgeEvent};
pub use hit_test::{HitTestResult, HitTestResultType, StaticSurfaceTracker, SurfaceTracker};
pub use scene::{NodeKind, SceneNode};
pub use viewer::{Camera, LineGrowth, Viewer};
