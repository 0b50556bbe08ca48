//! Asset resolution and loading.

pub mod loader;
pub mod location;
pub mod request;

pub use loader::{SceneFragment, SceneLoader};
pub use location::{AssetLocation, AssetOrigin};
pub use request::{AssetRequest, LoadedAsset};
