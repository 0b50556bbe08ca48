use crate::assets::AssetLocation;
use crate::error::Result;
use crate::scene::SceneNode;

/// A decoded scene file.
///
/// `root` is the file's root node; its children are the actual content.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFragment {
    pub root: SceneNode,
}

impl SceneFragment {
    pub fn new(root: SceneNode) -> Self {
        Self { root }
    }
}

/// Trait for decoding scene files into [`SceneFragment`]s.
///
/// Format decoding (glTF, GLB, native scene archives) lives outside this crate;
/// hosts plug their decoder in here. Loading is blocking.
///
/// # Example
///
/// ```ignore
/// use scenebridge_core::assets::{AssetLocation, SceneFragment, SceneLoader};
/// use scenebridge_core::error::Result;
///
/// struct MyGltfLoader;
///
/// impl SceneLoader for MyGltfLoader {
///     fn load(&self, location: &AssetLocation) -> Result<SceneFragment> {
///         // Decode `location.path` with your glTF library
///         todo!()
///     }
/// }
/// ```
pub trait SceneLoader {
    fn load(&self, location: &AssetLocation) -> Result<SceneFragment>;
}

impl<F> SceneLoader for F
where
    F: Fn(&AssetLocation) -> Result<SceneFragment>,
{
    fn load(&self, location: &AssetLocation) -> Result<SceneFragment> {
        self(location)
    }
}
