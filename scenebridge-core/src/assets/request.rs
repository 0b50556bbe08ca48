use crate::assets::{AssetLocation, SceneFragment, SceneLoader};
use crate::config::SceneBridgeDesc;
use crate::descriptor::AssetDescriptor;
use crate::error::{Result, SceneBridgeError};
use crate::scene::{NodeKind, SceneNode};

/// First phase of an embedded-asset load: a validated, resolved location.
///
/// Resolution is cheap and never touches the file. [`AssetRequest::load`] does
/// the blocking decode, and [`LoadedAsset::into_node`] builds the node, so a
/// host can run the middle step wherever blocking is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    location: AssetLocation,
}

impl AssetRequest {
    /// Checks the url extension and resolves it against the configured folders.
    pub fn resolve(descriptor: &AssetDescriptor, config: &SceneBridgeDesc) -> Result<Self> {
        if !config.is_supported_asset(&descriptor.url) {
            let accepted: Vec<String> = config
                .asset_extensions
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect();
            return Err(SceneBridgeError::UnsupportedAsset(format!(
                "Only {} files are supported.",
                accepted.join(" or ")
            )));
        }
        Ok(Self {
            location: AssetLocation::for_asset(&descriptor.url, descriptor.asset_type, config),
        })
    }

    pub fn location(&self) -> &AssetLocation {
        &self.location
    }

    /// Decodes the asset. Blocks until the loader returns.
    pub fn load(self, loader: &dyn SceneLoader) -> Result<LoadedAsset> {
        log::debug!("Loading asset from {}", self.location.path.display());
        let fragment = loader.load(&self.location)?;
        Ok(LoadedAsset {
            location: self.location,
            fragment,
        })
    }
}

/// Second phase: decoded content ready to become a node.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedAsset {
    location: AssetLocation,
    fragment: SceneFragment,
}

impl LoadedAsset {
    pub fn new(location: AssetLocation, fragment: SceneFragment) -> Self {
        Self { location, fragment }
    }

    pub fn location(&self) -> &AssetLocation {
        &self.location
    }

    /// Uniform scale that makes the root's bounding box `target_width` wide along X.
    ///
    /// `None` when the content has no extent along X.
    pub fn normalization_scale(&self, target_width: f32) -> Option<f32> {
        let aabb = self.fragment.root.bounding_box()?;
        let width = (aabb.min.x - aabb.max.x).abs();
        let scale = target_width / width;
        (width > 0.0 && scale.is_finite()).then_some(scale)
    }

    /// Scales the root, then flattens each of its children into a new asset node.
    pub fn into_node(self, target_width: f32) -> SceneNode {
        let scale = self.normalization_scale(target_width);
        let LoadedAsset {
            location,
            fragment: SceneFragment { mut root },
        } = self;

        match scale {
            Some(scale) => root.set_uniform_scale(scale),
            None => log::warn!(
                "Asset {} has no width along X, keeping its original scale",
                location.path.display()
            ),
        }

        let mut node = SceneNode::new(NodeKind::Asset {
            source: Some(location.path),
            scale,
        });
        let root_transform = root.local_matrix();
        node.children = root
            .children
            .iter()
            .map(|child| child.flattened_clone(&root_transform))
            .collect();
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetOrigin;
    use crate::math::{DMat4, Vec3};
    use crate::scene::{Geometry, Primitive};

    fn descriptor(url: &str, asset_type: Option<i64>) -> AssetDescriptor {
        AssetDescriptor {
            url: url.to_string(),
            asset_type,
            name: None,
        }
    }

    fn two_unit_box_fragment() -> SceneFragment {
        let mut root = SceneNode::default();
        root.add_child(
            SceneNode::with_geometry(Some(Geometry::mesh(vec![
                Vec3::new(-1.0, -0.5, -0.5),
                Vec3::new(1.0, 0.5, 0.5),
            ])))
            .named("hull"),
        );
        SceneFragment::new(root)
    }

    #[test]
    fn test_resolve_rejects_unsupported_extension() {
        let err = AssetRequest::resolve(&descriptor("duck.obj", Some(0)), &SceneBridgeDesc::new())
            .unwrap_err();
        match err {
            SceneBridgeError::UnsupportedAsset(message) => {
                assert_eq!(message, "Only .gltf or .glb files are supported.")
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_resolve_uses_origin() {
        let config = SceneBridgeDesc::new()
            .bundle_asset_dir("/bundle")
            .documents_dir("/docs");
        let bundled = AssetRequest::resolve(&descriptor("a.GLTF", Some(0)), &config).unwrap();
        assert_eq!(bundled.location().origin, AssetOrigin::BundledAssets);
        assert_eq!(bundled.location().path, std::path::PathBuf::from("/bundle/a.GLTF"));

        let documents = AssetRequest::resolve(&descriptor("a.glb", Some(3)), &config).unwrap();
        assert_eq!(documents.location().origin, AssetOrigin::Documents);
    }

    #[test]
    fn test_normalization_scale_for_two_unit_box() {
        let location = AssetLocation {
            path: "box.glb".into(),
            origin: AssetOrigin::Documents,
        };
        let loaded = LoadedAsset::new(location, two_unit_box_fragment());
        assert_eq!(loaded.normalization_scale(0.15), Some(0.075));
    }

    #[test]
    fn test_into_node_scales_and_flattens_children() {
        let location = AssetLocation {
            path: "box.glb".into(),
            origin: AssetOrigin::Documents,
        };
        let node = LoadedAsset::new(location, two_unit_box_fragment()).into_node(0.15);

        assert_eq!(
            node.kind,
            NodeKind::Asset {
                source: Some("box.glb".into()),
                scale: Some(0.075),
            }
        );
        assert_eq!(node.children.len(), 1);
        let hull = &node.children[0];
        assert_eq!(hull.name.as_deref(), Some("hull"));
        assert_eq!(hull.transform, DMat4::IDENTITY);

        let width = hull.bounding_box().unwrap().size().x;
        assert!((width - 0.15).abs() < 1e-6, "width was {}", width);
    }

    #[test]
    fn test_degenerate_width_keeps_scale() {
        let mut root = SceneNode::default();
        root.add_child(SceneNode::with_geometry(Some(Geometry::mesh(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]))));
        let location = AssetLocation {
            path: "flat.glb".into(),
            origin: AssetOrigin::Documents,
        };
        let node = LoadedAsset::new(location, SceneFragment::new(root)).into_node(0.15);

        assert!(matches!(node.kind, NodeKind::Asset { scale: None, .. }));
        let geometry = node.children[0].geometry.as_ref().unwrap();
        assert_eq!(
            geometry.primitive,
            Primitive::Mesh {
                positions: vec![Vec3::ZERO, Vec3::Y]
            }
        );
    }

    #[test]
    fn test_load_passes_location_to_loader() {
        let config = SceneBridgeDesc::new().documents_dir("/docs");
        let request = AssetRequest::resolve(&descriptor("box.glb", Some(1)), &config).unwrap();
        let loader = |location: &AssetLocation| -> Result<SceneFragment> {
            assert_eq!(location.path, std::path::PathBuf::from("/docs/box.glb"));
            Ok(two_unit_box_fragment())
        };
        let loaded = request.load(&loader).unwrap();
        assert_eq!(loaded.location().origin, AssetOrigin::Documents);
    }
}
