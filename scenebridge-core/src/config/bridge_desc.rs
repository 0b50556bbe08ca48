use crate::config::PlatformCapabilities;
use crate::hit_test::HitTestResultType;
use std::path::PathBuf;

/// Configuration descriptor for the node bridge
#[derive(Debug, Clone)]
pub struct SceneBridgeDesc {
    /// A pointer event extends a line only when the new point is farther than this
    /// from the last recorded point (world units).
    pub min_line_point_spacing: f32,
    /// Width (along X) that embedded assets are normalized to (world units).
    pub asset_target_width: f32,
    /// Distance in front of the viewer at which the floor probe is placed.
    pub floor_probe_distance: f32,
    /// Lowercase file extensions accepted for embedded assets, without the dot.
    pub asset_extensions: Vec<String>,
    /// Directory searched first when resolving reference node urls.
    pub bundle_resource_dir: PathBuf,
    /// Directory holding bundled host assets (`assetType == 0`).
    pub bundle_asset_dir: PathBuf,
    /// User documents folder (`assetType != 0`).
    pub documents_dir: PathBuf,
    /// Surface kinds hit-tested to seed the first point of a line.
    pub line_seed_types: HitTestResultType,
    pub capabilities: PlatformCapabilities,
}

impl Default for SceneBridgeDesc {
    fn default() -> Self {
        Self {
            min_line_point_spacing: 0.012,
            asset_target_width: 0.15,
            floor_probe_distance: 0.5,
            asset_extensions: vec!["gltf".to_string(), "glb".to_string()],
            bundle_resource_dir: PathBuf::from("."),
            bundle_asset_dir: PathBuf::from("flutter_assets"),
            documents_dir: dirs::document_dir().unwrap_or_else(|| PathBuf::from(".")),
            line_seed_types: HitTestResultType::FEATURE_POINT,
            capabilities: PlatformCapabilities::default(),
        }
    }
}

impl SceneBridgeDesc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_line_point_spacing(mut self, spacing: f32) -> Self {
        self.min_line_point_spacing = spacing;
        self
    }

    pub fn asset_target_width(mut self, width: f32) -> Self {
        self.asset_target_width = width;
        self
    }

    pub fn floor_probe_distance(mut self, distance: f32) -> Self {
        self.floor_probe_distance = distance;
        self
    }

    pub fn bundle_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundle_resource_dir = dir.into();
        self
    }

    pub fn bundle_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundle_asset_dir = dir.into();
        self
    }

    pub fn documents_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.documents_dir = dir.into();
        self
    }

    pub fn line_seed_types(mut self, types: HitTestResultType) -> Self {
        self.line_seed_types = types;
        self
    }

    pub fn capabilities(mut self, capabilities: PlatformCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Whether `url` ends in one of the accepted asset extensions, ignoring case.
    pub fn is_supported_asset(&self, url: &str) -> bool {
        let lowercased = url.to_lowercase();
        self.asset_extensions
            .iter()
            .any(|ext| lowercased.ends_with(&format!(".{}", ext)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let desc = SceneBridgeDesc::default();
        assert_eq!(desc.min_line_point_spacing, 0.012);
        assert_eq!(desc.asset_target_width, 0.15);
        assert_eq!(desc.floor_probe_distance, 0.5);
        assert_eq!(desc.line_seed_types, HitTestResultType::FEATURE_POINT);
    }

    #[test]
    fn test_supported_asset_extensions() {
        let desc = SceneBridgeDesc::new();
        assert!(desc.is_supported_asset("models/duck.gltf"));
        assert!(desc.is_supported_asset("models/DUCK.GLB"));
        assert!(!desc.is_supported_asset("models/duck.obj"));
        assert!(!desc.is_supported_asset("models/glb"));
    }

    #[test]
    fn test_builder_setters() {
        let desc = SceneBridgeDesc::new()
            .min_line_point_spacing(0.05)
            .documents_dir("/tmp/docs")
            .capabilities(PlatformCapabilities::minimal());
        assert_eq!(desc.min_line_point_spacing, 0.05);
        assert_eq!(desc.documents_dir, PathBuf::from("/tmp/docs"));
        assert!(!desc.capabilities.area_lights);
    }
}
