use crate::config::SceneBridgeDesc;
use std::path::PathBuf;

/// Where an asset path was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOrigin {
    /// Assets bundled with the host application.
    BundledAssets,
    /// The user's documents folder.
    Documents,
    /// A named resource in the application bundle.
    BundledResource,
    /// A plain file path.
    FilePath,
}

impl AssetOrigin {
    /// Maps the descriptor `assetType` code. Only 0 means bundled assets.
    pub fn from_asset_type(asset_type: Option<i64>) -> Self {
        match asset_type {
            Some(0) => Self::BundledAssets,
            _ => Self::Documents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocation {
    pub path: PathBuf,
    pub origin: AssetOrigin,
}

impl AssetLocation {
    /// Resolves an embedded asset url from its descriptor `assetType` code:
    /// bundled assets for 0, the documents folder otherwise.
    pub fn for_asset(url: &str, asset_type: Option<i64>, config: &SceneBridgeDesc) -> Self {
        let origin = AssetOrigin::from_asset_type(asset_type);
        let base = if origin == AssetOrigin::BundledAssets {
            &config.bundle_asset_dir
        } else {
            &config.documents_dir
        };
        Self {
            path: base.join(url),
            origin,
        }
    }

    /// Resolves a reference url: a bundled resource of that name if one exists,
    /// otherwise the url taken as a file path.
    pub fn for_reference(url: &str, config: &SceneBridgeDesc) -> Self {
        let bundled = config.bundle_resource_dir.join(url);
        if bundled.is_file() {
            Self {
                path: bundled,
                origin: AssetOrigin::BundledResource,
            }
        } else {
            Self {
                path: PathBuf::from(url),
                origin: AssetOrigin::FilePath,
            }
        }
    }
}
