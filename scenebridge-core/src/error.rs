//! Error types for SceneBridge

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneBridgeError {
    /// A required descriptor key is missing or has the wrong type.
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Unsupported asset: {0}")]
    UnsupportedAsset(String),

    #[error("Asset loading error: {0}")]
    AssetLoading(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SceneBridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidDescriptor(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SceneBridgeError>;
