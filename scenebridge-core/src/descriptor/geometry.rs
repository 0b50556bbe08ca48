use crate::descriptor::material::{MaterialDescriptor, parse_materials};
use crate::error::Result;
use crate::scene::Material;
use serde::Deserialize;

/// Nested geometry description, passed through to a [`crate::builder::GeometryBuilder`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct GeometryDescriptor(pub serde_json::Value);

impl GeometryDescriptor {
    /// The host type tag of the geometry, e.g. `ARKitBox`.
    pub fn dart_type(&self) -> Option<&str> {
        self.0.get("dartType").and_then(serde_json::Value::as_str)
    }

    /// Parses the `materials` sequence when present.
    pub fn materials(&self) -> Result<Vec<Material>> {
        match self.0.get("materials") {
            Some(value) if !value.is_null() => {
                let descriptors = Vec::<MaterialDescriptor>::deserialize(value)?;
                Ok(parse_materials(&descriptors))
            }
            _ => Ok(Vec::new()),
        }
    }
}
