use crate::descriptor::light::LightDescriptor;
use crate::descriptor::material::MaterialDescriptor;
use crate::descriptor::physics::PhysicsBodyDescriptor;
use crate::error::{Result, SceneBridgeError};
use serde::Deserialize;
use serde_json::Value;

pub const LINE_NODE_TYPE: &str = "ARKitLineNode";
pub const REFERENCE_NODE_TYPE: &str = "ARKitReferenceNode";
pub const GLTF_NODE_TYPE: &str = "ARKitGltfNode";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDescriptor {
    pub radius: f32,
    pub edges: u32,
    pub max_turning: u32,
    pub materials: Option<Vec<MaterialDescriptor>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferenceDescriptor {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    pub url: String,
    /// 0 loads from bundled assets, anything else from the documents folder.
    pub asset_type: Option<i64>,
    pub name: Option<String>,
}

/// The four node variants, selected by the `dartType` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum VariantDescriptor {
    Line(LineDescriptor),
    Reference(ReferenceDescriptor),
    Asset(AssetDescriptor),
    /// Any other tag: a plain node around caller-supplied geometry.
    Generic,
}

/// Properties every variant accepts. Absent keys leave the node untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonProperties {
    /// Column-major 4x4 matrix.
    pub transform: Option<Vec<f64>>,
    pub name: Option<String>,
    pub physics_body: Option<PhysicsBodyDescriptor>,
    pub light: Option<LightDescriptor>,
    pub rendering_order: Option<i32>,
    pub is_hidden: Option<bool>,
}

/// A validated node descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDescriptor {
    pub dart_type: String,
    pub variant: VariantDescriptor,
    pub common: CommonProperties,
}

impl NodeDescriptor {
    /// Validates a host property bag.
    ///
    /// Missing or mistyped required keys are rejected. An unrecognized
    /// `dartType` selects [`VariantDescriptor::Generic`].
    pub fn from_value(value: &Value) -> Result<Self> {
        let dart_type = value
            .as_object()
            .ok_or_else(|| {
                SceneBridgeError::InvalidDescriptor("node descriptor must be a mapping".to_string())
            })?
            .get("dartType")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SceneBridgeError::InvalidDescriptor("missing string key `dartType`".to_string())
            })?;

        let invalid = |e: serde_json::Error| {
            SceneBridgeError::InvalidDescriptor(format!("{}: {}", dart_type, e))
        };

        let variant = match dart_type {
            LINE_NODE_TYPE => {
                VariantDescriptor::Line(LineDescriptor::deserialize(value).map_err(invalid)?)
            }
            REFERENCE_NODE_TYPE => VariantDescriptor::Reference(
                ReferenceDescriptor::deserialize(value).map_err(invalid)?,
            ),
            GLTF_NODE_TYPE => {
                VariantDescriptor::Asset(AssetDescriptor::deserialize(value).map_err(invalid)?)
            }
            other => {
                log::debug!("Building generic node for type {}", other);
                VariantDescriptor::Generic
            }
        };

        Ok(Self {
            dart_type: dart_type.to_string(),
            variant,
            common: CommonProperties::deserialize(value).map_err(invalid)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_descriptor() {
        let descriptor = NodeDescriptor::from_value(&json!({
            "dartType": "ARKitLineNode",
            "radius": 0.01,
            "edges": 12,
            "maxTurning": 10,
            "name": "stroke",
        }))
        .unwrap();

        match descriptor.variant {
            VariantDescriptor::Line(line) => {
                assert_eq!(line.radius, 0.01);
                assert_eq!(line.edges, 12);
                assert_eq!(line.max_turning, 10);
                assert!(line.materials.is_none());
            }
            other => panic!("expected line variant, got {:?}", other),
        }
        assert_eq!(descriptor.common.name.as_deref(), Some("stroke"));
    }

    #[test]
    fn test_unknown_type_is_generic() {
        let descriptor =
            NodeDescriptor::from_value(&json!({ "dartType": "ARKitSomethingNew" })).unwrap();
        assert_eq!(descriptor.variant, VariantDescriptor::Generic);
        assert_eq!(descriptor.common, CommonProperties::default());
    }

    #[test]
    fn test_missing_required_key_is_invalid() {
        let err = NodeDescriptor::from_value(&json!({
            "dartType": "ARKitLineNode",
            "radius": 0.01,
            "edges": 12,
        }))
        .unwrap_err();
        match err {
            SceneBridgeError::InvalidDescriptor(message) => {
                assert!(message.contains("maxTurning"), "{}", message)
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_missing_dart_type_is_invalid() {
        assert!(NodeDescriptor::from_value(&json!({ "name": "x" })).is_err());
        assert!(NodeDescriptor::from_value(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_null_common_values_are_absent() {
        let descriptor = NodeDescriptor::from_value(&json!({
            "dartType": "ARKitNode",
            "name": null,
            "isHidden": true,
            "renderingOrder": 3,
        }))
        .unwrap();
        assert!(descriptor.common.name.is_none());
        assert_eq!(descriptor.common.is_hidden, Some(true));
        assert_eq!(descriptor.common.rendering_order, Some(3));
    }

    #[test]
    fn test_mistyped_common_value_is_invalid() {
        let err = NodeDescriptor::from_value(&json!({
            "dartType": "ARKitNode",
            "isHidden": "yes",
        }))
        .unwrap_err();
        assert!(matches!(err, SceneBridgeError::InvalidDescriptor(_)));
    }
}
