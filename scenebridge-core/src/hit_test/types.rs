use crate::math::{Mat4, Vec3, matrix_serde, translation_of};
use serde::{Serialize, Serializer};
use uuid::Uuid;

bitflags::bitflags! {
    /// Kinds of tracked surface a hit-test can report, with the host's raw values.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HitTestResultType: u32 {
        /// A tracked feature point near the ray.
        const FEATURE_POINT                  = 1 << 0;
        /// A horizontal plane estimated from feature points, without an anchor.
        const ESTIMATED_HORIZONTAL_PLANE     = 1 << 1;
        /// A vertical plane estimated from feature points, without an anchor.
        const ESTIMATED_VERTICAL_PLANE       = 1 << 2;
        /// A detected plane anchor, treated as infinite.
        const EXISTING_PLANE                 = 1 << 3;
        /// A detected plane anchor, within its estimated extent.
        const EXISTING_PLANE_USING_EXTENT    = 1 << 4;
        /// A detected plane anchor, within its estimated shape.
        const EXISTING_PLANE_USING_GEOMETRY  = 1 << 5;
    }
}

impl HitTestResultType {
    /// Types every platform supports.
    pub fn standard() -> Self {
        Self::FEATURE_POINT
            | Self::ESTIMATED_HORIZONTAL_PLANE
            | Self::EXISTING_PLANE
            | Self::EXISTING_PLANE_USING_EXTENT
    }

    /// Types that need extended plane detection.
    pub fn extended() -> Self {
        Self::ESTIMATED_VERTICAL_PLANE | Self::EXISTING_PLANE_USING_GEOMETRY
    }
}

impl Default for HitTestResultType {
    fn default() -> Self {
        Self::standard()
    }
}

fn serialize_result_type<S: Serializer>(
    value: &HitTestResultType,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(value.bits())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneAlignment {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "anchorType")]
pub enum AnchorKind {
    #[serde(rename = "anchor")]
    Point,
    /// Detected plane lying in the anchor's local XZ plane.
    #[serde(rename = "planeAnchor")]
    Plane {
        /// Center of the plane in anchor space.
        #[serde(serialize_with = "serialize_vec3")]
        center: Vec3,
        /// Width (x) and length (z) of the plane.
        #[serde(serialize_with = "serialize_vec3")]
        extent: Vec3,
        alignment: PlaneAlignment,
    },
}

fn serialize_vec3<S: Serializer>(value: &Vec3, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(value.to_array())
}

/// A tracked real-world position and orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anchor {
    pub identifier: Uuid,
    #[serde(with = "matrix_serde")]
    pub transform: Mat4,
    #[serde(flatten)]
    pub kind: AnchorKind,
}

impl Anchor {
    pub fn point(transform: Mat4) -> Self {
        Self {
            identifier: Uuid::new_v4(),
            transform,
            kind: AnchorKind::Point,
        }
    }

    pub fn plane(transform: Mat4, center: Vec3, extent: Vec3, alignment: PlaneAlignment) -> Self {
        Self {
            identifier: Uuid::new_v4(),
            transform,
            kind: AnchorKind::Plane {
                center,
                extent,
                alignment,
            },
        }
    }
}

/// One surface intersection along a hit-test ray.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HitTestResult {
    #[serde(rename = "type", serialize_with = "serialize_result_type")]
    pub result_type: HitTestResultType,
    /// Distance from the ray origin to the hit.
    pub distance: f32,
    /// Hit pose relative to `anchor`, or equal to `world_transform` without one.
    #[serde(with = "matrix_serde")]
    pub local_transform: Mat4,
    #[serde(with = "matrix_serde")]
    pub world_transform: Mat4,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Anchor>,
}

impl HitTestResult {
    pub fn world_position(&self) -> Vec3 {
        translation_of(&self.world_transform)
    }

    /// Flat mapping handed across the host boundary.
    pub fn to_value(&self) -> serde_json::Value {
        // Every field serializes to plain numbers, strings and arrays.
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values() {
        assert_eq!(HitTestResultType::FEATURE_POINT.bits(), 1);
        assert_eq!(HitTestResultType::EXISTING_PLANE_USING_EXTENT.bits(), 16);
        assert_eq!(HitTestResultType::standard().bits(), 1 | 2 | 8 | 16);
        assert!(
            !HitTestResultType::standard().intersects(HitTestResultType::extended()),
            "extended types must not overlap the standard set"
        );
    }

    #[test]
    fn test_serialized_shape_without_anchor() {
        let result = HitTestResult {
            result_type: HitTestResultType::FEATURE_POINT,
            distance: 0.5,
            local_transform: Mat4::IDENTITY,
            world_transform: Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)),
            anchor: None,
        };
        let value = result.to_value();
        assert_eq!(value["type"], 1);
        assert_eq!(value["distance"], 0.5);
        assert_eq!(value["worldTransform"].as_array().unwrap().len(), 16);
        assert_eq!(value["worldTransform"][12], 1.0);
        assert!(value.get("anchor").is_none());
    }

    #[test]
    fn test_serialized_plane_anchor() {
        let anchor = Anchor::plane(
            Mat4::IDENTITY,
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 1.0),
            PlaneAlignment::Horizontal,
        );
        let identifier = anchor.identifier.to_string();
        let result = HitTestResult {
            result_type: HitTestResultType::EXISTING_PLANE_USING_EXTENT,
            distance: 1.0,
            local_transform: Mat4::IDENTITY,
            world_transform: Mat4::IDENTITY,
            anchor: Some(anchor),
        };
        let value = result.to_value();
        assert_eq!(value["type"], 16);
        assert_eq!(value["anchor"]["anchorType"], "planeAnchor");
        assert_eq!(value["anchor"]["identifier"], identifier);
        assert_eq!(value["anchor"]["extent"], serde_json::json!([2.0, 0.0, 1.0]));
        assert_eq!(value["anchor"]["alignment"], "horizontal");
    }
}
