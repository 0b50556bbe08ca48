use crate::descriptor::geometry::GeometryDescriptor;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsBodyDescriptor {
    /// 0 static, 1 dynamic, 2 kinematic.
    #[serde(rename = "type")]
    pub body_type: i64,
    pub shape: Option<PhysicsShapeDescriptor>,
    pub category_bit_mask: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhysicsShapeDescriptor {
    pub geometry: Option<GeometryDescriptor>,
}
