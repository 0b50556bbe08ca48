use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightDescriptor {
    /// Host light code; see [`crate::scene::LightType::from_code`].
    #[serde(rename = "type")]
    pub light_type: Option<i64>,
    pub temperature: Option<f32>,
    pub intensity: Option<f32>,
    pub spot_inner_angle: Option<f32>,
    pub spot_outer_angle: Option<f32>,
    /// Packed `0xRRGGBB` color.
    pub color: Option<u32>,
}
