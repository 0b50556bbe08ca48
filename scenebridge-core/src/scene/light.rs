use crate::scene::material::Color;

/// Kind of light, with the host's integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightType {
    Ambient,
    #[default]
    Omni,
    Directional,
    Spot,
    Ies,
    Probe,
    Area,
}

impl LightType {
    /// Maps a host code to a light type. Unknown codes are `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Ambient),
            1 => Some(Self::Omni),
            2 => Some(Self::Directional),
            3 => Some(Self::Spot),
            4 => Some(Self::Ies),
            5 => Some(Self::Probe),
            6 => Some(Self::Area),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub light_type: LightType,
    /// Color temperature in Kelvin.
    pub temperature: f32,
    /// Luminous flux in lumens.
    pub intensity: f32,
    /// Degrees.
    pub spot_inner_angle: f32,
    /// Degrees.
    pub spot_outer_angle: f32,
    pub color: Color,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            light_type: LightType::Omni,
            temperature: 6500.0,
            intensity: 1000.0,
            spot_inner_angle: 0.0,
            spot_outer_angle: 45.0,
            color: Color::WHITE,
        }
    }
}
