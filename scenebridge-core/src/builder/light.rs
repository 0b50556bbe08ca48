use crate::config::PlatformCapabilities;
use crate::descriptor::LightDescriptor;
use crate::scene::{Color, Light, LightType};

/// Builds a light. Unknown or unsupported types fall back to omni.
pub fn build_light(descriptor: &LightDescriptor, capabilities: &PlatformCapabilities) -> Light {
    let mut light = Light::default();

    light.light_type = match descriptor.light_type.map(LightType::from_code) {
        Some(Some(LightType::Area)) if !capabilities.area_lights => {
            log::debug!("Area lights are not supported on this platform, using omni");
            LightType::Omni
        }
        Some(Some(light_type)) => light_type,
        Some(None) | None => LightType::Omni,
    };

    if let Some(temperature) = descriptor.temperature {
        light.temperature = temperature;
    }
    if let Some(intensity) = descriptor.intensity {
        light.intensity = intensity;
    }
    if let Some(angle) = descriptor.spot_inner_angle {
        light.spot_inner_angle = angle;
    }
    if let Some(angle) = descriptor.spot_outer_angle {
        light.spot_outer_angle = angle;
    }
    if let Some(color) = descriptor.color {
        light.color = Color::from_rgb(color);
    }
    light
}
