/// Optional platform features that change how descriptors are realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// Area lights are available. Without them an area light becomes an omni light.
    pub area_lights: bool,
    /// Vertical plane estimation and plane-geometry hit testing are available.
    pub extended_plane_detection: bool,
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self {
            area_lights: true,
            extended_plane_detection: true,
        }
    }
}

impl PlatformCapabilities {
    /// A platform with none of the optional features.
    pub fn minimal() -> Self {
        Self {
            area_lights: false,
            extended_plane_detection: false,
        }
    }
}
