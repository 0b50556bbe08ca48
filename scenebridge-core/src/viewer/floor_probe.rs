use crate::math::{Mat4, Vec3};
use crate::scene::{Geometry, SceneNode};
use std::f32::consts::FRAC_PI_2;

pub const FLOOR_PROBE_NAME: &str = "floorProbe";

/// Helper nodes a viewer creates for its own queries.
///
/// They are never part of the host's scene and live as long as the viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuxiliaryNodes {
    floor_probe: Option<SceneNode>,
}

impl AuxiliaryNodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the floor probe, creating it on first use.
    ///
    /// `distance` only applies when the probe is created.
    pub fn floor_probe(&mut self, distance: f32) -> &SceneNode {
        self.floor_probe.get_or_insert_with(|| {
            log::debug!("Creating floor probe {} in front of the viewer", distance);
            floor_probe_node(distance)
        })
    }

    pub fn has_floor_probe(&self) -> bool {
        self.floor_probe.is_some()
    }
}

/// Hidden infinite floor, `distance` ahead of the viewer and rotated to face it.
///
/// The transform is relative to the viewer's pose.
fn floor_probe_node(distance: f32) -> SceneNode {
    let transform =
        Mat4::from_translation(Vec3::new(0.0, 0.0, -distance)) * Mat4::from_rotation_x(-FRAC_PI_2);
    let mut node = SceneNode::with_geometry(Some(Geometry::floor()))
        .named(FLOOR_PROBE_NAME)
        .with_transform(transform);
    node.is_hidden = true;
    node
}
