//! Math types for SceneBridge

pub use glam::{DMat4, DVec3, Mat4, Quat, Vec2, Vec3};

use crate::error::{Result, SceneBridgeError};

/// Position and orientation of a viewer or node in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * (-Vec3::Z)
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Local-to-world matrix for this pose.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    pub fn look_at(&mut self, target: Vec3) {
        let forward = (target - self.position).normalize();
        self.rotation = Quat::from_rotation_arc(-Vec3::Z, forward);
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Builds a transform from the host's flat, column-major 16-number layout.
///
/// The host sends doubles, so the matrix is kept at double precision and
/// [`serialize_matrix`] gives back the same 16 numbers.
pub fn deserialize_matrix4(values: &[f64]) -> Result<DMat4> {
    if values.len() != 16 {
        return Err(SceneBridgeError::InvalidDescriptor(format!(
            "transform must have 16 elements, got {}",
            values.len()
        )));
    }
    Ok(DMat4::from_cols_slice(values))
}

/// Flattens a transform into the host's column-major 16-number layout.
pub fn serialize_matrix(matrix: &DMat4) -> Vec<f64> {
    matrix.to_cols_array().to_vec()
}

/// World-space translation stored in the last column of a transform.
pub fn translation_of(matrix: &Mat4) -> Vec3 {
    matrix.w_axis.truncate()
}

pub(crate) mod matrix_serde {
    use glam::Mat4;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(matrix: &Mat4, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(super::serialize_matrix(&matrix.as_dmat4()))
    }
}
