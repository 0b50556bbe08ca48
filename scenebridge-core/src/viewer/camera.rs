use crate::hit_test::Ray;
use crate::math::{Mat4, Pose, Vec2, Vec3};

/// The viewer's point of view.
///
/// Screen coordinates are in points with the origin at the top-left of the
/// viewport. Screen depth is normalized device depth, 0 at the near plane
/// and 1 at the far plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pose: Pose,
    /// View-to-clip projection with a 0..1 depth range.
    pub projection: Mat4,
    /// Viewport size in points.
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(pose: Pose, projection: Mat4, viewport: Vec2) -> Self {
        Self {
            pose,
            projection,
            viewport,
        }
    }

    /// Right-handed perspective camera.
    pub fn perspective(pose: Pose, fov_y_radians: f32, viewport: Vec2, z_near: f32, z_far: f32) -> Self {
        let aspect = viewport.x / viewport.y;
        Self::new(
            pose,
            Mat4::perspective_rh(fov_y_radians, aspect, z_near, z_far),
            viewport,
        )
    }

    pub fn viewport_center(&self) -> Vec2 {
        self.viewport * 0.5
    }

    fn view_projection(&self) -> Mat4 {
        self.projection * self.pose.to_matrix().inverse()
    }

    /// World position to screen `(x, y, depth)`.
    pub fn project_point(&self, world: Vec3) -> Vec3 {
        let ndc = self.view_projection().project_point3(world);
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
            ndc.z,
        )
    }

    /// Screen `(x, y, depth)` back to a world position.
    pub fn unproject_point(&self, screen: Vec3) -> Vec3 {
        let ndc = Vec3::new(
            screen.x / self.viewport.x * 2.0 - 1.0,
            1.0 - screen.y / self.viewport.y * 2.0,
            screen.z,
        );
        self.view_projection().inverse().project_point3(ndc)
    }

    /// Ray from the near plane through the screen point.
    pub fn ray_through(&self, point: Vec2) -> Option<Ray> {
        let near = self.unproject_point(point.extend(0.0));
        let far = self.unproject_point(point.extend(1.0));
        Ray::between(near, far)
    }
}
