//! The viewer: camera, tracked surfaces and per-viewer helper nodes.

pub mod camera;
pub mod floor_probe;
pub mod line_growth;

pub use camera::Camera;
pub use floor_probe::{AuxiliaryNodes, FLOOR_PROBE_NAME};
pub use line_growth::LineGrowth;

use crate::config::SceneBridgeDesc;
use crate::events::ErrorChannel;
use crate::hit_test::{HitTestResult, HitTestResultType, SurfaceTracker, hit_test_node};
use crate::math::{Pose, Vec2, Vec3};
use crate::scene::SceneNode;

/// A view onto the AR scene.
///
/// `Viewer` owns the camera, the surface tracker the host platform provides,
/// and the helper nodes it creates for its own queries. Everything runs on the
/// caller's thread.
pub struct Viewer {
    camera: Camera,
    tracker: Box<dyn SurfaceTracker>,
    desc: SceneBridgeDesc,
    errors: ErrorChannel,
    auxiliary: AuxiliaryNodes,
}

impl Viewer {
    pub fn new(
        camera: Camera,
        tracker: impl SurfaceTracker + 'static,
        desc: SceneBridgeDesc,
        errors: ErrorChannel,
    ) -> Self {
        Self {
            camera,
            tracker: Box::new(tracker),
            desc,
            errors,
            auxiliary: AuxiliaryNodes::new(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Moves the viewer. The floor probe follows it.
    pub fn set_pose(&mut self, pose: Pose) {
        self.camera.pose = pose;
    }

    pub fn desc(&self) -> &SceneBridgeDesc {
        &self.desc
    }

    pub fn errors(&self) -> &ErrorChannel {
        &self.errors
    }

    /// Surface kinds a general hit-test asks the tracker for.
    pub fn hit_test_types(&self) -> HitTestResultType {
        if self.desc.capabilities.extended_plane_detection {
            HitTestResultType::standard() | HitTestResultType::extended()
        } else {
            HitTestResultType::standard()
        }
    }

    /// Hit-tests tracked surfaces under a screen point, nearest first.
    pub fn hit_test(&self, point: Vec2) -> Vec<HitTestResult> {
        self.hit_test_with_types(point, self.hit_test_types())
    }

    /// Like [`Viewer::hit_test`], with each result in its host-facing form.
    pub fn hit_test_serialized(&self, point: Vec2) -> Vec<serde_json::Value> {
        self.hit_test(point)
            .iter()
            .map(HitTestResult::to_value)
            .collect()
    }

    pub fn hit_test_with_types(&self, point: Vec2, types: HitTestResultType) -> Vec<HitTestResult> {
        let Some(ray) = self.camera.ray_through(point) else {
            log::debug!("No ray through screen point {:?}", point);
            return Vec::new();
        };
        let mut results = self.tracker.hit_test(&ray, types);
        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// The per-viewer floor probe, created on first access.
    pub fn floor_probe(&mut self) -> &SceneNode {
        self.auxiliary.floor_probe(self.desc.floor_probe_distance)
    }

    /// World position of the floor probe straight ahead of the viewer.
    ///
    /// Only the probe is tested, hidden as it is. `None` when the center ray
    /// misses it.
    pub fn center_position(&mut self) -> Option<Vec3> {
        let ray = self.camera.ray_through(self.camera.viewport_center())?;
        let viewer_transform = self.camera.pose.to_matrix();
        let probe = self.floor_probe();
        hit_test_node(&ray, probe, &viewer_transform, false)
            .first()
            .map(|hit| hit.world_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformCapabilities;
    use crate::hit_test::{EstimatedPlane, PlaneAlignment, Ray, StaticSurfaceTracker};
    use crate::math::{Mat4, Quat};

    struct NoopTracker;

    impl SurfaceTracker for NoopTracker {
        fn hit_test(&self, _ray: &Ray, _types: HitTestResultType) -> Vec<HitTestResult> {
            Vec::new()
        }
    }

    /// Reports one hit per requested type, farthest first.
    struct RecordingTracker;

    impl SurfaceTracker for RecordingTracker {
        fn hit_test(&self, ray: &Ray, types: HitTestResultType) -> Vec<HitTestResult> {
            types
                .iter()
                .enumerate()
                .map(|(i, result_type)| {
                    let distance = 10.0 - i as f32;
                    let transform = Mat4::from_translation(ray.at(distance));
                    HitTestResult {
                        result_type,
                        distance,
                        local_transform: transform,
                        world_transform: transform,
                        anchor: None,
                    }
                })
                .collect()
        }
    }

    pub(crate) fn test_camera(pose: Pose) -> Camera {
        Camera::perspective(pose, 60f32.to_radians(), Vec2::new(1000.0, 1000.0), 0.01, 100.0)
    }

    #[test]
    fn test_empty_hit_test_reports_nothing() {
        let errors = ErrorChannel::new();
        let viewer = Viewer::new(
            test_camera(Pose::identity()),
            NoopTracker,
            SceneBridgeDesc::new(),
            errors.clone(),
        );
        assert!(viewer.hit_test(Vec2::new(500.0, 500.0)).is_empty());
        assert!(viewer.hit_test_serialized(Vec2::new(500.0, 500.0)).is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_results_are_nearest_first() {
        let viewer = Viewer::new(
            test_camera(Pose::identity()),
            RecordingTracker,
            SceneBridgeDesc::new(),
            ErrorChannel::new(),
        );
        let results = viewer.hit_test(Vec2::new(500.0, 500.0));
        assert_eq!(results.len(), 6);
        assert!(results.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_extended_types_need_capability() {
        let minimal = Viewer::new(
            test_camera(Pose::identity()),
            RecordingTracker,
            SceneBridgeDesc::new().capabilities(PlatformCapabilities::minimal()),
            ErrorChannel::new(),
        );
        assert_eq!(minimal.hit_test_types(), HitTestResultType::standard());
        let types: HitTestResultType = minimal
            .hit_test(Vec2::new(500.0, 500.0))
            .iter()
            .map(|r| r.result_type)
            .collect();
        assert_eq!(types, HitTestResultType::standard());
    }

    #[test]
    fn test_serialized_results_follow_order() {
        let mut tracker = StaticSurfaceTracker::new();
        for depth in [3.0, 1.0, 2.0] {
            tracker.add_estimated_plane(EstimatedPlane {
                point: Vec3::new(0.0, 0.0, -depth),
                normal: Vec3::Z,
                alignment: PlaneAlignment::Vertical,
            });
        }
        let viewer = Viewer::new(
            test_camera(Pose::identity()),
            tracker,
            SceneBridgeDesc::new(),
            ErrorChannel::new(),
        );
        let values = viewer.hit_test_serialized(Vec2::new(500.0, 500.0));
        assert_eq!(values.len(), 3);
        let distances: Vec<f64> = values
            .iter()
            .map(|v| v["distance"].as_f64().unwrap())
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values[0]["type"], 4);
    }

    #[test]
    fn test_center_position_is_in_front_of_viewer() {
        let pose = Pose::new(Vec3::new(1.0, 1.6, 2.0), Quat::from_rotation_y(0.5));
        let mut viewer = Viewer::new(
            test_camera(pose),
            NoopTracker,
            SceneBridgeDesc::new(),
            ErrorChannel::new(),
        );
        let position = viewer.center_position().unwrap();
        let expected = pose.position + pose.forward() * 0.5;
        assert!(position.abs_diff_eq(expected, 1e-3), "{:?}", position);
    }

    #[test]
    fn test_center_position_behind_viewer_is_none() {
        let errors = ErrorChannel::new();
        let mut viewer = Viewer::new(
            test_camera(Pose::identity()),
            NoopTracker,
            SceneBridgeDesc::new().floor_probe_distance(-0.5),
            errors.clone(),
        );
        assert_eq!(viewer.center_position(), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_floor_probe_is_reused() {
        let mut viewer = Viewer::new(
            test_camera(Pose::identity()),
            NoopTracker,
            SceneBridgeDesc::new(),
            ErrorChannel::new(),
        );
        let first = viewer.floor_probe().clone();
        viewer.center_position();
        viewer.set_pose(Pose::from_position(Vec3::new(0.0, 2.0, 0.0)));
        let moved = viewer.center_position().unwrap();
        assert_eq!(&first, viewer.floor_probe());
        assert!(moved.abs_diff_eq(Vec3::new(0.0, 2.0, -0.5), 1e-3));
    }
}
