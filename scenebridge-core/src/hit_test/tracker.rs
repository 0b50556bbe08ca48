//! Tracked-surface queries.
//!
//! AR tracking (feature points, plane detection) is a capability the host
//! platform provides. [`SurfaceTracker`] is the seam the bridge queries it
//! through.

use crate::hit_test::{Anchor, AnchorKind, HitTestResult, HitTestResultType, PlaneAlignment, Ray};
use crate::math::{Mat4, Quat, Vec3};

/// Trait for ray-casting against tracked real-world surfaces.
///
/// # Example
///
/// ```
/// use scenebridge_core::hit_test::{HitTestResult, HitTestResultType, Ray, SurfaceTracker};
///
/// struct NothingTracked;
///
/// impl SurfaceTracker for NothingTracked {
///     fn hit_test(&self, _ray: &Ray, _types: HitTestResultType) -> Vec<HitTestResult> {
///         Vec::new()
///     }
/// }
/// ```
pub trait SurfaceTracker {
    /// Returns every intersection of `ray` with surfaces of the requested
    /// `types`. Order is not significant; callers sort by distance.
    fn hit_test(&self, ray: &Ray, types: HitTestResultType) -> Vec<HitTestResult>;
}

/// A plane estimated from feature points, not yet backed by an anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedPlane {
    pub point: Vec3,
    pub normal: Vec3,
    pub alignment: PlaneAlignment,
}

/// Tracker over a fixed set of surfaces, e.g. replayed from a recorded session.
#[derive(Debug, Clone)]
pub struct StaticSurfaceTracker {
    feature_points: Vec<Vec3>,
    estimated_planes: Vec<EstimatedPlane>,
    plane_anchors: Vec<Anchor>,
    /// Maximum perpendicular distance between a feature point and the ray.
    pub feature_point_tolerance: f32,
}

impl Default for StaticSurfaceTracker {
    fn default() -> Self {
        Self {
            feature_points: Vec::new(),
            estimated_planes: Vec::new(),
            plane_anchors: Vec::new(),
            feature_point_tolerance: 0.01,
        }
    }
}

impl StaticSurfaceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_feature_point(&mut self, point: Vec3) {
        self.feature_points.push(point);
    }

    pub fn add_estimated_plane(&mut self, plane: EstimatedPlane) {
        self.estimated_planes.push(plane);
    }

    /// Adds a plane anchor. Anchors that are not planes are ignored.
    pub fn add_plane_anchor(&mut self, anchor: Anchor) {
        if matches!(anchor.kind, AnchorKind::Plane { .. }) {
            self.plane_anchors.push(anchor);
        } else {
            log::warn!("Ignoring non-plane anchor {}", anchor.identifier);
        }
    }

    fn feature_point_hits(&self, ray: &Ray, results: &mut Vec<HitTestResult>) {
        for point in &self.feature_points {
            let Some((distance, offset)) = ray.closest_approach(*point) else {
                continue;
            };
            if offset > self.feature_point_tolerance {
                continue;
            }
            let transform = Mat4::from_translation(ray.at(distance));
            results.push(HitTestResult {
                result_type: HitTestResultType::FEATURE_POINT,
                distance,
                local_transform: transform,
                world_transform: transform,
                anchor: None,
            });
        }
    }

    fn estimated_plane_hits(
        &self,
        ray: &Ray,
        types: HitTestResultType,
        results: &mut Vec<HitTestResult>,
    ) {
        for plane in &self.estimated_planes {
            let result_type = match plane.alignment {
                PlaneAlignment::Horizontal => HitTestResultType::ESTIMATED_HORIZONTAL_PLANE,
                PlaneAlignment::Vertical => HitTestResultType::ESTIMATED_VERTICAL_PLANE,
            };
            if !types.contains(result_type) {
                continue;
            }
            let Some(distance) = ray.intersect_plane(plane.point, plane.normal) else {
                continue;
            };
            let rotation = Quat::from_rotation_arc(Vec3::Y, plane.normal.normalize());
            let transform = Mat4::from_rotation_translation(rotation, ray.at(distance));
            results.push(HitTestResult {
                result_type,
                distance,
                local_transform: transform,
                world_transform: transform,
                anchor: None,
            });
        }
    }

    fn plane_anchor_hits(
        &self,
        ray: &Ray,
        types: HitTestResultType,
        results: &mut Vec<HitTestResult>,
    ) {
        for anchor in &self.plane_anchors {
            let AnchorKind::Plane { center, extent, .. } = anchor.kind else {
                continue;
            };
            let (_, rotation, _) = anchor.transform.to_scale_rotation_translation();
            let normal = rotation * Vec3::Y;
            let origin = anchor.transform.transform_point3(Vec3::ZERO);
            let Some(distance) = ray.intersect_plane(origin, normal) else {
                continue;
            };

            let world_transform = Mat4::from_rotation_translation(rotation, ray.at(distance));
            let local_transform = anchor.transform.inverse() * world_transform;
            let local = local_transform.w_axis.truncate() - center;
            let within_extent =
                local.x.abs() <= extent.x * 0.5 && local.z.abs() <= extent.z * 0.5;

            let mut matched = HitTestResultType::EXISTING_PLANE;
            if within_extent {
                // Plane geometry is approximated by its extent rectangle.
                matched |= HitTestResultType::EXISTING_PLANE_USING_EXTENT
                    | HitTestResultType::EXISTING_PLANE_USING_GEOMETRY;
            }
            for result_type in (matched & types).iter() {
                results.push(HitTestResult {
                    result_type,
                    distance,
                    local_transform,
                    world_transform,
                    anchor: Some(anchor.clone()),
                });
            }
        }
    }
}

impl SurfaceTracker for StaticSurfaceTracker {
    fn hit_test(&self, ray: &Ray, types: HitTestResultType) -> Vec<HitTestResult> {
        let mut results = Vec::new();
        if types.contains(HitTestResultType::FEATURE_POINT) {
            self.feature_point_hits(ray, &mut results);
        }
        self.estimated_plane_hits(ray, types, &mut results);
        self.plane_anchor_hits(ray, types, &mut results);
        results
    }
}
