use crate::math::Vec3;
use crate::scene::material::Material;

/// Tube geometry swept along an append-only polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    points: Vec<Vec3>,
    pub radius: f32,
    /// Number of sides of the tube cross-section.
    pub edges: u32,
    /// Upper bound on turning segments per unit length.
    pub max_turning: u32,
    pub materials: Vec<Material>,
}

impl Line {
    pub fn new(radius: f32, edges: u32, max_turning: u32) -> Self {
        Self {
            points: Vec::new(),
            radius,
            edges,
            max_turning,
            materials: Vec::new(),
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn first_point(&self) -> Option<Vec3> {
        self.points.first().copied()
    }

    pub fn last_point(&self) -> Option<Vec3> {
        self.points.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Appends `point` if the line is empty or the point lies farther than
    /// `min_spacing` from the last point. Returns whether it was appended.
    ///
    /// Non-finite points are never appended.
    pub fn push_spaced(&mut self, point: Vec3, min_spacing: f32) -> bool {
        if !point.is_finite() {
            return false;
        }
        let accepted = match self.points.last() {
            Some(last) => last.distance(point) > min_spacing,
            None => true,
        };
        if accepted {
            self.points.push(point);
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_point_always_accepted() {
        let mut line = Line::new(0.01, 8, 12);
        assert!(line.is_empty());
        assert!(line.push_spaced(Vec3::ZERO, 100.0));
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn test_spacing_threshold_is_exclusive() {
        let mut line = Line::new(0.01, 8, 12);
        line.push_spaced(Vec3::ZERO, 0.012);
        assert!(!line.push_spaced(Vec3::new(0.012, 0.0, 0.0), 0.012));
        assert!(!line.push_spaced(Vec3::new(0.0, 0.005, 0.0), 0.012));
        assert!(line.push_spaced(Vec3::new(0.0, 0.0, 0.02), 0.012));
        assert_eq!(line.len(), 2);
        assert_eq!(line.last_point(), Some(Vec3::new(0.0, 0.0, 0.02)));
        assert_eq!(line.first_point(), Some(Vec3::ZERO));
    }

    #[test]
    fn test_non_finite_points_are_rejected() {
        let mut line = Line::new(0.01, 8, 12);
        assert!(!line.push_spaced(Vec3::new(f32::NAN, 0.0, 0.0), 0.012));
        assert!(line.is_empty());

        line.push_spaced(Vec3::ZERO, 0.012);
        assert!(!line.push_spaced(Vec3::new(0.0, f32::NAN, 0.0), 0.012));
        assert!(!line.push_spaced(Vec3::new(f32::INFINITY, 0.0, 0.0), 0.012));
        assert_eq!(line.points(), &[Vec3::ZERO]);
    }
}
