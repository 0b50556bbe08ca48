use crate::hit_test::Ray;
use crate::math::{Mat4, Vec3};
use crate::scene::{Primitive, SceneNode};

/// A ray intersection with a node's own geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeHit<'a> {
    pub node: &'a SceneNode,
    pub distance: f32,
    pub world_position: Vec3,
}

/// Ray-casts against `node` and its descendants, nearest hit first.
///
/// `parent_transform` places `node` in world space. With `ignore_hidden`, a
/// hidden node and its whole subtree are skipped. Described geometry has no
/// known shape and is never hit.
pub fn hit_test_node<'a>(
    ray: &Ray,
    node: &'a SceneNode,
    parent_transform: &Mat4,
    ignore_hidden: bool,
) -> Vec<NodeHit<'a>> {
    let mut hits = Vec::new();
    collect_hits(ray, node, parent_transform, ignore_hidden, &mut hits);
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

fn collect_hits<'a>(
    ray: &Ray,
    node: &'a SceneNode,
    parent_transform: &Mat4,
    ignore_hidden: bool,
    hits: &mut Vec<NodeHit<'a>>,
) {
    if ignore_hidden && node.is_hidden {
        return;
    }
    let world = *parent_transform * node.local_matrix();

    if let Some(geometry) = &node.geometry {
        let distance = match &geometry.primitive {
            Primitive::Floor => {
                let origin = world.transform_point3(Vec3::ZERO);
                let normal = world.inverse().transpose().transform_vector3(Vec3::Y);
                ray.intersect_plane(origin, normal)
            }
            Primitive::Mesh { positions } => positions
                .chunks_exact(3)
                .filter_map(|triangle| {
                    ray.intersect_triangle(
                        world.transform_point3(triangle[0]),
                        world.transform_point3(triangle[1]),
                        world.transform_point3(triangle[2]),
                    )
                })
                .min_by(f32::total_cmp),
            Primitive::Described { .. } => None,
        };
        if let Some(distance) = distance {
            hits.push(NodeHit {
                node,
                distance,
                world_position: ray.at(distance),
            });
        }
    }

    for child in &node.children {
        collect_hits(ray, child, &world, ignore_hidden, hits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Geometry;

    fn down_ray() -> Ray {
        Ray::between(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO).unwrap()
    }

    #[test]
    fn test_floor_hit() {
        let floor = SceneNode::with_geometry(Some(Geometry::floor()))
            .with_transform(Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0)));
        let hits = hit_test_node(&down_ray(), &floor, &Mat4::IDENTITY, false);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance - 4.0).abs() < 1e-6);
        assert!(hits[0].world_position.abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn test_hidden_nodes() {
        let mut floor = SceneNode::with_geometry(Some(Geometry::floor()));
        floor.is_hidden = true;
        assert!(hit_test_node(&down_ray(), &floor, &Mat4::IDENTITY, true).is_empty());
        assert_eq!(
            hit_test_node(&down_ray(), &floor, &Mat4::IDENTITY, false).len(),
            1
        );
    }

    #[test]
    fn test_nearest_child_first() {
        let triangle = Geometry::mesh(vec![
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ]);
        let mut root = SceneNode::default();
        root.add_child(
            SceneNode::with_geometry(Some(triangle.clone()))
                .named("low")
                .with_transform(Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0))),
        );
        root.add_child(
            SceneNode::with_geometry(Some(triangle))
                .named("high")
                .with_transform(Mat4::from_translation(Vec3::new(0.0, 3.0, 0.0))),
        );

        let hits = hit_test_node(&down_ray(), &root, &Mat4::IDENTITY, false);
        let names: Vec<_> = hits.iter().filter_map(|hit| hit.node.name.as_deref()).collect();
        assert_eq!(names, vec!["high", "low"]);
    }

    #[test]
    fn test_floor_behind_ray_is_missed() {
        let floor = SceneNode::with_geometry(Some(Geometry::floor()))
            .with_transform(Mat4::from_translation(Vec3::new(0.0, 10.0, 0.0)));
        assert!(hit_test_node(&down_ray(), &floor, &Mat4::IDENTITY, false).is_empty());
    }
}
