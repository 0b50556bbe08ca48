use crate::math::{DMat4, DVec3, Mat4, Vec3, translation_of};
use crate::scene::bounds::Aabb;
use crate::scene::geometry::{Geometry, Primitive};
use crate::scene::light::Light;
use crate::scene::line::Line;
use crate::scene::material::Material;
use crate::scene::physics::PhysicsBody;
use std::path::PathBuf;

/// Variant-specific state of a [`SceneNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Plain node wrapping caller-supplied geometry.
    Generic,
    Line(Line),
    /// Node whose children come from an external scene file.
    Reference { url: PathBuf, loaded: bool },
    /// Node built from a decoded 3D asset.
    Asset {
        source: Option<PathBuf>,
        /// Uniform scale applied to the asset root before flattening.
        scale: Option<f32>,
    },
}

/// A scene-graph node produced by the bridge.
///
/// The bridge only builds and configures nodes. Attaching them to a scene and
/// destroying them is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub name: Option<String>,
    /// Local-to-parent transform, at the host's double precision.
    pub transform: DMat4,
    pub geometry: Option<Geometry>,
    pub physics_body: Option<PhysicsBody>,
    pub light: Option<Light>,
    pub rendering_order: i32,
    pub is_hidden: bool,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: None,
            transform: DMat4::IDENTITY,
            geometry: None,
            physics_body: None,
            light: None,
            rendering_order: 0,
            is_hidden: false,
            children: Vec::new(),
        }
    }

    /// Generic node holding `geometry`.
    pub fn with_geometry(geometry: Option<Geometry>) -> Self {
        Self {
            geometry,
            ..Self::new(NodeKind::Generic)
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform.as_dmat4();
        self
    }

    /// Local-to-parent transform in the single precision used for geometry.
    pub fn local_matrix(&self) -> Mat4 {
        self.transform.as_mat4()
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    pub fn child_named(&self, name: &str) -> Option<&SceneNode> {
        self.children
            .iter()
            .find(|child| child.name.as_deref() == Some(name))
    }

    pub fn line(&self) -> Option<&Line> {
        match &self.kind {
            NodeKind::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn line_mut(&mut self) -> Option<&mut Line> {
        match &mut self.kind {
            NodeKind::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn position(&self) -> Vec3 {
        translation_of(&self.local_matrix())
    }

    /// Replaces the scale component of the transform, keeping rotation and translation.
    pub fn set_uniform_scale(&mut self, scale: f32) {
        let (_, rotation, translation) = self.transform.to_scale_rotation_translation();
        self.transform = DMat4::from_scale_rotation_translation(
            DVec3::splat(scale as f64),
            rotation,
            translation,
        );
    }

    /// Bounds of this node's geometry and all descendants, in this node's local space.
    pub fn bounding_box(&self) -> Option<Aabb> {
        let own = self.geometry.as_ref().and_then(Geometry::bounding_box);
        self.children.iter().fold(own, |acc, child| {
            let child_box = child
                .bounding_box()
                .map(|aabb| aabb.transformed(&child.local_matrix()));
            match (acc, child_box) {
                (Some(a), Some(b)) => Some(a.union(&b)),
                (a, b) => a.or(b),
            }
        })
    }

    /// Collapses this subtree into a single static node.
    ///
    /// `parent_transform` is the transform accumulated above this node. Mesh
    /// geometry of every node in the subtree is baked into that space, and
    /// meshes with the same material list are merged. The first mesh becomes
    /// the node's geometry and every further material list gets its own child
    /// mesh, so each vertex keeps the materials it was authored with.
    /// Geometry that cannot be baked stays as a child carrying its
    /// accumulated transform. The returned node has an identity transform.
    pub fn flattened_clone(&self, parent_transform: &Mat4) -> SceneNode {
        let mut meshes = Vec::new();
        let mut unbaked = Vec::new();
        self.collect_flattened(
            &(*parent_transform * self.local_matrix()),
            &mut meshes,
            &mut unbaked,
        );

        let mut flattened = SceneNode::new(NodeKind::Generic);
        flattened.name = self.name.clone();
        flattened.is_hidden = self.is_hidden;
        flattened.rendering_order = self.rendering_order;

        let mut meshes = meshes
            .into_iter()
            .map(|(positions, materials)| Geometry::mesh(positions).with_materials(materials));
        flattened.geometry = meshes.next();
        flattened.children = meshes
            .map(|geometry| SceneNode::with_geometry(Some(geometry)))
            .chain(unbaked)
            .collect();
        flattened
    }

    fn collect_flattened(
        &self,
        accumulated: &Mat4,
        meshes: &mut Vec<(Vec<Vec3>, Vec<Material>)>,
        unbaked: &mut Vec<SceneNode>,
    ) {
        if let Some(geometry) = &self.geometry {
            match geometry.baked(accumulated) {
                Some(Geometry {
                    primitive: Primitive::Mesh { positions },
                    materials,
                }) if !positions.is_empty() => {
                    match meshes.iter_mut().find(|(_, mats)| *mats == materials) {
                        Some((merged, _)) => merged.extend(positions),
                        None => meshes.push((positions, materials)),
                    }
                }
                Some(_) => {}
                None => unbaked.push(
                    SceneNode::with_geometry(Some(geometry.clone())).with_transform(*accumulated),
                ),
            }
        }
        for child in &self.children {
            child.collect_flattened(&(*accumulated * child.local_matrix()), meshes, unbaked);
        }
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new(NodeKind::Generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::material::{Color, MaterialProperty};

    fn unit_mesh() -> Geometry {
        Geometry::mesh(vec![Vec3::splat(-1.0), Vec3::splat(1.0)])
    }

    #[test]
    fn test_bounding_box_includes_children() {
        let mut root = SceneNode::default();
        let child = SceneNode::with_geometry(Some(unit_mesh()))
            .with_transform(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));
        root.add_child(child);

        let aabb = root.bounding_box().unwrap();
        assert_eq!(aabb.min.x, 9.0);
        assert_eq!(aabb.max.x, 11.0);
        assert!(SceneNode::default().bounding_box().is_none());
    }

    #[test]
    fn test_set_uniform_scale_keeps_translation() {
        let mut node =
            SceneNode::default().with_transform(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
        node.set_uniform_scale(0.5);
        let (scale, _, translation) = node.transform.to_scale_rotation_translation();
        assert!(scale.abs_diff_eq(DVec3::splat(0.5), 1e-9));
        assert_eq!(translation, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_flattened_clone_bakes_accumulated_transform() {
        let mut parent = SceneNode::with_geometry(Some(unit_mesh()))
            .named("body")
            .with_transform(Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0)));
        parent.add_child(
            SceneNode::with_geometry(Some(unit_mesh()))
                .with_transform(Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0))),
        );
        parent.add_child(SceneNode::with_geometry(Some(Geometry::floor())));

        let flattened = parent.flattened_clone(&Mat4::from_scale(Vec3::splat(2.0)));
        assert_eq!(flattened.name.as_deref(), Some("body"));
        assert_eq!(flattened.transform, DMat4::IDENTITY);

        let aabb = flattened.geometry.as_ref().unwrap().bounding_box().unwrap();
        assert!(aabb.min.abs_diff_eq(Vec3::new(-2.0, 0.0, -2.0), 1e-5));
        assert!(aabb.max.abs_diff_eq(Vec3::new(12.0, 4.0, 2.0), 1e-5));

        assert_eq!(flattened.children.len(), 1);
        let floor = &flattened.children[0];
        assert_eq!(floor.geometry, Some(Geometry::floor()));
        assert!(floor.position().abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-5));
    }

    #[test]
    fn test_flattened_clone_keeps_materials_with_their_meshes() {
        let tinted = |rgb| Material {
            diffuse: MaterialProperty::color(Color::from_rgb(rgb)),
            ..Material::default()
        };
        let red = vec![tinted(0xFF0000)];
        let blue = vec![tinted(0x0000FF)];
        let mut parent = SceneNode::with_geometry(Some(unit_mesh().with_materials(red.clone())));
        parent.add_child(SceneNode::with_geometry(Some(
            Geometry::mesh(vec![Vec3::X, Vec3::Y]).with_materials(blue.clone()),
        )));
        parent.add_child(SceneNode::with_geometry(Some(
            Geometry::mesh(vec![Vec3::Z]).with_materials(red.clone()),
        )));

        let flattened = parent.flattened_clone(&Mat4::IDENTITY);

        let own = flattened.geometry.as_ref().unwrap();
        assert_eq!(own.materials, red);
        assert_eq!(
            own.primitive,
            Primitive::Mesh {
                positions: vec![Vec3::splat(-1.0), Vec3::splat(1.0), Vec3::Z]
            }
        );
        assert_eq!(flattened.children.len(), 1);
        let second = flattened.children[0].geometry.as_ref().unwrap();
        assert_eq!(second.materials, blue);
        assert_eq!(
            second.primitive,
            Primitive::Mesh {
                positions: vec![Vec3::X, Vec3::Y]
            }
        );
        assert_eq!(flattened.children[0].transform, DMat4::IDENTITY);
    }

    #[test]
    fn test_line_accessors() {
        let mut node = SceneNode::new(NodeKind::Line(Line::new(0.01, 8, 12)));
        assert!(node.line().is_some());
        node.line_mut().unwrap().push_spaced(Vec3::ONE, 0.012);
        assert_eq!(node.line().unwrap().len(), 1);
        assert!(SceneNode::default().line().is_none());
    }
}
