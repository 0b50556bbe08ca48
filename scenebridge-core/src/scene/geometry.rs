use crate::math::{Mat4, Vec3};
use crate::scene::bounds::Aabb;
use crate::scene::material::Material;

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Triangle soup or point set in node-local coordinates.
    Mesh { positions: Vec<Vec3> },
    /// Infinite plane through the local origin with normal +Y.
    Floor,
    /// Geometry the host engine constructs itself from a descriptor.
    Described {
        kind: String,
        properties: serde_json::Value,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub primitive: Primitive,
    pub materials: Vec<Material>,
}

impl Geometry {
    pub fn mesh(positions: Vec<Vec3>) -> Self {
        Self {
            primitive: Primitive::Mesh { positions },
            materials: Vec::new(),
        }
    }

    pub fn floor() -> Self {
        Self {
            primitive: Primitive::Floor,
            materials: Vec::new(),
        }
    }

    pub fn with_materials(mut self, materials: Vec<Material>) -> Self {
        self.materials = materials;
        self
    }

    /// Local bounds. Only meshes have a finite, known extent.
    pub fn bounding_box(&self) -> Option<Aabb> {
        match &self.primitive {
            Primitive::Mesh { positions } => Aabb::from_points(positions),
            Primitive::Floor | Primitive::Described { .. } => None,
        }
    }

    /// Copy with `matrix` baked into the vertex positions, for meshes only.
    pub fn baked(&self, matrix: &Mat4) -> Option<Self> {
        match &self.primitive {
            Primitive::Mesh { positions } => Some(Self {
                primitive: Primitive::Mesh {
                    positions: positions
                        .iter()
                        .map(|p| matrix.transform_point3(*p))
                        .collect(),
                },
                materials: self.materials.clone(),
            }),
            _ => None,
        }
    }
}
