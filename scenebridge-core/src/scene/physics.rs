use crate::scene::geometry::Geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsBodyType {
    Static,
    Dynamic,
    Kinematic,
}

impl PhysicsBodyType {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Static),
            1 => Some(Self::Dynamic),
            2 => Some(Self::Kinematic),
            _ => None,
        }
    }

    /// Collision category assigned when the descriptor does not set one.
    pub fn default_category_bit_mask(&self) -> u64 {
        match self {
            Self::Static => CollisionCategory::STATIC,
            Self::Dynamic | Self::Kinematic => CollisionCategory::DEFAULT,
        }
    }
}

/// Built-in collision categories.
pub struct CollisionCategory;

impl CollisionCategory {
    pub const DEFAULT: u64 = 1 << 0;
    pub const STATIC: u64 = 1 << 1;
}

/// Collision volume built from geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsShape {
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsBody {
    pub body_type: PhysicsBodyType,
    /// `None` lets the engine derive a shape from the node's render geometry.
    pub shape: Option<PhysicsShape>,
    pub category_bit_mask: u64,
}

impl PhysicsBody {
    pub fn new(body_type: PhysicsBodyType, shape: Option<PhysicsShape>) -> Self {
        Self {
            body_type,
            shape,
            category_bit_mask: body_type.default_category_bit_mask(),
        }
    }
}
