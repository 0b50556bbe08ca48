use crate::builder::{GeometryBuilder, RenderDevice};
use crate::descriptor::PhysicsBodyDescriptor;
use crate::error::{Result, SceneBridgeError};
use crate::scene::{PhysicsBody, PhysicsBodyType, PhysicsShape};

/// Builds a physics body, with an explicit shape when the descriptor has shape geometry.
pub fn build_physics_body(
    descriptor: &PhysicsBodyDescriptor,
    geometry_builder: &dyn GeometryBuilder,
    device: Option<&RenderDevice>,
) -> Result<PhysicsBody> {
    let body_type = PhysicsBodyType::from_code(descriptor.body_type).ok_or_else(|| {
        SceneBridgeError::InvalidDescriptor(format!(
            "physics body type must be 0, 1 or 2, got {}",
            descriptor.body_type
        ))
    })?;

    let shape = match descriptor
        .shape
        .as_ref()
        .and_then(|shape| shape.geometry.as_ref())
    {
        Some(geometry) => Some(PhysicsShape {
            geometry: geometry_builder.build(geometry, device)?,
        }),
        None => None,
    };

    let mut body = PhysicsBody::new(body_type, shape);
    if let Some(mask) = descriptor.category_bit_mask {
        body.category_bit_mask = mask;
    }
    Ok(body)
}
