use crate::descriptor::GeometryDescriptor;
use crate::error::{Result, SceneBridgeError};
use crate::scene::{Geometry, Primitive};

/// Opaque handle to the host's rendering device.
///
/// Some geometry kinds (text, custom shaders) need the device to be built.
/// The bridge only passes the handle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderDevice {
    id: u64,
}

impl RenderDevice {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Trait for turning nested geometry descriptors into [`Geometry`].
///
/// # Example
///
/// ```
/// use scenebridge_core::builder::{GeometryBuilder, RenderDevice};
/// use scenebridge_core::descriptor::GeometryDescriptor;
/// use scenebridge_core::error::Result;
/// use scenebridge_core::scene::Geometry;
///
/// struct FloorsOnly;
///
/// impl GeometryBuilder for FloorsOnly {
///     fn build(&self, _: &GeometryDescriptor, _: Option<&RenderDevice>) -> Result<Geometry> {
///         Ok(Geometry::floor())
///     }
/// }
/// ```
pub trait GeometryBuilder {
    fn build(
        &self,
        descriptor: &GeometryDescriptor,
        device: Option<&RenderDevice>,
    ) -> Result<Geometry>;
}

/// Keeps the descriptor as [`Primitive::Described`] for the host to realize.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorGeometryBuilder;

impl GeometryBuilder for DescriptorGeometryBuilder {
    fn build(
        &self,
        descriptor: &GeometryDescriptor,
        _device: Option<&RenderDevice>,
    ) -> Result<Geometry> {
        let kind = descriptor.dart_type().ok_or_else(|| {
            SceneBridgeError::Geometry("geometry descriptor has no `dartType`".to_string())
        })?;
        let materials = descriptor.materials()?;
        Ok(Geometry {
            primitive: Primitive::Described {
                kind: kind.to_string(),
                properties: descriptor.0.clone(),
            },
            materials,
        })
    }
}
