//! Node construction from host descriptors.
//!
//! [`create_node`] validates a descriptor, builds the node for its variant and
//! then applies the common properties. [`update_node`] re-applies only the
//! common properties to an existing node.

pub mod geometry;
pub mod light;
pub mod physics;
pub mod variant;

pub use geometry::{DescriptorGeometryBuilder, GeometryBuilder, RenderDevice};
pub use light::build_light;
pub use physics::build_physics_body;
pub use variant::{asset_node, line_node, reference_node};

use crate::assets::SceneLoader;
use crate::config::SceneBridgeDesc;
use crate::descriptor::{CommonProperties, NodeDescriptor, VariantDescriptor};
use crate::error::Result;
use crate::events::ErrorChannel;
use crate::math::deserialize_matrix4;
use crate::scene::{Geometry, SceneNode};
use serde::Deserialize;
use serde_json::Value;

/// Everything node construction needs besides the descriptor itself.
pub struct BuildContext {
    desc: SceneBridgeDesc,
    loader: Box<dyn SceneLoader>,
    geometry_builder: Box<dyn GeometryBuilder>,
    errors: ErrorChannel,
}

impl BuildContext {
    /// Creates a context that keeps nested geometry as described geometry.
    pub fn new(
        desc: SceneBridgeDesc,
        loader: impl SceneLoader + 'static,
        errors: ErrorChannel,
    ) -> Self {
        Self {
            desc,
            loader: Box::new(loader),
            geometry_builder: Box::new(DescriptorGeometryBuilder),
            errors,
        }
    }

    pub fn with_geometry_builder(mut self, builder: impl GeometryBuilder + 'static) -> Self {
        self.geometry_builder = Box::new(builder);
        self
    }

    pub fn desc(&self) -> &SceneBridgeDesc {
        &self.desc
    }

    pub fn loader(&self) -> &dyn SceneLoader {
        self.loader.as_ref()
    }

    pub fn geometry_builder(&self) -> &dyn GeometryBuilder {
        self.geometry_builder.as_ref()
    }

    pub fn errors(&self) -> &ErrorChannel {
        &self.errors
    }
}

/// Builds a node from a host property bag.
///
/// `geometry` is only used by generic nodes. Malformed descriptors are
/// returned as errors; asset problems are reported on the error channel and
/// give a degraded node instead.
pub fn create_node(
    context: &BuildContext,
    descriptor: &Value,
    geometry: Option<Geometry>,
    device: Option<&RenderDevice>,
) -> Result<SceneNode> {
    let descriptor = NodeDescriptor::from_value(descriptor)?;
    build_node(context, &descriptor, geometry, device)
}

/// Builds a node from an already validated descriptor.
pub fn build_node(
    context: &BuildContext,
    descriptor: &NodeDescriptor,
    geometry: Option<Geometry>,
    device: Option<&RenderDevice>,
) -> Result<SceneNode> {
    if geometry.is_some() && descriptor.variant != VariantDescriptor::Generic {
        log::debug!("Ignoring supplied geometry for {}", descriptor.dart_type);
    }
    let mut node = match &descriptor.variant {
        VariantDescriptor::Line(line) => line_node(line),
        VariantDescriptor::Reference(reference) => reference_node(reference, context),
        VariantDescriptor::Asset(asset) => asset_node(asset, context),
        VariantDescriptor::Generic => SceneNode::with_geometry(geometry),
    };
    apply_common_properties(context, &mut node, &descriptor.common, device)?;
    Ok(node)
}

/// Re-applies the common properties of a property bag to `node`.
///
/// Nothing is changed when the bag is malformed.
pub fn update_node(
    context: &BuildContext,
    node: &mut SceneNode,
    descriptor: &Value,
    device: Option<&RenderDevice>,
) -> Result<()> {
    let common = CommonProperties::deserialize(descriptor)?;
    apply_common_properties(context, node, &common, device)
}

fn apply_common_properties(
    context: &BuildContext,
    node: &mut SceneNode,
    common: &CommonProperties,
    device: Option<&RenderDevice>,
) -> Result<()> {
    // Build everything fallible before touching the node.
    let transform = common
        .transform
        .as_deref()
        .map(deserialize_matrix4)
        .transpose()?;
    let physics_body = common
        .physics_body
        .as_ref()
        .map(|body| build_physics_body(body, context.geometry_builder(), device))
        .transpose()?;
    let light = common
        .light
        .as_ref()
        .map(|light| build_light(light, &context.desc().capabilities));

    if let Some(transform) = transform {
        node.transform = transform;
    }
    if let Some(name) = &common.name {
        node.name = Some(name.clone());
    }
    if let Some(physics_body) = physics_body {
        node.physics_body = Some(physics_body);
    }
    if let Some(light) = light {
        node.light = Some(light);
    }
    if let Some(order) = common.rendering_order {
        node.rendering_order = order;
    }
    if let Some(is_hidden) = common.is_hidden {
        node.is_hidden = is_hidden;
    }
    Ok(())
}
