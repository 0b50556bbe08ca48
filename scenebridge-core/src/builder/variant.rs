use crate::assets::{AssetLocation, AssetRequest};
use crate::builder::BuildContext;
use crate::descriptor::{AssetDescriptor, LineDescriptor, ReferenceDescriptor, parse_materials};
use crate::error::SceneBridgeError;
use crate::scene::{Line, Material, NodeKind, SceneNode};

/// Empty line node. Without materials it gets one random opaque color.
pub fn line_node(descriptor: &LineDescriptor) -> SceneNode {
    let mut line = Line::new(descriptor.radius, descriptor.edges, descriptor.max_turning);
    line.materials = match &descriptor.materials {
        Some(materials) => parse_materials(materials),
        None => vec![Material::random_line_material()],
    };
    SceneNode::new(NodeKind::Line(line))
}

/// Node holding the content of an external scene file, loaded right away.
///
/// A failed load is reported and leaves the node unloaded and empty.
pub fn reference_node(descriptor: &ReferenceDescriptor, context: &BuildContext) -> SceneNode {
    let location = AssetLocation::for_reference(&descriptor.url, context.desc());
    match context.loader().load(&location) {
        Ok(fragment) => {
            log::debug!("Loaded reference {}", location.path.display());
            let mut node = SceneNode::new(NodeKind::Reference {
                url: location.path,
                loaded: true,
            });
            node.children = fragment.root.children;
            node
        }
        Err(err) => {
            context
                .errors()
                .report(format!("Failed to load file: {}", err));
            SceneNode::new(NodeKind::Reference {
                url: location.path,
                loaded: false,
            })
        }
    }
}

/// Node built from a glTF asset, normalized to the configured width.
///
/// Unsupported urls and failed loads are reported and give an empty node.
pub fn asset_node(descriptor: &AssetDescriptor, context: &BuildContext) -> SceneNode {
    let empty = || {
        SceneNode::new(NodeKind::Asset {
            source: None,
            scale: None,
        })
    };

    let request = match AssetRequest::resolve(descriptor, context.desc()) {
        Ok(request) => request,
        Err(SceneBridgeError::UnsupportedAsset(message)) => {
            context.errors().report(message);
            return empty();
        }
        Err(err) => {
            context.errors().report(err.to_string());
            return empty();
        }
    };

    match request.load(context.loader()) {
        Ok(loaded) => {
            let mut node = loaded.into_node(context.desc().asset_target_width);
            if let Some(name) = &descriptor.name {
                node.name = Some(name.clone());
            }
            node
        }
        Err(err) => {
            context
                .errors()
                .report(format!("Failed to load file: {}", err));
            empty()
        }
    }
}
