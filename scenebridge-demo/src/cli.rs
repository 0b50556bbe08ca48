use anyhow::{Context, Result};
use scenebridge_core::assets::{AssetLocation, SceneFragment};
use scenebridge_core::hit_test::{Anchor, PlaneAlignment, StaticSurfaceTracker};
use scenebridge_core::math::{Mat4, Pose, Vec2, Vec3};
use scenebridge_core::scene::{Geometry, Line, NodeKind, SceneNode};
use scenebridge_core::{
    BuildContext, Camera, ErrorChannel, LineGrowth, SceneBridgeDesc, Viewer, create_node,
};
use serde_json::{Value, json};

const SAMPLE_DESCRIPTORS: &str = r#"[
    { "dartType": "ARKitNode", "name": "marker", "transform": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,-1,1] },
    { "dartType": "ARKitLineNode", "name": "stroke", "radius": 0.005, "edges": 8, "maxTurning": 12 },
    { "dartType": "ARKitGltfNode", "name": "duck", "url": "duck.glb", "assetType": 0 },
    { "dartType": "ARKitGltfNode", "url": "duck.fbx" },
    { "dartType": "ARKitReferenceNode", "url": "lamp.scn", "light": { "type": 3, "intensity": 500 } }
]"#;

pub fn run(descriptor_path: Option<&str>) -> Result<()> {
    let descriptors = load_descriptors(descriptor_path)?;
    let errors = ErrorChannel::new();
    let context = BuildContext::new(SceneBridgeDesc::new(), procedural_loader, errors.clone());

    log::info!("=== Building {} nodes ===", descriptors.len());
    let mut nodes = Vec::new();
    for descriptor in &descriptors {
        match create_node(&context, descriptor, None, None) {
            Ok(node) => {
                print_node(&node, 0);
                nodes.push(node);
            }
            Err(e) => log::error!("Rejected descriptor: {}", e),
        }
    }
    drain_errors(&errors);

    log::info!("=== Hit-testing a recorded room ===");
    let mut viewer = Viewer::new(
        Camera::perspective(
            Pose::from_position(Vec3::new(0.0, 1.5, 0.0)),
            60f32.to_radians(),
            Vec2::new(1170.0, 2532.0),
            0.001,
            1000.0,
        ),
        recorded_room(),
        context.desc().clone(),
        errors.clone(),
    );
    let mut pose = viewer.camera().pose;
    pose.look_at(Vec3::new(0.0, 0.0, -1.5));
    viewer.set_pose(pose);

    let center = viewer.camera().viewport_center();
    for result in viewer.hit_test_serialized(center) {
        log::info!("Hit: {}", result);
    }
    match viewer.center_position() {
        Some(position) => log::info!("Floor probe estimate: {:?}", position),
        None => log::info!("Floor probe estimate: none"),
    }

    log::info!("=== Replaying a stroke ===");
    let mut stroke = nodes
        .into_iter()
        .find(|node| matches!(node.kind, NodeKind::Line(_)))
        .unwrap_or_else(|| SceneNode::new(NodeKind::Line(Line::new(0.005, 8, 12))));
    let start = viewer
        .camera()
        .project_point(Vec3::new(0.0, 0.0, -1.5))
        .truncate();
    for step in 0..40 {
        let t = step as f32 / 39.0;
        let offset = Vec2::new(t * 300.0, (t * std::f32::consts::PI).sin() * -120.0);
        let event = json!({ "x": start.x + offset.x, "y": start.y + offset.y });
        if let Some(outcome) = viewer.update_line_node(&mut stroke, &event) {
            if outcome != LineGrowth::Skipped {
                log::debug!("Step {}: {:?}", step, outcome);
            }
        }
    }
    if let Some(line) = stroke.line() {
        log::info!("Stroke has {} points", line.len());
    }
    drain_errors(&errors);

    Ok(())
}

fn load_descriptors(path: Option<&str>) -> Result<Vec<Value>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor file {}", path))?,
        None => SAMPLE_DESCRIPTORS.to_string(),
    };
    let value: Value = serde_json::from_str(&text).context("Descriptor file is not valid JSON")?;
    Ok(match value {
        Value::Array(values) => values,
        other => vec![other],
    })
}

/// Stands in for a glTF decoder: every file decodes to a 2-unit wide box.
fn procedural_loader(location: &AssetLocation) -> scenebridge_core::error::Result<SceneFragment> {
    log::debug!("Decoding {} procedurally", location.path.display());
    let corners = vec![Vec3::new(-1.0, 0.0, -0.5), Vec3::new(1.0, 1.0, 0.5)];
    let mut root = SceneNode::default();
    root.add_child(SceneNode::with_geometry(Some(Geometry::mesh(corners))).named("body"));
    Ok(SceneFragment::new(root))
}

fn recorded_room() -> StaticSurfaceTracker {
    let mut tracker = StaticSurfaceTracker::new();
    tracker.add_plane_anchor(Anchor::plane(
        Mat4::IDENTITY,
        Vec3::ZERO,
        Vec3::new(4.0, 0.0, 4.0),
        PlaneAlignment::Horizontal,
    ));
    for x in -5..=5 {
        for z in -5..=0 {
            tracker.add_feature_point(Vec3::new(x as f32 * 0.3, 0.0, z as f32 * 0.3));
        }
    }
    tracker
}

fn print_node(node: &SceneNode, depth: usize) {
    let kind = match &node.kind {
        NodeKind::Generic => "generic".to_string(),
        NodeKind::Line(line) => format!("line ({} materials)", line.materials.len()),
        NodeKind::Reference { url, loaded } => format!("reference {} loaded={}", url.display(), loaded),
        NodeKind::Asset { source, scale } => format!("asset {:?} scale={:?}", source, scale),
    };
    log::info!(
        "{}- {} [{}] at {:?}",
        "  ".repeat(depth),
        node.name.as_deref().unwrap_or("<unnamed>"),
        kind,
        node.position()
    );
    for child in &node.children {
        print_node(child, depth + 1);
    }
}

fn drain_errors(errors: &ErrorChannel) {
    for event in errors.poll_events() {
        log::info!("Reported to host: {}", event.message());
    }
}
