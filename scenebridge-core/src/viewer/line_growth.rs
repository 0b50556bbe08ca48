use crate::math::Vec2;
use crate::scene::{Line, SceneNode};
use crate::viewer::Viewer;
use serde_json::Value;

/// What a pointer event did to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineGrowth {
    /// The first point was placed on a tracked surface.
    Started,
    /// A point was appended.
    Extended,
    /// The pointer moved less than the minimum spacing.
    Skipped,
    /// The line is empty and nothing was hit under the pointer.
    Missed,
}

impl Viewer {
    /// Feeds one pointer position into a line.
    ///
    /// An empty line is seeded from a hit-test against tracked surfaces. Later
    /// points keep the depth of the first point, so the stroke stays on the
    /// plane parallel to the screen through it.
    pub fn grow_line(&self, line: &mut Line, point: Vec2) -> LineGrowth {
        let spacing = self.desc().min_line_point_spacing;

        let Some(first) = line.first_point() else {
            let seed = self
                .hit_test_with_types(point, self.desc().line_seed_types)
                .first()
                .map(|hit| hit.world_position());
            return match seed {
                Some(position) => {
                    line.push_spaced(position, spacing);
                    LineGrowth::Started
                }
                None => {
                    self.errors().report("No hit result found");
                    LineGrowth::Missed
                }
            };
        };

        // The first point can end up at or behind the camera after the viewer
        // moves. Its depth is then meaningless and nothing is appended.
        let depth = self.camera().project_point(first).z;
        let position = self.camera().unproject_point(point.extend(depth));
        if !position.is_finite() {
            log::debug!("Line depth is degenerate at {:?}, skipping", point);
            return LineGrowth::Skipped;
        }
        if line.push_spaced(position, spacing) {
            LineGrowth::Extended
        } else {
            LineGrowth::Skipped
        }
    }

    /// Host entry point: applies a pointer event bag `{x, y}` to a line node.
    ///
    /// Returns `None` when the event was rejected. Rejections are reported on
    /// the error channel.
    pub fn update_line_node(&self, node: &mut SceneNode, event: &Value) -> Option<LineGrowth> {
        let point = match (
            event.get("x").and_then(Value::as_f64),
            event.get("y").and_then(Value::as_f64),
        ) {
            (Some(x), Some(y)) => Vec2::new(x as f32, y as f32),
            _ => {
                self.errors().report("Invalid touch coordinates");
                return None;
            }
        };
        let Some(line) = node.line_mut() else {
            self.errors().report("Node is not a line node");
            return None;
        };
        Some(self.grow_line(line, point))
    }
}
