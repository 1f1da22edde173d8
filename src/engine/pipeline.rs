//! rebuild → order → place: one full frame per stimulus, no caching.

use glam::Vec2;
use log::debug;

use crate::{
    engine::{
        builder::rebuild,
        compositor::{Primitive, order},
        labels::{Label, LabelContext, place_labels},
    },
    world::{Camera, Config, RoomSnapshot, Viewport},
};

/// Everything a drawing sink needs for one redraw.
#[derive(Clone, Debug)]
pub struct Frame {
    pub viewport: Viewport,
    pub snapshot: RoomSnapshot,
    /// Far-to-near.
    pub primitives: Vec<Primitive>,
    /// Drawn after every primitive.
    pub labels: Vec<Label>,
}

/// Run the whole pipeline for `viewpoint`.
pub fn compose(cfg: &Config, viewpoint: Vec2) -> Frame {
    let cam = Camera::new(cfg.camera, viewpoint, &cfg.viewport);
    let snapshot = rebuild(&cfg.world, &cam);
    let primitives = order(&snapshot, &cfg.world);
    let labels = place_labels(
        &snapshot,
        &LabelContext {
            style: &cfg.labels,
            viewport: &cfg.viewport,
            world: &cfg.world,
            viewpoint,
        },
    );

    debug!(
        "frame at ({}, {}): {} primitives, {} of {} lines labelled",
        viewpoint.x,
        viewpoint.y,
        primitives.len(),
        labels.len(),
        snapshot.grid_lines.len()
    );

    Frame {
        viewport: cfg.viewport,
        snapshot,
        primitives,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compositor::PrimitiveKind;
    use glam::vec2;

    #[test]
    fn labels_point_at_surviving_lines() {
        let cfg = Config::default();
        let frame = compose(&cfg, vec2(5.0, 5.0));
        assert!(!frame.labels.is_empty());
        for label in &frame.labels {
            let line = &frame.snapshot.grid_lines[label.line];
            assert_eq!(label.text, line.world_value.to_string());
        }
    }

    #[test]
    fn every_line_is_composited_once() {
        let cfg = Config::default();
        let frame = compose(&cfg, vec2(3.0, 8.0));
        let mut seen: Vec<usize> = frame
            .primitives
            .iter()
            .filter_map(|p| match p.kind {
                PrimitiveKind::GridLine { line, .. } => Some(line),
                _ => None,
            })
            .collect();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..frame.snapshot.grid_lines.len()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn far_boundary_line_labelled_from_center() {
        let cfg = Config::default();
        let frame = compose(&cfg, vec2(5.0, 5.0));
        assert!(frame.labels.iter().any(|l| {
            let line = &frame.snapshot.grid_lines[l.line];
            line.world_value == 0 && line.orientation == crate::world::Orientation::Horizontal
        }));
    }
}
