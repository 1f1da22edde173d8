//! Drawing-sink abstraction.
//!
//! *The pipeline never touches pixels or markup directly.*
//! It produces a [`Frame`] (far-to-near primitives plus labels) and hands it
//! to a type that implements [`Renderer`].
//!
//! * Submission order is paint order: later calls cover earlier ones.
//! * A blanket impl [`RendererExt`] adds `draw_frame` so call-sites stay short.

use std::time::Instant;

use glam::Vec2;

use crate::{
    engine::{Anchor, Frame, PrimitiveKind},
    sim::NavPad,
    world::{Surface, WallSide},
};

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// What a primitive *is*; each back-end picks its own look for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    Floor,
    Ceiling,
    Wall(WallSide),
    GridLine,
    Label,
    Readout,
    NavButton,
    NavButtonPressed,
    NavGlyph,
}

impl From<Surface> for Style {
    fn from(s: Surface) -> Self {
        match s {
            Surface::Floor => Style::Floor,
            Surface::Ceiling => Style::Ceiling,
            Surface::Wall(side) => Style::Wall(side),
        }
    }
}

/// A sink that accepts vector primitives for one frame at a time.
///
/// `end_frame` hands the finished raster to a user-supplied closure.
/// Vector back-ends have no raster and call it with an empty slice:
/// `submit(&[], width, height)`.
pub trait Renderer {
    /// Resize internal scratch if needed and clear the whole surface.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Filled polygon, vertices in order.
    fn fill_polygon(&mut self, points: &[Vec2], style: Style);

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: Style);

    /// `at` is the baseline point selected by `anchor`.
    fn draw_text(&mut self, at: Vec2, text: &str, size: f32, anchor: Anchor, style: Style);

    /// Finish the frame and **loan** the result to `submit` exactly once.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Host-side decorations drawn on top of the room.
pub struct Overlay<'a> {
    pub readout: &'a str,
    pub pad: Option<&'a NavPad>,
    pub now: Instant,
}

const READOUT_AT: Vec2 = Vec2::new(12.0, 26.0);
const READOUT_SIZE: f32 = 16.0;

/// Convenience blanket-impl that replays whole frames.
pub trait RendererExt: Renderer {
    /// Primitives in compositor order, then every label.
    fn draw_scene(&mut self, frame: &Frame) {
        for p in &frame.primitives {
            match &p.kind {
                PrimitiveKind::Surface { surface, points } => {
                    self.fill_polygon(points, Style::from(*surface))
                }
                PrimitiveKind::GridLine { from, to, .. } => {
                    self.draw_line(*from, *to, Style::GridLine)
                }
            }
        }
        for l in &frame.labels {
            let p = &l.placement;
            self.draw_text(p.pos, &l.text, p.font_size, p.anchor, Style::Label);
        }
    }

    /// Position readout and, if present, the nav pad.
    fn draw_overlay(&mut self, overlay: &Overlay) {
        self.draw_text(
            READOUT_AT,
            overlay.readout,
            READOUT_SIZE,
            Anchor::Start,
            Style::Readout,
        );
        let Some(pad) = overlay.pad else {
            return;
        };
        for b in pad.buttons() {
            let style = if pad.is_pressed(b.direction, overlay.now) {
                Style::NavButtonPressed
            } else {
                Style::NavButton
            };
            let rect = [b.min, Vec2::new(b.max.x, b.min.y), b.max, Vec2::new(b.min.x, b.max.y)];
            self.fill_polygon(&rect, style);

            // arrow: tip along the move direction, screen y points down
            let d = b.direction.delta();
            let r = (b.max.x - b.min.x) * 0.25;
            let c = b.center();
            let side = d.perp() * r;
            let base = c - d * (r * 0.6);
            self.fill_polygon(&[c + d * r, base + side, base - side], Style::NavGlyph);
        }
    }

    fn draw_frame<F>(&mut self, frame: &Frame, overlay: Option<&Overlay>, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(frame.viewport.width, frame.viewport.height);
        self.draw_scene(frame);
        if let Some(o) = overlay {
            self.draw_overlay(o);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;
pub mod svg;

pub use software::Software;
pub use svg::SvgCanvas;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::compose,
        world::Config,
    };
    use glam::vec2;

    /// Records calls in submission order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, Style)>,
        cleared: usize,
    }

    impl Renderer for Recorder {
        fn begin_frame(&mut self, _: usize, _: usize) {
            self.cleared += 1;
            self.calls.clear();
        }
        fn fill_polygon(&mut self, points: &[Vec2], style: Style) {
            assert!(points.len() >= 3);
            self.calls.push(("polygon", style));
        }
        fn draw_line(&mut self, _: Vec2, _: Vec2, style: Style) {
            self.calls.push(("line", style));
        }
        fn draw_text(&mut self, _: Vec2, _: &str, _: f32, _: Anchor, style: Style) {
            self.calls.push(("text", style));
        }
        fn end_frame<F>(&mut self, submit: F)
        where
            F: FnOnce(&[Rgba], usize, usize),
        {
            submit(&[], 0, 0);
        }
    }

    #[test]
    fn frame_replayed_floor_first_labels_last() {
        let frame = compose(&Config::default(), vec2(5.0, 5.0));
        let mut rec = Recorder::default();
        let mut submitted = false;
        rec.draw_frame(&frame, None, |_, _, _| submitted = true);

        assert!(submitted);
        assert_eq!(rec.cleared, 1);
        assert_eq!(rec.calls.first().map(|c| c.1), Some(Style::Floor));
        let ceiling = rec.calls.iter().position(|c| c.1 == Style::Ceiling).unwrap();
        let first_text = rec.calls.iter().position(|c| c.0 == "text").unwrap();
        assert_eq!(ceiling + 1, first_text);
        assert!(rec.calls[first_text..].iter().all(|c| c.1 == Style::Label));
    }

    #[test]
    fn overlay_draws_readout_and_pad() {
        let cfg = Config::default();
        let frame = compose(&cfg, vec2(5.0, 5.0));
        let pad = NavPad::new(&cfg.viewport);
        let overlay = Overlay {
            readout: "5,5",
            pad: Some(&pad),
            now: Instant::now(),
        };
        let mut rec = Recorder::default();
        rec.draw_frame(&frame, Some(&overlay), |_, _, _| {});

        let tail: Vec<_> = rec.calls.iter().rev().take(9).collect();
        assert_eq!(tail.last().map(|c| c.1), Some(Style::Readout));
        assert_eq!(tail.iter().filter(|c| c.1 == Style::NavGlyph).count(), 4);
    }
}
