//! Grid-line number placement.
//!
//! Each orientation proposes one [`Candidate`]; a candidate becomes a
//! [`Placement`] only if it lands in the safe rectangle and is big enough
//! to read. Boundary lines (index `0` and `size-1`) skip the size check.
//!
//! | orientation | font size                       | anchor                          |
//! |-------------|---------------------------------|---------------------------------|
//! | Horizontal  | `base * ref_depth / depth`, clamped | outer end on the midpoint's half |
//! | Vertical    | `base * lateral_fraction`       | lower end, dropped; else upper end, raised |

use glam::{Vec2, vec2};
use log::trace;

use crate::world::{GridLine, LabelStyle, Orientation, RoomSnapshot, Viewport, WorldConfig};

/// Which end of the text sits on the placement point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Text runs rightwards from the point.
    Start,
    Middle,
    /// Text ends at the point.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Baseline position of the anchor.
    pub pos: Vec2,
    pub font_size: f32,
    pub anchor: Anchor,
}

/// A placed grid-line number.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Index into `RoomSnapshot::grid_lines`.
    pub line: usize,
    pub text: String,
    pub placement: Placement,
}

/// Inputs shared by every label of a frame.
#[derive(Clone, Copy, Debug)]
pub struct LabelContext<'a> {
    pub style: &'a LabelStyle,
    pub viewport: &'a Viewport,
    pub world: &'a WorldConfig,
    pub viewpoint: Vec2,
}

/// Proposed placement plus whether its size is readable.
struct Candidate {
    placement: Placement,
    legible: bool,
}

/// Place the number for one grid line, or `None` if it is suppressed.
pub fn place_label(line: &GridLine, ctx: &LabelContext) -> Option<Placement> {
    let boundary = line.world_value == 0 || line.world_value + 1 == ctx.world.size;
    let candidate = match line.orientation {
        Orientation::Horizontal => depth_candidate(line, ctx),
        Orientation::Vertical => lateral_candidate(line, boundary, ctx)?,
    };

    let in_bounds = ctx
        .viewport
        .contains_inset(candidate.placement.pos, ctx.style.safe_inset);
    match (in_bounds, boundary || candidate.legible) {
        (true, true) => Some(candidate.placement),
        _ => None,
    }
}

/// Labels for every surviving line, in snapshot order.
pub fn place_labels(snap: &RoomSnapshot, ctx: &LabelContext) -> Vec<Label> {
    snap.grid_lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| match place_label(line, ctx) {
            Some(placement) => Some(Label {
                line: i,
                text: line.world_value.to_string(),
                placement,
            }),
            None => {
                trace!("label {:?} {} suppressed", line.orientation, line.world_value);
                None
            }
        })
        .collect()
}

/// Depth-axis lines: size by distance, park beside the outer end.
fn depth_candidate(line: &GridLine, ctx: &LabelContext) -> Candidate {
    let s = ctx.style;
    let font_size =
        (s.base_font * s.reference_depth / line.avg_depth).clamp(s.min_font, s.max_font);

    let (left, right) = if line.start.pos.x <= line.end.pos.x {
        (line.start.pos, line.end.pos)
    } else {
        (line.end.pos, line.start.pos)
    };
    let (end, dx, anchor) = if line.midpoint().x < ctx.viewport.center.x {
        (left, -s.gap, Anchor::End)
    } else {
        (right, s.gap, Anchor::Start)
    };

    Candidate {
        placement: Placement {
            // baseline ≈ a third of the glyph below the line
            pos: vec2(end.x + dx, end.y + font_size * 0.35),
            font_size,
            anchor,
        },
        legible: font_size >= s.legible_font,
    }
}

/// Width-axis lines: fixed size, only near the viewer or on the boundary.
fn lateral_candidate(line: &GridLine, boundary: bool, ctx: &LabelContext) -> Option<Candidate> {
    let s = ctx.style;
    let near_viewer = (line.world_value as f32 - ctx.viewpoint.x).abs() <= s.lateral_radius;
    if !(boundary || near_viewer) {
        return None;
    }

    let font_size = s.base_font * s.lateral_fraction;
    let offset = font_size * s.drop;
    let (lower, upper) = if line.start.pos.y >= line.end.pos.y {
        (line.start.pos, line.end.pos)
    } else {
        (line.end.pos, line.start.pos)
    };

    let bottom = ctx.viewport.height as f32 - s.safe_inset;
    let pos = if lower.y + offset <= bottom {
        vec2(lower.x, lower.y + offset)
    } else {
        vec2(upper.x, upper.y - offset)
    };

    Some(Candidate {
        placement: Placement {
            pos,
            font_size,
            anchor: Anchor::Middle,
        },
        legible: true,
    })
}
