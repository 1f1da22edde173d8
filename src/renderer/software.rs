//! ---------------------------------------------------------------------------
//! CPU raster back-end
//!
//! * Fills a `Vec<u32>` frame-buffer in **0xAARRGGBB** format.
//! * Relies on the compositor to feed primitives *far-to-near*, so no
//!   Z-buffer is needed: every call simply overwrites what is below it.
//! * Geometry near the camera projects far outside the surface; polygons are
//!   clamped per scan-line and lines are clipped before rasterising.
//! ---------------------------------------------------------------------------

mod font;

use glam::{Vec2, vec2};
use smallvec::SmallVec;

use crate::{
    engine::Anchor,
    renderer::{Renderer, Rgba, Style},
    world::WallSide,
};

const CLEAR: Rgba = 0xFF_1E1E24;

/// Fixed palette, one colour per [`Style`].
pub fn colour(style: Style) -> Rgba {
    match style {
        Style::Floor => 0xFF_6E6253,
        Style::Ceiling => 0xFF_D8D4CC,
        Style::Wall(WallSide::North) => 0xFF_B4AA9A,
        Style::Wall(WallSide::West) => 0xFF_988F81,
        Style::Wall(WallSide::East) => 0xFF_A0978A,
        Style::GridLine => 0xFF_3A3530,
        Style::Label => 0xFF_141414,
        Style::Readout => 0xFF_101010,
        Style::NavButton => 0xFF_404048,
        Style::NavButtonPressed => 0xFF_6A6AA0,
        Style::NavGlyph => 0xFF_F0F0F0,
    }
}

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Software {
    /// Finished pixels of the current frame, row-major.
    pub fn pixels(&self) -> &[Rgba] {
        &self.scratch
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, col: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.scratch[y as usize * self.width + x as usize] = col;
        }
    }

    fn fill_span(&mut self, y: i32, x0: f32, x1: f32, col: Rgba) {
        // pixel centers inside [x0, x1)
        // clamp in f32: crossings can lie far outside the i32 range
        let first = (x0 - 0.5).ceil().max(0.0);
        let last = ((x1 - 0.5).ceil() - 1.0).min(self.width as f32 - 1.0);
        if first > last {
            return;
        }
        let row = y as usize * self.width;
        self.scratch[row + first as usize..=row + last as usize].fill(col);
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(CLEAR);
    }

    /// Even–odd scan-line fill sampled at pixel centers.
    fn fill_polygon(&mut self, points: &[Vec2], style: Style) {
        if points.len() < 3 || self.height == 0 || points.iter().any(|p| !p.is_finite()) {
            return;
        }
        let col = colour(style);
        let (ymin, ymax) = points
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let y0 = (ymin - 0.5).ceil().max(0.0) as i32;
        let y1 = ((ymax - 0.5).floor() as i32).min(self.height as i32 - 1);

        let mut xs: SmallVec<[f32; 8]> = SmallVec::new();
        for y in y0..=y1 {
            let yc = y as f32 + 0.5;
            xs.clear();
            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= yc) != (b.y <= yc) {
                    xs.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            xs.sort_by(f32::total_cmp);
            for pair in xs.chunks_exact(2) {
                self.fill_span(y, pair[0], pair[1], col);
            }
        }
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: Style) {
        let max = vec2(self.width as f32 - 1.0, self.height as f32 - 1.0);
        let Some((a, b)) = clip_segment(from, to, max) else {
            return;
        };
        let col = colour(style);

        /* integer Bresenham */
        let (mut x0, mut y0) = (a.x.round() as i32, a.y.round() as i32);
        let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, col);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn draw_text(&mut self, at: Vec2, text: &str, size: f32, anchor: Anchor, style: Style) {
        if !at.is_finite() {
            return;
        }
        let col = colour(style);
        let scale = font::scale_for(size);
        let width = font::text_width(text, scale);
        let left = at.x.round() as i32
            - match anchor {
                Anchor::Start => 0,
                Anchor::Middle => width / 2,
                Anchor::End => width,
            };
        let top = at.y.round() as i32 - font::GLYPH_H * scale;

        for (n, ch) in text.chars().enumerate() {
            let gx = left + n as i32 * font::ADVANCE * scale;
            for (row, &bits) in font::glyph(ch).iter().enumerate() {
                for column in 0..font::GLYPH_W {
                    if bits & (1u8 << (font::GLYPH_W - 1 - column)) == 0 {
                        continue;
                    }
                    let px = gx + column * scale;
                    let py = top + row as i32 * scale;
                    for sy in 0..scale {
                        for sx in 0..scale {
                            self.put(px + sx, py + sy, col);
                        }
                    }
                }
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/// Liang–Barsky clip of `a → b` to the box `[0, max]`.
fn clip_segment(a: Vec2, b: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    if !a.is_finite() || !b.is_finite() || max.x < 0.0 || max.y < 0.0 {
        return None;
    }
    let d = b - a;
    let (mut t0, mut t1) = (0.0_f32, 1.0_f32);
    for (p, q) in [
        (-d.x, a.x),
        (d.x, max.x - a.x),
        (-d.y, a.y),
        (d.y, max.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((a + d * t0, a + d * t1))
}

/*──────────────────────────────── Tests ───────────────────────────────*/
