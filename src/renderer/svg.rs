//! Vector back-end: serialises each frame as a standalone SVG document.
//!
//! Elements are emitted in submission order, which SVG paints in order, and
//! carry the class names the host page styles.

use glam::Vec2;

use crate::{
    engine::Anchor,
    renderer::{Renderer, Rgba, Style},
    world::WallSide,
};

impl Style {
    pub fn css_class(self) -> &'static str {
        match self {
            Style::Floor => "room-floor",
            Style::Ceiling => "room-ceiling",
            Style::Wall(WallSide::North) => "room-wall-back",
            Style::Wall(WallSide::West) => "room-wall-left",
            Style::Wall(WallSide::East) => "room-wall-right",
            Style::GridLine => "grid-line",
            Style::Label => "grid-label",
            Style::Readout => "position-text",
            Style::NavButton => "nav-button",
            Style::NavButtonPressed => "nav-button pressed",
            Style::NavGlyph => "nav-glyph",
        }
    }
}

#[derive(Default)]
pub struct SvgCanvas {
    width: usize,
    height: usize,
    body: String,
    document: String,
}

impl SvgCanvas {
    /// The last finished document (empty before the first `end_frame`).
    pub fn document(&self) -> &str {
        &self.document
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Renderer for SvgCanvas {
    fn begin_frame(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.body.clear();
    }

    fn fill_polygon(&mut self, points: &[Vec2], style: Style) {
        if points.len() < 3 {
            return;
        }
        let mut d = String::new();
        for (i, p) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{cmd} {:.1} {:.1} ", p.x, p.y));
        }
        d.push('Z');
        self.body.push_str(&format!(
            "  <path d=\"{d}\" class=\"{}\"/>\n",
            style.css_class()
        ));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: Style) {
        self.body.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" class=\"{}\"/>\n",
            from.x,
            from.y,
            to.x,
            to.y,
            style.css_class()
        ));
    }

    fn draw_text(&mut self, at: Vec2, text: &str, size: f32, anchor: Anchor, style: Style) {
        let anchor = match anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        self.body.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{:.1}\" text-anchor=\"{anchor}\" class=\"{}\">{}</text>\n",
            at.x,
            at.y,
            size,
            style.css_class(),
            escape(text)
        ));
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        let (w, h) = (self.width, self.height);
        self.document = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{}</svg>\n",
            self.body
        );
        submit(&[], w, h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::compose, renderer::RendererExt, world::Config};
    use glam::vec2;

    #[test]
    fn document_lists_floor_before_walls_and_ceiling_last() {
        let frame = compose(&Config::default(), vec2(5.0, 5.0));
        let mut svg = SvgCanvas::default();
        svg.draw_frame(&frame, None, |fb, w, h| {
            assert!(fb.is_empty());
            assert_eq!((w, h), (800, 600));
        });
        let doc = svg.document();
        assert!(doc.starts_with("<svg"));
        let floor = doc.find("room-floor").unwrap();
        let back = doc.find("room-wall-back").unwrap();
        let ceiling = doc.find("room-ceiling").unwrap();
        let label = doc.find("grid-label").unwrap();
        assert!(floor < back && back < ceiling && ceiling < label);
    }

    #[test]
    fn text_is_escaped() {
        let mut svg = SvgCanvas::default();
        svg.begin_frame(10, 10);
        svg.draw_text(vec2(1.0, 2.0), "<5>", 9.0, Anchor::End, Style::Label);
        svg.end_frame(|_, _, _| {});
        assert!(svg.document().contains("&lt;5&gt;"));
        assert!(svg.document().contains("text-anchor=\"end\""));
    }
}
