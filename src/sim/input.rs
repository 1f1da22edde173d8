//! Input source: keyboard bindings and the on-screen nav pad both resolve
//! to the same four [`Direction`]s.

use std::time::{Duration, Instant};

use glam::{Vec2, vec2};
use minifb::Key;

use crate::{sim::viewpoint::Direction, world::Viewport};

/// Arrow keys and WASD.
pub const KEY_BINDINGS: [(Key, Direction); 8] = [
    (Key::Up, Direction::Forward),
    (Key::W, Direction::Forward),
    (Key::Down, Direction::Back),
    (Key::S, Direction::Back),
    (Key::Left, Direction::Left),
    (Key::A, Direction::Left),
    (Key::Right, Direction::Right),
    (Key::D, Direction::Right),
];

pub fn direction_for_key(key: Key) -> Option<Direction> {
    KEY_BINDINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, d)| d)
}

/// How long a button stays highlighted after a committed move.
pub const PRESS_FEEDBACK: Duration = Duration::from_millis(100);

const BUTTON: f32 = 44.0;
const GAP: f32 = 6.0;
const EDGE: f32 = 16.0;

/// Axis-aligned screen rectangle of one nav button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavButton {
    pub direction: Direction,
    pub min: Vec2,
    pub max: Vec2,
}

impl NavButton {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x <= self.max.x && p.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Four buttons in an inverted-T, anchored to the bottom-right corner.
#[derive(Clone, Debug)]
pub struct NavPad {
    buttons: [NavButton; 4],
    pressed: Option<(Direction, Instant)>,
}

impl NavPad {
    pub fn new(viewport: &Viewport) -> Self {
        let mut pad = Self {
            buttons: [NavButton {
                direction: Direction::Forward,
                min: Vec2::ZERO,
                max: Vec2::ZERO,
            }; 4],
            pressed: None,
        };
        pad.layout(viewport);
        pad
    }

    /// Re-anchor after the viewport changed size.
    pub fn layout(&mut self, viewport: &Viewport) {
        let step = BUTTON + GAP;
        // top-left of the bottom-right (Right) button
        let br = viewport.size() - Vec2::splat(EDGE + BUTTON);
        let at = |dx: f32, dy: f32| br + vec2(dx * step, dy * step);
        let cells = [
            (Direction::Forward, at(-1.0, -1.0)),
            (Direction::Left, at(-2.0, 0.0)),
            (Direction::Back, at(-1.0, 0.0)),
            (Direction::Right, at(0.0, 0.0)),
        ];
        for (slot, (direction, min)) in self.buttons.iter_mut().zip(cells) {
            *slot = NavButton {
                direction,
                min,
                max: min + Vec2::splat(BUTTON),
            };
        }
    }

    pub fn buttons(&self) -> &[NavButton] {
        &self.buttons
    }

    /// Direction of the button under a click at `p`, if any.
    pub fn hit(&self, p: Vec2) -> Option<Direction> {
        self.buttons
            .iter()
            .find(|b| b.contains(p))
            .map(|b| b.direction)
    }

    /// Start the highlight for a committed move.
    pub fn press(&mut self, dir: Direction, now: Instant) {
        self.pressed = Some((dir, now));
    }

    pub fn is_pressed(&self, dir: Direction, now: Instant) -> bool {
        matches!(self.pressed, Some((d, at)) if d == dir && now.duration_since(at) < PRESS_FEEDBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_agree() {
        assert_eq!(direction_for_key(Key::Up), direction_for_key(Key::W));
        assert_eq!(direction_for_key(Key::Down), Some(Direction::Back));
        assert_eq!(direction_for_key(Key::A), Some(Direction::Left));
        assert_eq!(direction_for_key(Key::Right), Some(Direction::Right));
        assert_eq!(direction_for_key(Key::Q), None);
    }

    #[test]
    fn every_button_hits_its_direction() {
        let pad = NavPad::new(&Viewport::default());
        for b in pad.buttons() {
            assert_eq!(pad.hit(b.center()), Some(b.direction));
        }
        assert_eq!(pad.hit(vec2(10.0, 10.0)), None);
    }

    #[test]
    fn pad_stays_inside_viewport_after_layout() {
        let mut pad = NavPad::new(&Viewport::default());
        let vp = Viewport::new(320, 240);
        pad.layout(&vp);
        for b in pad.buttons() {
            assert!(vp.contains_inset(b.min, 0.0));
            assert!(vp.contains_inset(b.max, 0.0));
        }
    }

    #[test]
    fn highlight_expires() {
        let t0 = Instant::now();
        let mut pad = NavPad::new(&Viewport::default());
        pad.press(Direction::Left, t0);
        assert!(pad.is_pressed(Direction::Left, t0 + Duration::from_millis(50)));
        assert!(!pad.is_pressed(Direction::Right, t0));
        assert!(!pad.is_pressed(Direction::Left, t0 + PRESS_FEEDBACK));
    }
}
