use glam::{Vec2, vec2};

use crate::world::WorldConfig;

/// Below this a clamped move counts as "did not move".
pub const MOVE_EPSILON: f32 = 1e-4;

/// The four logical movement commands.
///
/// The viewer always faces towards depth 0, so *forward* decreases the
/// depth coordinate and *left* decreases the lateral one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Back,
        Direction::Left,
        Direction::Right,
    ];

    /// One grid cell in world units.
    #[inline]
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Forward => vec2(0.0, -1.0),
            Direction::Back => vec2(0.0, 1.0),
            Direction::Left => vec2(-1.0, 0.0),
            Direction::Right => vec2(1.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Position changed; the frame must be rebuilt.
    Moved,
    /// Already against the margin; nothing to do.
    Blocked,
}

/// Continuous viewer position, always inside the walkable square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewpoint {
    pos: Vec2, // x = lateral, y = depth
}

impl Viewpoint {
    /// Start at `pos`, pulled inside the walkable square if needed.
    pub fn new(pos: Vec2, world: &WorldConfig) -> Self {
        Self {
            pos: clamp_to_room(pos, world),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Move one cell in `dir`, stopping at the wall margin.
    pub fn step(&mut self, dir: Direction, world: &WorldConfig) -> MoveOutcome {
        let next = clamp_to_room(self.pos + dir.delta(), world);
        let d = (next - self.pos).abs();
        if d.x > MOVE_EPSILON || d.y > MOVE_EPSILON {
            self.pos = next;
            MoveOutcome::Moved
        } else {
            MoveOutcome::Blocked
        }
    }

    /// `"x,y"` with the shortest float formatting (`5,5`, `5,0.5`).
    pub fn readout(&self) -> String {
        format!("{},{}", self.pos.x, self.pos.y)
    }
}

fn clamp_to_room(p: Vec2, world: &WorldConfig) -> Vec2 {
    let (lo, hi) = world.walkable();
    p.max(Vec2::splat(lo)).min(Vec2::splat(hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_until_margin_then_blocked() {
        let world = WorldConfig::default();
        let mut vp = Viewpoint::new(vec2(5.0, 5.0), &world);
        for _ in 0..4 {
            assert_eq!(vp.step(Direction::Forward, &world), MoveOutcome::Moved);
        }
        assert_eq!(vp.pos(), vec2(5.0, 1.0));
        assert_eq!(vp.step(Direction::Forward, &world), MoveOutcome::Moved);
        assert_eq!(vp.pos(), vec2(5.0, 0.5));
        assert_eq!(vp.step(Direction::Forward, &world), MoveOutcome::Blocked);
        assert_eq!(vp.pos(), vec2(5.0, 0.5));
    }

    #[test]
    fn lateral_moves_clamp_both_ways() {
        let world = WorldConfig::default();
        let mut vp = Viewpoint::new(vec2(5.0, 5.0), &world);
        for _ in 0..10 {
            vp.step(Direction::Right, &world);
        }
        assert_eq!(vp.pos().x, 9.5);
        for _ in 0..20 {
            vp.step(Direction::Left, &world);
        }
        assert_eq!(vp.pos().x, 0.5);
        assert_eq!(vp.step(Direction::Left, &world), MoveOutcome::Blocked);
    }

    #[test]
    fn start_outside_is_pulled_in() {
        let world = WorldConfig::default();
        let vp = Viewpoint::new(vec2(-3.0, 42.0), &world);
        assert_eq!(vp.pos(), vec2(0.5, 9.5));
    }

    #[test]
    fn readout_uses_short_floats() {
        let world = WorldConfig::default();
        let mut vp = Viewpoint::new(vec2(5.0, 5.0), &world);
        assert_eq!(vp.readout(), "5,5");
        for _ in 0..6 {
            vp.step(Direction::Back, &world);
        }
        assert_eq!(vp.readout(), "5,9.5");
    }
}
