use glam::Vec2;
use smallvec::SmallVec;

use crate::world::camera::ScreenPoint;

/// Screen-space vertex list; a box face cut by the near plane has at most 5.
pub type PolyPoints = SmallVec<[Vec2; 6]>;

/*--------------------------- surfaces -------------------------------*/

/// The three walls that can face the viewer. The near (south) wall is never
/// built: it surrounds the camera and would hide the whole room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallSide {
    North,
    West,
    East,
}

impl WallSide {
    pub const ALL: [WallSide; 3] = [WallSide::North, WallSide::West, WallSide::East];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Floor,
    Ceiling,
    Wall(WallSide),
}

/// A drawable room face (always at least 3 points).
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub surface: Surface,
    pub points: PolyPoints,
}

/*--------------------------- grid lines -----------------------------*/

/// `Horizontal` lines sit at a constant depth and span the room's width;
/// `Vertical` lines sit at a constant lateral x and run along the depth axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Integer grid coordinate in `0 ..= size-1`.
    pub world_value: u32,
    pub orientation: Orientation,
    pub start: ScreenPoint,
    pub end: ScreenPoint,
    /// Mean depth-from-camera of both ends.
    pub avg_depth: f32,
}

impl GridLine {
    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.start.pos + self.end.pos) * 0.5
    }
}

/*--------------------------- snapshot -------------------------------*/

/// Projected room corners, both rings wound far-left, far-right,
/// near-right, near-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Corners {
    pub floor: [Option<ScreenPoint>; 4],
    pub ceiling: [Option<ScreenPoint>; 4],
}

pub const FAR_LEFT: usize = 0;
pub const FAR_RIGHT: usize = 1;
pub const NEAR_RIGHT: usize = 2;
pub const NEAR_LEFT: usize = 3;

/// Everything projected for one viewpoint. Rebuilt from scratch on every
/// change; never patched.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomSnapshot {
    pub viewpoint: Vec2,
    pub corners: Corners,
    pub floor: Option<Polygon>,
    pub ceiling: Option<Polygon>,
    /// Drawable walls only, in `WallSide::ALL` order.
    pub walls: Vec<Polygon>,
    pub grid_lines: Vec<GridLine>,
}

impl RoomSnapshot {
    pub fn wall(&self, side: WallSide) -> Option<&Polygon> {
        self.walls.iter().find(|w| w.surface == Surface::Wall(side))
    }

    pub fn lines(&self, orientation: Orientation) -> impl Iterator<Item = &GridLine> {
        self.grid_lines
            .iter()
            .filter(move |l| l.orientation == orientation)
    }
}
