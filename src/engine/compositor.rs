//! Painter's-algorithm ordering of one snapshot.
//!
//! Every primitive gets a depth key; the list is drawn from the largest key
//! to the smallest. The floor is pinned behind everything and the ceiling in
//! front of everything, which is enough for a convex box seen from inside.

use glam::Vec2;

use crate::world::{Polygon, PolyPoints, RoomSnapshot, Surface, WallSide, WorldConfig};

#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveKind {
    Surface {
        surface: Surface,
        points: PolyPoints,
    },
    /// `line` indexes `RoomSnapshot::grid_lines` so labels can find it.
    GridLine { line: usize, from: Vec2, to: Vec2 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub key: f32,
    pub kind: PrimitiveKind,
}

impl Primitive {
    fn surface(p: &Polygon, key: f32) -> Self {
        Self {
            key,
            kind: PrimitiveKind::Surface {
                surface: p.surface,
                points: p.points.clone(),
            },
        }
    }
}

/// Rough distance from the viewpoint to a wall, used only for ordering.
pub fn wall_key(side: WallSide, viewpoint: Vec2, world: &WorldConfig) -> f32 {
    let depth_mid = viewpoint.y * 0.5;
    match side {
        WallSide::North => viewpoint.y,
        WallSide::West => viewpoint.x + depth_mid,
        WallSide::East => (world.max_coord() - viewpoint.x) + depth_mid,
    }
}

/// Far-to-near draw sequence for `snap`.
pub fn order(snap: &RoomSnapshot, world: &WorldConfig) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(snap.walls.len() + snap.grid_lines.len() + 2);

    if let Some(floor) = &snap.floor {
        out.push(Primitive::surface(floor, f32::INFINITY));
    }
    for wall in &snap.walls {
        if let Surface::Wall(side) = wall.surface {
            out.push(Primitive::surface(wall, wall_key(side, snap.viewpoint, world)));
        }
    }
    for (i, line) in snap.grid_lines.iter().enumerate() {
        out.push(Primitive {
            key: line.avg_depth,
            kind: PrimitiveKind::GridLine {
                line: i,
                from: line.start.pos,
                to: line.end.pos,
            },
        });
    }
    if let Some(ceiling) = &snap.ceiling {
        out.push(Primitive::surface(ceiling, f32::NEG_INFINITY));
    }

    // stable: equal keys keep insertion order (walls before lines)
    out.sort_by(|a, b| b.key.total_cmp(&a.key));
    out
}
