//! Room geometry for one viewpoint: corners, faces and grid lines.
//!
//! Nothing here fails. A point the camera cannot see simply removes the
//! primitive that depends on it from this frame.

use glam::{Vec3, vec3};
use smallvec::SmallVec;

use crate::world::{
    CLIP_EPSILON, Camera, Corners, GridLine, Orientation, PolyPoints, Polygon, RoomSnapshot,
    ScreenPoint, Surface, WallSide, WorldConfig,
    geometry::{FAR_LEFT, FAR_RIGHT, NEAR_LEFT, NEAR_RIGHT},
};

type WorldPoly = SmallVec<[Vec3; 6]>;

/// World-space room corners, one ring per height, wound like [`Corners`].
struct RoomBox {
    floor: [Vec3; 4],
    ceiling: [Vec3; 4],
}

impl RoomBox {
    fn new(world: &WorldConfig) -> Self {
        let max = world.max_coord();
        let ring = |h: f32| {
            [
                vec3(0.0, h, 0.0), // far-left
                vec3(max, h, 0.0), // far-right
                vec3(max, h, max), // near-right
                vec3(0.0, h, max), // near-left
            ]
        };
        Self {
            floor: ring(world.floor_level),
            ceiling: ring(world.ceiling_level()),
        }
    }

    fn face(&self, surface: Surface) -> [Vec3; 4] {
        let (f, c) = (&self.floor, &self.ceiling);
        match surface {
            Surface::Floor => *f,
            Surface::Ceiling => *c,
            Surface::Wall(WallSide::North) => {
                [f[FAR_LEFT], f[FAR_RIGHT], c[FAR_RIGHT], c[FAR_LEFT]]
            }
            Surface::Wall(WallSide::West) => {
                [f[NEAR_LEFT], f[FAR_LEFT], c[FAR_LEFT], c[NEAR_LEFT]]
            }
            Surface::Wall(WallSide::East) => {
                [f[NEAR_RIGHT], c[NEAR_RIGHT], c[FAR_RIGHT], f[FAR_RIGHT]]
            }
        }
    }
}

/// Project the whole room as seen through `cam`.
pub fn rebuild(world: &WorldConfig, cam: &Camera) -> RoomSnapshot {
    let room = RoomBox::new(world);

    let corners = Corners {
        floor: room.floor.map(|p| cam.project(p)),
        ceiling: room.ceiling.map(|p| cam.project(p)),
    };

    let walls = WallSide::ALL
        .into_iter()
        .filter_map(|side| build_polygon(&room, Surface::Wall(side), cam))
        .collect();

    let mut grid_lines = Vec::with_capacity(world.size as usize * 2);
    depth_lines(world, cam, &mut grid_lines);
    lateral_lines(world, cam, &mut grid_lines);

    RoomSnapshot {
        viewpoint: cam.viewpoint(),
        corners,
        floor: build_polygon(&room, Surface::Floor, cam),
        ceiling: build_polygon(&room, Surface::Ceiling, cam),
        walls,
        grid_lines,
    }
}

/*──────────────────────────── polygons ────────────────────────────────*/

/// Cut a face at the near plane and project what is left.
/// Fewer than three surviving vertices means the face is skipped.
fn build_polygon(room: &RoomBox, surface: Surface, cam: &Camera) -> Option<Polygon> {
    let clipped = clip_near(&room.face(surface), cam);
    let points: PolyPoints = clipped
        .iter()
        .filter_map(|&p| cam.project(p))
        .map(|sp| sp.pos)
        .collect();
    (points.len() >= 3).then_some(Polygon { surface, points })
}

/// Sutherland–Hodgman against `depth-from-camera >= near + ε`.
fn clip_near(poly: &[Vec3], cam: &Camera) -> WorldPoly {
    let limit = cam.near() + CLIP_EPSILON;
    let dist = |p: Vec3| cam.depth_of(p.z) - limit;
    let cut = |a: Vec3, b: Vec3| {
        let (da, db) = (dist(a), dist(b));
        let mut p = a + (b - a) * (da / (da - db));
        p.z = cam.viewpoint().y - limit;
        p
    };

    let mut out = WorldPoly::new();
    for (i, &cur) in poly.iter().enumerate() {
        let prev = poly[(i + poly.len() - 1) % poly.len()];
        match (dist(prev) >= 0.0, dist(cur) >= 0.0) {
            (true, true) => out.push(cur),
            (true, false) => out.push(cut(prev, cur)),
            (false, true) => {
                out.push(cut(prev, cur));
                out.push(cur);
            }
            (false, false) => {}
        }
    }
    out
}

/*──────────────────────────── grid lines ──────────────────────────────*/

fn grid_line(
    world_value: u32,
    orientation: Orientation,
    start: ScreenPoint,
    end: ScreenPoint,
) -> GridLine {
    GridLine {
        world_value,
        orientation,
        start,
        end,
        avg_depth: (start.depth + end.depth) * 0.5,
    }
}

/// Full-width lines at every integer depth in front of the viewer.
fn depth_lines(world: &WorldConfig, cam: &Camera, out: &mut Vec<GridLine>) {
    let (floor, max) = (world.floor_level, world.max_coord());
    for i in 0..world.size {
        let z = i as f32;
        let (Some(left), Some(right)) = (
            cam.project(vec3(0.0, floor, z)),
            cam.project(vec3(max, floor, z)),
        ) else {
            continue;
        };
        out.push(grid_line(i, Orientation::Horizontal, left, right));
    }
}

/// Lines at every integer x, from the far wall to the nearest visible depth.
///
/// The near wall end is normally behind the camera; the line is then cut
/// just past the near plane, if that depth is still inside the room.
fn lateral_lines(world: &WorldConfig, cam: &Camera, out: &mut Vec<GridLine>) {
    let (floor, max) = (world.floor_level, world.max_coord());
    let fallback_z = cam.viewpoint().y - (cam.near() + CLIP_EPSILON);

    for i in 0..world.size {
        let x = i as f32;
        let Some(far) = cam.project(vec3(x, floor, 0.0)) else {
            continue;
        };
        let near = cam.project(vec3(x, floor, max)).or_else(|| {
            (fallback_z > 0.0 && fallback_z < max)
                .then(|| cam.project(vec3(x, floor, fallback_z)))
                .flatten()
        });
        if let Some(near) = near {
            out.push(grid_line(i, Orientation::Vertical, far, near));
        }
    }
}
