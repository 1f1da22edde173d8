//! End-to-end behaviour of a session: movement, projection, ordering.

use glam::{Vec2, vec2, vec3};

use gridroom::{
    engine::PrimitiveKind,
    sim::{Direction, MoveOutcome, Session},
    world::{Camera, CameraParams, Config, Orientation, Surface, Viewport},
};

fn default_session() -> Session {
    Session::new(Config::default()).unwrap()
}

/// Every direction sequence of length `len`, in base-4 order.
fn sequences(len: u32) -> impl Iterator<Item = Vec<Direction>> {
    (0..4u32.pow(len)).map(move |mut n| {
        (0..len)
            .map(|_| {
                let d = Direction::ALL[(n % 4) as usize];
                n /= 4;
                d
            })
            .collect()
    })
}

#[test]
fn viewpoint_never_leaves_walkable_square() {
    let cfg = Config::default();
    let (lo, hi) = cfg.world.walkable();
    for start in [vec2(5.0, 5.0), vec2(0.5, 9.5), vec2(9.0, 1.0)] {
        for seq in sequences(6) {
            let mut s = Session::with_viewpoint(cfg, start).unwrap();
            for dir in seq {
                s.apply(dir);
                let p = s.viewpoint();
                assert!(p.x >= lo && p.x <= hi, "x escaped: {p}");
                assert!(p.y >= lo && p.y <= hi, "y escaped: {p}");
            }
        }
    }
}

#[test]
fn forward_walk_scenario() {
    let mut s = default_session();
    for _ in 0..4 {
        s.apply(Direction::Forward);
    }
    assert_eq!(s.viewpoint().y, 1.0);
    assert_eq!(s.apply(Direction::Forward), MoveOutcome::Moved);
    assert_eq!(s.viewpoint().y, 0.5);
    assert_eq!(s.apply(Direction::Forward), MoveOutcome::Blocked);
    assert_eq!(s.viewpoint().y, 0.5);
    assert_eq!(s.readout(), "5,0.5");
}

fn centered_camera() -> Camera {
    let params = CameraParams {
        focal_length: 270.0,
        eye_height: 1.25,
        near_clip: 0.2,
    };
    Camera::new(params, vec2(5.0, 5.0), &Viewport::default())
}

#[test]
fn near_clip_excludes_everything_at_or_behind_the_plane() {
    let cam = centered_camera();
    assert!(cam.project(vec3(5.0, 0.0, 5.0)).is_none());
    for x in [-3.0, 0.0, 5.0, 10.0] {
        for h in [0.0, 1.25, 2.5] {
            for z in [4.8, 5.0, 7.0, 10.0] {
                assert!(cam.project(vec3(x, h, z)).is_none(), "({x}, {h}, {z})");
            }
        }
    }
}

#[test]
fn projection_shrinks_with_distance() {
    let cam = centered_camera();
    let center = Viewport::default().center;
    let spread = |z: f32| {
        let p = cam.project(vec3(7.0, 2.0, z)).unwrap();
        (p.pos - center).length()
    };
    let mut last = f32::INFINITY;
    for z in [4.7, 4.5, 4.0, 3.0, 2.0, 0.0] {
        let s = spread(z);
        assert!(s < last);
        last = s;
    }
}

#[test]
fn far_left_corner_appears_left_of_center() {
    let cam = centered_camera();
    let p = cam.project(vec3(0.0, 0.0, 0.0)).unwrap();
    assert_eq!(p.depth, 5.0);
    assert!(p.pos.x < Viewport::default().center.x);
}

fn surface_index(kinds: &[PrimitiveKind], s: Surface) -> Option<usize> {
    kinds
        .iter()
        .position(|k| matches!(k, PrimitiveKind::Surface { surface, .. } if *surface == s))
}

#[test]
fn floor_under_and_ceiling_over_everything() {
    let cfg = Config::default();
    for seq in sequences(4) {
        let mut s = Session::new(cfg).unwrap();
        for dir in seq {
            s.apply(dir);
        }
        let frame = s.frame();
        let kinds: Vec<PrimitiveKind> = frame.primitives.into_iter().map(|p| p.kind).collect();
        assert_eq!(surface_index(&kinds, Surface::Floor), Some(0));
        assert_eq!(surface_index(&kinds, Surface::Ceiling), Some(kinds.len() - 1));
    }
}

#[test]
fn grid_lines_bounded_and_unique_per_orientation() {
    let cfg = Config::default();
    let size = cfg.world.size;
    let positions: Vec<Vec2> = (0..=9)
        .flat_map(|x| (0..=9).map(move |y| vec2(x as f32 + 0.5, y as f32 + 0.5)))
        .collect();
    for at in positions {
        let frame = Session::with_viewpoint(cfg, at).unwrap().frame();
        let lines = &frame.snapshot.grid_lines;
        assert!(lines.len() <= 2 * size as usize);
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            let mut values: Vec<u32> = frame.snapshot.lines(o).map(|l| l.world_value).collect();
            assert!(values.iter().all(|&v| v < size));
            let n = values.len();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), n, "duplicate {o:?} line at {at}");
        }
    }
}

#[test]
fn labels_stay_inside_safe_rectangle() {
    let cfg = Config::default();
    let mut s = Session::new(cfg).unwrap();
    for dir in [Direction::Left, Direction::Left, Direction::Forward, Direction::Right] {
        s.apply(dir);
        let frame = s.frame();
        for l in &frame.labels {
            assert!(frame.viewport.contains_inset(l.placement.pos, cfg.labels.safe_inset));
        }
    }
}
