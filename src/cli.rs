//! Command-line knobs shared by the binaries.

use clap::Args;
use glam::{Vec2, vec2};

use crate::{
    sim::Direction,
    world::{CameraParams, Config, LabelStyle, Viewport, WorldConfig},
};

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Output width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: usize,
    /// Output height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: usize,
    /// Cells per axis (odd, >= 3).
    #[arg(long, default_value_t = 11)]
    pub grid_size: u32,
    #[arg(long, default_value_t = 2.5)]
    pub room_height: f32,
    /// Closest the viewer may get to a wall.
    #[arg(long, default_value_t = 0.5)]
    pub margin: f32,
    /// Pixels per world unit at depth 1.
    #[arg(long, default_value_t = 270.0)]
    pub focal: f32,
    #[arg(long, default_value_t = 1.25)]
    pub eye_height: f32,
    #[arg(long, default_value_t = 0.2)]
    pub near_clip: f32,
}

impl ConfigArgs {
    pub fn to_config(&self) -> Config {
        Config {
            world: WorldConfig {
                size: self.grid_size,
                room_height: self.room_height,
                margin: self.margin,
                ..WorldConfig::default()
            },
            camera: CameraParams {
                focal_length: self.focal,
                eye_height: self.eye_height,
                near_clip: self.near_clip,
            },
            labels: LabelStyle::default(),
            viewport: Viewport::new(self.width, self.height),
        }
    }
}

/// `"x,y"` → world position.
pub fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x `{x}`: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y `{y}`: {e}"))?;
    Ok(vec2(x, y))
}

/// Movement script: `f`/`w` forward, `b`/`s` back, `l`/`a` left, `r`/`d` right.
pub fn parse_moves(s: &str) -> Result<Vec<Direction>, String> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'f' | 'w' => Ok(Direction::Forward),
            'b' | 's' => Ok(Direction::Back),
            'l' | 'a' => Ok(Direction::Left),
            'r' | 'd' => Ok(Direction::Right),
            other => Err(format!("unknown move `{other}`")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_parses_with_spaces() {
        assert_eq!(parse_point("5, 0.5"), Ok(vec2(5.0, 0.5)));
        assert!(parse_point("5").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn moves_accept_both_alphabets() {
        assert_eq!(
            parse_moves("fW l D"),
            Ok(vec![
                Direction::Forward,
                Direction::Forward,
                Direction::Left,
                Direction::Right
            ])
        );
        assert!(parse_moves("fx").is_err());
    }

    #[test]
    fn default_args_match_default_config() {
        use clap::Parser;

        #[derive(Parser)]
        struct Probe {
            #[command(flatten)]
            cfg: ConfigArgs,
        }
        let probe = Probe::parse_from(["probe"]);
        assert_eq!(probe.cfg.to_config(), Config::default());
    }
}
