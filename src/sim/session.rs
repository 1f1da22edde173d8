use glam::Vec2;
use log::{debug, info};

use crate::{
    engine::{Frame, compose},
    sim::viewpoint::{Direction, MoveOutcome, Viewpoint},
    world::{Config, ConfigError, Viewport},
};

/// Owns the only mutable state there is: the viewpoint and the viewport.
///
/// Each stimulus completes synchronously; callers redraw with
/// [`frame`](Self::frame) whenever a method reports a change.
#[derive(Clone, Debug)]
pub struct Session {
    cfg: Config,
    viewpoint: Viewpoint,
}

impl Session {
    /// Validate `cfg` and place the viewer at the grid center.
    pub fn new(cfg: Config) -> Result<Self, ConfigError> {
        let start = cfg.world.center();
        Self::with_viewpoint(cfg, start)
    }

    pub fn with_viewpoint(cfg: Config, start: Vec2) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            viewpoint: Viewpoint::new(start, &cfg.world),
            cfg,
        })
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    #[inline]
    pub fn viewpoint(&self) -> Vec2 {
        self.viewpoint.pos()
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.cfg.viewport
    }

    /// Apply one movement command.
    pub fn apply(&mut self, dir: Direction) -> MoveOutcome {
        let outcome = self.viewpoint.step(dir, &self.cfg.world);
        match outcome {
            MoveOutcome::Moved => info!("{dir:?} → {}", self.viewpoint.readout()),
            MoveOutcome::Blocked => debug!("{dir:?} blocked at {}", self.viewpoint.readout()),
        }
        outcome
    }

    /// Adopt a new output size. A size without area is ignored.
    pub fn resize(&mut self, width: usize, height: usize) -> bool {
        if width == 0 || height == 0 {
            debug!("ignoring resize to {width}x{height}");
            return false;
        }
        self.cfg.viewport = Viewport::new(width, height);
        debug!("viewport now {width}x{height}");
        true
    }

    /// Full rebuild for the current state.
    pub fn frame(&self) -> Frame {
        compose(&self.cfg, self.viewpoint.pos())
    }

    /// Position text shown to the user.
    pub fn readout(&self) -> String {
        self.viewpoint.readout()
    }
}
