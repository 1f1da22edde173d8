use std::time::{Duration, Instant};

/// Quiet period a burst of resize signals must be followed by.
pub const RESIZE_QUIET: Duration = Duration::from_millis(250);

/// Coalesces window-size changes so a drag costs one rebuild, not hundreds.
///
/// A [`signal`](Self::signal) with a new size restarts the quiet window;
/// [`poll`](Self::poll) hands out the latest size once it has elapsed.
#[derive(Debug)]
pub struct ResizeDebouncer {
    quiet: Duration,
    applied: (usize, usize),
    pending: Option<((usize, usize), Instant)>,
}

impl ResizeDebouncer {
    pub fn new(applied: (usize, usize)) -> Self {
        Self::with_quiet(applied, RESIZE_QUIET)
    }

    pub fn with_quiet(applied: (usize, usize), quiet: Duration) -> Self {
        Self {
            quiet,
            applied,
            pending: None,
        }
    }

    /// Record the surface size observed at `now`.
    pub fn signal(&mut self, size: (usize, usize), now: Instant) {
        match self.pending {
            Some((pending, _)) if pending == size => {}
            _ if size == self.applied && self.pending.is_none() => {}
            _ => self.pending = Some((size, now)),
        }
    }

    /// The size to apply, once the surface has been still long enough.
    pub fn poll(&mut self, now: Instant) -> Option<(usize, usize)> {
        let (size, since) = self.pending?;
        if now.duration_since(since) < self.quiet {
            return None;
        }
        self.pending = None;
        if size == self.applied {
            return None;
        }
        self.applied = size;
        Some(size)
    }
}
