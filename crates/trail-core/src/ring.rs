//! Fixed-capacity history of smoothed pointer positions.
//!
//! Stored as two parallel flat buffers so a frame never allocates; index 0 is
//! always the most recent sample and anything shifted past `TRAIL_CAP` is
//! silently dropped.

use crate::constants::TRAIL_CAP;
use glam::Vec2;

pub struct HistoryRing {
    xs: [f32; TRAIL_CAP],
    ys: [f32; TRAIL_CAP],
    len: usize,
}

impl HistoryRing {
    pub fn new() -> Self {
        Self {
            xs: [0.0; TRAIL_CAP],
            ys: [0.0; TRAIL_CAP],
            len: 0,
        }
    }

    /// Prepend a sample, shifting older entries one slot toward the tail and
    /// evicting whatever falls past capacity.
    pub fn push(&mut self, p: Vec2) {
        let len = (self.len + 1).min(TRAIL_CAP);
        for i in (1..len).rev() {
            self.xs[i] = self.xs[i - 1];
            self.ys[i] = self.ys[i - 1];
        }
        self.xs[0] = p.x;
        self.ys[0] = p.y;
        self.len = len;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sample at distance `i` from the head (0 = newest).
    #[inline]
    pub fn point(&self, i: usize) -> Vec2 {
        debug_assert!(i < self.len);
        Vec2::new(self.xs[i], self.ys[i])
    }
}

impl Default for HistoryRing {
    fn default() -> Self {
        Self::new()
    }
}
