//! Display zoom state.
//!
//! Zoom is a display-only integer percent, clamped to
//! [`consts::ZOOM_MIN`]..=[`consts::ZOOM_MAX`]. It never affects shape
//! coordinates; scaling the rendered canvas is the host's concern.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::consts;

/// Clamped display zoom percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    percent: i32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { percent: consts::ZOOM_DEFAULT }
    }
}

impl Zoom {
    /// Current zoom in percent. Always within the clamped range.
    #[must_use]
    pub fn percent(self) -> i32 {
        self.percent
    }

    /// Add `delta` percent, clamping to the allowed range. Returns `true`
    /// if the zoom actually changed (`false` when already pinned at a
    /// bound).
    pub fn step(&mut self, delta: i32) -> bool {
        let next = (self.percent + delta).clamp(consts::ZOOM_MIN, consts::ZOOM_MAX);
        let changed = next != self.percent;
        self.percent = next;
        changed
    }

    /// Footer label, e.g. `"100%"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}%", self.percent)
    }
}
