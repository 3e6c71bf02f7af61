//! Swipe-to-dismiss gesture tracking

use std::time::Instant;

/// Movement below this in both axes counts as a tap, in px.
pub const TAP_SLOP_PX: f64 = 4.0;

/// Outcome of a released swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Pointer barely moved; treat as a click
    Tap,
    /// Distance or velocity passed the threshold
    Dismiss,
    /// Return the panel to its resting position
    SnapBack,
    /// No horizontal rightward drag happened
    Ignored,
}

/// Thresholds for committing a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Minimum rightward distance in px
    pub distance_px: f64,
    /// Minimum rightward velocity in px/ms
    pub velocity_px_per_ms: f64,
}

/// A press on the drawer panel and its movement so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start_x: f64,
    start_y: f64,
    started_at: Instant,
    dx: f64,
    dy: f64,
}

impl SwipeTracker {
    pub fn start(x: f64, y: f64, at: Instant) -> Self {
        Self {
            start_x: x,
            start_y: y,
            started_at: at,
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// Record the pointer position.
    pub fn update(&mut self, x: f64, y: f64) {
        self.dx = x - self.start_x;
        self.dy = y - self.start_y;
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Horizontal, rightward movement; vertical drags belong to panel scrolling.
    pub fn is_horizontal_rightward(&self) -> bool {
        self.dx.abs() > self.dy.abs() && self.dx > 0.0
    }

    /// How far the panel should follow the finger, as a fraction of its width.
    pub fn offset_fraction(&self, panel_width_px: f64) -> f64 {
        if !self.is_horizontal_rightward() || panel_width_px <= 0.0 {
            return 0.0;
        }
        (self.dx / panel_width_px).min(1.0)
    }

    /// Decide on release at `at`.
    pub fn finish(&self, at: Instant, thresholds: SwipeThresholds) -> SwipeDecision {
        if self.dx.abs() <= TAP_SLOP_PX && self.dy.abs() <= TAP_SLOP_PX {
            return SwipeDecision::Tap;
        }
        if !self.is_horizontal_rightward() {
            return SwipeDecision::Ignored;
        }
        let elapsed_ms = at.saturating_duration_since(self.started_at).as_secs_f64() * 1000.0;
        let velocity = self.dx / elapsed_ms.max(1.0);

        if self.dx > thresholds.distance_px || velocity > thresholds.velocity_px_per_ms {
            SwipeDecision::Dismiss
        } else {
            SwipeDecision::SnapBack
        }
    }
}
