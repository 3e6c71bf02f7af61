//! Viewport watcher: debounced re-detection on terminal resize

use std::time::Instant;

use avtorend_core::prelude::*;
use avtorend_core::{detect, CapabilityHints, EnvironmentSignals, ViewportClass};

use crate::config::ViewportSettings;
use crate::timers::Timers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewportTimer {
    ResizeDebounce,
}

/// A newly published snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportChange {
    pub previous: ViewportClass,
    pub current: ViewportClass,
    pub signals: EnvironmentSignals,
}

/// Owns the last published [`ViewportClass`].
///
/// Resizes are debounced; an orientation flip publishes immediately.
#[derive(Debug, Clone)]
pub struct ViewportWatcher {
    settings: ViewportSettings,
    hints: CapabilityHints,
    signals: EnvironmentSignals,
    current: ViewportClass,
    pending: Option<EnvironmentSignals>,
    timers: Timers<ViewportTimer>,
}

impl ViewportWatcher {
    /// Detect the initial snapshot for a `cols` x `rows` terminal.
    ///
    /// Explicit `touch`/`reduced_motion` settings override `hints`.
    pub fn new(settings: ViewportSettings, hints: CapabilityHints, cols: u16, rows: u16) -> Self {
        let hints = CapabilityHints {
            is_touch: settings.touch.unwrap_or(hints.is_touch),
            reduced_motion: settings.reduced_motion.unwrap_or(hints.reduced_motion),
        };
        let signals = signals_for(&settings, &hints, cols, rows);
        let current = detect(&signals);
        debug!(
            "Initial viewport {}x{}px: {:?} {}",
            signals.width_px, signals.height_px, current.device_tier, current.breakpoint
        );
        Self {
            settings,
            hints,
            signals,
            current,
            pending: None,
            timers: Timers::new(),
        }
    }

    pub fn current(&self) -> &ViewportClass {
        &self.current
    }

    pub fn signals(&self) -> &EnvironmentSignals {
        &self.signals
    }

    pub fn width_px(&self) -> f64 {
        f64::from(self.signals.width_px)
    }

    pub fn settings(&self) -> &ViewportSettings {
        &self.settings
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Terminal resized to `cols` x `rows`.
    pub fn on_resize(&mut self, cols: u16, rows: u16, now: Instant) -> Option<ViewportChange> {
        let signals = signals_for(&self.settings, &self.hints, cols, rows);
        let last = self.pending.unwrap_or(self.signals);
        if signals == last {
            return None;
        }

        if signals.orientation() != self.signals.orientation() {
            trace!("Orientation changed, publishing immediately");
            self.timers.cancel(ViewportTimer::ResizeDebounce);
            self.pending = None;
            return Some(self.publish(signals));
        }

        self.pending = Some(signals);
        self.timers.schedule(
            ViewportTimer::ResizeDebounce,
            now,
            self.settings.resize_debounce(),
        );
        None
    }

    /// Publish a debounced resize once its quiet period has passed.
    pub fn tick(&mut self, now: Instant) -> Option<ViewportChange> {
        let due = self.timers.take_due(now);
        if !due.contains(&ViewportTimer::ResizeDebounce) {
            return None;
        }
        let signals = self.pending.take()?;
        Some(self.publish(signals))
    }

    fn publish(&mut self, signals: EnvironmentSignals) -> ViewportChange {
        let previous = self.current;
        self.signals = signals;
        self.current = detect(&signals);
        if previous.device_tier != self.current.device_tier {
            info!(
                "Viewport tier {:?} -> {:?} ({}px)",
                previous.device_tier, self.current.device_tier, signals.width_px
            );
        }
        ViewportChange {
            previous,
            current: self.current,
            signals,
        }
    }

    pub fn teardown(&mut self) {
        self.timers.clear_all();
        self.pending = None;
    }
}

fn signals_for(
    settings: &ViewportSettings,
    hints: &CapabilityHints,
    cols: u16,
    rows: u16,
) -> EnvironmentSignals {
    let (width_px, height_px) = settings.cells_to_px(cols, rows);
    EnvironmentSignals {
        width_px,
        height_px,
        is_touch: hints.is_touch,
        reduced_motion: hints.reduced_motion,
    }
}
