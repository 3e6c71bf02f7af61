//! Navigation drawer state machine
//!
//! ```text
//!   Closed --toggle--> Opening --settle--> Open
//!     ^                                     |
//!     +----settle---- Closing <--close------+
//! ```
//!
//! Close triggers: toggle, overlay click, close button, Escape, nav link,
//! outside click (desktop only) and swipe-right past the threshold. Any
//! trigger that arrives during `Opening`/`Closing` is dropped.
//!
//! The drawer never renders. Every handler returns the [`DrawerEffect`]s the
//! host must apply, in order.

pub mod effects;
pub mod focus;
pub mod markup;
pub mod scroll_lock;
pub mod swipe;

use std::time::{Duration, Instant};

use avtorend_core::prelude::*;
use avtorend_core::ViewportClass;

use crate::config::DrawerSettings;
use crate::input::HitTarget;
use crate::timers::Timers;

pub use effects::{DrawerEffect, FocusTarget};
pub use focus::FocusTrap;
pub use markup::{DrawerMarkup, NavItem};
pub use scroll_lock::ScrollLock;
pub use swipe::{SwipeDecision, SwipeThresholds, SwipeTracker};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl DrawerPhase {
    /// `Opening` and `Closing` are animation phases.
    pub fn is_transient(&self) -> bool {
        matches!(self, DrawerPhase::Opening | DrawerPhase::Closing)
    }

    /// Panel is on screen in some form.
    pub fn is_shown(&self) -> bool {
        !matches!(self, DrawerPhase::Closed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawerState {
    pub phase: DrawerPhase,
    /// Live swipe offset as a fraction of panel width
    pub swipe_offset_fraction: f64,
    /// Page offset captured when the drawer started opening
    pub last_scroll_y: u32,
}

/// Something that asks the drawer to open or close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerTrigger {
    Toggle,
    OverlayClick,
    CloseButton,
    Escape,
    OutsideClick,
    NavLink(usize),
    Swipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawerTimer {
    /// Current animation phase finishes
    Settle,
    /// Move focus to the close button once the panel is in place
    FocusClose,
}

#[derive(Debug, Clone)]
pub struct Drawer {
    settings: DrawerSettings,
    markup: DrawerMarkup,
    enabled: bool,
    state: DrawerState,
    swipe: Option<SwipeTracker>,
    focus: FocusTrap,
    scroll_lock: ScrollLock,
    timers: Timers<DrawerTimer>,
    reduced_motion: bool,
    is_desktop: bool,
    panel_width_px: f64,
}

impl Drawer {
    /// Build the drawer against the host's markup.
    ///
    /// Missing elements disable the drawer; every handler then returns no
    /// effects.
    pub fn new(
        settings: DrawerSettings,
        markup: DrawerMarkup,
        viewport: &ViewportClass,
        viewport_width_px: f64,
    ) -> Self {
        let enabled = match markup.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("Navigation drawer disabled: {}", e);
                false
            }
        };
        let panel_width_px = settings.panel_width_for(viewport_width_px);
        Self {
            focus: FocusTrap::new(markup.focusable_count()),
            settings,
            markup,
            enabled,
            state: DrawerState::default(),
            swipe: None,
            scroll_lock: ScrollLock::default(),
            timers: Timers::new(),
            reduced_motion: viewport.reduced_motion,
            is_desktop: viewport.device_tier.is_desktop(),
            panel_width_px,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    pub fn phase(&self) -> DrawerPhase {
        self.state.phase
    }

    pub fn markup(&self) -> &DrawerMarkup {
        &self.markup
    }

    pub fn settings(&self) -> &DrawerSettings {
        &self.settings
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus.current()
    }

    pub fn panel_width_px(&self) -> f64 {
        self.panel_width_px
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn is_swiping(&self) -> bool {
        self.swipe.is_some()
    }

    /// Earliest pending animation or focus deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    // ─────────────────────────────────────────────────────────
    // Triggers
    // ─────────────────────────────────────────────────────────

    /// Handle an open/close request. `page_scroll_y` is captured on open.
    pub fn trigger(
        &mut self,
        trigger: DrawerTrigger,
        now: Instant,
        page_scroll_y: u32,
    ) -> Vec<DrawerEffect> {
        if !self.enabled {
            trace!("Drawer disabled, ignoring {:?}", trigger);
            return Vec::new();
        }
        if self.state.phase.is_transient() {
            trace!("Drawer {:?}, ignoring {:?}", self.state.phase, trigger);
            return Vec::new();
        }

        match (trigger, self.state.phase) {
            (DrawerTrigger::Toggle, DrawerPhase::Closed) => self.begin_open(now, page_scroll_y),
            (DrawerTrigger::OutsideClick, DrawerPhase::Open) => {
                if self.is_desktop && self.settings.close_on_outside_click {
                    self.begin_close(now)
                } else {
                    Vec::new()
                }
            }
            (_, DrawerPhase::Open) => self.begin_close(now),
            _ => Vec::new(),
        }
    }

    fn animation(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            self.settings.animation()
        }
    }

    fn begin_open(&mut self, now: Instant, page_scroll_y: u32) -> Vec<DrawerEffect> {
        debug!("Drawer opening");
        self.state.phase = DrawerPhase::Opening;
        self.state.swipe_offset_fraction = 0.0;
        let offset = self.scroll_lock.lock(page_scroll_y);
        self.state.last_scroll_y = offset;

        let animation = self.animation();
        self.timers.schedule(DrawerTimer::Settle, now, animation);
        self.timers.schedule(DrawerTimer::FocusClose, now, animation);

        vec![
            DrawerEffect::LockScroll { offset },
            DrawerEffect::Visible(true),
            DrawerEffect::AriaExpanded(true),
            DrawerEffect::PanelTranslate(0.0),
            DrawerEffect::OverlayOpacity(1.0),
        ]
    }

    fn begin_close(&mut self, now: Instant) -> Vec<DrawerEffect> {
        debug!("Drawer closing");
        self.state.phase = DrawerPhase::Closing;
        self.swipe = None;
        self.timers.cancel(DrawerTimer::FocusClose);
        self.timers.schedule(DrawerTimer::Settle, now, self.animation());
        vec![DrawerEffect::AriaExpanded(false)]
    }

    fn finish_close(&mut self) -> Vec<DrawerEffect> {
        self.state.phase = DrawerPhase::Closed;
        self.state.swipe_offset_fraction = 0.0;
        self.swipe = None;
        self.focus.release();

        let mut effects = vec![
            DrawerEffect::Visible(false),
            DrawerEffect::PanelTranslate(0.0),
            DrawerEffect::OverlayOpacity(0.0),
        ];
        if let Some(restore_to) = self.scroll_lock.unlock() {
            effects.push(DrawerEffect::UnlockScroll { restore_to });
        }
        effects.push(DrawerEffect::Focus(FocusTarget::Toggle));
        debug!("Drawer closed");
        effects
    }

    /// Advance animations. Call on every event loop tick.
    pub fn tick(&mut self, now: Instant) -> Vec<DrawerEffect> {
        let mut effects = Vec::new();
        for timer in self.timers.take_due(now) {
            match timer {
                DrawerTimer::Settle => match self.state.phase {
                    DrawerPhase::Opening => {
                        self.state.phase = DrawerPhase::Open;
                        debug!("Drawer open");
                    }
                    DrawerPhase::Closing => effects.extend(self.finish_close()),
                    _ => {}
                },
                DrawerTimer::FocusClose => {
                    if self.state.phase == DrawerPhase::Open {
                        self.focus.set(FocusTarget::CloseButton);
                        effects.push(DrawerEffect::Focus(FocusTarget::CloseButton));
                    }
                }
            }
        }
        effects
    }

    // ─────────────────────────────────────────────────────────
    // Swipe-to-dismiss
    // ─────────────────────────────────────────────────────────

    /// Press inside the panel starts tracking a swipe.
    pub fn pointer_down(&mut self, x: f64, y: f64, target: HitTarget, at: Instant) {
        if self.enabled && self.state.phase == DrawerPhase::Open && target.is_inside_drawer() {
            self.swipe = Some(SwipeTracker::start(x, y, at));
        }
    }

    /// Panel and overlay follow a rightward drag.
    pub fn pointer_drag(&mut self, x: f64, y: f64) -> Vec<DrawerEffect> {
        let Some(tracker) = self.swipe.as_mut() else {
            return Vec::new();
        };
        tracker.update(x, y);
        let fraction = tracker.offset_fraction(self.panel_width_px);
        if fraction == self.state.swipe_offset_fraction {
            return Vec::new();
        }
        self.state.swipe_offset_fraction = fraction;
        vec![
            DrawerEffect::PanelTranslate(fraction),
            DrawerEffect::OverlayOpacity(1.0 - fraction),
        ]
    }

    /// Release: dismiss, snap back, or report a tap.
    ///
    /// Returns `None` when no swipe was being tracked.
    pub fn pointer_up(
        &mut self,
        x: f64,
        y: f64,
        at: Instant,
        page_scroll_y: u32,
    ) -> Option<(SwipeDecision, Vec<DrawerEffect>)> {
        let mut tracker = self.swipe.take()?;
        tracker.update(x, y);
        let thresholds = SwipeThresholds {
            distance_px: self.settings.swipe_threshold_px,
            velocity_px_per_ms: self.settings.min_flick_velocity,
        };

        let decision = tracker.finish(at, thresholds);
        let effects = match decision {
            SwipeDecision::Dismiss => {
                debug!("Swipe dismissed drawer (dx={:.0}px)", tracker.dx());
                self.trigger(DrawerTrigger::Swipe, at, page_scroll_y)
            }
            SwipeDecision::SnapBack | SwipeDecision::Ignored | SwipeDecision::Tap => {
                if self.state.swipe_offset_fraction == 0.0 {
                    Vec::new()
                } else {
                    self.state.swipe_offset_fraction = 0.0;
                    vec![
                        DrawerEffect::PanelTranslate(0.0),
                        DrawerEffect::OverlayOpacity(1.0),
                    ]
                }
            }
        };
        Some((decision, effects))
    }

    // ─────────────────────────────────────────────────────────
    // Focus trap
    // ─────────────────────────────────────────────────────────

    /// Tab (`backwards = false`) or Shift+Tab inside the open drawer.
    pub fn cycle_focus(&mut self, backwards: bool) -> Vec<DrawerEffect> {
        if !self.enabled || self.state.phase != DrawerPhase::Open {
            return Vec::new();
        }
        let target = if backwards {
            self.focus.prev()
        } else {
            self.focus.next()
        };
        target.map(DrawerEffect::Focus).into_iter().collect()
    }

    // ─────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────

    /// Track a new viewport snapshot; crossing into desktop width force-closes.
    pub fn viewport_changed(
        &mut self,
        previous: &ViewportClass,
        next: &ViewportClass,
        viewport_width_px: f64,
    ) -> Vec<DrawerEffect> {
        self.reduced_motion = next.reduced_motion;
        self.is_desktop = next.device_tier.is_desktop();
        self.panel_width_px = self.settings.panel_width_for(viewport_width_px);

        let crossed_to_desktop =
            !previous.device_tier.is_desktop() && next.device_tier.is_desktop();
        if crossed_to_desktop && self.state.phase.is_shown() {
            info!("Viewport reached desktop width, closing drawer");
            return self.force_close();
        }
        Vec::new()
    }

    /// Close immediately, skipping the animation and the transition guard.
    pub fn force_close(&mut self) -> Vec<DrawerEffect> {
        if !self.state.phase.is_shown() {
            return Vec::new();
        }
        self.timers.clear_all();
        let mut effects = Vec::new();
        if self.state.phase != DrawerPhase::Closing {
            effects.push(DrawerEffect::AriaExpanded(false));
        }
        effects.extend(self.finish_close());
        effects
    }

    /// Cancel all pending timers and gestures.
    pub fn teardown(&mut self) {
        self.timers.clear_all();
        self.swipe = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avtorend_core::{detect, EnvironmentSignals};

    const ANIM: Duration = Duration::from_millis(350);

    fn viewport(width_px: u32, reduced_motion: bool) -> ViewportClass {
        detect(&EnvironmentSignals {
            width_px,
            height_px: 900,
            is_touch: true,
            reduced_motion,
        })
    }

    fn mobile_drawer() -> Drawer {
        Drawer::new(
            DrawerSettings::default(),
            DrawerMarkup::standard(),
            &viewport(400, false),
            400.0,
        )
    }

    fn open_drawer(drawer: &mut Drawer, t0: Instant, scroll_y: u32) -> Instant {
        drawer.trigger(DrawerTrigger::Toggle, t0, scroll_y);
        let t1 = t0 + ANIM;
        drawer.tick(t1);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
        t1
    }

    #[test]
    fn test_toggle_opens_through_opening() {
        let mut drawer = mobile_drawer();
        let t0 = Instant::now();

        let effects = drawer.trigger(DrawerTrigger::Toggle, t0, 120);

        assert_eq!(drawer.phase(), DrawerPhase::Opening);
        assert_eq!(effects[0], DrawerEffect::LockScroll { offset: 120 });
        assert!(effects.contains(&DrawerEffect::AriaExpanded(true)));
        assert_eq!(drawer.state().last_scroll_y, 120);

        assert!(drawer.tick(t0 + Duration::from_millis(349)).is_empty());
        assert_eq!(drawer.phase(), DrawerPhase::Opening);

        let effects = drawer.tick(t0 + ANIM);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
        assert_eq!(effects, vec![DrawerEffect::Focus(FocusTarget::CloseButton)]);
    }

    #[test]
    fn test_triggers_ignored_while_animating() {
        let mut drawer = mobile_drawer();
        let t0 = Instant::now();
        drawer.trigger(DrawerTrigger::Toggle, t0, 0);

        assert!(drawer.trigger(DrawerTrigger::Toggle, t0, 0).is_empty());
        assert!(drawer.trigger(DrawerTrigger::Escape, t0, 0).is_empty());
        assert_eq!(drawer.phase(), DrawerPhase::Opening);

        let t1 = t0 + ANIM;
        drawer.tick(t1);
        drawer.trigger(DrawerTrigger::Escape, t1, 0);
        assert_eq!(drawer.phase(), DrawerPhase::Closing);
        assert!(drawer.trigger(DrawerTrigger::Toggle, t1, 0).is_empty());
        assert_eq!(drawer.phase(), DrawerPhase::Closing);
    }

    #[test]
    fn test_every_close_trigger_closes_open_drawer() {
        for trigger in [
            DrawerTrigger::Toggle,
            DrawerTrigger::OverlayClick,
            DrawerTrigger::CloseButton,
            DrawerTrigger::Escape,
            DrawerTrigger::NavLink(1),
            DrawerTrigger::Swipe,
        ] {
            let mut drawer = mobile_drawer();
            let t1 = open_drawer(&mut drawer, Instant::now(), 0);
            drawer.trigger(trigger, t1, 0);
            assert_eq!(drawer.phase(), DrawerPhase::Closing, "{:?}", trigger);
        }
    }

    #[test]
    fn test_close_triggers_ignored_when_closed() {
        let mut drawer = mobile_drawer();
        let t0 = Instant::now();
        for trigger in [
            DrawerTrigger::OverlayClick,
            DrawerTrigger::CloseButton,
            DrawerTrigger::Escape,
            DrawerTrigger::OutsideClick,
            DrawerTrigger::Swipe,
        ] {
            assert!(drawer.trigger(trigger, t0, 0).is_empty());
            assert_eq!(drawer.phase(), DrawerPhase::Closed);
        }
    }

    #[test]
    fn test_outside_click_is_desktop_only() {
        let mut mobile = mobile_drawer();
        let t1 = open_drawer(&mut mobile, Instant::now(), 0);
        assert!(mobile.trigger(DrawerTrigger::OutsideClick, t1, 0).is_empty());
        assert_eq!(mobile.phase(), DrawerPhase::Open);

        let mut desktop = Drawer::new(
            DrawerSettings::default(),
            DrawerMarkup::standard(),
            &viewport(1280, false),
            1280.0,
        );
        let t1 = open_drawer(&mut desktop, Instant::now(), 0);
        desktop.trigger(DrawerTrigger::OutsideClick, t1, 0);
        assert_eq!(desktop.phase(), DrawerPhase::Closing);
    }

    #[test]
    fn test_outside_click_can_be_disabled() {
        let settings = DrawerSettings {
            close_on_outside_click: false,
            ..DrawerSettings::default()
        };
        let mut drawer = Drawer::new(
            settings,
            DrawerMarkup::standard(),
            &viewport(1280, false),
            1280.0,
        );
        let t1 = open_drawer(&mut drawer, Instant::now(), 0);
        drawer.trigger(DrawerTrigger::OutsideClick, t1, 0);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
    }

    #[test]
    fn test_close_restores_captured_scroll_and_focus() {
        let mut drawer = mobile_drawer();
        let t1 = open_drawer(&mut drawer, Instant::now(), 37);

        drawer.trigger(DrawerTrigger::CloseButton, t1, 999);
        let effects = drawer.tick(t1 + ANIM);

        assert_eq!(drawer.phase(), DrawerPhase::Closed);
        assert!(effects.contains(&DrawerEffect::UnlockScroll { restore_to: 37 }));
        assert_eq!(effects.last(), Some(&DrawerEffect::Focus(FocusTarget::Toggle)));
        assert!(!drawer.is_scroll_locked());
    }

    /// Every trigger/tick sequence of length 6 over a small alphabet keeps
    /// transitions serialized.
    #[test]
    fn test_no_transition_starts_during_animation() {
        #[derive(Clone, Copy, Debug)]
        enum Step {
            Trigger(DrawerTrigger),
            HalfTick,
            FullTick,
        }
        let alphabet = [
            Step::Trigger(DrawerTrigger::Toggle),
            Step::Trigger(DrawerTrigger::Escape),
            Step::Trigger(DrawerTrigger::OverlayClick),
            Step::HalfTick,
            Step::FullTick,
        ];

        let len = 6;
        let total = alphabet.len().pow(len);
        for mut code in 0..total {
            let mut drawer = mobile_drawer();
            let mut now = Instant::now();
            let mut steps = Vec::new();
            for _ in 0..len {
                steps.push(alphabet[code % alphabet.len()]);
                code /= alphabet.len();
            }

            for step in &steps {
                let before = drawer.phase();
                match *step {
                    Step::Trigger(t) => {
                        drawer.trigger(t, now, 0);
                    }
                    Step::HalfTick => {
                        now += ANIM / 2;
                        drawer.tick(now);
                    }
                    Step::FullTick => {
                        now += ANIM;
                        drawer.tick(now);
                    }
                }
                let after = drawer.phase();
                if before.is_transient() && after.is_transient() {
                    assert_eq!(before, after, "sequence {:?}", steps);
                }
                let legal = matches!(
                    (before, after),
                    (DrawerPhase::Closed, DrawerPhase::Closed | DrawerPhase::Opening)
                        | (DrawerPhase::Opening, DrawerPhase::Opening | DrawerPhase::Open)
                        | (DrawerPhase::Open, DrawerPhase::Open | DrawerPhase::Closing)
                        | (DrawerPhase::Closing, DrawerPhase::Closing | DrawerPhase::Closed)
                );
                assert!(legal, "{:?} -> {:?} in {:?}", before, after, steps);
            }
        }
    }

    #[test]
    fn test_swipe_below_threshold_snaps_back() {
        let mut drawer = mobile_drawer();
        let t1 = open_drawer(&mut drawer, Instant::now(), 0);
        let threshold = drawer.settings().swipe_threshold_px;

        drawer.pointer_down(100.0, 300.0, HitTarget::Panel, t1);
        drawer.pointer_drag(100.0 + threshold - 1.0, 302.0);
        assert!(drawer.state().swipe_offset_fraction > 0.0);

        let (decision, effects) = drawer
            .pointer_up(100.0 + threshold - 1.0, 302.0, t1 + Duration::from_secs(1), 0)
            .unwrap();

        assert_eq!(decision, SwipeDecision::SnapBack);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
        assert_eq!(drawer.state().swipe_offset_fraction, 0.0);
        assert!(effects.contains(&DrawerEffect::PanelTranslate(0.0)));
    }

    #[test]
    fn test_swipe_past_threshold_closes() {
        let mut drawer = mobile_drawer();
        let t1 = open_drawer(&mut drawer, Instant::now(), 0);
        let threshold = drawer.settings().swipe_threshold_px;

        drawer.pointer_down(100.0, 300.0, HitTarget::NavItem(0), t1);
        drawer.pointer_drag(100.0 + threshold + 1.0, 300.0);
        let release_at = t1 + Duration::from_secs(1);
        let (decision, _) = drawer
            .pointer_up(100.0 + threshold + 1.0, 300.0, release_at, 0)
            .unwrap();

        assert_eq!(decision, SwipeDecision::Dismiss);
        assert_eq!(drawer.phase(), DrawerPhase::Closing);
        drawer.tick(release_at + ANIM);
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
    }

    #[test]
    fn test_drag_translates_panel_and_fades_overlay() {
        let mut drawer = mobile_drawer();
        let t1 = open_drawer(&mut drawer, Instant::now(), 0);
        let width = drawer.panel_width_px();

        drawer.pointer_down(0.0, 0.0, HitTarget::Panel, t1);
        let effects = drawer.pointer_drag(width / 4.0, 0.0);

        assert_eq!(
            effects,
            vec![
                DrawerEffect::PanelTranslate(0.25),
                DrawerEffect::OverlayOpacity(0.75)
            ]
        );
    }

    #[test]
    fn test_press_outside_panel_does_not_track() {
        let mut drawer = mobile_drawer();
        let t1 = open_drawer(&mut drawer, Instant::now(), 0);
        drawer.pointer_down(0.0, 0.0, HitTarget::Overlay, t1);
        assert!(!drawer.is_swiping());
        assert!(drawer.pointer_up(300.0, 0.0, t1, 0).is_none());
    }

    #[test]
    fn test_focus_trap_wraps_while_open() {
        let mut drawer = mobile_drawer();
        open_drawer(&mut drawer, Instant::now(), 0);
        assert_eq!(drawer.focused(), Some(FocusTarget::CloseButton));

        assert_eq!(
            drawer.cycle_focus(true),
            vec![DrawerEffect::Focus(FocusTarget::NavItem(4))]
        );
        assert_eq!(
            drawer.cycle_focus(false),
            vec![DrawerEffect::Focus(FocusTarget::CloseButton)]
        );
    }

    #[test]
    fn test_resize_to_desktop_force_closes() {
        let mut drawer = mobile_drawer();
        let t1 = open_drawer(&mut drawer, Instant::now(), 12);

        let effects = drawer.viewport_changed(&viewport(400, false), &viewport(1280, false), 1280.0);

        assert_eq!(drawer.phase(), DrawerPhase::Closed);
        assert!(effects.contains(&DrawerEffect::UnlockScroll { restore_to: 12 }));
        assert!(drawer.next_deadline().is_none());
        assert!(drawer.tick(t1 + ANIM * 4).is_empty());
    }

    #[test]
    fn test_resize_within_mobile_keeps_open() {
        let mut drawer = mobile_drawer();
        open_drawer(&mut drawer, Instant::now(), 0);
        drawer.viewport_changed(&viewport(400, false), &viewport(800, false), 800.0);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
    }

    #[test]
    fn test_reduced_motion_completes_on_next_tick() {
        let mut drawer = Drawer::new(
            DrawerSettings::default(),
            DrawerMarkup::standard(),
            &viewport(400, true),
            400.0,
        );
        let t0 = Instant::now();
        drawer.trigger(DrawerTrigger::Toggle, t0, 0);
        assert_eq!(drawer.phase(), DrawerPhase::Opening);
        assert!(drawer.trigger(DrawerTrigger::Toggle, t0, 0).is_empty());

        drawer.tick(t0);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
    }

    #[test]
    fn test_missing_markup_disables() {
        let mut drawer = Drawer::new(
            DrawerSettings::default(),
            DrawerMarkup::absent(),
            &viewport(400, false),
            400.0,
        );
        assert!(!drawer.is_enabled());
        assert!(drawer.trigger(DrawerTrigger::Toggle, Instant::now(), 0).is_empty());
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
    }

    #[test]
    fn test_teardown_clears_timers() {
        let mut drawer = mobile_drawer();
        let t0 = Instant::now();
        drawer.trigger(DrawerTrigger::Toggle, t0, 0);
        assert!(drawer.next_deadline().is_some());

        drawer.teardown();
        assert!(drawer.next_deadline().is_none());
    }
}
