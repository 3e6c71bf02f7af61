//! Application state (Model in TEA pattern)

use std::path::PathBuf;
use std::time::Instant;

use avtorend_api::HealthStatus;
use avtorend_core::prelude::*;
use avtorend_core::{CapabilityHints, DeviceTier};

use crate::config::Settings;
use crate::drawer::{Drawer, DrawerEffect, DrawerMarkup, FocusTarget};
use crate::fleet_view::FleetView;
use crate::locale::{LocaleSwitcher, PageTexts};
use crate::viewport::ViewportWatcher;

/// Rows taken by the header bar.
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the footer hint line.
pub const FOOTER_HEIGHT: u16 = 1;
/// Rows of hero text and category tabs above the grid.
pub const HERO_HEIGHT: u16 = 6;
/// Rows per vehicle card.
pub const CARD_HEIGHT: u16 = 7;

/// Cards per grid row for a device tier.
pub fn grid_columns(tier: DeviceTier) -> usize {
    match tier {
        DeviceTier::Mobile => 1,
        DeviceTier::Tablet => 2,
        DeviceTier::Desktop => 3,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Page scroll position in rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub scroll_y: u32,
    pub scroll_locked: bool,
}

/// Presentation of the drawer, driven by [`DrawerEffect`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerView {
    pub visible: bool,
    pub aria_expanded: bool,
    /// Fraction of the panel width pushed off-screen
    pub panel_translate: f64,
    pub overlay_opacity: f64,
}

impl Default for DrawerView {
    fn default() -> Self {
        Self {
            visible: false,
            aria_expanded: false,
            panel_translate: 0.0,
            overlay_opacity: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Healthy,
    Degraded(String),
    Unreachable,
}

impl From<Option<HealthStatus>> for BackendStatus {
    fn from(health: Option<HealthStatus>) -> Self {
        match health {
            Some(h) if h.is_healthy() => BackendStatus::Healthy,
            Some(h) => BackendStatus::Degraded(h.status),
            None => BackendStatus::Unreachable,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Settings from .avtorend/config.toml
    pub settings: Settings,

    /// Project directory holding `.avtorend/`
    pub project_path: PathBuf,

    pub viewport: ViewportWatcher,
    pub drawer: Drawer,
    pub drawer_view: DrawerView,

    /// Focused control (toggle or an element inside the drawer)
    pub focus: Option<FocusTarget>,

    pub page: PageState,
    pub fleet: FleetView,
    pub texts: PageTexts,
    pub locale: LocaleSwitcher,
    pub backend: BackendStatus,

    /// Nav link chosen in the drawer, scrolled to once the drawer has closed
    pub pending_anchor: Option<String>,
}

impl AppState {
    /// Build state for a `cols` x `rows` terminal.
    pub fn new(
        settings: Settings,
        project_path: PathBuf,
        language: String,
        hints: CapabilityHints,
        cols: u16,
        rows: u16,
    ) -> Self {
        let viewport = ViewportWatcher::new(settings.viewport.clone(), hints, cols, rows);
        let markup = if settings.drawer.enabled {
            DrawerMarkup::standard()
        } else {
            DrawerMarkup::absent()
        };
        let drawer = Drawer::new(
            settings.drawer.clone(),
            markup,
            viewport.current(),
            viewport.width_px(),
        );
        let locale = LocaleSwitcher::new(settings.locale.supported.clone(), language);
        let fleet = FleetView::new(settings.api.page_size);

        Self {
            phase: AppPhase::Running,
            project_path,
            viewport,
            drawer,
            drawer_view: DrawerView::default(),
            focus: None,
            page: PageState::default(),
            fleet,
            texts: PageTexts::builtin(),
            locale,
            backend: BackendStatus::Unknown,
            pending_anchor: None,
            settings,
        }
    }

    pub fn is_quitting(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Apply drawer effects in order.
    pub fn apply_drawer_effects(&mut self, effects: Vec<DrawerEffect>) {
        for effect in effects {
            match effect {
                DrawerEffect::LockScroll { offset } => {
                    self.page.scroll_locked = true;
                    self.page.scroll_y = offset;
                }
                DrawerEffect::UnlockScroll { restore_to } => {
                    self.page.scroll_locked = false;
                    self.page.scroll_y = restore_to;
                }
                DrawerEffect::AriaExpanded(expanded) => self.drawer_view.aria_expanded = expanded,
                DrawerEffect::Focus(target) => self.focus = Some(target),
                DrawerEffect::PanelTranslate(fraction) => {
                    self.drawer_view.panel_translate = fraction
                }
                DrawerEffect::OverlayOpacity(opacity) => {
                    self.drawer_view.overlay_opacity = opacity
                }
                DrawerEffect::Visible(visible) => self.drawer_view.visible = visible,
            }
        }
    }

    /// Rows available to the page between header and footer.
    pub fn visible_rows(&self) -> u32 {
        let rows = self.viewport.signals().height_px / self.settings.viewport.cell_height_px.max(1);
        rows.saturating_sub(u32::from(HEADER_HEIGHT + FOOTER_HEIGHT))
    }

    /// Total page height in rows.
    pub fn content_rows(&self) -> u32 {
        let columns = grid_columns(self.viewport.current().device_tier);
        let cards = self.fleet.vehicles().len().max(1);
        let grid_rows = cards.div_ceil(columns) as u32;
        u32::from(HERO_HEIGHT) + grid_rows * u32::from(CARD_HEIGHT)
    }

    pub fn max_scroll(&self) -> u32 {
        self.content_rows().saturating_sub(self.visible_rows())
    }

    /// Scroll the page by `delta` rows. Ignored while the drawer holds the lock.
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        if self.page.scroll_locked {
            trace!("Page scroll locked, ignoring {}", delta);
            return false;
        }
        let target = (i64::from(self.page.scroll_y) + delta).clamp(0, i64::from(self.max_scroll()));
        let target = u32::try_from(target).unwrap_or(0);
        let changed = target != self.page.scroll_y;
        self.page.scroll_y = target;
        changed
    }

    pub fn scroll_to(&mut self, row: u32) -> bool {
        if self.page.scroll_locked {
            return false;
        }
        self.page.scroll_y = row.min(self.max_scroll());
        true
    }

    /// Page row a nav anchor scrolls to.
    pub fn anchor_row(&self, anchor: &str) -> u32 {
        match anchor {
            "home" => 0,
            "fleet" => u32::from(HERO_HEIGHT) - 2,
            _ => self.max_scroll(),
        }
    }

    /// Earliest deadline the event loop must wake for.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.drawer.next_deadline(), self.viewport.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancel every timer; called once when the event loop exits.
    pub fn teardown(&mut self) {
        self.drawer.teardown();
        self.viewport.teardown();
        debug!("Timers cleared");
    }
}
