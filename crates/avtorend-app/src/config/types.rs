//! Configuration types for `.avtorend/config.toml`

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub drawer: DrawerSettings,

    #[serde(default)]
    pub viewport: ViewportSettings,

    #[serde(default)]
    pub locale: LocaleSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Root URL serving `/api/*`, `/health` and `/locales/*`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Page size for vehicle listings (0 = let the backend decide)
    #[serde(default)]
    pub page_size: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            page_size: 0,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Navigation drawer behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DrawerSettings {
    /// Render the drawer markup at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Opening/closing animation length in milliseconds
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,

    /// Rightward distance that dismisses on release, in px
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,

    /// Rightward velocity that dismisses on release, in px/ms
    #[serde(default = "default_min_flick_velocity")]
    pub min_flick_velocity: f64,

    /// Close when clicking outside the panel (desktop widths only)
    #[serde(default = "default_true")]
    pub close_on_outside_click: bool,

    /// Widest the panel gets, in px
    #[serde(default = "default_max_panel_width_px")]
    pub max_panel_width_px: f64,
}

impl Default for DrawerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            animation_ms: default_animation_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            min_flick_velocity: default_min_flick_velocity(),
            close_on_outside_click: true,
            max_panel_width_px: default_max_panel_width_px(),
        }
    }
}

impl DrawerSettings {
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// Panel width for a viewport `viewport_width_px` wide.
    pub fn panel_width_for(&self, viewport_width_px: f64) -> f64 {
        (viewport_width_px * 0.85).min(self.max_panel_width_px).max(0.0)
    }
}

fn default_animation_ms() -> u64 {
    350
}

fn default_swipe_threshold_px() -> f64 {
    100.0
}

fn default_min_flick_velocity() -> f64 {
    0.5
}

fn default_max_panel_width_px() -> f64 {
    320.0
}

/// Viewport detection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ViewportSettings {
    /// Pixels per terminal column
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,

    /// Pixels per terminal row
    #[serde(default = "default_cell_height_px")]
    pub cell_height_px: u32,

    /// Quiet period before a resize is republished
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,

    /// Force touch capability on or off (unset = environment)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch: Option<bool>,

    /// Force reduced motion on or off (unset = environment)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            cell_width_px: default_cell_width_px(),
            cell_height_px: default_cell_height_px(),
            resize_debounce_ms: default_resize_debounce_ms(),
            touch: None,
            reduced_motion: None,
        }
    }
}

impl ViewportSettings {
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Convert terminal cells to page pixels.
    pub fn cells_to_px(&self, cols: u16, rows: u16) -> (u32, u32) {
        (
            u32::from(cols) * self.cell_width_px.max(1),
            u32::from(rows) * self.cell_height_px.max(1),
        )
    }

    /// Pixel coordinates of the centre of cell (`col`, `row`).
    pub fn cell_center_px(&self, col: u16, row: u16) -> (f64, f64) {
        let w = f64::from(self.cell_width_px.max(1));
        let h = f64::from(self.cell_height_px.max(1));
        (
            f64::from(col) * w + w / 2.0,
            f64::from(row) * h + h / 2.0,
        )
    }
}

fn default_cell_width_px() -> u32 {
    8
}

fn default_cell_height_px() -> u32 {
    16
}

fn default_resize_debounce_ms() -> u64 {
    250
}

/// Localization
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocaleSettings {
    /// Language used when no preference is stored
    #[serde(default = "default_language")]
    pub default: String,

    /// Codes offered by the language switcher
    #[serde(default = "default_supported")]
    pub supported: Vec<String>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            default: default_language(),
            supported: default_supported(),
        }
    }
}

fn default_language() -> String {
    "ru".to_string()
}

fn default_supported() -> Vec<String> {
    vec!["ru".to_string(), "en".to_string()]
}

/// Terminal UI
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event loop tick in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Capture the mouse for clicks, drags and wheel
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            mouse: true,
        }
    }
}

impl UiSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

fn default_tick_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

/// User-specific preferences (stored in settings.local.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserPreferences {
    /// Last chosen language code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}
