//! Message types for the application (TEA pattern)

use std::time::Instant;

use avtorend_api::{FetchOutcome, HealthStatus};
use avtorend_core::{CategoryFilter, CategoryRecord, LocaleDictionary, VehicleRecord};

use crate::drawer::DrawerTrigger;
use crate::input::{InputKey, PointerEvent};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Mouse/touch event, already hit-tested
    Pointer(PointerEvent),
    /// Terminal resized (cells)
    Resize { cols: u16, rows: u16 },
    /// Tick event for timers and animations
    Tick(Instant),
    /// Kick off initial data loading
    Startup,
    /// Request application quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Drawer
    // ─────────────────────────────────────────────────────────
    Drawer(DrawerTrigger),
    /// Tab / Shift+Tab inside the open drawer
    DrawerFocus { backwards: bool },

    // ─────────────────────────────────────────────────────────
    // Page scroll
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,

    // ─────────────────────────────────────────────────────────
    // Fleet
    // ─────────────────────────────────────────────────────────
    /// Probe backend health, then load categories
    CheckBackend,
    BackendHealth(Option<HealthStatus>),
    LoadCategories,
    CategoriesLoaded(FetchOutcome<CategoryRecord>),
    /// Re-issue the listing for the active filter
    RefreshVehicles,
    SelectCategory(CategoryFilter),
    VehiclesLoaded {
        seq: u64,
        outcome: FetchOutcome<VehicleRecord>,
    },
    NextCard,
    PrevCard,
    OpenDetail(u64),
    DetailLoaded {
        id: u64,
        vehicle: Option<VehicleRecord>,
    },
    CloseDetail,

    // ─────────────────────────────────────────────────────────
    // Localization
    // ─────────────────────────────────────────────────────────
    SetLanguage(String),
    /// Switch to the next supported language
    CycleLanguage,
    LocaleLoaded {
        seq: u64,
        dictionary: LocaleDictionary,
    },
    LocaleFailed {
        seq: u64,
        error: String,
    },
}
