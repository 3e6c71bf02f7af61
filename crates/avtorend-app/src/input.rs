//! Abstract input events, independent of terminal library.
//!
//! Keys and pointer events are converted from crossterm at the TUI boundary.
//! Pointer coordinates are in pixels (cells multiplied by the configured cell
//! size) so swipe thresholds and velocities keep their usual units.

use std::time::Instant;

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, etc.)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

/// What a pointer event landed on, resolved by the view's hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The menu toggle button in the header
    Toggle,
    /// Close button inside the drawer panel
    CloseButton,
    /// Dimmed overlay behind the drawer panel
    Overlay,
    /// Drawer panel background
    Panel,
    /// Navigation entry inside the drawer
    NavItem(usize),
    /// Category tab by index (0 is "all")
    CategoryTab(usize),
    /// Vehicle card by index into the rendered list
    Card(usize),
    /// Language button by index into the supported codes
    Language(usize),
    /// Anything else on the page
    Page,
}

impl HitTarget {
    /// `true` for targets that belong to the drawer panel.
    pub fn is_inside_drawer(&self) -> bool {
        matches!(
            self,
            HitTarget::Panel | HitTarget::CloseButton | HitTarget::NavItem(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed (touchstart)
    Down,
    /// Moved with button held (touchmove)
    Drag,
    /// Button released (touchend)
    Up,
    /// Wheel scrolled up
    WheelUp,
    /// Wheel scrolled down
    WheelDown,
}

/// A mouse or touch event in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
    pub target: HitTarget,
    pub at: Instant,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f64, y: f64, target: HitTarget, at: Instant) -> Self {
        Self {
            kind,
            x,
            y,
            target,
            at,
        }
    }
}
