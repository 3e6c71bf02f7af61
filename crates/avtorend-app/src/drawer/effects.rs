//! Side effects the drawer asks its host to apply

/// Element that should receive focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Toggle,
    CloseButton,
    NavItem(usize),
}

impl FocusTarget {
    /// Position in the panel's focus order (close button first).
    pub fn trap_index(&self) -> Option<usize> {
        match self {
            FocusTarget::Toggle => None,
            FocusTarget::CloseButton => Some(0),
            FocusTarget::NavItem(i) => Some(i + 1),
        }
    }

    pub fn from_trap_index(index: usize) -> Self {
        match index {
            0 => FocusTarget::CloseButton,
            i => FocusTarget::NavItem(i - 1),
        }
    }
}

/// Effects are emitted in the order they must be applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerEffect {
    /// Freeze the page at `offset`
    LockScroll { offset: u32 },
    /// Release the page and scroll back to `restore_to`
    UnlockScroll { restore_to: u32 },
    /// `aria-expanded` on the toggle
    AriaExpanded(bool),
    Focus(FocusTarget),
    /// Panel shifted right by this fraction of its width (0 = fully shown)
    PanelTranslate(f64),
    /// Overlay opacity, 0..=1
    OverlayOpacity(f64),
    /// Panel and overlay visibility
    Visible(bool),
}
