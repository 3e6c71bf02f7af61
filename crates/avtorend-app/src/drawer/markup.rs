//! Elements the drawer needs from the host view

use avtorend_core::prelude::*;

pub const TOGGLE_ID: &str = "mobileMenuToggle";
pub const PANEL_ID: &str = "mobileNav";
pub const OVERLAY_ID: &str = "mobileMenuOverlay";
pub const CLOSE_BUTTON_ID: &str = "mobileCloseBtn";

/// A navigation link inside the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Anchor the link scrolls to, e.g. `fleet`
    pub anchor: String,
    /// Translation key for the link text
    pub label_key: String,
}

impl NavItem {
    pub fn new(anchor: impl Into<String>, label_key: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            label_key: label_key.into(),
        }
    }
}

/// Element ids present in the host view. `None` means the element is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawerMarkup {
    pub toggle: Option<String>,
    pub panel: Option<String>,
    pub overlay: Option<String>,
    pub close_button: Option<String>,
    pub nav_items: Vec<NavItem>,
}

impl DrawerMarkup {
    /// The storefront's standard header and drawer.
    pub fn standard() -> Self {
        Self {
            toggle: Some(TOGGLE_ID.to_string()),
            panel: Some(PANEL_ID.to_string()),
            overlay: Some(OVERLAY_ID.to_string()),
            close_button: Some(CLOSE_BUTTON_ID.to_string()),
            nav_items: vec![
                NavItem::new("home", "nav.home"),
                NavItem::new("fleet", "nav.fleet"),
                NavItem::new("conditions", "nav.conditions"),
                NavItem::new("about", "nav.about"),
                NavItem::new("contacts", "nav.contacts"),
            ],
        }
    }

    /// Markup with no drawer elements at all.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Check the required elements are present.
    pub fn validate(&self) -> Result<()> {
        let required = [
            (TOGGLE_ID, &self.toggle),
            (PANEL_ID, &self.panel),
            (OVERLAY_ID, &self.overlay),
            (CLOSE_BUTTON_ID, &self.close_button),
        ];
        for (id, element) in required {
            if element.is_none() {
                return Err(Error::missing_element(id));
            }
        }
        Ok(())
    }

    /// Number of focusable elements inside the panel (close button first).
    pub fn focusable_count(&self) -> usize {
        1 + self.nav_items.len()
    }
}
