//! avtorend-tui - Terminal UI for the AvtoRend storefront
//!
//! This crate provides the ratatui-based interface: the header with the menu
//! toggle, the scrolling hero and fleet grid, the sliding navigation drawer
//! and the vehicle detail modal. Mouse events are hit-tested here and handed
//! to avtorend-app as pointer messages.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run_with_project;
