//! avtorend-app - Application state and orchestration for the AvtoRend storefront
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the navigation drawer state machine, the debounced viewport
//! watcher, the fleet renderer state, the locale switcher and configuration
//! loading. Network calls are dispatched as [`UpdateAction`]s and run on tokio.

pub mod actions;
pub mod config;
pub mod drawer;
pub mod fleet_view;
pub mod handler;
pub mod input;
pub mod locale;
pub mod message;
pub mod process;
pub mod state;
pub mod timers;
pub mod viewport;

// Re-export primary types
pub use drawer::{Drawer, DrawerEffect, DrawerPhase, DrawerTrigger, FocusTarget};
pub use fleet_view::{DetailState, FleetView, RenderState};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input::{HitTarget, InputKey, PointerEvent, PointerKind};
pub use locale::{LocaleSwitcher, NodeAttr, PageTexts};
pub use message::Message;
pub use process::process_message;
pub use state::AppState;
pub use viewport::{ViewportChange, ViewportWatcher};
