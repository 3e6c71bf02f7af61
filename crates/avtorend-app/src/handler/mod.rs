//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers
//! - `pointer`: Mouse/touch handlers (clicks, swipe-to-dismiss, wheel)

pub(crate) mod keys;
pub(crate) mod pointer;
pub(crate) mod update;


use avtorend_api::VehicleQuery;

use crate::message::Message;

pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Probe `GET /health`
    CheckHealth,

    /// Load categories (falls back to the bundled set)
    FetchCategories,

    /// Load a vehicle listing; the response carries `seq` back
    FetchVehicles { seq: u64, query: VehicleQuery },

    /// Load one vehicle for the detail panel
    FetchVehicle { id: u64 },

    /// Load a locale dictionary
    FetchLocale { seq: u64, code: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
