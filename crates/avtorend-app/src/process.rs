//! Message processing
//!
//! Runs a message through the TEA update loop, following up chained messages
//! and handing each action to [`handle_action`].

use avtorend_api::{FleetBackend, FleetService};
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &FleetService<B>,
) where
    B: FleetBackend + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, service, msg_tx.clone());
        }

        msg = result.message;
    }
}
