//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every network call runs in its own tokio task and reports back to the TEA
//! loop as a [`Message`]. Nothing here touches [`crate::AppState`].

use avtorend_api::{FleetBackend, FleetService};
use avtorend_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<B>(
    action: UpdateAction,
    service: &FleetService<B>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    B: FleetBackend + Send + Sync + 'static,
{
    let service = service.clone();
    match action {
        UpdateAction::CheckHealth => tokio::spawn(async move {
            let health = service.check_health().await;
            send(&msg_tx, Message::BackendHealth(health)).await;
        }),

        UpdateAction::FetchCategories => tokio::spawn(async move {
            let outcome = service.fetch_categories().await;
            send(&msg_tx, Message::CategoriesLoaded(outcome)).await;
        }),

        UpdateAction::FetchVehicles { seq, query } => tokio::spawn(async move {
            let outcome = service.fetch_vehicles(&query).await;
            send(&msg_tx, Message::VehiclesLoaded { seq, outcome }).await;
        }),

        UpdateAction::FetchVehicle { id } => tokio::spawn(async move {
            let vehicle = service.fetch_vehicle(id).await;
            send(&msg_tx, Message::DetailLoaded { id, vehicle }).await;
        }),

        UpdateAction::FetchLocale { seq, code } => tokio::spawn(async move {
            let message = match service.fetch_locale(&code).await {
                Ok(dictionary) => Message::LocaleLoaded { seq, dictionary },
                Err(e) => Message::LocaleFailed {
                    seq,
                    error: e.to_string(),
                },
            };
            send(&msg_tx, message).await;
        }),
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        debug!("Message channel closed, dropping result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avtorend_api::test_utils::{vehicle_json, MockBackend};
    use avtorend_api::VehicleQuery;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_vehicles_reports_seq() {
        let service = FleetService::new(MockBackend::new().with_vehicles(vec![vehicle_json(1, 2)]));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::FetchVehicles {
                seq: 7,
                query: VehicleQuery::new(),
            },
            &service,
            tx,
        )
        .await
        .unwrap();

        match rx.recv().await {
            Some(Message::VehiclesLoaded { seq, outcome }) => {
                assert_eq!(seq, 7);
                assert_eq!(outcome.items.len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_locale_reports_seq() {
        let service =
            FleetService::new(MockBackend::new().with_locale("en", json!({"nav": {"home": "Home"}})));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::FetchLocale {
                seq: 3,
                code: "en".to_string(),
            },
            &service,
            tx,
        )
        .await
        .unwrap();

        assert!(matches!(rx.recv().await, Some(Message::LocaleLoaded { seq: 3, .. })));
    }

    #[tokio::test]
    async fn test_locale_failure_is_reported() {
        let service = FleetService::new(MockBackend::new());
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::FetchLocale {
                seq: 1,
                code: "en".to_string(),
            },
            &service,
            tx,
        )
        .await
        .unwrap();

        assert!(matches!(rx.recv().await, Some(Message::LocaleFailed { seq: 1, .. })));
    }

    #[tokio::test]
    async fn test_closed_channel_does_not_panic() {
        let service = FleetService::new(MockBackend::new().failing_categories());
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        handle_action(UpdateAction::FetchCategories, &service, tx)
            .await
            .unwrap();
    }
}
