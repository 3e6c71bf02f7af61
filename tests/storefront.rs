//! End-to-end tests: messages through the update loop against a mock backend

use std::path::Path;
use std::time::{Duration, Instant};

use avtorend::api::test_utils::{category_json, vehicle_json, MockBackend, MockCall};
use avtorend::api::FleetService;
use avtorend::app::config::{load_user_preferences, Settings};
use avtorend::app::state::{AppState, BackendStatus};
use avtorend::app::{process_message, DrawerPhase, DrawerTrigger, Message, RenderState};
use avtorend::core::{CapabilityHints, CategoryFilter};
use avtorend::{effective_settings, starting_language, LaunchOptions};
use serde_json::json;
use tempfile::tempdir;
use tokio::sync::mpsc;

struct Harness {
    state: AppState,
    service: FleetService<MockBackend>,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
}

impl Harness {
    fn new(dir: &Path, backend: MockBackend) -> Self {
        let (tx, rx) = mpsc::channel(32);
        let state = AppState::new(
            Settings::default(),
            dir.to_path_buf(),
            "ru".to_string(),
            CapabilityHints::default(),
            50,
            40,
        );
        Self {
            state,
            service: FleetService::new(backend),
            tx,
            rx,
        }
    }

    fn send(&mut self, msg: Message) {
        process_message(&mut self.state, msg, &self.tx, &self.service);
    }

    /// Feed `count` background results back into the loop.
    async fn settle(&mut self, count: usize) {
        for _ in 0..count {
            let msg = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
                .await
                .expect("timed out waiting for a background result")
                .expect("channel closed");
            self.send(msg);
        }
    }
}

#[tokio::test]
async fn test_category_filter_shows_only_that_category() {
    let dir = tempdir().unwrap();
    let backend = MockBackend::new().with_vehicles(vec![
        vehicle_json(1, 5),
        vehicle_json(2, 3),
        vehicle_json(3, 5),
    ]);
    let mut h = Harness::new(dir.path(), backend);

    h.send(Message::SelectCategory(CategoryFilter::Category(5)));
    h.settle(1).await;

    let ids: Vec<u64> = h.state.fleet.vehicles().iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 3]);
    match &h.service.backend().calls()[0] {
        MockCall::Vehicles(query) => assert_eq!(query.category_id, Some(5)),
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_backend_falls_back() {
    let dir = tempdir().unwrap();
    let backend = MockBackend::new()
        .failing_categories()
        .failing_vehicles()
        .failing_health();
    let mut h = Harness::new(dir.path(), backend);

    h.send(Message::CheckBackend);
    // health, categories, vehicles
    h.settle(3).await;

    let names: Vec<&str> = h
        .state
        .fleet
        .categories()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Эконом", "Комфорт", "SUV"]);
    assert!(h.state.fleet.categories_are_fallback());
    assert!(h.state.fleet.vehicles().is_empty());
    assert!(matches!(
        h.state.fleet.render_state(),
        RenderState::Error { .. }
    ));
    assert_eq!(h.state.backend, BackendStatus::Unreachable);
}

#[tokio::test]
async fn test_live_categories_replace_tabs() {
    let dir = tempdir().unwrap();
    let backend = MockBackend::new().with_categories(json!([
        category_json(7, "Премиум", "premium"),
        category_json(8, "Минивэн", "minivan"),
    ]));
    let mut h = Harness::new(dir.path(), backend);

    h.send(Message::LoadCategories);
    h.settle(2).await;

    assert_eq!(h.state.fleet.tab_count(), 3);
    assert_eq!(h.state.fleet.filter_for_tab(2), Some(CategoryFilter::Category(8)));
    assert_eq!(*h.state.fleet.render_state(), RenderState::Empty);
}

#[tokio::test]
async fn test_slow_first_response_does_not_overwrite_second() {
    let dir = tempdir().unwrap();
    let backend = MockBackend::new()
        .with_vehicles(vec![vehicle_json(1, 1), vehicle_json(2, 2), vehicle_json(3, 2)])
        .with_vehicle_delays([Duration::from_millis(250), Duration::from_millis(5)]);
    let mut h = Harness::new(dir.path(), backend);

    h.send(Message::SelectCategory(CategoryFilter::Category(1)));
    h.send(Message::SelectCategory(CategoryFilter::Category(2)));

    h.settle(1).await;
    assert_eq!(h.state.fleet.vehicles().len(), 2);
    assert!(!h.state.fleet.is_busy());

    // The stale category-1 listing arrives last and is dropped
    h.settle(1).await;
    assert_eq!(h.state.fleet.filter(), CategoryFilter::Category(2));
    let ids: Vec<u64> = h.state.fleet.vehicles().iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn test_language_switch_keeps_untranslated_text_and_persists() {
    let dir = tempdir().unwrap();
    let backend = MockBackend::new().with_locale(
        "en",
        json!({ "nav": { "fleet": "Fleet" }, "hero": { "title": "Car rental" } }),
    );
    let mut h = Harness::new(dir.path(), backend);

    h.send(Message::SetLanguage("en".to_string()));
    h.settle(1).await;

    assert_eq!(h.state.locale.current(), "en");
    assert_eq!(h.state.texts.text("nav.fleet"), "Fleet");
    assert_eq!(h.state.texts.text("hero.title"), "Car rental");
    assert_eq!(h.state.texts.text("nav.home"), "Главная");

    let prefs = load_user_preferences(dir.path()).unwrap();
    assert_eq!(prefs.language.as_deref(), Some("en"));
}

#[tokio::test]
async fn test_missing_dictionary_keeps_current_language() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path(), MockBackend::new());

    h.send(Message::SetLanguage("en".to_string()));
    h.settle(1).await;

    assert_eq!(h.state.locale.current(), "ru");
    assert_eq!(h.state.texts.text("nav.home"), "Главная");
}

#[tokio::test]
async fn test_drawer_round_trip_restores_scroll() {
    let dir = tempdir().unwrap();
    let vehicles = (1..=10).map(|id| vehicle_json(id, 1)).collect();
    let mut h = Harness::new(dir.path(), MockBackend::new().with_vehicles(vehicles));

    h.send(Message::RefreshVehicles);
    h.settle(1).await;
    h.state.scroll_to(17);

    h.send(Message::Drawer(DrawerTrigger::Toggle));
    h.send(Message::Tick(Instant::now() + Duration::from_secs(1)));
    assert_eq!(h.state.drawer.phase(), DrawerPhase::Open);

    h.send(Message::ScrollDown);
    h.send(Message::Drawer(DrawerTrigger::OverlayClick));
    h.send(Message::Tick(Instant::now() + Duration::from_secs(2)));

    assert_eq!(h.state.drawer.phase(), DrawerPhase::Closed);
    assert_eq!(h.state.page.scroll_y, 17);
}

#[test]
fn test_cli_overrides() {
    let dir = tempdir().unwrap();
    let options = LaunchOptions {
        api_url: Some("http://api.example.com".to_string()),
        language: Some("en".to_string()),
    };

    let settings = effective_settings(dir.path(), &options);
    assert_eq!(settings.api.base_url, "http://api.example.com");
    assert_eq!(starting_language(dir.path(), &settings, &options), "en");

    let unsupported = LaunchOptions {
        language: Some("de".to_string()),
        ..LaunchOptions::default()
    };
    assert_eq!(starting_language(dir.path(), &settings, &unsupported), "ru");
}
