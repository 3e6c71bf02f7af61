//! Test utilities for the fleet client
//!
//! [`MockBackend`] is an in-memory [`FleetBackend`] with scriptable failures
//! and per-call latency, used to exercise fallback and stale-response
//! handling without a network.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use avtorend_core::prelude::*;
use serde_json::{json, Value};

use crate::backend::{FleetBackend, HealthStatus, RawListing};
use crate::query::VehicleQuery;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Categories,
    Vehicles(VehicleQuery),
    Vehicle(u64),
    Locale(String),
    Health,
}

/// Scriptable in-memory backend.
///
/// `None` payloads make the corresponding call fail with a network error.
#[derive(Debug)]
pub struct MockBackend {
    categories: Option<Value>,
    vehicles: Option<Value>,
    locales: HashMap<String, Value>,
    healthy: bool,
    scope_on_server: bool,
    vehicle_delays: Mutex<VecDeque<Duration>>,
    calls: Mutex<Vec<MockCall>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Empty fleet, no categories, no locales, healthy.
    pub fn new() -> Self {
        Self {
            categories: Some(json!([])),
            vehicles: Some(json!([])),
            locales: HashMap::new(),
            healthy: true,
            scope_on_server: false,
            vehicle_delays: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_categories(mut self, payload: Value) -> Self {
        self.categories = Some(payload);
        self
    }

    pub fn with_vehicles(mut self, vehicles: Vec<Value>) -> Self {
        self.vehicles = Some(Value::Array(vehicles));
        self
    }

    /// Serve an arbitrary (possibly non-list) vehicle payload.
    pub fn with_vehicle_payload(mut self, payload: Value) -> Self {
        self.vehicles = Some(payload);
        self
    }

    pub fn with_locale(mut self, code: &str, dictionary: Value) -> Self {
        self.locales.insert(code.to_string(), dictionary);
        self
    }

    pub fn failing_categories(mut self) -> Self {
        self.categories = None;
        self
    }

    pub fn failing_vehicles(mut self) -> Self {
        self.vehicles = None;
        self
    }

    pub fn failing_health(mut self) -> Self {
        self.healthy = false;
        self
    }

    /// Apply `category_id` before responding, like the real backend does.
    pub fn scoped_on_server(mut self) -> Self {
        self.scope_on_server = true;
        self
    }

    /// Latencies for successive `get_vehicles` calls, consumed in order.
    pub fn with_vehicle_delays(self, delays: impl IntoIterator<Item = Duration>) -> Self {
        if let Ok(mut queue) = self.vehicle_delays.lock() {
            queue.extend(delays);
        }
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: MockCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn next_vehicle_delay(&self) -> Option<Duration> {
        self.vehicle_delays.lock().ok().and_then(|mut q| q.pop_front())
    }
}

fn mock_failure(path: &str) -> Error {
    Error::network(format!("mock://{}", path), "mock backend failure")
}

impl FleetBackend for MockBackend {
    async fn get_categories(&self) -> Result<RawListing> {
        self.record(MockCall::Categories);
        self.categories
            .clone()
            .map(RawListing::new)
            .ok_or_else(|| mock_failure("api/categories"))
    }

    async fn get_vehicles(&self, query: &VehicleQuery) -> Result<RawListing> {
        self.record(MockCall::Vehicles(query.clone()));
        if let Some(delay) = self.next_vehicle_delay() {
            tokio::time::sleep(delay).await;
        }

        let mut payload = self.vehicles.clone().ok_or_else(|| mock_failure("api/cars"))?;
        if let (true, Some(category_id), Some(entries)) = (
            self.scope_on_server,
            query.category_id,
            payload.as_array_mut(),
        ) {
            entries.retain(|v| v.get("category_id").and_then(Value::as_u64) == Some(category_id));
        }

        let total_count = payload.as_array().map(|a| a.len() as u64);
        Ok(RawListing {
            payload,
            total_count,
        })
    }

    async fn get_vehicle(&self, id: u64) -> Result<Value> {
        self.record(MockCall::Vehicle(id));
        let path = format!("api/cars/{}", id);
        let vehicles = self.vehicles.as_ref().ok_or_else(|| mock_failure(&path))?;
        vehicles
            .as_array()
            .and_then(|entries| {
                entries
                    .iter()
                    .find(|v| v.get("id").and_then(Value::as_u64) == Some(id))
            })
            .cloned()
            .ok_or_else(|| Error::http_status(404, format!("mock://{}", path)))
    }

    async fn get_locale(&self, code: &str) -> Result<Value> {
        self.record(MockCall::Locale(code.to_string()));
        let path = format!("locales/{}.json", code);
        self.locales
            .get(code)
            .cloned()
            .ok_or_else(|| Error::http_status(404, format!("mock://{}", path)))
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.record(MockCall::Health);
        if !self.healthy {
            return Err(mock_failure("health"));
        }
        Ok(HealthStatus {
            status: "healthy".to_string(),
            service: Some("avtorend-api".to_string()),
            environment: Some("test".to_string()),
        })
    }
}

/// A vehicle record as the backend serializes it.
pub fn vehicle_json(id: u64, category_id: u64) -> Value {
    json!({
        "id": id,
        "brand": "Toyota",
        "model": format!("Camry {}", id),
        "year": 2022,
        "daily_price": 3500.0,
        "seats": 5,
        "transmission": "AUTOMATIC",
        "fuel_type": "бензин",
        "category_id": category_id,
        "images": [format!("https://cdn.example.com/cars/{}.jpg", id)],
        "status": "AVAILABLE"
    })
}

/// A category record as the backend serializes it.
pub fn category_json(id: u64, name: &str, slug: &str) -> Value {
    json!({ "id": id, "name": name, "slug": slug })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let backend = MockBackend::new();
        let _ = backend.get_categories().await;
        let _ = backend.get_vehicle(3).await;
        assert_eq!(backend.calls(), vec![MockCall::Categories, MockCall::Vehicle(3)]);
    }

    #[tokio::test]
    async fn test_mock_scopes_on_server_when_asked() {
        let backend = MockBackend::new()
            .with_vehicles(vec![vehicle_json(1, 5), vehicle_json(2, 3)])
            .scoped_on_server();
        let query = VehicleQuery {
            category_id: Some(5),
            ..VehicleQuery::default()
        };

        let listing = backend.get_vehicles(&query).await.unwrap();
        assert_eq!(listing.total_count, Some(1));
    }

    #[tokio::test]
    async fn test_missing_vehicle_is_404() {
        let backend = MockBackend::new();
        let err = backend.get_vehicle(1).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test(start_paused = true)]
    async fn test_vehicle_delays_are_consumed_in_order() {
        let backend = MockBackend::new().with_vehicle_delays([Duration::from_secs(5)]);
        let start = tokio::time::Instant::now();
        backend.get_vehicles(&VehicleQuery::new()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(5));

        let start = tokio::time::Instant::now();
        backend.get_vehicles(&VehicleQuery::new()).await.unwrap();
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
