//! Backend transport seam
//!
//! [`FleetBackend`] returns raw JSON so payload validation and fallback
//! policy live in one place ([`crate::FleetService`]) regardless of
//! transport. [`crate::HttpBackend`] talks to the real REST API; tests use
//! the in-memory `MockBackend`.

use avtorend_core::prelude::*;
use serde_json::Value;

use crate::query::VehicleQuery;

/// A list endpoint response before decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RawListing {
    /// Response body, expected to be a JSON array
    pub payload: Value,
    /// Value of the `X-Total-Count` header when the backend sent one
    pub total_count: Option<u64>,
}

impl RawListing {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            total_count: None,
        }
    }
}

/// Backend health as reported by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Raw access to the fleet REST API and locale assets.
#[trait_variant::make(FleetBackend: Send)]
pub trait LocalFleetBackend {
    /// `GET /api/categories`
    async fn get_categories(&self) -> Result<RawListing>;

    /// `GET /api/cars` with query parameters
    async fn get_vehicles(&self, query: &VehicleQuery) -> Result<RawListing>;

    /// `GET /api/cars/{id}`
    async fn get_vehicle(&self, id: u64) -> Result<Value>;

    /// `GET /locales/{code}.json`
    async fn get_locale(&self, code: &str) -> Result<Value>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_parses_backend_body() {
        let body = r#"{"status":"healthy","service":"avtorend-api","environment":"production","timestamp":"2024-01-01T00:00:00"}"#;
        let health: HealthStatus = serde_json::from_str(body).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.service.as_deref(), Some("avtorend-api"));
    }

    #[test]
    fn test_unhealthy_status() {
        let health = HealthStatus {
            status: "degraded".to_string(),
            service: None,
            environment: None,
        };
        assert!(!health.is_healthy());
    }
}
