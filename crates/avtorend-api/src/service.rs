//! Fleet data client with fallback policy
//!
//! Every fetch degrades instead of failing:
//! - categories fall back to the bundled sample set
//! - vehicle listings fall back to an empty list
//! - a non-list payload is coerced to empty
//! - individual records that do not decode are skipped
//!
//! Failures are logged here and reported through [`FetchSource::Fallback`]
//! so the renderer can choose between "none found" and "error".

use std::sync::Arc;

use avtorend_core::prelude::*;
use avtorend_core::{fallback_categories, CategoryRecord, LocaleDictionary, VehicleRecord};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::{FleetBackend, HealthStatus};
use crate::query::VehicleQuery;

/// Where a fetch result came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchSource {
    /// Decoded from a successful backend response
    Live,
    /// Backend call failed; `reason` is the logged error
    Fallback { reason: String },
}

/// Records produced by one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome<T> {
    pub items: Vec<T>,
    pub source: FetchSource,
    /// Total matching records on the backend, when reported
    pub total_count: Option<u64>,
    /// Records dropped because they failed to decode
    pub skipped: usize,
}

impl<T> FetchOutcome<T> {
    pub fn live(items: Vec<T>) -> Self {
        Self {
            items,
            source: FetchSource::Live,
            total_count: None,
            skipped: 0,
        }
    }

    pub fn fallback(items: Vec<T>, reason: impl Into<String>) -> Self {
        Self {
            items,
            source: FetchSource::Fallback {
                reason: reason.into(),
            },
            total_count: None,
            skipped: 0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, FetchSource::Fallback { .. })
    }
}

/// Fetches fleet data through a [`FleetBackend`], applying the fallback policy.
#[derive(Debug)]
pub struct FleetService<B> {
    backend: Arc<B>,
}

impl<B> Clone for FleetService<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: FleetBackend + Sync> FleetService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch categories, falling back to the bundled sample set on failure.
    pub async fn fetch_categories(&self) -> FetchOutcome<CategoryRecord> {
        match self.backend.get_categories().await {
            Ok(listing) => {
                let (items, skipped) = decode_list::<CategoryRecord>(&listing.payload, "category");
                FetchOutcome {
                    items,
                    source: FetchSource::Live,
                    total_count: listing.total_count,
                    skipped,
                }
            }
            Err(e) => {
                warn!("Categories unavailable, using fallback set: {}", e);
                FetchOutcome::fallback(fallback_categories(), e.to_string())
            }
        }
    }

    /// Fetch vehicles matching `query`.
    ///
    /// The category constraint is also applied client-side, so a backend that
    /// ignores `category_id` still yields a correctly scoped list.
    pub async fn fetch_vehicles(&self, query: &VehicleQuery) -> FetchOutcome<VehicleRecord> {
        match self.backend.get_vehicles(query).await {
            Ok(listing) => {
                let (mut items, skipped) = decode_list::<VehicleRecord>(&listing.payload, "vehicle");
                let filter = query.filter();
                let before = items.len();
                items.retain(|v| filter.matches(v));
                if items.len() != before {
                    debug!(
                        "Filtered {} vehicles outside category {} client-side",
                        before - items.len(),
                        filter
                    );
                }
                FetchOutcome {
                    items,
                    source: FetchSource::Live,
                    total_count: listing.total_count,
                    skipped,
                }
            }
            Err(e) => {
                if let Error::HttpStatus { status, .. } = &e {
                    if crate::http::is_server_error(*status) {
                        error!("Vehicle listing failed with server error: {}", e);
                    } else {
                        warn!("Vehicle listing rejected: {}", e);
                    }
                } else {
                    warn!("Vehicle listing unavailable: {}", e);
                }
                FetchOutcome::fallback(Vec::new(), e.to_string())
            }
        }
    }

    /// Fetch a single vehicle. `None` when missing, malformed or unreachable.
    pub async fn fetch_vehicle(&self, id: u64) -> Option<VehicleRecord> {
        match self.backend.get_vehicle(id).await {
            Ok(value) => match serde_json::from_value::<VehicleRecord>(value) {
                Ok(vehicle) => Some(vehicle),
                Err(e) => {
                    warn!("Vehicle {} payload did not decode: {}", id, e);
                    None
                }
            },
            Err(e) if e.is_not_found() => {
                debug!("Vehicle {} not found", id);
                None
            }
            Err(e) => {
                warn!("Vehicle {} unavailable: {}", id, e);
                None
            }
        }
    }

    /// Fetch and flatten a locale dictionary.
    pub async fn fetch_locale(&self, code: &str) -> Result<LocaleDictionary> {
        let value = self.backend.get_locale(code).await?;
        if !value.is_object() {
            return Err(Error::malformed(
                format!("locales/{}.json", code),
                "expected a JSON object",
            ));
        }
        Ok(LocaleDictionary::from_json(&value))
    }

    /// Probe `GET /health`. Never fails; returns `None` when unreachable.
    pub async fn check_health(&self) -> Option<HealthStatus> {
        match self.backend.health().await {
            Ok(health) => {
                info!(
                    "Backend health: {} ({})",
                    health.status,
                    health.environment.as_deref().unwrap_or("unknown")
                );
                Some(health)
            }
            Err(e) => {
                warn!("Backend health check failed: {}", e);
                None
            }
        }
    }
}

/// Decode a JSON array into records, skipping entries that do not decode.
///
/// A non-array payload decodes to an empty list. Returns the decoded records
/// and the number of skipped entries.
pub fn decode_list<T: DeserializeOwned>(payload: &Value, what: &str) -> (Vec<T>, usize) {
    let Some(entries) = payload.as_array() else {
        warn!("Expected a list of {} records, got {}", what, json_kind(payload));
        return (Vec::new(), 0);
    };

    let mut items = Vec::with_capacity(entries.len());
    let mut skipped = 0;
    for entry in entries {
        match T::deserialize(entry) {
            Ok(item) => items.push(item),
            Err(e) => {
                skipped += 1;
                warn!("Skipping malformed {} record: {}", what, e);
            }
        }
    }
    (items, skipped)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
