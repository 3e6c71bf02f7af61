//! # avtorend-api - Fleet Backend Client
//!
//! Talks to the AvtoRend REST API (`/api/categories`, `/api/cars`,
//! `/health`) and fetches locale dictionaries from `/locales/{code}.json`.
//!
//! ## Layers
//!
//! - [`FleetBackend`] - Raw transport seam returning undecoded JSON
//! - [`HttpBackend`] - `reqwest` implementation of the seam
//! - [`FleetService`] - Decoding plus fallback policy; never fails a listing
//!
//! ## Fallback policy
//!
//! | Call | On failure |
//! |------|-----------|
//! | categories | bundled sample set (Эконом, Комфорт, SUV) |
//! | vehicles | empty list, marked [`FetchSource::Fallback`] |
//! | single vehicle | `None` |
//! | locale | `Err`, caller keeps current text |

pub mod backend;
pub mod http;
pub mod query;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{FleetBackend, HealthStatus, LocalFleetBackend, RawListing};
pub use http::{parse_base_url, HttpBackend, DEFAULT_TIMEOUT};
pub use query::{VehicleQuery, MAX_LIMIT};
pub use service::{decode_list, FetchOutcome, FetchSource, FleetService};
