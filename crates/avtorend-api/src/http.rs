//! HTTP transport for the fleet backend

use std::time::Duration;

use avtorend_core::prelude::*;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::backend::{FleetBackend, HealthStatus, RawListing};
use crate::query::VehicleQuery;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// [`FleetBackend`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a backend rooted at `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("avtorend/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response> {
        let url_str = url.to_string();
        trace!("GET {}", url_str);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_transport_error(&url_str, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} -> {}", url_str, status);
            return Err(Error::http_status(status.as_u16(), url_str));
        }
        Ok(response)
    }

    async fn get_json(&self, url: Url) -> Result<Value> {
        let url_str = url.to_string();
        let response = self.get(url).await?;
        read_json(&url_str, response).await
    }

    async fn get_listing(&self, url: Url) -> Result<RawListing> {
        let url_str = url.to_string();
        let response = self.get(url).await?;
        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let payload = read_json(&url_str, response).await?;
        Ok(RawListing {
            payload,
            total_count,
        })
    }
}

impl FleetBackend for HttpBackend {
    async fn get_categories(&self) -> Result<RawListing> {
        let url = self.endpoint("api/categories")?;
        self.get_listing(url).await
    }

    async fn get_vehicles(&self, query: &VehicleQuery) -> Result<RawListing> {
        let mut url = self.endpoint("api/cars")?;
        query.apply(&mut url);
        self.get_listing(url).await
    }

    async fn get_vehicle(&self, id: u64) -> Result<Value> {
        let url = self.endpoint(&format!("api/cars/{}", id))?;
        self.get_json(url).await
    }

    async fn get_locale(&self, code: &str) -> Result<Value> {
        if !is_valid_locale_code(code) {
            return Err(Error::unsupported_language(code));
        }
        let url = self.endpoint(&format!("locales/{}.json", code))?;
        self.get_json(url).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("health")?;
        let url_str = url.to_string();
        let value = self.get_json(url).await?;
        serde_json::from_value(value).map_err(|e| Error::malformed(url_str, e.to_string()))
    }
}

/// Parse a base URL, forcing a trailing slash so `join` appends paths.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            base_url, other
        ))),
    }
}

/// Locale codes are short ASCII tags like `ru`, `en` or `pt-BR`.
pub fn is_valid_locale_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= 10
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

async fn read_json(url: &str, response: reqwest::Response) -> Result<Value> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| map_transport_error(url, e))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::malformed(url, e.to_string()))
}

fn map_transport_error(url: &str, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::timeout(url)
    } else if let Some(status) = err.status() {
        Error::http_status(status.as_u16(), url)
    } else {
        Error::network(url, err.to_string())
    }
}

/// `true` for statuses worth distinguishing in logs.
pub fn is_server_error(status: u16) -> bool {
    StatusCode::from_u16(status)
        .map(|s| s.is_server_error())
        .unwrap_or(false)
}
