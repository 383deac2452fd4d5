//! OpenWeatherMap HTTP client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentConditions, CurrentWeatherResponse};

/// Weather client errors
///
/// The variants are the complete failure taxonomy for a lookup; every
/// response the provider can produce maps to exactly one of them.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider has no match for the queried location (HTTP 404)
    #[error("Location not found")]
    NotFound,

    /// The provider rejected the API key (HTTP 401)
    #[error("Credentials rejected")]
    Unauthorized,

    /// The request timed out or never reached the provider
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Any other non-success status, or a malformed/incomplete body
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (required)
    pub api_key: String,

    /// Unit system passed to the provider (default: metric)
    #[serde(default = "default_units")]
    pub units: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

const fn default_timeout() -> u64 {
    10
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a provider query string
    /// (`location` or `location,region`)
    async fn current_weather(&self, query: &str) -> Result<CurrentConditions, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Upstream(format!("HTTP client init failed: {e}")))?;

        Ok(Self { client, config })
    }

    /// Map a transport-level failure onto the taxonomy
    fn map_request_error(err: &reqwest::Error) -> WeatherError {
        if err.is_timeout() || err.is_connect() {
            WeatherError::Timeout(err.to_string())
        } else {
            WeatherError::Upstream(err.to_string())
        }
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(query = %query))]
    async fn current_weather(&self, query: &str) -> Result<CurrentConditions, WeatherError> {
        let url = format!("{}/weather", self.config.base_url);
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Self::map_request_error(&e))?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => return Err(WeatherError::NotFound),
            StatusCode::UNAUTHORIZED => return Err(WeatherError::Unauthorized),
            s if !s.is_success() => return Err(WeatherError::Upstream(format!("HTTP {s}"))),
            _ => {}
        }

        let body: CurrentWeatherResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                WeatherError::Timeout(e.to_string())
            } else {
                WeatherError::Upstream(format!("malformed response body: {e}"))
            }
        })?;

        CurrentConditions::from_response(body)
    }
}
