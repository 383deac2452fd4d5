//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::WeatherQuery;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current conditions for a resolved location
///
/// Produced from a provider response that has already been validated:
/// every required numeric field is present and finite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved location name as reported by the provider
    pub location_name: String,
    /// Country/region code the provider resolved the location to
    pub region_code: String,
    /// Current temperature in Celsius
    pub temperature: f64,
    /// Apparent (feels like) temperature in Celsius
    pub feels_like: f64,
    /// Daily minimum temperature in Celsius, when reported
    pub temp_min: Option<f64>,
    /// Daily maximum temperature in Celsius, when reported
    pub temp_max: Option<f64>,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Visibility in meters
    pub visibility_m: u32,
    /// Condition description, lowercase as delivered by the provider
    pub description: String,
    /// Provider icon identifier (e.g. "10d")
    pub icon_id: String,
}

/// Ways a weather lookup can fail
///
/// The variants are the complete, mutually exclusive failure taxonomy the
/// command lifecycle maps to user-facing messages.
#[derive(Debug, Error)]
pub enum WeatherLookupError {
    /// The provider has no match for the queried location
    #[error("Location not found")]
    NotFound,

    /// The provider rejected our credentials
    #[error("Provider rejected credentials")]
    Unauthorized,

    /// The request timed out or never reached the provider
    #[error("Request timed out")]
    Timeout,

    /// Any other non-success response or a malformed/incomplete body
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

/// Port for weather lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions for a query, in a single bounded attempt
    async fn current_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherReport, WeatherLookupError>;
}
