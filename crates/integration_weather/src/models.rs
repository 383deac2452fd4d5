//! OpenWeatherMap wire models
//!
//! Raw response shapes for `/data/2.5/weather` plus the validated
//! `CurrentConditions` produced from them. The provider response is
//! untrusted input: required numerics must be present and finite, and a
//! body that fails validation is an upstream failure, never defaulted.

use serde::{Deserialize, Serialize};

use crate::client::WeatherError;

/// Raw `/weather` response (only the fields we consume)
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherResponse {
    pub name: String,
    pub sys: SysSection,
    pub main: MainSection,
    pub weather: Vec<ConditionSection>,
    pub wind: WindSection,
    pub visibility: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SysSection {
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainSection {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConditionSection {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WindSection {
    pub speed: f64,
}

/// Validated current conditions for a resolved location
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub region_code: String,
    /// Current temperature, in the configured unit system
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Visibility in meters
    pub visibility_m: u32,
    /// Condition description, lowercase as delivered
    pub description: String,
    /// Condition icon identifier (e.g. "10d")
    pub icon_id: String,
}

impl CurrentConditions {
    /// Validate a raw response into current conditions
    pub(crate) fn from_response(raw: CurrentWeatherResponse) -> Result<Self, WeatherError> {
        let condition = raw
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Upstream("response contained no conditions".to_string()))?;

        let visibility_m = raw
            .visibility
            .ok_or_else(|| WeatherError::Upstream("response missing visibility".to_string()))?;

        require_finite("main.temp", raw.main.temp)?;
        require_finite("main.feels_like", raw.main.feels_like)?;
        require_finite("wind.speed", raw.wind.speed)?;
        if let Some(min) = raw.main.temp_min {
            require_finite("main.temp_min", min)?;
        }
        if let Some(max) = raw.main.temp_max {
            require_finite("main.temp_max", max)?;
        }

        Ok(Self {
            location_name: raw.name,
            region_code: raw.sys.country,
            temperature: raw.main.temp,
            feels_like: raw.main.feels_like,
            temp_min: raw.main.temp_min,
            temp_max: raw.main.temp_max,
            humidity: raw.main.humidity,
            pressure: raw.main.pressure,
            wind_speed: raw.wind.speed,
            visibility_m,
            description: condition.description,
            icon_id: condition.icon,
        })
    }
}

fn require_finite(field: &str, value: f64) -> Result<(), WeatherError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WeatherError::Upstream(format!(
            "response field {field} is not a finite number"
        )))
    }
}
