//! Weather adapter - Implements WeatherPort using integration_weather

use application::{ApplicationError, WeatherLookupError, WeatherPort, WeatherReport};
use async_trait::async_trait;
use domain::WeatherQuery;
use integration_weather::{
    CurrentConditions, OpenWeatherClient, OpenWeatherConfig, WeatherClient, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather lookups against OpenWeatherMap
#[derive(Debug)]
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl WeatherAdapter {
    /// Create an adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map an integration failure onto the port taxonomy, one to one
    fn map_error(err: WeatherError) -> WeatherLookupError {
        match err {
            WeatherError::NotFound => WeatherLookupError::NotFound,
            WeatherError::Unauthorized => WeatherLookupError::Unauthorized,
            WeatherError::Timeout(_) => WeatherLookupError::Timeout,
            WeatherError::Upstream(detail) => WeatherLookupError::Upstream(detail),
        }
    }

    fn map_report(conditions: CurrentConditions) -> WeatherReport {
        WeatherReport {
            location_name: conditions.location_name,
            region_code: conditions.region_code,
            temperature: conditions.temperature,
            feels_like: conditions.feels_like,
            temp_min: conditions.temp_min,
            temp_max: conditions.temp_max,
            humidity: conditions.humidity,
            pressure: conditions.pressure,
            wind_speed: conditions.wind_speed,
            visibility_m: conditions.visibility_m,
            description: conditions.description,
            icon_id: conditions.icon_id,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(query = %query))]
    async fn current_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherReport, WeatherLookupError> {
        let result = self
            .client
            .current_weather(&query.provider_query())
            .await
            .map(Self::map_report)
            .map_err(Self::map_error);

        match &result {
            Ok(report) => {
                debug!(
                    location = %report.location_name,
                    temperature = report.temperature,
                    "Retrieved current weather"
                );
            }
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            }
        }

        result
    }
}
