//! Weather query value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated weather lookup request: a location plus an optional region
/// qualifier (country code) to disambiguate it.
///
/// # Examples
///
/// ```
/// use domain::value_objects::WeatherQuery;
///
/// let query = WeatherQuery::new("London", Some("GB".to_string())).expect("valid query");
/// assert_eq!(query.provider_query(), "London,GB");
///
/// // Whitespace-only locations are rejected
/// assert!(WeatherQuery::new("   ", None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherQuery {
    location: String,
    region_code: Option<String>,
}

impl WeatherQuery {
    /// Create a new query, trimming and validating the location
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` if the location is empty
    /// after trimming. An empty region qualifier is treated as absent.
    pub fn new(
        location: impl Into<String>,
        region_code: Option<String>,
    ) -> Result<Self, DomainError> {
        let location = location.into().trim().to_string();
        if location.is_empty() {
            return Err(DomainError::InvalidLocation(
                "location must not be empty".to_string(),
            ));
        }

        let region_code = region_code
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        Ok(Self {
            location,
            region_code,
        })
    }

    /// The location name as entered by the user (trimmed)
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The optional region qualifier
    pub fn region_code(&self) -> Option<&str> {
        self.region_code.as_deref()
    }

    /// The provider-facing query string: `location` or `location,region`
    pub fn provider_query(&self) -> String {
        match &self.region_code {
            Some(region) => format!("{},{}", self.location, region),
            None => self.location.clone(),
        }
    }
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.provider_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_is_trimmed() {
        let query = WeatherQuery::new("  Paris  ", None).unwrap();
        assert_eq!(query.location(), "Paris");
        assert_eq!(query.provider_query(), "Paris");
    }

    #[test]
    fn empty_location_is_rejected() {
        assert!(WeatherQuery::new("", None).is_err());
        assert!(WeatherQuery::new("   ", None).is_err());
    }

    #[test]
    fn region_is_appended_to_provider_query() {
        let query = WeatherQuery::new("London", Some("GB".to_string())).unwrap();
        assert_eq!(query.provider_query(), "London,GB");
    }

    #[test]
    fn blank_region_is_dropped() {
        let query = WeatherQuery::new("London", Some("  ".to_string())).unwrap();
        assert_eq!(query.region_code(), None);
        assert_eq!(query.provider_query(), "London");
    }

    #[test]
    fn display_matches_provider_query() {
        let query = WeatherQuery::new("Kyiv", Some("UA".to_string())).unwrap();
        assert_eq!(query.to_string(), "Kyiv,UA");
    }
}
