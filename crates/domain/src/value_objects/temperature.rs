//! Temperature tiers and unit conversion
//!
//! The tier is a step function over the Celsius scale used to pick the
//! presentation accent for a weather report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Presentation tier for a temperature, from warmest to coldest
///
/// Tiers are mutually exclusive and cover the whole scale:
/// `[30, ∞)` → Hot, `[20, 30)` → Warm, `[10, 20)` → Mild,
/// `[0, 10)` → Cool, `(-∞, 0)` → Cold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureTier {
    /// 30 °C and above
    Hot,
    /// 20 °C up to 30 °C
    Warm,
    /// 10 °C up to 20 °C
    Mild,
    /// 0 °C up to 10 °C
    Cool,
    /// Below freezing
    Cold,
}

impl TemperatureTier {
    /// Classify a Celsius temperature into its tier
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius >= 30.0 {
            Self::Hot
        } else if celsius >= 20.0 {
            Self::Warm
        } else if celsius >= 10.0 {
            Self::Mild
        } else if celsius >= 0.0 {
            Self::Cool
        } else {
            Self::Cold
        }
    }

    /// Lowercase tier name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Mild => "mild",
            Self::Cool => "cool",
            Self::Cold => "cold",
        }
    }
}

impl fmt::Display for TemperatureTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert Celsius to Fahrenheit, rounded to the nearest degree
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        celsius.mul_add(9.0 / 5.0, 32.0).round() as i64
    }
}
