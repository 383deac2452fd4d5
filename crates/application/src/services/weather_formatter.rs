//! Weather embed formatting
//!
//! Pure functions mapping a validated weather report into the rich embed
//! view the platform adapter renders. Deterministic: the same report and
//! configuration always produce the same view.

use domain::{TemperatureTier, celsius_to_fahrenheit};

use crate::ports::{EmbedFieldView, WeatherEmbedView, WeatherReport};

/// Accent colors per temperature tier, as 0xRRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPalette {
    pub hot: u32,
    pub warm: u32,
    pub mild: u32,
    pub cool: u32,
    pub cold: u32,
}

impl TierPalette {
    /// Color for a tier
    #[must_use]
    pub const fn color_for(&self, tier: TemperatureTier) -> u32 {
        match tier {
            TemperatureTier::Hot => self.hot,
            TemperatureTier::Warm => self.warm,
            TemperatureTier::Mild => self.mild,
            TemperatureTier::Cool => self.cool,
            TemperatureTier::Cold => self.cold,
        }
    }
}

impl Default for TierPalette {
    fn default() -> Self {
        Self {
            hot: 0x00e7_4c3c,
            warm: 0x00f3_9c12,
            mild: 0x00f1_c40f,
            cool: 0x0034_98db,
            cold: 0x009b_59b6,
        }
    }
}

/// Presentation settings for the weather embed
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Base URL the condition icon id is appended to
    pub icon_base_url: String,
    /// Suffix selecting the high-resolution icon rendition
    pub icon_suffix: String,
    pub footer_text: String,
    pub footer_icon_url: String,
    pub palette: TierPalette,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            icon_base_url: "https://openweathermap.org/img/wn/".to_string(),
            icon_suffix: "@2x.png".to_string(),
            footer_text: "Powered by OpenWeatherMap API".to_string(),
            footer_icon_url:
                "https://openweathermap.org/themes/openweathermap/assets/vendor/owm/img/icons/logo_60x60.png"
                    .to_string(),
            palette: TierPalette::default(),
        }
    }
}

/// Render a weather report as a rich embed view
///
/// Field order is fixed: Temperature, Feels Like, Humidity, Pressure,
/// Wind Speed, Visibility, then Min/Max only when both bounds were
/// reported.
#[must_use]
pub fn format_weather(report: &WeatherReport, config: &FormatterConfig) -> WeatherEmbedView {
    let tier = TemperatureTier::from_celsius(report.temperature);

    let mut fields = vec![
        EmbedFieldView {
            name: "🌡️ Temperature".to_string(),
            value: format_both_units(report.temperature),
            inline: true,
        },
        EmbedFieldView {
            name: "🤔 Feels Like".to_string(),
            value: format_both_units(report.feels_like),
            inline: true,
        },
        EmbedFieldView {
            name: "💧 Humidity".to_string(),
            value: format!("{}%", report.humidity),
            inline: true,
        },
        EmbedFieldView {
            name: "🏔️ Pressure".to_string(),
            value: format!("{} hPa", report.pressure),
            inline: true,
        },
        EmbedFieldView {
            name: "💨 Wind Speed".to_string(),
            value: format!("{} m/s", report.wind_speed),
            inline: true,
        },
        EmbedFieldView {
            name: "👁️ Visibility".to_string(),
            value: format!("{} km", visibility_km(report.visibility_m)),
            inline: true,
        },
    ];

    // Both bounds must be reported; a legitimate 0 °C bound still renders
    if let (Some(min), Some(max)) = (report.temp_min, report.temp_max) {
        fields.push(EmbedFieldView {
            name: "📊 Min/Max".to_string(),
            value: format!(
                "{}°C / {}°C\n({}°F / {}°F)",
                round_celsius(min),
                round_celsius(max),
                celsius_to_fahrenheit(min),
                celsius_to_fahrenheit(max),
            ),
            inline: true,
        });
    }

    WeatherEmbedView {
        title: format!(
            "🌤️ Weather in {}, {}",
            report.location_name, report.region_code
        ),
        description: capitalize_first(&report.description),
        color: config.palette.color_for(tier),
        thumbnail_url: format!(
            "{}{}{}",
            config.icon_base_url, report.icon_id, config.icon_suffix
        ),
        fields,
        footer_text: config.footer_text.clone(),
        footer_icon_url: config.footer_icon_url.clone(),
        timestamped: true,
    }
}

/// `"15°C (59°F)"` for 15.0
fn format_both_units(celsius: f64) -> String {
    format!(
        "{}°C ({}°F)",
        round_celsius(celsius),
        celsius_to_fahrenheit(celsius)
    )
}

fn round_celsius(celsius: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        celsius.round() as i64
    }
}

fn visibility_km(meters: u32) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        (f64::from(meters) / 1000.0).round() as i64
    }
}

/// Uppercase the first letter, leave the rest unchanged
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
