//! Bot configuration
//!
//! Loaded once at startup from an optional `weatherbot.toml` plus
//! environment overrides. Credentials are held as `SecretString` and
//! never serialized or logged; the well-known deployment variables
//! (`DISCORD_TOKEN`, `CLIENT_ID`, `GUILD_ID`, `WEATHER_API_KEY`) take
//! precedence over the file.

use application::{CommandLimits, FormatterConfig, TierPalette};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Top-level bot configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BotConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub discord: DiscordSettings,

    #[serde(default)]
    pub weather: WeatherSettings,

    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub presentation: PresentationConfig,
}

impl BotConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("weatherbot").required(false))
            // Override with environment variables (e.g., WEATHERBOT_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix("WEATHERBOT")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Deployment credential variables win over the file
        if let Ok(token) = std::env::var("DISCORD_TOKEN") {
            cfg.discord.bot_token = Some(token.into());
        }
        if let Ok(id) = std::env::var("CLIENT_ID") {
            cfg.discord.application_id = Some(id);
        }
        if let Ok(guild) = std::env::var("GUILD_ID") {
            cfg.discord.guild_id = Some(guild);
        }
        if let Ok(key) = std::env::var("WEATHER_API_KEY") {
            cfg.weather.api_key = Some(key.into());
        }

        Ok(cfg)
    }

    /// Names of the mandatory credentials that are absent
    ///
    /// A non-empty result means startup must fail.
    #[must_use]
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.discord.bot_token.is_none() {
            missing.push("DISCORD_TOKEN");
        }
        if self.discord.application_id.is_none() {
            missing.push("CLIENT_ID");
        }
        if self.weather.api_key.is_none() {
            missing.push("WEATHER_API_KEY");
        }
        missing
    }

    /// Admission tunables for the command service
    #[must_use]
    pub fn command_limits(&self) -> CommandLimits {
        CommandLimits {
            cooldown: Duration::from_millis(self.limits.cooldown_ms),
            max_requests: self.limits.max_requests,
            window: Duration::from_secs(self.limits.window_secs),
        }
    }

    /// Presentation settings for the embed formatter
    #[must_use]
    pub fn formatter_config(&self) -> FormatterConfig {
        let defaults = TierPalette::default();
        FormatterConfig {
            icon_base_url: self.presentation.icon_base_url.clone(),
            icon_suffix: self.presentation.icon_suffix.clone(),
            footer_text: self.presentation.footer_text.clone(),
            footer_icon_url: self.presentation.footer_icon_url.clone(),
            palette: TierPalette {
                hot: parse_color("hot", &self.presentation.colors.hot, defaults.hot),
                warm: parse_color("warm", &self.presentation.colors.warm, defaults.warm),
                mild: parse_color("mild", &self.presentation.colors.mild, defaults.mild),
                cool: parse_color("cool", &self.presentation.colors.cool, defaults.cool),
                cold: parse_color("cold", &self.presentation.colors.cold, defaults.cold),
            },
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Discord credentials and registration settings
#[derive(Clone, Serialize, Deserialize)]
pub struct DiscordSettings {
    /// Bot token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub bot_token: Option<SecretString>,

    /// Application (client) id owning the command set
    #[serde(default)]
    pub application_id: Option<String>,

    /// Optional guild for scoped, instantly-propagating registration
    #[serde(default)]
    pub guild_id: Option<String>,

    /// API version (default: v10)
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Register the command set during startup (default: true)
    #[serde(default = "default_true")]
    pub register_on_startup: bool,
}

impl std::fmt::Debug for DiscordSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordSettings")
            .field(
                "bot_token",
                &if self.bot_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("application_id", &self.application_id)
            .field("guild_id", &self.guild_id)
            .field("api_version", &self.api_version)
            .field("register_on_startup", &self.register_on_startup)
            .finish()
    }
}

fn default_api_version() -> String {
    "v10".to_string()
}

impl Default for DiscordSettings {
    fn default() -> Self {
        Self {
            bot_token: None,
            application_id: None,
            guild_id: None,
            api_version: default_api_version(),
            register_on_startup: true,
        }
    }
}

/// Weather provider settings
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherSettings {
    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Unit system passed to the provider
    #[serde(default = "default_units")]
    pub units: String,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

impl WeatherSettings {
    /// Build the client configuration, given the key is present
    #[must_use]
    pub fn client_config(&self, api_key: &SecretString) -> integration_weather::OpenWeatherConfig {
        integration_weather::OpenWeatherConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.expose_secret().to_string(),
            units: self.units.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

impl std::fmt::Debug for WeatherSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherSettings")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("units", &self.units)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

const fn default_weather_timeout() -> u64 {
    10
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            units: default_units(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

/// Cooldown and rate-limit settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Command cooldown in milliseconds
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,

    /// Maximum requests per user within the window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// Rate-limit window in seconds
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

const fn default_cooldown_ms() -> u64 {
    5000
}

const fn default_max_requests() -> u32 {
    10
}

const fn default_window_secs() -> u64 {
    60
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

/// Embed presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Base URL the condition icon id is appended to
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,

    /// Suffix selecting the high-resolution icon rendition
    #[serde(default = "default_icon_suffix")]
    pub icon_suffix: String,

    #[serde(default = "default_footer_text")]
    pub footer_text: String,

    #[serde(default = "default_footer_icon_url")]
    pub footer_icon_url: String,

    /// Embed colors based on temperature
    #[serde(default)]
    pub colors: TierColors,
}

/// Accent colors per temperature tier, as `#RRGGBB` strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierColors {
    #[serde(default = "default_color_hot")]
    pub hot: String,
    #[serde(default = "default_color_warm")]
    pub warm: String,
    #[serde(default = "default_color_mild")]
    pub mild: String,
    #[serde(default = "default_color_cool")]
    pub cool: String,
    #[serde(default = "default_color_cold")]
    pub cold: String,
}

fn default_icon_base_url() -> String {
    "https://openweathermap.org/img/wn/".to_string()
}

fn default_icon_suffix() -> String {
    "@2x.png".to_string()
}

fn default_footer_text() -> String {
    "Powered by OpenWeatherMap API".to_string()
}

fn default_footer_icon_url() -> String {
    "https://openweathermap.org/themes/openweathermap/assets/vendor/owm/img/icons/logo_60x60.png"
        .to_string()
}

fn default_color_hot() -> String {
    "#e74c3c".to_string()
}

fn default_color_warm() -> String {
    "#f39c12".to_string()
}

fn default_color_mild() -> String {
    "#f1c40f".to_string()
}

fn default_color_cool() -> String {
    "#3498db".to_string()
}

fn default_color_cold() -> String {
    "#9b59b6".to_string()
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            icon_base_url: default_icon_base_url(),
            icon_suffix: default_icon_suffix(),
            footer_text: default_footer_text(),
            footer_icon_url: default_footer_icon_url(),
            colors: TierColors::default(),
        }
    }
}

impl Default for TierColors {
    fn default() -> Self {
        Self {
            hot: default_color_hot(),
            warm: default_color_warm(),
            mild: default_color_mild(),
            cool: default_color_cool(),
            cold: default_color_cold(),
        }
    }
}

/// Parse a `#RRGGBB` string, falling back to the built-in tier color
fn parse_color(tier: &str, hex: &str, fallback: u32) -> u32 {
    let trimmed = hex.trim().trim_start_matches('#');
    if trimmed.len() == 6 {
        if let Ok(value) = u32::from_str_radix(trimmed, 16) {
            return value;
        }
    }
    warn!(tier = %tier, value = %hex, "Invalid color in configuration, using default");
    fallback
}
