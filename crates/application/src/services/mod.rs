//! Application services - Use case implementations

mod cooldown;
mod weather_command_service;
mod weather_formatter;

pub use cooldown::{CooldownTracker, RateLimiter, remaining_whole_seconds};
pub use weather_command_service::{CommandLimits, WeatherCommand, WeatherCommandService};
pub use weather_formatter::{FormatterConfig, TierPalette, format_weather};
