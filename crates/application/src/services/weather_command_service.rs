//! Weather command lifecycle
//!
//! Handles one slash-command invocation end to end: argument validation,
//! cooldown and rate-limit admission, the deferred acknowledgment, the
//! provider call, and delivery of either the formatted embed or a fixed
//! user-facing failure message.

use std::{sync::Arc, time::Duration};

use domain::{UserId, WeatherQuery};
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{InteractionResponder, WeatherLookupError, WeatherPort},
    services::{
        cooldown::{CooldownTracker, RateLimiter, remaining_whole_seconds},
        weather_formatter::{FormatterConfig, format_weather},
    },
};

/// Admission tunables for the command lifecycle
#[derive(Debug, Clone)]
pub struct CommandLimits {
    /// Minimum delay between invocations by the same user
    pub cooldown: Duration,
    /// Requests allowed per user within `window`
    pub max_requests: u32,
    /// Rate-limit window
    pub window: Duration,
}

impl Default for CommandLimits {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_secs(5),
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

/// One `/weather` invocation as delivered by the platform
#[derive(Debug, Clone)]
pub struct WeatherCommand {
    pub user: UserId,
    pub city: String,
    pub country: Option<String>,
}

/// Orchestrates the weather command
///
/// Owns the cooldown and rate-limit state, so separate service instances
/// (e.g. in tests) never share admission bookkeeping.
pub struct WeatherCommandService {
    weather: Arc<dyn WeatherPort>,
    cooldowns: CooldownTracker,
    rate_limiter: RateLimiter,
    formatter: FormatterConfig,
}

impl std::fmt::Debug for WeatherCommandService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherCommandService")
            .field("cooldowns", &self.cooldowns)
            .field("rate_limiter", &self.rate_limiter)
            .finish_non_exhaustive()
    }
}

impl WeatherCommandService {
    /// Create a service over a weather port
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        limits: &CommandLimits,
        formatter: FormatterConfig,
    ) -> Self {
        Self {
            weather,
            cooldowns: CooldownTracker::new(limits.cooldown),
            rate_limiter: RateLimiter::new(limits.max_requests, limits.window),
            formatter,
        }
    }

    /// Handle one invocation
    ///
    /// Every outcome is delivered through `responder`: either a single
    /// immediate ephemeral reply (rejections) or a deferral followed by
    /// exactly one follow-up. The admission checks are synchronous; the
    /// only suspension of material duration is the provider call.
    #[instrument(skip(self, responder), fields(user = %command.user, city = %command.city))]
    pub async fn handle(
        &self,
        command: WeatherCommand,
        responder: &dyn InteractionResponder,
    ) -> Result<(), ApplicationError> {
        let Ok(query) = WeatherQuery::new(command.city.clone(), command.country.clone()) else {
            return responder
                .reply_ephemeral("❌ Please provide a city name.")
                .await;
        };

        // Admission: no await between the cooldown read and write
        if let Err(remaining) = self.cooldowns.check_and_arm(command.user) {
            let seconds = remaining_whole_seconds(remaining);
            return responder
                .reply_ephemeral(&format!(
                    "⏰ Please wait {seconds} more second(s) before using this command again."
                ))
                .await;
        }
        if !self.rate_limiter.check(command.user) {
            return responder
                .reply_ephemeral(
                    "⏰ You're sending commands too quickly. Please wait a moment and try again.",
                )
                .await;
        }

        // The provider call can outlast the platform's quick-reply deadline
        responder.defer().await?;

        match self.weather.current_weather(&query).await {
            Ok(report) => {
                info!(location = %query, "Weather lookup succeeded");
                let embed = format_weather(&report, &self.formatter);
                responder.follow_up_embed(&embed).await
            }
            Err(err) => {
                warn!(location = %query, error = %err, "Weather lookup failed");
                responder
                    .follow_up_ephemeral(&failure_message(&err, query.location()))
                    .await
            }
        }
    }
}

/// Map a lookup failure to its fixed user-facing message
///
/// Total and exclusive over the failure taxonomy; no technical detail or
/// credential information reaches the user.
fn failure_message(err: &WeatherLookupError, city: &str) -> String {
    match err {
        WeatherLookupError::NotFound => format!(
            "❌ Sorry, I couldn't fetch weather data for \"{city}\". Please check the city name \
             and try again. You can also try adding a country code."
        ),
        WeatherLookupError::Unauthorized => {
            "❌ Weather service is temporarily unavailable. Please try again later.".to_string()
        }
        WeatherLookupError::Timeout | WeatherLookupError::Upstream(_) => format!(
            "❌ Sorry, I couldn't fetch weather data for \"{city}\". Please try again later."
        ),
    }
}
