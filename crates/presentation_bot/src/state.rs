//! Shared application state

use std::sync::Arc;

use application::WeatherCommandService;
use integration_discord::DiscordRestClient;

/// State shared by all request handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub command_service: Arc<WeatherCommandService>,
    pub discord: Arc<DiscordRestClient>,
}
