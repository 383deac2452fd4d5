//! Discord REST client
//!
//! Covers the three surfaces the bot needs: command registration,
//! interaction callbacks, and the interaction webhook used for follow-ups
//! and edits of the deferred response.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    CommandDefinition, FollowUpMessage, InteractionResponse, RegisteredCommand,
};

/// Discord API errors
#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),
}

/// Discord client configuration
#[derive(Debug, Clone)]
pub struct DiscordClientConfig {
    /// Bot token, sent as `Authorization: Bot <token>`
    pub bot_token: String,
    /// Application id owning the command set
    pub application_id: String,
    /// API version (default: v10)
    pub api_version: String,
}

impl Default for DiscordClientConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            application_id: String::new(),
            api_version: "v10".to_string(),
        }
    }
}

/// Where to register the command set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandScope {
    /// All guilds; propagation can take up to an hour
    Global,
    /// One guild, effective immediately
    Guild(String),
}

/// Discord REST client
#[derive(Debug, Clone)]
pub struct DiscordRestClient {
    client: Client,
    config: DiscordClientConfig,
    base_url: String,
}

/// API error response body
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl DiscordRestClient {
    /// Create a new client
    pub fn new(config: DiscordClientConfig) -> Result<Self, DiscordError> {
        Self::with_base_url(config, "https://discord.com/api")
    }

    /// Create a client against a custom API origin (used by tests)
    pub fn with_base_url(
        config: DiscordClientConfig,
        origin: impl Into<String>,
    ) -> Result<Self, DiscordError> {
        if config.bot_token.is_empty() {
            return Err(DiscordError::Configuration(
                "bot_token is required".to_string(),
            ));
        }
        if config.application_id.is_empty() {
            return Err(DiscordError::Configuration(
                "application_id is required".to_string(),
            ));
        }

        let base_url = format!("{}/{}", origin.into(), config.api_version);

        Ok(Self {
            client: Client::new(),
            config,
            base_url,
        })
    }

    /// Replace the registered command set
    ///
    /// A bulk overwrite: the pushed set becomes the complete command set
    /// for the scope, so repeating the call with an identical schema is a
    /// no-op upsert and never duplicates commands.
    #[instrument(skip(self, commands), fields(count = commands.len(), scope = ?scope))]
    pub async fn register_commands(
        &self,
        commands: &[CommandDefinition],
        scope: &CommandScope,
    ) -> Result<Vec<RegisteredCommand>, DiscordError> {
        let url = match scope {
            CommandScope::Global => format!(
                "{}/applications/{}/commands",
                self.base_url, self.config.application_id
            ),
            CommandScope::Guild(guild_id) => format!(
                "{}/applications/{}/guilds/{}/commands",
                self.base_url, self.config.application_id, guild_id
            ),
        };

        debug!(url = %url, "Registering application commands");

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bot {}", self.config.bot_token))
            .json(&commands)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Answer an interaction through its callback endpoint
    #[instrument(skip(self, token, response), fields(interaction_id = %interaction_id))]
    pub async fn create_interaction_response(
        &self,
        interaction_id: &str,
        token: &str,
        response: &InteractionResponse,
    ) -> Result<(), DiscordError> {
        let url = format!(
            "{}/interactions/{}/{}/callback",
            self.base_url, interaction_id, token
        );

        let res = self.client.post(&url).json(response).send().await?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(res).await)
        }
    }

    /// Send a follow-up message for a deferred interaction
    #[instrument(skip(self, token, message))]
    pub async fn create_follow_up(
        &self,
        token: &str,
        message: &FollowUpMessage,
    ) -> Result<(), DiscordError> {
        let url = format!(
            "{}/webhooks/{}/{}",
            self.base_url, self.config.application_id, token
        );

        let res = self.client.post(&url).json(message).send().await?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(res).await)
        }
    }

    /// Replace the deferred acknowledgment with the final message
    #[instrument(skip(self, token, message))]
    pub async fn edit_original_response(
        &self,
        token: &str,
        message: &FollowUpMessage,
    ) -> Result<(), DiscordError> {
        let url = format!(
            "{}/webhooks/{}/{}/messages/@original",
            self.base_url, self.config.application_id, token
        );

        let res = self.client.patch(&url).json(message).send().await?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(res).await)
        }
    }

    /// Turn a non-success response into `DiscordError::Api`
    async fn api_error(response: reqwest::Response) -> DiscordError {
        let status = response.status().as_u16();
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => "unreadable error body".to_string(),
        };
        DiscordError::Api { status, message }
    }
}
