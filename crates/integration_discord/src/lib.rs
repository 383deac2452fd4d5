//! Discord integration
//!
//! REST client, interaction payloads, and the bot's application-command
//! definitions. The gateway connection is not handled here: interactions
//! arrive over the interactions endpoint and are answered through the
//! REST API.

pub mod client;
pub mod commands;
pub mod models;

pub use client::{CommandScope, DiscordClientConfig, DiscordError, DiscordRestClient};
pub use commands::{command_set, weather_command};
pub use models::{
    CommandDefinition, CommandOption, Embed, EmbedField, EmbedFooter, EmbedThumbnail,
    FollowUpMessage, Interaction, InteractionCallbackData, InteractionResponse, RegisteredCommand,
};
