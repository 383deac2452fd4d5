//! Interaction responder adapter
//!
//! Implements the platform boundary for one Discord interaction. Each
//! responder holds the interaction id and continuation token it answers
//! with; the token outlives the 3-second acknowledgment deadline, so the
//! deferred flow is: callback now, webhook edit or follow-up later.

use application::{ApplicationError, InteractionResponder, WeatherEmbedView};
use async_trait::async_trait;
use chrono::Utc;
use integration_discord::{
    DiscordError, DiscordRestClient, Embed, EmbedField, EmbedFooter, EmbedThumbnail,
    FollowUpMessage, InteractionResponse,
};
use std::sync::Arc;

/// Answers one interaction through the Discord REST API
#[derive(Debug, Clone)]
pub struct DiscordInteractionResponder {
    client: Arc<DiscordRestClient>,
    interaction_id: String,
    token: String,
}

impl DiscordInteractionResponder {
    /// Bind a responder to one interaction
    #[must_use]
    pub fn new(
        client: Arc<DiscordRestClient>,
        interaction_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            interaction_id: interaction_id.into(),
            token: token.into(),
        }
    }

    fn map_err(err: DiscordError) -> ApplicationError {
        ApplicationError::Platform(err.to_string())
    }
}

/// Convert the platform-agnostic view into a Discord embed
fn to_embed(view: &WeatherEmbedView) -> Embed {
    Embed {
        title: view.title.clone(),
        description: view.description.clone(),
        color: view.color,
        timestamp: view.timestamped.then(|| Utc::now().to_rfc3339()),
        thumbnail: Some(EmbedThumbnail {
            url: view.thumbnail_url.clone(),
        }),
        fields: view
            .fields
            .iter()
            .map(|f| EmbedField {
                name: f.name.clone(),
                value: f.value.clone(),
                inline: f.inline,
            })
            .collect(),
        footer: Some(EmbedFooter {
            text: view.footer_text.clone(),
            icon_url: Some(view.footer_icon_url.clone()),
        }),
    }
}

#[async_trait]
impl InteractionResponder for DiscordInteractionResponder {
    async fn reply_ephemeral(&self, content: &str) -> Result<(), ApplicationError> {
        self.client
            .create_interaction_response(
                &self.interaction_id,
                &self.token,
                &InteractionResponse::message(content, true),
            )
            .await
            .map_err(Self::map_err)
    }

    async fn defer(&self) -> Result<(), ApplicationError> {
        self.client
            .create_interaction_response(
                &self.interaction_id,
                &self.token,
                &InteractionResponse::deferred(),
            )
            .await
            .map_err(Self::map_err)
    }

    async fn follow_up_embed(&self, embed: &WeatherEmbedView) -> Result<(), ApplicationError> {
        self.client
            .edit_original_response(&self.token, &FollowUpMessage::embed(to_embed(embed)))
            .await
            .map_err(Self::map_err)
    }

    async fn follow_up_ephemeral(&self, content: &str) -> Result<(), ApplicationError> {
        self.client
            .create_follow_up(&self.token, &FollowUpMessage::ephemeral_text(content))
            .await
            .map_err(Self::map_err)
    }
}
