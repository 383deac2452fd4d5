//! Interaction responder port - the chat-platform boundary
//!
//! One responder instance answers exactly one command invocation. The
//! lifecycle allows either a single immediate reply (validation and
//! admission rejections) or an acknowledgment followed by one follow-up
//! (everything that waits on the provider).

use async_trait::async_trait;

use crate::error::ApplicationError;

/// A single embed field: label, value, and layout hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFieldView {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Platform-agnostic rich summary of a weather report
///
/// The adapter turns this into the platform's native embed type without
/// further interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherEmbedView {
    pub title: String,
    pub description: String,
    /// Accent color as 0xRRGGBB
    pub color: u32,
    pub thumbnail_url: String,
    /// Ordered field list
    pub fields: Vec<EmbedFieldView>,
    pub footer_text: String,
    pub footer_icon_url: String,
    /// Whether the platform should stamp the embed with the send time
    pub timestamped: bool,
}

/// Port for answering one command invocation
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Immediate reply, visible only to the invoking user
    async fn reply_ephemeral(&self, content: &str) -> Result<(), ApplicationError>;

    /// Acknowledge the invocation; the final answer follows later
    async fn defer(&self) -> Result<(), ApplicationError>;

    /// Public follow-up carrying the formatted summary
    async fn follow_up_embed(&self, embed: &WeatherEmbedView) -> Result<(), ApplicationError>;

    /// Follow-up visible only to the invoking user
    async fn follow_up_ephemeral(&self, content: &str) -> Result<(), ApplicationError>;
}
