//! Discord wire models
//!
//! Incoming interaction payloads, outgoing interaction responses, rich
//! embeds, and application-command definitions. Field names and numeric
//! discriminants follow the Discord HTTP API.

use serde::{Deserialize, Serialize};

/// Interaction type: ping (sent on endpoint validation)
pub const INTERACTION_TYPE_PING: u8 = 1;
/// Interaction type: slash-command invocation
pub const INTERACTION_TYPE_APPLICATION_COMMAND: u8 = 2;

/// Callback type: pong, answers a ping
pub const CALLBACK_PONG: u8 = 1;
/// Callback type: immediate channel message
pub const CALLBACK_CHANNEL_MESSAGE: u8 = 4;
/// Callback type: deferred channel message (acknowledge now, answer later)
pub const CALLBACK_DEFERRED_CHANNEL_MESSAGE: u8 = 5;

/// Message flag: visible only to the invoking user
pub const MESSAGE_FLAG_EPHEMERAL: u32 = 1 << 6;

/// Application-command option type: string
pub const OPTION_TYPE_STRING: u8 = 3;

// ── Incoming interactions ───────────────────────────────────────

/// An interaction event delivered to the interactions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,
    /// Continuation token for responding to this interaction
    pub token: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub data: Option<InteractionData>,
    /// Present when invoked from a guild
    #[serde(default)]
    pub member: Option<GuildMember>,
    /// Present when invoked from a DM
    #[serde(default)]
    pub user: Option<InteractionUser>,
}

impl Interaction {
    /// The invoking user's snowflake, wherever the payload carries it
    #[must_use]
    pub fn invoker_id(&self) -> Option<&str> {
        self.member
            .as_ref()
            .map(|m| m.user.id.as_str())
            .or_else(|| self.user.as_ref().map(|u| u.id.as_str()))
    }
}

/// Command payload of an application-command interaction
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOptionValue>,
}

impl InteractionData {
    /// Value of a string option, if supplied
    #[must_use]
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .and_then(|o| o.value.as_str())
    }
}

/// A single supplied option value
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOptionValue {
    pub name: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuildMember {
    pub user: InteractionUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionUser {
    pub id: String,
}

// ── Outgoing responses ──────────────────────────────────────────

/// Response to an interaction, sent to the callback endpoint
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionCallbackData>,
}

impl InteractionResponse {
    /// Pong, answering an endpoint-validation ping
    #[must_use]
    pub const fn pong() -> Self {
        Self {
            kind: CALLBACK_PONG,
            data: None,
        }
    }

    /// Immediate text message
    #[must_use]
    pub fn message(content: impl Into<String>, ephemeral: bool) -> Self {
        Self {
            kind: CALLBACK_CHANNEL_MESSAGE,
            data: Some(InteractionCallbackData {
                content: Some(content.into()),
                embeds: Vec::new(),
                flags: ephemeral.then_some(MESSAGE_FLAG_EPHEMERAL),
            }),
        }
    }

    /// Acknowledge now; the answer follows as a webhook message
    #[must_use]
    pub const fn deferred() -> Self {
        Self {
            kind: CALLBACK_DEFERRED_CHANNEL_MESSAGE,
            data: None,
        }
    }
}

/// Message body of an interaction response
#[derive(Debug, Clone, Default, Serialize)]
pub struct InteractionCallbackData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
}

/// Follow-up or edit payload sent through the interaction webhook
#[derive(Debug, Clone, Default, Serialize)]
pub struct FollowUpMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
}

impl FollowUpMessage {
    /// A follow-up carrying one embed
    #[must_use]
    pub fn embed(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
            ..Self::default()
        }
    }

    /// A text follow-up visible only to the invoking user
    #[must_use]
    pub fn ephemeral_text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            flags: Some(MESSAGE_FLAG_EPHEMERAL),
            ..Self::default()
        }
    }
}

// ── Embeds ──────────────────────────────────────────────────────

/// Rich embed for visual messages
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    /// Accent color as 0xRRGGBB
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

/// Small thumbnail image for an embed
#[derive(Debug, Clone, Serialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

/// Key-value field of an embed
#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Embed footer line
#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

// ── Command definitions ─────────────────────────────────────────

/// An application command to register
#[derive(Debug, Clone, Serialize)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

/// One argument of an application command
#[derive(Debug, Clone, Serialize)]
pub struct CommandOption {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// A command as echoed back by the registration endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredCommand {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pong_serializes_to_bare_type() {
        let json = serde_json::to_value(InteractionResponse::pong()).unwrap();
        assert_eq!(json, serde_json::json!({ "type": 1 }));
    }

    #[test]
    fn ephemeral_message_carries_the_flag() {
        let json = serde_json::to_value(InteractionResponse::message("wait", true)).unwrap();
        assert_eq!(json["type"], 4);
        assert_eq!(json["data"]["content"], "wait");
        assert_eq!(json["data"]["flags"], 64);
    }

    #[test]
    fn public_message_has_no_flags() {
        let json = serde_json::to_value(InteractionResponse::message("hi", false)).unwrap();
        assert!(json["data"].get("flags").is_none());
    }

    #[test]
    fn deferred_response_has_type_five() {
        let json = serde_json::to_value(InteractionResponse::deferred()).unwrap();
        assert_eq!(json, serde_json::json!({ "type": 5 }));
    }

    #[test]
    fn string_option_lookup() {
        let data: InteractionData = serde_json::from_value(serde_json::json!({
            "name": "weather",
            "options": [
                { "name": "city", "value": "London" },
                { "name": "country", "value": "GB" }
            ]
        }))
        .unwrap();

        assert_eq!(data.string_option("city"), Some("London"));
        assert_eq!(data.string_option("country"), Some("GB"));
        assert_eq!(data.string_option("missing"), None);
    }

    #[test]
    fn invoker_id_prefers_guild_member() {
        let interaction: Interaction = serde_json::from_value(serde_json::json!({
            "id": "123",
            "token": "tok",
            "type": 2,
            "member": { "user": { "id": "42" } },
            "user": { "id": "7" }
        }))
        .unwrap();

        assert_eq!(interaction.invoker_id(), Some("42"));
    }

    #[test]
    fn invoker_id_falls_back_to_dm_user() {
        let interaction: Interaction = serde_json::from_value(serde_json::json!({
            "id": "123",
            "token": "tok",
            "type": 2,
            "user": { "id": "7" }
        }))
        .unwrap();

        assert_eq!(interaction.invoker_id(), Some("7"));
    }

    #[test]
    fn embed_skips_empty_optionals() {
        let embed = Embed {
            title: "t".to_string(),
            description: "d".to_string(),
            color: 0xf1_c40f,
            timestamp: None,
            thumbnail: None,
            fields: Vec::new(),
            footer: None,
        };
        let json = serde_json::to_value(embed).unwrap();
        assert!(json.get("thumbnail").is_none());
        assert!(json.get("fields").is_none());
        assert!(json.get("footer").is_none());
    }
}
