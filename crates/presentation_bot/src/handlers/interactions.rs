//! Interactions endpoint handler
//!
//! Receives interaction events, answers pings inline, and dispatches
//! slash-command invocations to the command service. Request signature
//! verification happens at the fronting edge before traffic reaches this
//! endpoint.

use std::sync::Arc;

use application::WeatherCommand;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::UserId;
use integration_discord::{
    Interaction, InteractionResponse,
    models::{INTERACTION_TYPE_APPLICATION_COMMAND, INTERACTION_TYPE_PING},
};
use tracing::{debug, error, info, instrument, warn};

use crate::{adapters::DiscordInteractionResponder, state::AppState};

/// Interaction events (POST)
#[instrument(skip(state, interaction), fields(kind = interaction.kind))]
pub async fn handle_interaction(
    State(state): State<AppState>,
    Json(interaction): Json<Interaction>,
) -> Response {
    match interaction.kind {
        INTERACTION_TYPE_PING => {
            debug!("Answering interaction ping");
            Json(InteractionResponse::pong()).into_response()
        }
        INTERACTION_TYPE_APPLICATION_COMMAND => dispatch_command(&state, interaction),
        other => {
            warn!(kind = other, "Unsupported interaction type");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

/// Route a command interaction to its handler task
fn dispatch_command(state: &AppState, interaction: Interaction) -> Response {
    let Some(data) = interaction.data.clone() else {
        warn!("Command interaction without a data payload");
        return StatusCode::BAD_REQUEST.into_response();
    };

    if data.name != "weather" {
        warn!(command = %data.name, "Unknown command");
        return StatusCode::BAD_REQUEST.into_response();
    }

    let Some(user) = interaction.invoker_id().and_then(|id| UserId::parse(id).ok()) else {
        warn!("Command interaction without a resolvable invoker");
        return StatusCode::BAD_REQUEST.into_response();
    };

    let command = WeatherCommand {
        user,
        city: data.string_option("city").unwrap_or_default().to_string(),
        country: data.string_option("country").map(str::to_string),
    };

    let responder = DiscordInteractionResponder::new(
        Arc::clone(&state.discord),
        interaction.id,
        interaction.token,
    );
    let service = Arc::clone(&state.command_service);

    info!(user = %command.user, city = %command.city, "Dispatching weather command");

    // Each invocation runs as its own task; a delivery failure (e.g. an
    // invalidated interaction token) stays contained to that invocation.
    tokio::spawn(async move {
        if let Err(e) = service.handle(command, &responder).await {
            error!(error = %e, "Failed to deliver interaction response");
        }
    });

    StatusCode::ACCEPTED.into_response()
}
