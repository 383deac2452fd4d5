//! Weatherbot server
//!
//! Main entry point: loads configuration, fails fast on missing
//! credentials, registers the slash-command set, and serves the
//! interactions endpoint.

use std::sync::Arc;

use anyhow::Context;
use application::WeatherCommandService;
use integration_discord::{CommandScope, DiscordClientConfig, DiscordRestClient, command_set};
use presentation_bot::{AppState, BotConfig, adapters::WeatherAdapter, routes};
use secrecy::ExposeSecret;
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weatherbot=debug,presentation_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("⛅ Weatherbot v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration; absent mandatory credentials are fatal
    let config = BotConfig::load().context("Failed to load configuration")?;

    let missing = config.missing_credentials();
    if !missing.is_empty() {
        anyhow::bail!("Missing required credentials: {}", missing.join(", "));
    }

    // Presence checked above
    let bot_token = config.discord.bot_token.clone().context("bot token")?;
    let application_id = config
        .discord
        .application_id
        .clone()
        .context("application id")?;
    let api_key = config.weather.api_key.clone().context("weather api key")?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        units = %config.weather.units,
        cooldown_ms = config.limits.cooldown_ms,
        "Configuration loaded"
    );

    let discord = Arc::new(
        DiscordRestClient::new(DiscordClientConfig {
            bot_token: bot_token.expose_secret().to_string(),
            application_id,
            api_version: config.discord.api_version.clone(),
        })
        .map_err(|e| anyhow::anyhow!("Failed to initialize Discord client: {e}"))?,
    );

    let weather = WeatherAdapter::new(config.weather.client_config(&api_key))
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;

    let command_service = WeatherCommandService::new(
        Arc::new(weather),
        &config.command_limits(),
        config.formatter_config(),
    );

    // Keep the command set current; a registration failure is logged and
    // does not prevent serving (the provisioning binary can retry it)
    if config.discord.register_on_startup {
        let scope = config
            .discord
            .guild_id
            .clone()
            .map_or(CommandScope::Global, CommandScope::Guild);

        info!(scope = ?scope, "🔄 Registering slash commands...");
        match discord.register_commands(&command_set(), &scope).await {
            Ok(registered) => info!(count = registered.len(), "✅ Slash commands registered"),
            Err(e) => tracing::warn!(error = %e, "Failed to register slash commands"),
        }
    }

    let state = AppState {
        command_service: Arc::new(command_service),
        discord,
    };

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Interactions endpoint listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("🛑 Received Ctrl+C, shutting down gracefully...");
        }
        () = terminate => {
            info!("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}
