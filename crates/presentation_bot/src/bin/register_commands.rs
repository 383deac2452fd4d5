//! Slash-command provisioning
//!
//! Registers the bot's command set without starting the server. Global
//! registration can take up to an hour to propagate; configure a guild id
//! for instant guild-scoped registration while testing.

use anyhow::Context;
use integration_discord::{CommandScope, DiscordClientConfig, DiscordRestClient, command_set};
use presentation_bot::BotConfig;
use secrecy::ExposeSecret;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "register_commands=info,integration_discord=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BotConfig::load().context("Failed to load configuration")?;

    // Registration only needs the Discord credentials
    let missing: Vec<&str> = config
        .missing_credentials()
        .into_iter()
        .filter(|name| *name != "WEATHER_API_KEY")
        .collect();
    if !missing.is_empty() {
        anyhow::bail!("Missing required credentials: {}", missing.join(", "));
    }

    let bot_token = config.discord.bot_token.clone().context("bot token")?;
    let application_id = config
        .discord
        .application_id
        .clone()
        .context("application id")?;

    let client = DiscordRestClient::new(DiscordClientConfig {
        bot_token: bot_token.expose_secret().to_string(),
        application_id,
        api_version: config.discord.api_version.clone(),
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize Discord client: {e}"))?;

    let commands = command_set();
    info!(count = commands.len(), "🔄 Refreshing application (/) commands...");

    let scope = config
        .discord
        .guild_id
        .clone()
        .map_or(CommandScope::Global, CommandScope::Guild);

    let registered = client
        .register_commands(&commands, &scope)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to register commands: {e}"))?;

    let names: Vec<&str> = registered.iter().map(|c| c.name.as_str()).collect();
    info!(
        count = registered.len(),
        commands = %names.join(", "),
        "✅ Commands registered"
    );

    if scope == CommandScope::Global {
        info!("💡 Global commands may take up to an hour to appear in Discord.");
        info!("💡 For instant testing, set GUILD_ID for guild-scoped registration.");
    }

    Ok(())
}
