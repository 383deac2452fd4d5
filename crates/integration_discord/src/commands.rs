//! Application-command definitions
//!
//! The bot's complete command set. Registration pushes this set as a bulk
//! overwrite, so re-registering an unchanged schema never duplicates
//! commands.

use crate::models::{CommandDefinition, CommandOption, OPTION_TYPE_STRING};

/// The `/weather` command: required city, optional country qualifier
#[must_use]
pub fn weather_command() -> CommandDefinition {
    CommandDefinition {
        name: "weather".to_string(),
        description: "Get current weather information for a city".to_string(),
        options: vec![
            CommandOption {
                kind: OPTION_TYPE_STRING,
                name: "city".to_string(),
                description: "The city name to get weather for".to_string(),
                required: true,
            },
            CommandOption {
                kind: OPTION_TYPE_STRING,
                name: "country".to_string(),
                description: "Country code (optional, e.g., US, UK, CA)".to_string(),
                required: false,
            },
        ],
    }
}

/// Every command the bot registers
#[must_use]
pub fn command_set() -> Vec<CommandDefinition> {
    vec![weather_command()]
}
