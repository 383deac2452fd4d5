//! Bot presentation layer
//!
//! Wires the application services to their adapters: configuration,
//! the interactions endpoint, and the Discord/OpenWeatherMap clients.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::BotConfig;
pub use state::AppState;
