//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap current-weather API
//! (<https://openweathermap.org/current>). Requires an API key; one
//! bounded-timeout request per lookup, no retries.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, OpenWeatherConfig, WeatherClient, WeatherError};
pub use models::CurrentConditions;
