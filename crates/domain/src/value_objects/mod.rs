//! Value Objects - Immutable, identity-less domain primitives

mod temperature;
mod user_id;
mod weather_query;

pub use temperature::{TemperatureTier, celsius_to_fahrenheit};
pub use user_id::UserId;
pub use weather_query::WeatherQuery;
