//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the presentation layer implement them.

mod interaction_port;
mod weather_port;

pub use interaction_port::{EmbedFieldView, InteractionResponder, WeatherEmbedView};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{WeatherLookupError, WeatherPort, WeatherReport};
