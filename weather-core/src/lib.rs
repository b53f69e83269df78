//! Core library for the weather Telegram bot.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - The command dispatcher (command/free-text → reply text)
//!
//! It is used by `weather-bot`, but carries no Telegram types itself, so the
//! dispatcher can be exercised in tests with a fake provider.

pub mod config;
pub mod dispatcher;
pub mod model;
pub mod provider;

pub use config::Config;
pub use model::WeatherReport;
pub use provider::{LookupError, WeatherProvider, openweather::OpenWeatherProvider};
