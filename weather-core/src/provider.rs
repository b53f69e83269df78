use crate::model::WeatherReport;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// How a weather lookup can fail, as seen by the dispatcher.
///
/// `CityNotFound` is the user's problem (bad city name) and gets its own
/// apology; everything else is ours and is reported generically while the
/// detail goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("provider rejected the city query with status {status}")]
    CityNotFound { status: reqwest::StatusCode },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Abstraction over the weather data source.
///
/// The dispatcher only sees this trait, so tests can supply a canned
/// implementation instead of the real HTTP client.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, LookupError>;
}
