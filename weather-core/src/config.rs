use anyhow::{Context, Result, anyhow};
use std::env;

/// Process-wide configuration, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token (`BOT_TOKEN`).
    pub bot_token: String,

    /// OpenWeatherMap API key (`API_KEY`).
    pub api_key: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Both variables are required; a missing or empty one is a startup
    /// error and the process must not come up without it.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            bot_token: require(&lookup, "BOT_TOKEN")?,
            api_key: require(&lookup, "API_KEY")?,
        })
    }
}

fn require(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    let value = lookup(name)
        .with_context(|| format!("Missing required environment variable {name}"))?;

    if value.trim().is_empty() {
        return Err(anyhow!("Environment variable {name} is set but empty"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn loads_both_credentials() {
        let cfg = Config::from_lookup(fake_env(&[("BOT_TOKEN", "123:abc"), ("API_KEY", "ow-key")]))
            .expect("both variables present");

        assert_eq!(cfg.bot_token, "123:abc");
        assert_eq!(cfg.api_key, "ow-key");
    }

    #[test]
    fn missing_bot_token_is_fatal() {
        let err = Config::from_lookup(fake_env(&[("API_KEY", "ow-key")])).unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Config::from_lookup(fake_env(&[("BOT_TOKEN", "123:abc")])).unwrap_err();
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn empty_value_is_rejected() {
        let err = Config::from_lookup(fake_env(&[("BOT_TOKEN", "  "), ("API_KEY", "ow-key")]))
            .unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
