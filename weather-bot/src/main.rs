//! Binary crate for the weather Telegram bot.
//!
//! This crate focuses on:
//! - Startup (env, logging, configuration)
//! - Wiring teloxide updates to the core dispatcher

use std::sync::Arc;

use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use weather_core::{Config, OpenWeatherProvider};

mod bot;

use bot::{Command, SharedProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();

    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Missing credentials are fatal: the process must not come up.
    let config = Config::from_env()?;

    let provider: SharedProvider = Arc::new(OpenWeatherProvider::new(config.api_key.clone()));
    let telegram = Bot::new(config.bot_token.clone());

    match telegram.set_my_commands(Command::bot_commands()).await {
        Ok(_) => log::info!("Командное меню бота обновлено"),
        Err(e) => log::error!("Не удалось установить команды бота: {e}"),
    }

    log::info!("🤖 Бот погоды запущен...");

    Dispatcher::builder(telegram, bot::schema())
        .dependencies(dptree::deps![provider])
        .default_handler(|upd| async move {
            log::warn!("Необработанное обновление: {upd:?}");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Ошибка в обработчике обновления",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
