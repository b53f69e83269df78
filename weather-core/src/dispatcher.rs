//! Maps inbound chat commands and free text to outbound reply text.
//!
//! Plain functions with no framework types in their signatures: the bot
//! frontend feeds them strings and a [`WeatherProvider`], so they are
//! testable with a canned provider.

use crate::model::WeatherReport;
use crate::provider::{LookupError, WeatherProvider};

/// City used when `/weather` is sent without an argument.
pub const DEFAULT_CITY: &str = "Saint Petersburg";

const CITY_NOT_FOUND_REPLY: &str = "❌ Город не найден. Проверьте название города.";
const LOOKUP_FAILED_REPLY: &str = "❌ Произошла ошибка при получении погоды.";

/// Greeting for `/start`, personalized with the sender's display name.
pub fn start_text(first_name: &str) -> String {
    format!(
        "Привет, {first_name}! 🌤️\n\
         \n\
         Я бот погоды. Вот что я умею:\n\
         \n\
         /start - начать работу\n\
         /help - помощь\n\
         /weather - погода в Санкт-Петербурге\n\
         /weather <город> - погода в любом городе\n\
         \n\
         Например: /weather Москва"
    )
}

/// Command reference for `/help`.
pub fn help_text() -> String {
    "📋 Доступные команды:\n\
     \n\
     /start - начать работу\n\
     /help - помощь\n\
     /weather - погода в Санкт-Петербурге\n\
     /weather <город> - погода в указанном городе\n\
     \n\
     🌤️ Примеры:\n\
     /weather\n\
     /weather Москва\n\
     /weather London"
        .to_string()
}

/// Handle `/weather [city]`.
///
/// Both failure branches are absorbed here: the user sees a fixed apology,
/// never an error value, and only the generic branch logs the detail.
pub async fn weather_reply(provider: &dyn WeatherProvider, argument_text: &str) -> String {
    let city = resolve_city(argument_text);

    match provider.current_weather(&city).await {
        Ok(report) => format_report(&report),
        Err(LookupError::CityNotFound { .. }) => CITY_NOT_FOUND_REPLY.to_string(),
        Err(LookupError::Other(err)) => {
            log::error!("Weather lookup for '{city}' failed: {err:#}");
            LOOKUP_FAILED_REPLY.to_string()
        }
    }
}

/// Reply to a plain text message.
///
/// Keyword priority (weather before greeting) follows the original bot
/// behavior and must not be reordered.
pub fn free_text_reply(text: &str) -> String {
    let lower = text.to_lowercase();

    if lower.contains("погода") {
        "Используйте команду /weather для получения погоды 🌤️".to_string()
    } else if lower.contains("привет") {
        "Привет! 👋 Используйте /help для списка команд".to_string()
    } else {
        "Не понял вас... Используйте /help для списка команд".to_string()
    }
}

fn resolve_city(argument_text: &str) -> String {
    let city = argument_text.split_whitespace().collect::<Vec<_>>().join(" ");
    if city.is_empty() {
        DEFAULT_CITY.to_string()
    } else {
        city
    }
}

fn format_report(report: &WeatherReport) -> String {
    format!(
        "🌤️ Погода в {city}:\n\
         \n\
         📝 Состояние: {description}\n\
         🌡️ Температура: {temp}°C\n\
         💧 Влажность: {humidity}%\n\
         🌬️ Давление: {pressure} гПа\n\
         💨 Ветер: {wind} м/с\n\
         🌅 Восход: {sunrise}\n\
         🌇 Закат: {sunset}",
        city = report.city,
        description = report.description,
        temp = report.temperature_c,
        humidity = report.humidity_pct,
        pressure = report.pressure_hpa,
        wind = report.wind_speed_mps,
        sunrise = report.sunrise_local,
        sunset = report.sunset_local,
    )
}
