use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{Local, TimeZone};
use reqwest::Client;
use serde::Deserialize;

use crate::model::WeatherReport;

use super::{LookupError, WeatherProvider};

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "ru"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        if !status.is_success() {
            // The provider answers an unknown city with an error status;
            // mirror that 1:1 so the user gets the "check spelling" reply.
            return Err(LookupError::CityNotFound { status });
        }

        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        Ok(report_from_body(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

fn report_from_body(body: &str) -> Result<WeatherReport> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).context("Failed to parse OpenWeather current JSON")?;

    let description = parsed
        .weather
        .first()
        .map(|w| capitalize_first(&w.description))
        .ok_or_else(|| anyhow!("OpenWeather response contained no weather conditions"))?;

    Ok(WeatherReport {
        city: parsed.name,
        description,
        temperature_c: parsed.main.temp,
        humidity_pct: parsed.main.humidity,
        pressure_hpa: parsed.main.pressure,
        wind_speed_mps: parsed.wind.speed,
        sunrise_local: local_hm(parsed.sys.sunrise),
        sunset_local: local_hm(parsed.sys.sunset),
    })
}

/// Format Unix epoch seconds as "HH:MM" in the host's local timezone.
fn local_hm(ts: i64) -> String {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Uppercase the first character; the provider sends lowercased Russian
/// descriptions ("облачно с прояснениями").
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    const SAMPLE_BODY: &str = r#"{
        "name": "Saint Petersburg",
        "weather": [{"description": "облачно с прояснениями"}],
        "main": {"temp": 5.3, "humidity": 87, "pressure": 1012},
        "wind": {"speed": 4.1},
        "sys": {"sunrise": 1717200900, "sunset": 1717266000}
    }"#;

    #[test]
    fn parses_current_weather_body() {
        let report = report_from_body(SAMPLE_BODY).expect("sample body must parse");

        assert_eq!(report.city, "Saint Petersburg");
        assert_eq!(report.description, "Облачно с прояснениями");
        assert_eq!(report.temperature_c, 5.3);
        assert_eq!(report.humidity_pct, 87);
        assert_eq!(report.pressure_hpa, 1012);
        assert_eq!(report.wind_speed_mps, 4.1);
        assert_eq!(report.sunrise_local, local_hm(1717200900));
        assert_eq!(report.sunset_local, local_hm(1717266000));
    }

    #[test]
    fn missing_weather_entry_is_an_error() {
        let body = r#"{
            "name": "Nowhere",
            "weather": [],
            "main": {"temp": 0.0, "humidity": 50, "pressure": 1000},
            "wind": {"speed": 1.0},
            "sys": {"sunrise": 0, "sunset": 0}
        }"#;

        let err = report_from_body(body).unwrap_err();
        assert!(err.to_string().contains("no weather conditions"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = report_from_body("{not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn local_hm_formats_in_host_timezone() {
        let sunrise = Local
            .with_ymd_and_hms(2024, 6, 1, 6, 15, 0)
            .single()
            .expect("valid local time")
            .timestamp();
        let sunset = Local
            .with_ymd_and_hms(2024, 6, 1, 21, 40, 0)
            .single()
            .expect("valid local time")
            .timestamp();

        assert_eq!(local_hm(sunrise), "06:15");
        assert_eq!(local_hm(sunset), "21:40");
    }

    #[test]
    fn capitalize_first_handles_cyrillic_and_empty() {
        assert_eq!(capitalize_first("облачно"), "Облачно");
        assert_eq!(capitalize_first("clear sky"), "Clear sky");
        assert_eq!(capitalize_first(""), "");
    }
}
