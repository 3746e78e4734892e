//! OpenWeather current-conditions client

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::state::WeatherSnapshot;

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum WeatherError {
    #[error("missing OpenWeather API key")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather service returned {0}")]
    Status(StatusCode),
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("response had no weather condition")]
    MissingCondition,
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    main: MainBlock,
    weather: Vec<ConditionBlock>,
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    id: u16,
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

impl CurrentResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, WeatherError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingCondition)?;
        Ok(WeatherSnapshot {
            location: self.name,
            temperature: self.main.temp,
            condition_code: condition.id,
            description: condition.description,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
        })
    }
}

// ============================================================================
// Client
// ============================================================================

#[derive(Clone, Debug)]
pub struct WeatherClient {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::new_with_base_url(api_key, DEFAULT_WEATHER_URL)
    }

    pub fn new_with_base_url(api_key: Option<String>, base_url: &str) -> Self {
        Self::with_timeout(api_key, base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(api_key: Option<String>, base_url: &str, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http,
        }
    }

    /// Current conditions at the given coordinates, in imperial units.
    pub async fn fetch_current(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, WeatherError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(WeatherError::MissingApiKey)?;

        let url = format!("{}/data/2.5/weather", self.base_url);
        tracing::debug!(lat, lon, "requesting current weather");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", "imperial".to_string()),
                ("appid", api_key.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let body = response.text().await?;
        let parsed: CurrentResponse = serde_json::from_str(&body)?;
        let snapshot = parsed.into_snapshot()?;

        tracing::info!(
            location = %snapshot.location,
            code = snapshot.condition_code,
            "weather loaded"
        );
        Ok(snapshot)
    }
}
