use std::env;

use crate::error::AppError;

/// Current weather endpoint of the OpenWeather API
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

pub const API_KEY_VAR: &str = "WEATHER_API_KEY";
pub const BASE_URL_VAR: &str = "WEATHER_BASE_URL";

/// Connection settings for the weather API.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Endpoint queried with `?q=..&appid=..&units=metric`
    pub base_url: String,
    /// Static API credential sent as `appid`
    pub api_key: String,
}

impl WeatherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads `WEATHER_API_KEY` (required) and `WEATHER_BASE_URL` (optional).
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(API_KEY_VAR)
            .map_err(|_| AppError::EnvVarNotSet(API_KEY_VAR.to_string()))?;

        let config = Self::new(api_key);
        Ok(match env::var(BASE_URL_VAR) {
            Ok(base_url) if !base_url.trim().is_empty() => config.with_base_url(base_url.trim()),
            _ => config,
        })
    }
}
