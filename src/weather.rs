use reqwest::StatusCode;
use tracing::{debug, error, info, instrument, warn};

use crate::{config::WeatherConfig, error::AppError};

mod response;

pub use response::{ConditionDescriptor, MainMeasurements, Sys, WeatherPayload, Wind};

// The API is always asked for Celsius and m/s
const UNITS: &str = "metric";

/// A validated city name for one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Trims the raw input; an empty result is rejected before any request is made.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let city = input.trim();
        if city.is_empty() {
            return Err(AppError::EmptyCity);
        }
        Ok(Self {
            city: city.to_string(),
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// HTTP client for the OpenWeather current weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn request_url(&self, query: &WeatherQuery) -> String {
        format!(
            "{}?q={}&appid={}&units={}",
            self.config.base_url,
            urlencoding::encode(query.city()),
            urlencoding::encode(&self.config.api_key),
            UNITS
        )
    }

    /// Fetches current weather for the queried city.
    ///
    /// # Returns
    /// * `Some(WeatherPayload)` for a successful response, `None` when the body is JSON `null`
    /// * `AppError::CityNotFound` for a 404 response
    /// * A fetch error for any other status, a transport failure or an undecodable body
    ///
    /// A single attempt is made; failures are never retried.
    #[instrument(skip_all, fields(city = %query.city()))]
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<Option<WeatherPayload>, AppError> {
        info!("Fetching weather data for city: {}", query.city());

        let response = self
            .client
            .get(self.request_url(query))
            .send()
            .await
            .map_err(|e| {
                // the url carries the credential
                let e = e.without_url();
                error!("Weather request failed: {}", e);
                e
            })?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await.map_err(reqwest::Error::without_url)?;
            let payload: Option<WeatherPayload> = serde_json::from_slice(&body)
                .inspect_err(|e| error!("Failed to parse weather data: {}", e))?;
            debug!("Weather data fetched successfully: {:?}", payload);
            Ok(payload)
        } else if status == StatusCode::NOT_FOUND {
            warn!("City not found: {}", query.city());
            Err(AppError::CityNotFound)
        } else {
            error!("Failed to fetch weather data: {}", status);
            Err(AppError::UnexpectedStatus(status))
        }
    }
}
