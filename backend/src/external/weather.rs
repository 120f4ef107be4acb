//! Weather API client for fetching current conditions
//!
//! Integrates with an Open-Meteo-compatible forecast endpoint

use reqwest::Client;
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use shared::GpsCoordinates;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

/// Current observation fields consumed by the risk evaluator
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub weather_code: i32,
}

/// Open-Meteo forecast response envelope
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
}

impl WeatherClient {
    /// Create a new WeatherClient.
    ///
    /// The request timeout (5 s by default) doubles as the abort bound;
    /// a timed-out fetch is indistinguishable from any other failure.
    pub fn new(config: &WeatherConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Create a new WeatherClient with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch current conditions by GPS coordinates
    pub async fn get_current_conditions(
        &self,
        location: GpsCoordinates,
    ) -> AppResult<CurrentConditions> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current=temperature_2m,relative_humidity_2m,weather_code",
            self.base_url, location.latitude, location.longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| AppError::WeatherServiceUnavailable)?;

        if !response.status().is_success() {
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: ForecastResponse = response
            .json()
            .await
            .map_err(|_| AppError::WeatherServiceUnavailable)?;

        // A response without the `current` block is as useless as no
        // response at all
        data.current.ok_or(AppError::WeatherServiceUnavailable)
    }
}
