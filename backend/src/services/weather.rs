//! Weather service producing risk-annotated snapshots

use crate::external::weather::WeatherClient;
use shared::{build_snapshot, GpsCoordinates, WeatherSnapshot};

/// Weather service over the forecast API client
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Fetch current conditions and derive the risk overlay.
    ///
    /// Any fetch failure (network, timeout, malformed response) means
    /// no snapshot is available; risk data is never fabricated.
    pub async fn current_snapshot(&self, location: GpsCoordinates) -> Option<WeatherSnapshot> {
        match self.client.get_current_conditions(location).await {
            Ok(current) => Some(build_snapshot(
                current.temperature_2m,
                current.relative_humidity_2m,
                current.weather_code,
            )),
            Err(e) => {
                tracing::warn!("Weather advisory unavailable: {}", e);
                None
            }
        }
    }
}
