use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    clock::Clock,
    error::WindError,
    model::{Coordinate, HourTimestamp, WindOutcome, WindReading},
};

use super::WindProvider;

pub const NASA_POWER_WINDROSE_URL: &str =
    "https://power.larc.nasa.gov/api/application/windrose/point";

/// Wind speed at 10 meters, m/s.
const SPEED_SERIES: &str = "WS10M";
/// Wind direction at 10 meters, degrees.
const DIRECTION_SERIES: &str = "WD10M";

/// Hourly wind-rose point data from NASA POWER.
#[derive(Debug, Clone)]
pub struct NasaPowerProvider {
    endpoint: String,
    http: Client,
}

impl NasaPowerProvider {
    pub fn new() -> Self {
        Self::with_endpoint(NASA_POWER_WINDROSE_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), http }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for NasaPowerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WindProvider for NasaPowerProvider {
    async fn fetch_wind(
        &self,
        coordinate: Coordinate,
        clock: &dyn Clock,
    ) -> Result<WindOutcome, WindError> {
        let timestamp = HourTimestamp::current(clock);

        debug!(
            endpoint = %self.endpoint,
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            %timestamp,
            "requesting wind rose point"
        );

        let transport = |source| WindError::Transport { url: self.endpoint.clone(), source };

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("longitude", coordinate.longitude.to_string()),
                ("latitude", coordinate.latitude.to_string()),
                ("start", timestamp.to_string()),
                ("end", timestamp.to_string()),
                ("format", "JSON".to_string()),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        let body = res.text().await.map_err(transport)?;

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "NASA POWER request failed");
            return Ok(WindOutcome::RemoteUnavailable {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let data: Value = serde_json::from_str(&body).map_err(WindError::Decode)?;
        let reading = extract_reading(&data, &timestamp);

        if !reading.is_complete() {
            info!(%timestamp, ?reading, "wind data not published for this hour");
        }

        Ok(WindOutcome::from_reading(timestamp, reading))
    }
}

fn extract_reading(data: &Value, timestamp: &HourTimestamp) -> WindReading {
    WindReading {
        speed_mps: series_value(data, SPEED_SERIES, timestamp),
        direction_deg: series_value(data, DIRECTION_SERIES, timestamp),
    }
}

/// Anything other than a number under `data[series][timestamp]` counts as missing.
fn series_value(data: &Value, series: &str, timestamp: &HourTimestamp) -> Option<f64> {
    data.get(series)?.get(timestamp.as_str())?.as_f64()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
