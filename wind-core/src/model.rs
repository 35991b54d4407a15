use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// A point on the globe. Values are passed to the remote API verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Hartsfield-Jackson Atlanta airport.
    pub const DEFAULT: Coordinate = Coordinate { latitude: 33.64, longitude: -84.43 };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// UTC hour key in the `YYYYMMDD:HH` form used by NASA POWER.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HourTimestamp(String);

impl HourTimestamp {
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self(instant.format("%Y%m%d:%H").to_string())
    }

    pub fn current(clock: &dyn Clock) -> Self {
        Self::from_instant(clock.now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HourTimestamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HourTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wind at 10 meters. `None` means the value was not available, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindReading {
    pub speed_mps: Option<f64>,
    pub direction_deg: Option<f64>,
}

impl WindReading {
    pub const ABSENT: WindReading = WindReading { speed_mps: None, direction_deg: None };

    pub fn is_complete(&self) -> bool {
        self.speed_mps.is_some() && self.direction_deg.is_some()
    }
}

/// Result of a single fetch that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub enum WindOutcome {
    /// Both series had a numeric value for the requested hour.
    Available { timestamp: HourTimestamp, reading: WindReading },

    /// The server answered, but at least one series lacked the hour.
    MissingData { timestamp: HourTimestamp, reading: WindReading },

    /// The server answered with a non-2xx status.
    RemoteUnavailable { status: u16, body: String },
}

impl WindOutcome {
    pub(crate) fn from_reading(timestamp: HourTimestamp, reading: WindReading) -> Self {
        if reading.is_complete() {
            WindOutcome::Available { timestamp, reading }
        } else {
            WindOutcome::MissingData { timestamp, reading }
        }
    }

    /// Collapse into the plain pair; remote failures become [`WindReading::ABSENT`].
    pub fn reading(&self) -> WindReading {
        match self {
            WindOutcome::Available { reading, .. } | WindOutcome::MissingData { reading, .. } => {
                *reading
            }
            WindOutcome::RemoteUnavailable { .. } => WindReading::ABSENT,
        }
    }
}
