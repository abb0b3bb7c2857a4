use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::utils::time::format_duration;

/// One row of the trip log.
///
/// `license_plate` is a soft reference into the vehicle registry: the join
/// happens by plate at read time, and a log entry outlives its vehicle's
/// deletion. An entry is "open" until a return is recorded, then closed
/// exactly once and never reopened.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripLog {
    pub id: i64,
    pub license_plate: String,
    pub departure_time: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_time: Option<DateTime<Local>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_odometer: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_odometer: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl TripLog {
    pub fn is_open(&self) -> bool {
        self.return_time.is_none()
    }

    /// Kilometers covered by the trip, `None` until both odometer readings
    /// exist. A negative result can surface from hand-edited store data
    /// and is reported as-is.
    pub fn distance(&self) -> Option<i64> {
        match (self.departure_odometer, self.return_odometer) {
            (Some(out_km), Some(in_km)) => Some(i64::from(in_km) - i64::from(out_km)),
            _ => None,
        }
    }

    /// Formatted trip duration, `None` while the trip is open.
    pub fn duration(&self) -> Option<String> {
        self.return_time
            .map(|end| format_duration(self.departure_time, end))
    }
}
