//! Derived views over the trip log and the registry.
//!
//! Everything here is pure and recomputed on each call; nothing caches.
//! Joins to the registry go through a plate lookup built fresh per
//! invocation, so a deleted vehicle simply stops matching.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::core::context::Fleet;
use crate::models::summary::DailySummary;
use crate::models::trip_log::TripLog;
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::date::{end_of_day, start_of_day, today};

/// Trips still out of the garage.
pub fn on_trip(logs: &[TripLog]) -> Vec<&TripLog> {
    logs.iter().filter(|log| log.is_open()).collect()
}

/// Completed trips.
pub fn history(logs: &[TripLog]) -> Vec<&TripLog> {
    logs.iter().filter(|log| !log.is_open()).collect()
}

/// Registry entries whose plate is not currently out on a trip.
pub fn available_vehicles<'a>(vehicles: &'a [Vehicle], logs: &[TripLog]) -> Vec<&'a Vehicle> {
    let out: HashSet<&str> = logs
        .iter()
        .filter(|log| log.is_open())
        .map(|log| log.license_plate.as_str())
        .collect();
    vehicles
        .iter()
        .filter(|v| !out.contains(v.license_plate.as_str()))
        .collect()
}

/// Roster counters for one calendar day. "Today" compares the local-time
/// year, month and day of the departure.
pub fn daily_summary(logs: &[TripLog], vehicles: &[Vehicle], reference: NaiveDate) -> DailySummary {
    DailySummary {
        departures_today: logs
            .iter()
            .filter(|log| log.departure_time.date_naive() == reference)
            .count(),
        on_trip_count: logs.iter().filter(|log| log.is_open()).count(),
        total_registered_vehicles: vehicles.len(),
    }
}

/// History filter panel input. All criteria are optional and combine with
/// AND.
#[derive(Debug, Default, Clone)]
pub struct HistoryFilter {
    /// Substring of the plate, matched case- and spacing-insensitively so
    /// "b1" finds "B 1234 ABC".
    pub plate: Option<String>,
    /// Keep entries departing on or after this day.
    pub from: Option<NaiveDate>,
    /// Keep entries departing on or before this day.
    pub to: Option<NaiveDate>,
    /// Keep entries whose registry record carries this status. Entries
    /// whose plate has no registry record are excluded while this is set.
    pub status: Option<VehicleStatus>,
}

pub fn filter_history<'a>(
    history: &[&'a TripLog],
    vehicles: &[Vehicle],
    filter: &HistoryFilter,
) -> Vec<&'a TripLog> {
    let details: HashMap<&str, &Vehicle> = vehicles
        .iter()
        .map(|v| (v.license_plate.as_str(), v))
        .collect();

    history
        .iter()
        .copied()
        .filter(|log| {
            if let Some(term) = &filter.plate {
                let needle = squash(term);
                if !needle.is_empty() && !squash(&log.license_plate).contains(&needle) {
                    return false;
                }
            }
            if let Some(from) = filter.from
                && log.departure_time < start_of_day(from)
            {
                return false;
            }
            if let Some(to) = filter.to
                && log.departure_time > end_of_day(to)
            {
                return false;
            }
            if let Some(status) = filter.status {
                match details.get(log.license_plate.as_str()) {
                    Some(v) if v.status == status => {}
                    _ => return false,
                }
            }
            true
        })
        .collect()
}

fn squash(plate: &str) -> String {
    plate
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

impl Fleet {
    pub fn on_trip(&self) -> Vec<&TripLog> {
        on_trip(self.logs())
    }

    pub fn history(&self) -> Vec<&TripLog> {
        history(self.logs())
    }

    pub fn available_vehicles(&self) -> Vec<&Vehicle> {
        available_vehicles(self.vehicles(), self.logs())
    }

    pub fn daily_summary(&self, reference: NaiveDate) -> DailySummary {
        daily_summary(self.logs(), self.vehicles(), reference)
    }

    pub fn daily_summary_today(&self) -> DailySummary {
        self.daily_summary(today())
    }

    pub fn filter_history(&self, filter: &HistoryFilter) -> Vec<&TripLog> {
        filter_history(&self.history(), self.vehicles(), filter)
    }
}
