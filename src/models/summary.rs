use serde::Serialize;

/// Roster counters for one calendar day, shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub departures_today: usize,
    pub on_trip_count: usize,
    pub total_registered_vehicles: usize,
}
