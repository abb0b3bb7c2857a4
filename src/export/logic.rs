//! High-level export logic over the history projection.

use std::collections::HashMap;
use std::path::Path;

use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::model::HistoryExport;
use crate::export::pdf::write_pdf;
use crate::models::trip_log::TripLog;
use crate::models::vehicle::Vehicle;
use crate::utils::time::format_date_time;

pub struct ExportLogic;

impl ExportLogic {
    /// Join completed trips to their registry entries. A plate with no
    /// registry record renders "-" in the vehicle columns.
    pub fn build_rows(history: &[&TripLog], vehicles: &[Vehicle]) -> Vec<HistoryExport> {
        let details: HashMap<&str, &Vehicle> = vehicles
            .iter()
            .map(|v| (v.license_plate.as_str(), v))
            .collect();

        history
            .iter()
            .map(|log| {
                let vehicle = details.get(log.license_plate.as_str());
                HistoryExport {
                    license_plate: log.license_plate.clone(),
                    sub_branch: vehicle.map_or("-".to_string(), |v| v.sub_branch.clone()),
                    driver_name: vehicle.map_or("-".to_string(), |v| v.driver_name.clone()),
                    status: vehicle.map_or("-".to_string(), |v| v.status.label().to_string()),
                    departure_time: format_date_time(&log.departure_time),
                    return_time: log
                        .return_time
                        .as_ref()
                        .map_or("-".to_string(), format_date_time),
                    departure_km: log
                        .departure_odometer
                        .map_or("-".to_string(), |km| km.to_string()),
                    return_km: log
                        .return_odometer
                        .map_or("-".to_string(), |km| km.to_string()),
                    distance: log.distance().map_or("-".to_string(), |d| d.to_string()),
                    duration: log.duration().unwrap_or_else(|| "-".to_string()),
                    purpose: log.purpose.clone().unwrap_or_else(|| "-".to_string()),
                }
            })
            .collect()
    }

    pub fn export_csv(history: &[&TripLog], vehicles: &[Vehicle], path: &Path) -> AppResult<()> {
        let rows = Self::build_rows(history, vehicles);
        write_csv(path, &rows)
    }

    pub fn export_pdf(
        history: &[&TripLog],
        vehicles: &[Vehicle],
        path: &Path,
        title: &str,
    ) -> AppResult<()> {
        let rows = Self::build_rows(history, vehicles);
        write_pdf(path, title, &rows)
    }
}
