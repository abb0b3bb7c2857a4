//! Depart / return transitions of the trip state machine.
//!
//! Per plate the conceptual states are Available and OnTrip: a departure
//! opens a log entry, a return closes it. Validation fully precedes
//! mutation in both operations, so a failed call leaves the log untouched.

use chrono::{DateTime, Local};

use crate::core::context::Fleet;
use crate::errors::{AppError, AppResult};
use crate::models::trip_log::TripLog;
use crate::models::vehicle::normalize_plate;

impl Fleet {
    /// Record a vehicle leaving the garage and open a new trip log entry.
    ///
    /// The plate is stored verbatim: callers pass the plate of a registry
    /// entry, which is already normalized. Only [`Fleet::return_trip`]
    /// normalizes its input, so a free-typed lower-case plate here would
    /// not be matched at check-in.
    ///
    /// A plate that already has an open trip is not rejected; check-out
    /// forms only offer vehicles that are not on trip.
    pub fn depart(
        &mut self,
        license_plate: &str,
        departure_time: DateTime<Local>,
        departure_odometer: u32,
        purpose: &str,
    ) -> AppResult<TripLog> {
        if license_plate.is_empty() {
            return Err(AppError::EmptyPlate);
        }
        if purpose.trim().is_empty() {
            return Err(AppError::EmptyPurpose);
        }

        let log = TripLog {
            id: self.next_log_id(),
            license_plate: license_plate.to_string(),
            departure_time,
            return_time: None,
            departure_odometer: Some(departure_odometer),
            return_odometer: None,
            purpose: Some(purpose.to_string()),
        };

        // Most recent trip first.
        self.data.vehicle_logs.insert(0, log.clone());

        self.record(
            "depart",
            &log.license_plate,
            format!("left at {} km", departure_odometer),
        );
        self.persist()?;
        Ok(log)
    }

    /// Record a vehicle returning to the garage, closing its open trip log
    /// entry in place. Ordering and every other field are preserved; a
    /// closed entry is never reopened.
    ///
    /// The checks short-circuit in order: empty plate, no open trip for
    /// the normalized plate, return time before departure, return odometer
    /// below departure. Equal time and equal odometer are both accepted.
    pub fn return_trip(
        &mut self,
        license_plate: &str,
        return_time: DateTime<Local>,
        return_odometer: u32,
    ) -> AppResult<TripLog> {
        let plate = normalize_plate(license_plate);
        if plate.is_empty() {
            return Err(AppError::EmptyPlate);
        }

        // Should more than one open entry exist for the plate, the first
        // one in log order (the most recent departure) is the one closed.
        let idx = self
            .data
            .vehicle_logs
            .iter()
            .position(|log| log.license_plate == plate && log.is_open())
            .ok_or_else(|| AppError::NoOpenTrip(plate.clone()))?;

        let open = &self.data.vehicle_logs[idx];
        if return_time < open.departure_time {
            return Err(AppError::TimeRegression);
        }
        if let Some(out_km) = open.departure_odometer
            && return_odometer < out_km
        {
            return Err(AppError::OdometerRegression);
        }

        let log = &mut self.data.vehicle_logs[idx];
        log.return_time = Some(return_time);
        log.return_odometer = Some(return_odometer);
        let closed = log.clone();

        self.record(
            "return",
            &closed.license_plate,
            format!("back at {} km", return_odometer),
        );
        self.persist()?;
        Ok(closed)
    }
}
