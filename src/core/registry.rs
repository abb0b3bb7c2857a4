//! Master vehicle registry operations.

use crate::core::context::Fleet;
use crate::errors::{AppError, AppResult};
use crate::models::vehicle::{Vehicle, VehicleStatus, normalize_plate};

impl Fleet {
    /// Register a new vehicle. The plate is trimmed and upper-cased before
    /// the uniqueness check; the newest entry goes first in the list.
    pub fn add_vehicle(
        &mut self,
        license_plate: &str,
        sub_branch: &str,
        driver_name: &str,
        status: VehicleStatus,
    ) -> AppResult<Vehicle> {
        let plate = normalize_plate(license_plate);
        if self
            .data
            .master_vehicles
            .iter()
            .any(|v| v.license_plate == plate)
        {
            return Err(AppError::DuplicatePlate(plate));
        }

        let vehicle = Vehicle {
            id: self.next_vehicle_id(),
            license_plate: plate,
            sub_branch: sub_branch.to_string(),
            driver_name: driver_name.to_string(),
            status,
        };
        self.data.master_vehicles.insert(0, vehicle.clone());

        self.record(
            "vehicle-add",
            &vehicle.license_plate,
            format!("registered for {}", vehicle.sub_branch),
        );
        self.persist()?;
        Ok(vehicle)
    }

    /// Update a registry entry in place. The uniqueness check skips the
    /// record being updated.
    pub fn update_vehicle(
        &mut self,
        id: i64,
        license_plate: &str,
        sub_branch: &str,
        driver_name: &str,
        status: VehicleStatus,
    ) -> AppResult<Vehicle> {
        let plate = normalize_plate(license_plate);
        if self
            .data
            .master_vehicles
            .iter()
            .any(|v| v.license_plate == plate && v.id != id)
        {
            return Err(AppError::DuplicatePlate(plate));
        }

        let vehicle = self
            .data
            .master_vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(AppError::VehicleNotFound(id))?;
        vehicle.license_plate = plate;
        vehicle.sub_branch = sub_branch.to_string();
        vehicle.driver_name = driver_name.to_string();
        vehicle.status = status;
        let updated = vehicle.clone();

        self.record(
            "vehicle-edit",
            &updated.license_plate,
            "registry entry updated",
        );
        self.persist()?;
        Ok(updated)
    }

    /// Remove a vehicle unconditionally. Trip logs for its plate stay in
    /// the log, open ones included; history joins render the missing
    /// vehicle as "-". An unknown id is a no-op.
    pub fn remove_vehicle(&mut self, id: i64) -> AppResult<()> {
        let before = self.data.master_vehicles.len();
        self.data.master_vehicles.retain(|v| v.id != id);
        if self.data.master_vehicles.len() == before {
            return Ok(());
        }

        self.record("vehicle-del", &id.to_string(), "registry entry removed");
        self.persist()
    }
}
