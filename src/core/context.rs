//! The injected context handle owning the vehicle registry, the trip log
//! and the user list. The store is loaded once on open and written back
//! after every successful mutation; all mutation goes through the methods
//! on [`Fleet`].

use bcrypt::{DEFAULT_COST, hash};
use chrono::Local;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::trip_log::TripLog;
use crate::models::user::User;
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::store::{ActivityEntry, Store, StoreData};

pub struct Fleet {
    pub(crate) store: Store,
    pub(crate) data: StoreData,
    pub(crate) session: Option<User>,
}

impl Fleet {
    /// Open the store with default settings, seeding on first run.
    pub fn open(store: Store) -> AppResult<Self> {
        Self::open_with_config(store, &Config::default())
    }

    /// Open the store at the location named by the configuration file.
    pub fn open_default() -> AppResult<Self> {
        let cfg = Config::load()?;
        Self::open_with_config(Store::new(&cfg.database), &cfg)
    }

    /// Open the store. When the file does not exist yet the demo registry
    /// is seeded (unless disabled); the default admin account is seeded
    /// whenever the user list is empty, so login is always possible.
    pub fn open_with_config(store: Store, cfg: &Config) -> AppResult<Self> {
        let first_run = !store.exists();
        let mut data = store.load()?;

        if first_run && cfg.seed_demo_data {
            seed_demo_vehicles(&mut data);
        }
        if data.users.is_empty() {
            data.users.push(default_admin()?);
        }

        let fleet = Self {
            store,
            data,
            session: None,
        };
        fleet.persist()?;
        Ok(fleet)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.data.master_vehicles
    }

    pub fn logs(&self) -> &[TripLog] {
        &self.data.vehicle_logs
    }

    pub fn users(&self) -> &[User] {
        &self.data.users
    }

    pub fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// Internal operation log, newest first.
    pub fn activity(&self) -> Vec<&ActivityEntry> {
        self.data.activity_log.iter().rev().collect()
    }

    pub(crate) fn persist(&self) -> AppResult<()> {
        self.store.save(&self.data)
    }

    pub(crate) fn record(&mut self, operation: &str, target: &str, message: impl Into<String>) {
        self.data.activity_log.push(ActivityEntry {
            timestamp: Local::now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.into(),
        });
    }

    pub(crate) fn next_log_id(&self) -> i64 {
        next_id(self.data.vehicle_logs.iter().map(|l| l.id))
    }

    pub(crate) fn next_vehicle_id(&self) -> i64 {
        next_id(self.data.master_vehicles.iter().map(|v| v.id))
    }

    pub(crate) fn next_user_id(&self) -> i64 {
        next_id(self.data.users.iter().map(|u| u.id))
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

fn default_admin() -> AppResult<User> {
    Ok(User {
        id: 1,
        username: "admin".to_string(),
        password_hash: hash("admin", DEFAULT_COST)?,
    })
}

fn seed_demo_vehicles(data: &mut StoreData) {
    data.master_vehicles = vec![
        Vehicle {
            id: 1,
            license_plate: "B 1234 ABC".to_string(),
            sub_branch: "Bogor".to_string(),
            driver_name: "John Doe".to_string(),
            status: VehicleStatus::Delivery,
        },
        Vehicle {
            id: 2,
            license_plate: "F 5678 XYZ".to_string(),
            sub_branch: "Sawangan".to_string(),
            driver_name: "Jane Smith".to_string(),
            status: VehicleStatus::SalesVan,
        },
    ];
}
