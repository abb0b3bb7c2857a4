//! Durable JSON store for the fleet data.
//!
//! One document, four keys: `vehicleLogs`, `masterVehicles`, `users` and
//! `activityLog`, each an array of plain records. Timestamps travel as
//! ISO-8601 strings. An absent or empty file loads as defaults; missing
//! keys and missing optional fields are tolerated on load.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::trip_log::TripLog;
use crate::models::user::User;
use crate::models::vehicle::Vehicle;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(rename = "vehicleLogs", default)]
    pub vehicle_logs: Vec<TripLog>,
    #[serde(rename = "masterVehicles", default)]
    pub master_vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(rename = "activityLog", default)]
    pub activity_log: Vec<ActivityEntry>,
}

/// One line of the internal operation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the whole document.
    pub fn load(&self) -> AppResult<StoreData> {
        if !self.path.exists() {
            return Ok(StoreData::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StoreData::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the whole document back, creating parent directories on the
    /// first save.
    pub fn save(&self, data: &StoreData) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
