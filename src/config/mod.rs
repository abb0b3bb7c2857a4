use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON data store.
    pub database: String,
    /// Seed the two demo vehicles when the store file does not exist yet.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fleetlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fleetlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fleetlog.conf")
    }

    /// Return the full path of the JSON data store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("fleetlog.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Write the configuration file, creating the config directory if needed
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }
}
