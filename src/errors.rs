//! Unified application error type.
//! All modules (store, core, export, config) return AppError so the
//! embedding interface has one recoverable error surface to map onto
//! user-facing messages.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Store serialization error: {0}")]
    Store(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Registry errors
    // ---------------------------
    #[error("A vehicle with license plate {0} already exists")]
    DuplicatePlate(String),

    #[error("No vehicle found with id {0}")]
    VehicleNotFound(i64),

    // ---------------------------
    // Trip lifecycle errors
    // ---------------------------
    #[error("A license plate must be selected")]
    EmptyPlate,

    #[error("A trip purpose must be given")]
    EmptyPurpose,

    #[error("No open trip found for license plate {0}")]
    NoOpenTrip(String),

    #[error("return time may not precede departure time")]
    TimeRegression,

    #[error("return odometer may not be lower than departure odometer")]
    OdometerRegression,

    // ---------------------------
    // Account errors
    // ---------------------------
    #[error("Username {0} is already taken")]
    DuplicateUsername(String),

    #[error("No user found with id {0}")]
    UserNotFound(i64),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("The admin account cannot be deleted")]
    AdminAccount,

    #[error("The account of the active session cannot be deleted")]
    OwnAccount,

    #[error("Password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
