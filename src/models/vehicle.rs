use serde::{Deserialize, Serialize};

/// Normalize a license plate the way the registry stores it: trimmed and
/// upper-cased.
pub fn normalize_plate(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Vehicle classification. A closed set: every consumer matches
/// exhaustively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[default]
    Delivery,
    #[serde(rename = "Sales Van")]
    SalesVan,
}

impl VehicleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Delivery => "Delivery",
            VehicleStatus::SalesVan => "Sales Van",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Delivery" => Some(VehicleStatus::Delivery),
            "Sales Van" => Some(VehicleStatus::SalesVan),
            _ => None,
        }
    }
}

/// Master registry entry. `license_plate` is unique across the registry
/// and always stored normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub license_plate: String,
    pub sub_branch: String,
    pub driver_name: String,
    // Records written before the status column existed default to Delivery.
    #[serde(default)]
    pub status: VehicleStatus,
}
