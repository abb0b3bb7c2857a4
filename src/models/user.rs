use serde::{Deserialize, Serialize};

/// Login account. Only the bcrypt hash of the password is stored; a legacy
/// record without a hash can never authenticate until it is updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub password_hash: String,
}
