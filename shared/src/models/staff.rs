//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff member (without credentials)
///
/// The password hash never leaves the staff table; login verification
/// reads it directly in the db layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Staff {
    pub id: i64,
    pub name: String,
    /// Free-text role, e.g. Waiter / Cashier / Admin
    pub role: String,
    pub username: String,
}

/// Create staff payload
///
/// `password` is plaintext here only; the db layer hashes it before the
/// row is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub name: String,
    pub role: String,
    pub username: String,
    pub password: String,
}

/// Update staff payload (None keeps the current value)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
    /// Only set when the operator explicitly chose to change it
    pub password: Option<String>,
}
