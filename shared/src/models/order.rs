//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle state
///
/// `Active -> Completed` and `Active -> Cancelled` are the only
/// transitions; both terminal states are final.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum OrderStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub table_id: i64,
    /// Creation timestamp (epoch millis), immutable
    pub opened_at: i64,
    pub status: OrderStatus,
}
