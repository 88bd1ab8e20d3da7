//! Dining Table Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical table category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum TableType {
    #[default]
    Standard,
    #[serde(rename = "VIP")]
    #[cfg_attr(feature = "db", sqlx(rename = "VIP"))]
    Vip,
    Outdoor,
}

impl TableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Vip => "VIP",
            Self::Outdoor => "Outdoor",
        }
    }

    /// Case-insensitive parse from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "vip" => Some(Self::Vip),
            "outdoor" => Some(Self::Outdoor),
            _ => None,
        }
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table availability state
///
/// `Occupied` mirrors "an active order exists for this table"; the order
/// lifecycle flips it inside the same transaction as the order write.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Broken,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Broken => "Broken",
        }
    }

    /// Case-insensitive parse from user input.
    ///
    /// "unoccupied" is accepted as an alias for `Available`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" | "unoccupied" => Some(Self::Available),
            "occupied" => Some(Self::Occupied),
            "broken" => Some(Self::Broken),
            _ => None,
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    pub table_type: TableType,
    pub status: TableStatus,
    /// Assigned staff member, if any
    pub staff_id: Option<i64>,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub name: String,
    pub table_type: Option<TableType>,
}

/// Update dining table payload (None keeps the current value)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub name: Option<String>,
    pub table_type: Option<TableType>,
    pub status: Option<TableStatus>,
    pub staff_id: Option<i64>,
}
