//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Sellable menu item
///
/// `price` is the live catalog price. Order items capture their own copy
/// at insert time, so editing this value never rewrites history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Update menu item payload (None keeps the current value)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}
