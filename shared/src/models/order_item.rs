//! Order Item Model

use serde::{Deserialize, Serialize};

/// Order line item
///
/// `price` is captured from the menu item at insert time and never
/// re-read, so totals survive later catalog price changes. Repeated
/// additions of the same menu item insert separate rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub quantity: i32,
    /// Unit price at the time the item was added
    pub price: f64,
}
