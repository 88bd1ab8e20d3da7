//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY). Enums stored as TEXT
//! derive `sqlx::Type` with their exact column encodings.

pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod staff;

// Re-exports
pub use dining_table::*;
pub use menu_item::*;
pub use order::*;
pub use order_item::*;
pub use payment::*;
pub use staff::*;
