//! Database operations, one module per entity.
//!
//! Free async functions over the shared [`SqlitePool`](sqlx::SqlitePool),
//! returning `AppResult`. Reads are single statements; every paired write
//! (order + table status, payment + order completion) runs inside one
//! transaction so a failure cannot leave the pair half-applied.

use shared::error::{AppError, ErrorCode};

pub mod menu_items;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod reports;
pub mod staff;
pub mod tables;

pub(crate) fn is_fk_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

// Not-found constructors shared by the entity modules, so every command
// reports a missing row with the same wording.

pub(crate) fn menu_item_not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::MenuItemNotFound,
        format!("Menu item with ID {id} not found."),
    )
}

pub(crate) fn table_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::TableNotFound, format!("Table with ID {id} not found."))
}

pub(crate) fn order_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} does not exist."))
}

pub(crate) fn order_item_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::OrderItemNotFound, format!("Order item {id} not found."))
}

pub(crate) fn payment_not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::PaymentNotFound,
        format!("Payment with ID {id} not found."),
    )
}

pub(crate) fn staff_not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::StaffNotFound,
        format!("Staff member with ID {id} not found."),
    )
}
