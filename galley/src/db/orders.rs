//! Order lifecycle storage.
//!
//! Every status change pairs with a table-status write, and the pair
//! always runs inside one transaction. The pre-write status check rides
//! the same transaction, so two racing commands cannot both claim a
//! table or both close an order.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderItem, OrderStatus, TableStatus};
use shared::query::{PageRequest, PaginatedResponse};
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::money;

/// Order row joined with its table name for listings.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderOverview {
    pub id: i64,
    pub table_name: String,
    pub status: OrderStatus,
    pub opened_at: i64,
}

/// Open a new order on an available table, flipping it to `Occupied`.
pub async fn create(pool: &SqlitePool, table_id: i64) -> AppResult<i64> {
    let mut tx = pool.begin().await?;

    let table: Option<(TableStatus,)> =
        sqlx::query_as("SELECT status FROM dining_tables WHERE id = ?")
            .bind(table_id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some((status,)) = table else {
        return Err(super::table_not_found(table_id));
    };
    if status == TableStatus::Occupied {
        return Err(AppError::with_message(
            ErrorCode::TableOccupied,
            format!("Table {table_id} is already occupied."),
        ));
    }

    let result =
        sqlx::query("INSERT INTO orders (table_id, opened_at, status) VALUES (?, ?, 'Active')")
            .bind(table_id)
            .bind(now_millis())
            .execute(&mut *tx)
            .await?;
    let order_id = result.last_insert_rowid();

    sqlx::query("UPDATE dining_tables SET status = 'Occupied' WHERE id = ?")
        .bind(table_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!(order_id, table_id, "order opened");
    Ok(order_id)
}

pub async fn list(pool: &SqlitePool, req: PageRequest) -> AppResult<PaginatedResponse<OrderOverview>> {
    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;
    let req = req.clamp(total as u64);

    let rows: Vec<OrderOverview> = sqlx::query_as(
        "SELECT o.id, t.name AS table_name, o.status, o.opened_at
         FROM orders o
         JOIN dining_tables t ON t.id = o.table_id
         ORDER BY o.id DESC
         LIMIT ? OFFSET ?",
    )
    .bind(req.limit as i64)
    .bind(req.offset())
    .fetch_all(pool)
    .await?;

    Ok(PaginatedResponse::new(rows, total as u64, req))
}

pub async fn get(pool: &SqlitePool, id: i64) -> AppResult<Order> {
    sqlx::query_as("SELECT id, table_id, opened_at, status FROM orders WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| super::order_not_found(id))
}

/// Complete an order and free its table. Returns the table id.
pub async fn complete(pool: &SqlitePool, order_id: i64) -> AppResult<i64> {
    finalize(pool, order_id, OrderStatus::Completed).await
}

/// Cancel an order and free its table. Returns the table id.
pub async fn cancel(pool: &SqlitePool, order_id: i64) -> AppResult<i64> {
    finalize(pool, order_id, OrderStatus::Cancelled).await
}

/// Move an `Active` order to a terminal status and free its table.
/// Terminal orders never change again.
async fn finalize(pool: &SqlitePool, order_id: i64, target: OrderStatus) -> AppResult<i64> {
    let mut tx = pool.begin().await?;

    let row: Option<(OrderStatus, i64)> =
        sqlx::query_as("SELECT status, table_id FROM orders WHERE id = ?")
            .bind(order_id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some((status, table_id)) = row else {
        return Err(super::order_not_found(order_id));
    };
    match status {
        OrderStatus::Completed => {
            return Err(AppError::with_message(
                ErrorCode::OrderAlreadyCompleted,
                format!("Order {order_id} is already completed."),
            ));
        }
        OrderStatus::Cancelled => {
            return Err(AppError::with_message(
                ErrorCode::OrderAlreadyCancelled,
                format!("Order {order_id} is already cancelled."),
            ));
        }
        OrderStatus::Active => {}
    }

    sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
        .bind(target)
        .bind(order_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE dining_tables SET status = 'Available' WHERE id = ?")
        .bind(table_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!(order_id, table_id, status = %target, "order closed");
    Ok(table_id)
}

/// Id of the table's `Active` order, if any.
pub async fn active_order_for_table(pool: &SqlitePool, table_id: i64) -> AppResult<Option<i64>> {
    let row: Option<(i64,)> = sqlx::query_as(
        "SELECT id FROM orders WHERE table_id = ? AND status = 'Active' ORDER BY id DESC LIMIT 1",
    )
    .bind(table_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|(id,)| id))
}

/// Total of the table's `Active` order, summed from captured line
/// prices. Zero when the table has no active order.
pub async fn total_for_table(pool: &SqlitePool, table_id: i64) -> AppResult<Decimal> {
    let items: Vec<OrderItem> = sqlx::query_as(
        "SELECT oi.id, oi.order_id, oi.menu_item_id, oi.quantity, oi.price
         FROM orders o
         JOIN order_items oi ON oi.order_id = o.id
         WHERE o.table_id = ? AND o.status = 'Active'",
    )
    .bind(table_id)
    .fetch_all(pool)
    .await?;

    Ok(money::order_total(&items))
}
