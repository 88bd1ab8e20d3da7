//! Order line item storage.
//!
//! The unit price is copied from the menu item in the same transaction
//! that inserts the line, so later catalog edits never rewrite history.
//! Each addition inserts its own row, even for a menu item already on
//! the order.

use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::OrderItem;
use sqlx::SqlitePool;

use crate::money;

/// Line item joined with its menu item name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderItemLine {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl OrderItemLine {
    /// Captured price × quantity for this line.
    pub fn line_total(&self) -> Decimal {
        money::line_total(self.price, self.quantity)
    }
}

/// Sum of the line totals.
pub fn grand_total(lines: &[OrderItemLine]) -> Decimal {
    lines.iter().map(OrderItemLine::line_total).sum()
}

/// Add a menu item to an order, capturing the item's current price.
pub async fn add(
    pool: &SqlitePool,
    order_id: i64,
    menu_item_id: i64,
    quantity: i32,
) -> AppResult<OrderItem> {
    money::validate_quantity(quantity)?;

    let mut tx = pool.begin().await?;

    let menu: Option<(f64,)> = sqlx::query_as("SELECT price FROM menu_items WHERE id = ?")
        .bind(menu_item_id)
        .fetch_optional(&mut *tx)
        .await?;
    let Some((price,)) = menu else {
        return Err(super::menu_item_not_found(menu_item_id));
    };

    let result = sqlx::query(
        "INSERT INTO order_items (order_id, menu_item_id, quantity, price) VALUES (?, ?, ?, ?)",
    )
    .bind(order_id)
    .bind(menu_item_id)
    .bind(quantity)
    .bind(price)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        if super::is_fk_violation(&e) {
            super::order_not_found(order_id)
        } else {
            e.into()
        }
    })?;

    tx.commit().await?;

    Ok(OrderItem {
        id: result.last_insert_rowid(),
        order_id,
        menu_item_id,
        quantity,
        price,
    })
}

/// Lines of one order, in insert order.
pub async fn list_for_order(pool: &SqlitePool, order_id: i64) -> AppResult<Vec<OrderItemLine>> {
    let rows = sqlx::query_as(
        "SELECT oi.id, m.name, oi.quantity, oi.price
         FROM order_items oi
         JOIN menu_items m ON m.id = oi.menu_item_id
         WHERE oi.order_id = ?
         ORDER BY oi.id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn remove(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM order_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(super::order_item_not_found(id));
    }
    Ok(())
}

/// Change a line's quantity; the captured price stays untouched.
pub async fn update_quantity(pool: &SqlitePool, id: i64, quantity: i32) -> AppResult<()> {
    money::validate_quantity(quantity)?;

    let result = sqlx::query("UPDATE order_items SET quantity = ? WHERE id = ?")
        .bind(quantity)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(super::order_item_not_found(id));
    }
    Ok(())
}
