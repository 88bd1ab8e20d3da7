//! Payment recording and history.
//!
//! [`settle`] is the whole money movement for a table: resolve the
//! active order, total it from captured prices, check the tendered
//! amount, then insert the payment, complete the order and free the
//! table in one transaction. A failure at any point leaves no partial
//! state behind.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderItem, Payment, PaymentMethod};
use shared::query::{PageRequest, PaginatedResponse};
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::money;

/// Outcome of a successful settlement.
#[derive(Debug, Clone)]
pub struct Settlement {
    pub payment_id: i64,
    pub order_id: i64,
    pub total: Decimal,
    pub change: Decimal,
}

/// Settle the table's active order with a tendered amount.
pub async fn settle(
    pool: &SqlitePool,
    table_id: i64,
    amount: f64,
    method: PaymentMethod,
) -> AppResult<Settlement> {
    money::validate_payment_amount(amount)?;

    let mut tx = pool.begin().await?;

    let order: Option<(i64,)> = sqlx::query_as(
        "SELECT id FROM orders WHERE table_id = ? AND status = 'Active' ORDER BY id DESC LIMIT 1",
    )
    .bind(table_id)
    .fetch_optional(&mut *tx)
    .await?;
    let Some((order_id,)) = order else {
        return Err(AppError::with_message(
            ErrorCode::NoActiveOrder,
            format!("No active order found for Table {table_id}."),
        ));
    };

    let items: Vec<OrderItem> = sqlx::query_as(
        "SELECT id, order_id, menu_item_id, quantity, price FROM order_items WHERE order_id = ?",
    )
    .bind(order_id)
    .fetch_all(&mut *tx)
    .await?;
    let total = money::order_total(&items);
    if total <= Decimal::ZERO {
        return Err(AppError::with_message(
            ErrorCode::OrderEmpty,
            "Order total is zero. Cannot process payment.",
        ));
    }
    if !money::is_payment_sufficient(amount, total) {
        return Err(AppError::with_message(
            ErrorCode::PaymentInsufficientAmount,
            format!(
                "Payment of {} is less than total due {}. Please pay the full amount.",
                money::format_money(amount),
                money::format_money(money::to_f64(total)),
            ),
        ));
    }
    let change = (money::to_decimal(amount) - total).max(Decimal::ZERO);

    let result = sqlx::query(
        "INSERT INTO payments (order_id, method, paid_amount, paid_at) VALUES (?, ?, ?, ?)",
    )
    .bind(order_id)
    .bind(method)
    .bind(amount)
    .bind(now_millis())
    .execute(&mut *tx)
    .await?;
    let payment_id = result.last_insert_rowid();

    sqlx::query("UPDATE orders SET status = 'Completed' WHERE id = ?")
        .bind(order_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE dining_tables SET status = 'Available' WHERE id = ?")
        .bind(table_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!(payment_id, order_id, table_id, amount, method = %method, "payment settled");

    Ok(Settlement {
        payment_id,
        order_id,
        total,
        change,
    })
}

/// Payment history, most recent first.
pub async fn history(pool: &SqlitePool, req: PageRequest) -> AppResult<PaginatedResponse<Payment>> {
    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM payments")
        .fetch_one(pool)
        .await?;
    let req = req.clamp(total as u64);

    let rows: Vec<Payment> = sqlx::query_as(
        "SELECT id, order_id, method, paid_amount, paid_at
         FROM payments
         ORDER BY paid_at DESC, id DESC
         LIMIT ? OFFSET ?",
    )
    .bind(req.limit as i64)
    .bind(req.offset())
    .fetch_all(pool)
    .await?;

    Ok(PaginatedResponse::new(rows, total as u64, req))
}

/// Payment row with its order and table context. The context columns
/// come through LEFT JOINs and render as N/A when missing.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PaymentDetail {
    pub id: i64,
    pub order_id: i64,
    pub method: String,
    pub paid_amount: f64,
    pub paid_at: i64,
    pub table_id: Option<i64>,
    pub table_name: Option<String>,
    pub table_type: Option<String>,
    pub opened_at: Option<i64>,
    pub order_status: Option<String>,
}

pub async fn detail(pool: &SqlitePool, payment_id: i64) -> AppResult<PaymentDetail> {
    sqlx::query_as(
        "SELECT p.id, p.order_id, p.method, p.paid_amount, p.paid_at,
                o.table_id, t.name AS table_name, t.table_type,
                o.opened_at, o.status AS order_status
         FROM payments p
         LEFT JOIN orders o ON o.id = p.order_id
         LEFT JOIN dining_tables t ON t.id = o.table_id
         WHERE p.id = ?",
    )
    .bind(payment_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| super::payment_not_found(payment_id))
}
