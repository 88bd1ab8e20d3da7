//! Sales report aggregates.
//!
//! Each report is a single aggregate query. Item revenue sums captured
//! line prices, never the live catalog, so edits after the fact do not
//! move past revenue.

use chrono::NaiveDate;
use shared::error::AppResult;
use sqlx::SqlitePool;

/// Payment count and revenue for one calendar day.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailySales {
    pub payments: i64,
    pub revenue: f64,
}

pub async fn daily_sales(pool: &SqlitePool, date: NaiveDate) -> AppResult<DailySales> {
    let row = sqlx::query_as(
        "SELECT COUNT(*) AS payments, COALESCE(SUM(paid_amount), 0.0) AS revenue
         FROM payments
         WHERE DATE(paid_at / 1000, 'unixepoch') = ?",
    )
    .bind(date)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Transactions and revenue grouped by payment method.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MethodSales {
    pub method: String,
    pub transactions: i64,
    pub revenue: f64,
}

pub async fn sales_by_method(pool: &SqlitePool) -> AppResult<Vec<MethodSales>> {
    let rows = sqlx::query_as(
        "SELECT method, COUNT(*) AS transactions, COALESCE(SUM(paid_amount), 0.0) AS revenue
         FROM payments
         GROUP BY method
         ORDER BY revenue DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Units sold and revenue per menu item.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ItemSales {
    pub name: String,
    pub quantity_sold: i64,
    pub revenue: f64,
}

/// All-time sales per menu item, best sellers first.
pub async fn top_selling_items(pool: &SqlitePool) -> AppResult<Vec<ItemSales>> {
    let rows = sqlx::query_as(
        "SELECT m.name,
                COALESCE(SUM(oi.quantity), 0) AS quantity_sold,
                COALESCE(SUM(oi.quantity * oi.price), 0.0) AS revenue
         FROM order_items oi
         JOIN menu_items m ON m.id = oi.menu_item_id
         GROUP BY oi.menu_item_id
         ORDER BY quantity_sold DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
