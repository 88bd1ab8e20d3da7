//! Shared fixtures: an in-memory database running the real migrations,
//! plus seed shortcuts that go through the public db API.
#![allow(dead_code)]

use std::str::FromStr;

use galley::db::{menu_items, order_items, orders, staff, tables};
use shared::models::{DiningTableCreate, MenuItemCreate, StaffCreate, TableType};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Fresh in-memory pool with foreign keys on and migrations applied.
///
/// A single never-recycled connection keeps every query on the same
/// in-memory database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .pragma("foreign_keys", "ON");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub async fn seed_menu_item(pool: &SqlitePool, name: &str, price: f64) -> i64 {
    menu_items::create(
        pool,
        &MenuItemCreate {
            name: name.to_string(),
            description: None,
            price,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_table(pool: &SqlitePool, name: &str) -> i64 {
    tables::create(
        pool,
        &DiningTableCreate {
            name: name.to_string(),
            table_type: Some(TableType::Standard),
        },
    )
    .await
    .unwrap()
    .id
}

/// Password is always "hunter2".
pub async fn seed_staff(pool: &SqlitePool, name: &str, username: &str) -> i64 {
    staff::create(
        pool,
        &StaffCreate {
            name: name.to_string(),
            role: "Waiter".to_string(),
            username: username.to_string(),
            password: "hunter2".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

/// Open an order on the table with one line of `quantity` × the menu item.
pub async fn seed_active_order(
    pool: &SqlitePool,
    table_id: i64,
    menu_item_id: i64,
    quantity: i32,
) -> i64 {
    let order_id = orders::create(pool, table_id).await.unwrap();
    order_items::add(pool, order_id, menu_item_id, quantity)
        .await
        .unwrap();
    order_id
}
