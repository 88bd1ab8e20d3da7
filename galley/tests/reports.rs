//! Report aggregates over seeded sales.

mod common;

use common::{seed_active_order, seed_menu_item, seed_table, test_pool};
use chrono::NaiveDate;
use galley::db::{menu_items, order_items, orders, payments, reports};
use shared::models::{MenuItemUpdate, PaymentMethod};

#[tokio::test]
async fn test_daily_report_zero_for_quiet_day() {
    let pool = test_pool().await;

    let sales = reports::daily_sales(&pool, NaiveDate::from_ymd_opt(2001, 1, 1).unwrap())
        .await
        .unwrap();
    assert_eq!(sales.payments, 0);
    assert_eq!(sales.revenue, 0.0);
}

#[tokio::test]
async fn test_daily_report_counts_todays_payments() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;
    let item_id = seed_menu_item(&pool, "Cake", 6.0).await;
    seed_active_order(&pool, table_id, item_id, 1).await;
    payments::settle(&pool, table_id, 10.0, PaymentMethod::Cash)
        .await
        .unwrap();

    // Timestamps are UTC millis, so "today" is the UTC calendar day.
    let today = chrono::Utc::now().date_naive();
    let sales = reports::daily_sales(&pool, today).await.unwrap();
    assert_eq!(sales.payments, 1);
    assert_eq!(sales.revenue, 10.0);

    let yesterday = today.pred_opt().unwrap();
    let sales = reports::daily_sales(&pool, yesterday).await.unwrap();
    assert_eq!(sales.payments, 0);
}

#[tokio::test]
async fn test_method_report_groups_and_sorts_by_revenue() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;
    let item_id = seed_menu_item(&pool, "Soda", 2.0).await;

    for (amount, method) in [
        (10.0, PaymentMethod::Cash),
        (30.0, PaymentMethod::Card),
        (5.0, PaymentMethod::Cash),
    ] {
        seed_active_order(&pool, table_id, item_id, 1).await;
        payments::settle(&pool, table_id, amount, method).await.unwrap();
    }

    let rows = reports::sales_by_method(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].method, "Card");
    assert_eq!(rows[0].transactions, 1);
    assert_eq!(rows[0].revenue, 30.0);
    assert_eq!(rows[1].method, "Cash");
    assert_eq!(rows[1].transactions, 2);
    assert_eq!(rows[1].revenue, 15.0);
}

#[tokio::test]
async fn test_items_report_empty() {
    let pool = test_pool().await;
    let rows = reports::top_selling_items(&pool).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_items_report_uses_captured_prices() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;
    let burger = seed_menu_item(&pool, "Burger", 8.0).await;
    let cola = seed_menu_item(&pool, "Cola", 2.0).await;

    let order_id = orders::create(&pool, table_id).await.unwrap();
    order_items::add(&pool, order_id, burger, 1).await.unwrap();
    order_items::add(&pool, order_id, cola, 3).await.unwrap();

    // A later catalog edit must not move recorded revenue.
    menu_items::update(
        &pool,
        burger,
        &MenuItemUpdate {
            name: None,
            description: None,
            price: Some(100.0),
        },
    )
    .await
    .unwrap();

    let rows = reports::top_selling_items(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Cola");
    assert_eq!(rows[0].quantity_sold, 3);
    assert_eq!(rows[0].revenue, 6.0);
    assert_eq!(rows[1].name, "Burger");
    assert_eq!(rows[1].quantity_sold, 1);
    assert_eq!(rows[1].revenue, 8.0);
}
