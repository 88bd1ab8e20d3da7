//! Menu catalog, table management and staff directory behavior,
//! including the referential policies between them.

mod common;

use common::{seed_active_order, seed_menu_item, seed_staff, seed_table, test_pool};
use galley::db::{menu_items, orders, staff, tables};
use shared::error::ErrorCode;
use shared::models::{
    DiningTableUpdate, MenuItemCreate, MenuItemUpdate, StaffCreate, StaffUpdate, TableStatus,
    TableType,
};
use shared::query::PageRequest;

#[tokio::test]
async fn test_menu_create_rejects_invalid_input() {
    let pool = test_pool().await;

    let err = menu_items::create(
        &pool,
        &MenuItemCreate {
            name: "   ".into(),
            description: None,
            price: 5.0,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::RequiredField);

    let err = menu_items::create(
        &pool,
        &MenuItemCreate {
            name: "Free lunch".into(),
            description: None,
            price: 0.0,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
}

#[tokio::test]
async fn test_menu_update_keeps_unset_fields() {
    let pool = test_pool().await;
    let id = seed_menu_item(&pool, "Pasta", 11.0).await;

    let updated = menu_items::update(
        &pool,
        id,
        &MenuItemUpdate {
            name: None,
            description: Some("House special".into()),
            price: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Pasta");
    assert_eq!(updated.description.as_deref(), Some("House special"));
    assert_eq!(updated.price, 11.0);
}

#[tokio::test]
async fn test_menu_update_rejects_bad_price() {
    let pool = test_pool().await;
    let id = seed_menu_item(&pool, "Pasta", 11.0).await;

    let err = menu_items::update(
        &pool,
        id,
        &MenuItemUpdate {
            name: None,
            description: None,
            price: Some(-1.0),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
    assert_eq!(menu_items::get(&pool, id).await.unwrap().price, 11.0);
}

#[tokio::test]
async fn test_menu_list_clamps_page() {
    let pool = test_pool().await;
    for i in 0..12 {
        seed_menu_item(&pool, &format!("Dish {i}"), 1.0 + i as f64).await;
    }

    let page = menu_items::list(&pool, PageRequest::new(99, 10)).await.unwrap();
    assert_eq!(page.total, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.data.len(), 2);
}

#[tokio::test]
async fn test_menu_delete_restricted_when_on_order() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;
    let item_id = seed_menu_item(&pool, "Steak", 25.0).await;
    seed_active_order(&pool, table_id, item_id, 1).await;

    let err = menu_items::delete(&pool, item_id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemInUse);
    assert!(menu_items::get(&pool, item_id).await.is_ok());
}

#[tokio::test]
async fn test_menu_delete_unreferenced() {
    let pool = test_pool().await;
    let item_id = seed_menu_item(&pool, "Special", 5.0).await;

    menu_items::delete(&pool, item_id).await.unwrap();

    let err = menu_items::get(&pool, item_id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemNotFound);
}

#[tokio::test]
async fn test_table_delete_restricted_with_order_history() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;
    let item_id = seed_menu_item(&pool, "Soup", 4.0).await;
    let order_id = seed_active_order(&pool, table_id, item_id, 1).await;
    orders::cancel(&pool, order_id).await.unwrap();

    // Even a closed order keeps the table on record.
    let err = tables::delete(&pool, table_id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::TableHasOrders);
}

#[tokio::test]
async fn test_table_delete_without_orders() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "Spare").await;

    tables::delete(&pool, table_id).await.unwrap();

    let err = tables::get(&pool, table_id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::TableNotFound);
}

#[tokio::test]
async fn test_table_reset_clears_status_and_assignment() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;
    let staff_id = seed_staff(&pool, "Bo", "bo").await;
    tables::assign_staff(&pool, table_id, staff_id).await.unwrap();
    tables::set_status(&pool, table_id, TableStatus::Broken).await.unwrap();

    tables::reset(&pool, table_id).await.unwrap();

    let table = tables::get(&pool, table_id).await.unwrap();
    assert_eq!(table.status, TableStatus::Available);
    assert_eq!(table.staff_id, None);
}

#[tokio::test]
async fn test_table_list_shows_assigned_staff_name() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;
    seed_table(&pool, "T2").await;
    let staff_id = seed_staff(&pool, "Bo", "bo").await;
    tables::assign_staff(&pool, table_id, staff_id).await.unwrap();

    let rows = tables::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].staff_name.as_deref(), Some("Bo"));
    assert_eq!(rows[1].staff_name, None);
}

#[tokio::test]
async fn test_list_available_excludes_other_statuses() {
    let pool = test_pool().await;
    let free = seed_table(&pool, "Free").await;
    let busy = seed_table(&pool, "Busy").await;
    let broken = seed_table(&pool, "Broken").await;
    orders::create(&pool, busy).await.unwrap();
    tables::set_status(&pool, broken, TableStatus::Broken).await.unwrap();

    let rows = tables::list_available(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, free);
}

#[tokio::test]
async fn test_assign_unknown_staff() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;

    let err = tables::assign_staff(&pool, table_id, 404).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StaffNotFound);
    assert_eq!(tables::get(&pool, table_id).await.unwrap().staff_id, None);
}

#[tokio::test]
async fn test_table_update_keeps_unset_fields() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;
    let staff_id = seed_staff(&pool, "Bo", "bo").await;

    let updated = tables::update(
        &pool,
        table_id,
        &DiningTableUpdate {
            name: None,
            table_type: Some(TableType::Vip),
            status: None,
            staff_id: Some(staff_id),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "T1");
    assert_eq!(updated.table_type, TableType::Vip);
    assert_eq!(updated.status, TableStatus::Available);
    assert_eq!(updated.staff_id, Some(staff_id));
}

#[tokio::test]
async fn test_table_update_rejects_unknown_staff() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;

    let err = tables::update(
        &pool,
        table_id,
        &DiningTableUpdate {
            name: Some("Patio".into()),
            table_type: None,
            status: None,
            staff_id: Some(404),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::StaffNotFound);
    // the statement fails as a whole, so the name edit is discarded too
    let table = tables::get(&pool, table_id).await.unwrap();
    assert_eq!(table.name, "T1");
    assert_eq!(table.staff_id, None);
}

#[tokio::test]
async fn test_staff_delete_clears_table_assignment() {
    let pool = test_pool().await;
    let table_id = seed_table(&pool, "T1").await;
    let staff_id = seed_staff(&pool, "Ana", "ana").await;
    tables::assign_staff(&pool, table_id, staff_id).await.unwrap();
    assert_eq!(
        tables::get(&pool, table_id).await.unwrap().staff_id,
        Some(staff_id)
    );

    staff::delete(&pool, staff_id).await.unwrap();

    assert_eq!(tables::get(&pool, table_id).await.unwrap().staff_id, None);
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let pool = test_pool().await;
    seed_staff(&pool, "Ana", "ana").await;

    let err = staff::create(
        &pool,
        &StaffCreate {
            name: "Other".into(),
            role: "Cashier".into(),
            username: "ana".into(),
            password: "pw".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::StaffUsernameExists);
}

#[tokio::test]
async fn test_login_verification() {
    let pool = test_pool().await;
    seed_staff(&pool, "Ana", "ana").await;

    let found = staff::verify_login(&pool, "ana", "hunter2").await.unwrap();
    assert_eq!(found.unwrap().username, "ana");

    assert!(staff::verify_login(&pool, "ana", "wrong").await.unwrap().is_none());
    assert!(staff::verify_login(&pool, "ghost", "hunter2").await.unwrap().is_none());
}

#[tokio::test]
async fn test_staff_update_password_only_when_set() {
    let pool = test_pool().await;
    let staff_id = seed_staff(&pool, "Ana", "ana").await;

    // No password in the payload leaves the credential untouched.
    let updated = staff::update(
        &pool,
        staff_id,
        &StaffUpdate {
            name: Some("Ana Maria".into()),
            role: None,
            username: None,
            password: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.role, "Waiter");
    assert!(staff::verify_login(&pool, "ana", "hunter2").await.unwrap().is_some());

    staff::update(
        &pool,
        staff_id,
        &StaffUpdate {
            name: None,
            role: None,
            username: None,
            password: Some("newpass".into()),
        },
    )
    .await
    .unwrap();
    assert!(staff::verify_login(&pool, "ana", "hunter2").await.unwrap().is_none());
    assert!(staff::verify_login(&pool, "ana", "newpass").await.unwrap().is_some());
}

#[tokio::test]
async fn test_staff_not_found_errors() {
    let pool = test_pool().await;

    let err = staff::get(&pool, 7).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StaffNotFound);
    let err = staff::delete(&pool, 7).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StaffNotFound);
}
