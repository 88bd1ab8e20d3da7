//! Menu catalog storage.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::query::{PageRequest, PaginatedResponse};
use sqlx::SqlitePool;

use crate::money;

/// List menu items, clamping the requested page into range.
pub async fn list(pool: &SqlitePool, req: PageRequest) -> AppResult<PaginatedResponse<MenuItem>> {
    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM menu_items")
        .fetch_one(pool)
        .await?;
    let req = req.clamp(total as u64);

    let items: Vec<MenuItem> = sqlx::query_as(
        "SELECT id, name, description, price FROM menu_items ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(req.limit as i64)
    .bind(req.offset())
    .fetch_all(pool)
    .await?;

    Ok(PaginatedResponse::new(items, total as u64, req))
}

pub async fn get(pool: &SqlitePool, id: i64) -> AppResult<MenuItem> {
    sqlx::query_as("SELECT id, name, description, price FROM menu_items WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| super::menu_item_not_found(id))
}

pub async fn create(pool: &SqlitePool, data: &MenuItemCreate) -> AppResult<MenuItem> {
    if data.name.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "Name cannot be empty.",
        ));
    }
    money::validate_price(data.price)?;

    let result = sqlx::query("INSERT INTO menu_items (name, description, price) VALUES (?, ?, ?)")
        .bind(data.name.trim())
        .bind(&data.description)
        .bind(data.price)
        .execute(pool)
        .await?;

    get(pool, result.last_insert_rowid()).await
}

/// Partial update; `None` fields keep their current value.
pub async fn update(pool: &SqlitePool, id: i64, data: &MenuItemUpdate) -> AppResult<MenuItem> {
    if let Some(price) = data.price {
        money::validate_price(price)?;
    }

    let result = sqlx::query(
        "UPDATE menu_items SET
            name = COALESCE(?, name),
            description = COALESCE(?, description),
            price = COALESCE(?, price)
         WHERE id = ?",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(super::menu_item_not_found(id));
    }
    get(pool, id).await
}

/// Delete a menu item. Items referenced by order lines are kept for
/// history and the delete is refused.
pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM menu_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            if super::is_fk_violation(&e) {
                AppError::with_message(
                    ErrorCode::MenuItemInUse,
                    format!("Menu item {id} appears on existing orders and cannot be removed."),
                )
            } else {
                e.into()
            }
        })?;

    if result.rows_affected() == 0 {
        return Err(super::menu_item_not_found(id));
    }
    tracing::info!(menu_item_id = id, "menu item removed");
    Ok(())
}
