//! Dining table storage.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus, TableType};
use sqlx::SqlitePool;

/// Table row joined with the assigned staff member's name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TableOverview {
    pub id: i64,
    pub name: String,
    pub table_type: TableType,
    pub status: TableStatus,
    pub staff_name: Option<String>,
}

pub async fn list(pool: &SqlitePool) -> AppResult<Vec<TableOverview>> {
    let rows = sqlx::query_as(
        "SELECT t.id, t.name, t.table_type, t.status, s.name AS staff_name
         FROM dining_tables t
         LEFT JOIN staff s ON s.id = t.staff_id
         ORDER BY t.id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn list_available(pool: &SqlitePool) -> AppResult<Vec<DiningTable>> {
    let rows = sqlx::query_as(
        "SELECT id, name, table_type, status, staff_id
         FROM dining_tables
         WHERE status = 'Available'
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: i64) -> AppResult<DiningTable> {
    sqlx::query_as("SELECT id, name, table_type, status, staff_id FROM dining_tables WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| super::table_not_found(id))
}

/// Create a table; new tables always start `Available` and unassigned.
pub async fn create(pool: &SqlitePool, data: &DiningTableCreate) -> AppResult<DiningTable> {
    if data.name.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "Name cannot be empty.",
        ));
    }
    let table_type = data.table_type.unwrap_or_default();

    let result =
        sqlx::query("INSERT INTO dining_tables (name, table_type, status) VALUES (?, ?, 'Available')")
            .bind(data.name.trim())
            .bind(table_type)
            .execute(pool)
            .await?;

    get(pool, result.last_insert_rowid()).await
}

/// Partial update; `None` fields keep their current value.
pub async fn update(pool: &SqlitePool, id: i64, data: &DiningTableUpdate) -> AppResult<DiningTable> {
    let result = sqlx::query(
        "UPDATE dining_tables SET
            name = COALESCE(?, name),
            table_type = COALESCE(?, table_type),
            status = COALESCE(?, status),
            staff_id = COALESCE(?, staff_id)
         WHERE id = ?",
    )
    .bind(&data.name)
    .bind(data.table_type)
    .bind(data.status)
    .bind(data.staff_id)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| match data.staff_id {
        // staff_id is the only foreign key this statement can trip
        Some(staff_id) if super::is_fk_violation(&e) => super::staff_not_found(staff_id),
        _ => e.into(),
    })?;

    if result.rows_affected() == 0 {
        return Err(super::table_not_found(id));
    }
    get(pool, id).await
}

/// Delete a table. Tables with orders on record are kept for history
/// and the delete is refused.
pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM dining_tables WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            if super::is_fk_violation(&e) {
                AppError::with_message(
                    ErrorCode::TableHasOrders,
                    format!("Table {id} has orders on record and cannot be removed."),
                )
            } else {
                e.into()
            }
        })?;

    if result.rows_affected() == 0 {
        return Err(super::table_not_found(id));
    }
    Ok(())
}

/// Force a table back to `Available` and clear its staff assignment.
pub async fn reset(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("UPDATE dining_tables SET status = 'Available', staff_id = NULL WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(super::table_not_found(id));
    }
    Ok(())
}

pub async fn set_status(pool: &SqlitePool, id: i64, status: TableStatus) -> AppResult<()> {
    let result = sqlx::query("UPDATE dining_tables SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(super::table_not_found(id));
    }
    Ok(())
}

pub async fn assign_staff(pool: &SqlitePool, table_id: i64, staff_id: i64) -> AppResult<()> {
    let staff: Option<(i64,)> = sqlx::query_as("SELECT id FROM staff WHERE id = ?")
        .bind(staff_id)
        .fetch_optional(pool)
        .await?;
    if staff.is_none() {
        return Err(super::staff_not_found(staff_id));
    }

    let result = sqlx::query("UPDATE dining_tables SET staff_id = ? WHERE id = ?")
        .bind(staff_id)
        .bind(table_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(super::table_not_found(table_id));
    }
    Ok(())
}

pub async fn unassign_staff(pool: &SqlitePool, table_id: i64) -> AppResult<()> {
    let result = sqlx::query("UPDATE dining_tables SET staff_id = NULL WHERE id = ?")
        .bind(table_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(super::table_not_found(table_id));
    }
    Ok(())
}
