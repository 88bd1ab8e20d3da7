//! Staff directory storage.
//!
//! Passwords are argon2-hashed before they reach a statement; the hash
//! column never leaves this module.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Staff, StaffCreate, StaffUpdate};
use sqlx::SqlitePool;

use crate::util::{hash_password, verify_password};

pub async fn list(pool: &SqlitePool) -> AppResult<Vec<Staff>> {
    let rows = sqlx::query_as("SELECT id, name, role, username FROM staff ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: i64) -> AppResult<Staff> {
    sqlx::query_as("SELECT id, name, role, username FROM staff WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| super::staff_not_found(id))
}

pub async fn create(pool: &SqlitePool, data: &StaffCreate) -> AppResult<Staff> {
    let password_hash = hash_password(&data.password)?;

    let result = sqlx::query(
        "INSERT INTO staff (name, role, username, password_hash) VALUES (?, ?, ?, ?)",
    )
    .bind(data.name.trim())
    .bind(data.role.trim())
    .bind(data.username.trim())
    .bind(&password_hash)
    .execute(pool)
    .await
    .map_err(map_username_conflict)?;

    get(pool, result.last_insert_rowid()).await
}

/// Partial update; `None` fields keep their current value. A `Some`
/// password is re-hashed before the write.
pub async fn update(pool: &SqlitePool, id: i64, data: &StaffUpdate) -> AppResult<Staff> {
    let password_hash = match &data.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let result = sqlx::query(
        "UPDATE staff SET
            name = COALESCE(?, name),
            role = COALESCE(?, role),
            username = COALESCE(?, username),
            password_hash = COALESCE(?, password_hash)
         WHERE id = ?",
    )
    .bind(&data.name)
    .bind(&data.role)
    .bind(&data.username)
    .bind(&password_hash)
    .bind(id)
    .execute(pool)
    .await
    .map_err(map_username_conflict)?;

    if result.rows_affected() == 0 {
        return Err(super::staff_not_found(id));
    }
    get(pool, id).await
}

/// Delete a staff member; table assignments clear via ON DELETE SET NULL.
pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM staff WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(super::staff_not_found(id));
    }
    Ok(())
}

/// Check a username/password pair against the stored hash.
///
/// `None` covers both an unknown username and a wrong password, so the
/// caller cannot tell the two apart.
pub async fn verify_login(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> AppResult<Option<Staff>> {
    let row: Option<(i64, String, String, String, String)> = sqlx::query_as(
        "SELECT id, name, role, username, password_hash FROM staff WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.and_then(|(id, name, role, username, password_hash)| {
        verify_password(password, &password_hash).then(|| Staff {
            id,
            name,
            role,
            username,
        })
    }))
}

fn map_username_conflict(err: sqlx::Error) -> AppError {
    if super::is_unique_violation(&err) {
        AppError::with_message(ErrorCode::StaffUsernameExists, "Username already exists.")
    } else {
        err.into()
    }
}
