//! `table` — dining table management.

use shared::error::AppResult;
use shared::models::{DiningTableCreate, DiningTableUpdate, TableStatus, TableType};

use crate::console::Console;
use crate::db::tables;
use crate::state::AppState;

use super::{CommandSpec, print_usage, split_first};

pub const SPEC: CommandSpec = CommandSpec {
    name: "table",
    description: "Manage tables (list, available, add, remove, reset, status, assign...).",
    usage: &[
        "table list",
        "table available",
        "table add",
        "table remove <id>",
        "table reset <id>",
        "table status <id> <Available|Occupied|Broken>",
        "table assign <tableId> <staffId>",
        "table unassign <tableId>",
        "table update <id>",
    ],
};

pub async fn execute(state: &AppState, console: &mut Console, args: &str) -> AppResult<()> {
    let (sub, rest) = split_first(args);
    match sub.to_ascii_lowercase().as_str() {
        "" => print_usage(&SPEC),
        "list" => list(state).await?,
        "available" => list_available(state).await?,
        "add" => add(state, console).await?,
        "remove" => match rest.parse() {
            Ok(id) => remove(state, id).await?,
            Err(_) => println!("Usage: table remove <id>"),
        },
        "reset" => match rest.parse() {
            Ok(id) => reset(state, id).await?,
            Err(_) => println!("Usage: table reset <id>"),
        },
        "status" => set_status(state, rest).await?,
        "assign" => assign(state, rest).await?,
        "unassign" => match rest.parse() {
            Ok(id) => unassign(state, id).await?,
            Err(_) => println!("Usage: table unassign <tableId>"),
        },
        "update" => match rest.parse() {
            Ok(id) => update(state, console, id).await?,
            Err(_) => println!("Usage: table update <id>"),
        },
        other => {
            println!("Unknown table command: '{other}'");
            print_usage(&SPEC);
        }
    }
    Ok(())
}

async fn list(state: &AppState) -> AppResult<()> {
    let rows = tables::list(&state.pool).await?;
    if rows.is_empty() {
        println!("No tables found.");
        return Ok(());
    }

    println!("=== Tables ===");
    println!(
        "{:>4} | {:<12} | {:<8} | {:<10} | {}",
        "ID", "Name", "Type", "Status", "Assigned Staff"
    );
    println!("{}", "-".repeat(60));
    for table in &rows {
        println!(
            "{:>4} | {:<12} | {:<8} | {:<10} | {}",
            table.id,
            table.name,
            table.table_type.as_str(),
            table.status.as_str(),
            table.staff_name.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}

async fn list_available(state: &AppState) -> AppResult<()> {
    let rows = tables::list_available(&state.pool).await?;
    if rows.is_empty() {
        println!("No available tables.");
        return Ok(());
    }

    println!("=== Available Tables ===");
    println!("{:>4} | {:<12} | {}", "ID", "Name", "Type");
    println!("{}", "-".repeat(30));
    for table in &rows {
        println!(
            "{:>4} | {:<12} | {}",
            table.id,
            table.name,
            table.table_type.as_str()
        );
    }
    Ok(())
}

async fn add(state: &AppState, console: &mut Console) -> AppResult<()> {
    let name = console.required("Enter table name: ").await?;
    let choice = console
        .choose_or(
            "Choose table type (blank for Standard):",
            &["Standard", "VIP", "Outdoor"],
            0,
        )
        .await?;
    let table_type = [TableType::Standard, TableType::Vip, TableType::Outdoor][choice];

    let table = tables::create(
        &state.pool,
        &DiningTableCreate {
            name,
            table_type: Some(table_type),
        },
    )
    .await?;
    println!("Table added successfully (ID {}).", table.id);
    Ok(())
}

async fn remove(state: &AppState, id: i64) -> AppResult<()> {
    tables::delete(&state.pool, id).await?;
    println!("Table {id} removed.");
    Ok(())
}

async fn reset(state: &AppState, id: i64) -> AppResult<()> {
    tables::reset(&state.pool, id).await?;
    println!("Table {id} reset to available.");
    Ok(())
}

async fn set_status(state: &AppState, rest: &str) -> AppResult<()> {
    let (id_arg, status_arg) = split_first(rest);
    let Ok(id) = id_arg.parse::<i64>() else {
        println!("Usage: table status <id> <Available|Occupied|Broken>");
        return Ok(());
    };
    let Some(status) = TableStatus::parse(status_arg) else {
        println!("Invalid status '{status_arg}'. Allowed: Available, Occupied, Broken.");
        return Ok(());
    };

    tables::set_status(&state.pool, id, status).await?;
    println!("Table {id} status set to {status}.");
    Ok(())
}

async fn assign(state: &AppState, rest: &str) -> AppResult<()> {
    let mut parts = rest.split_whitespace();
    let parsed = match (parts.next(), parts.next()) {
        (Some(table), Some(staff)) => table.parse::<i64>().ok().zip(staff.parse::<i64>().ok()),
        _ => None,
    };
    let Some((table_id, staff_id)) = parsed else {
        println!("Usage: table assign <tableId> <staffId>");
        return Ok(());
    };

    tables::assign_staff(&state.pool, table_id, staff_id).await?;
    println!("Staff {staff_id} assigned to table {table_id}.");
    Ok(())
}

async fn unassign(state: &AppState, table_id: i64) -> AppResult<()> {
    tables::unassign_staff(&state.pool, table_id).await?;
    println!("Staff unassigned from table {table_id}.");
    Ok(())
}

async fn update(state: &AppState, console: &mut Console, id: i64) -> AppResult<()> {
    let current = tables::get(&state.pool, id).await?;
    println!("Updating table {id}. Leave input empty to keep the current value.");

    let name = console.optional(&format!("Name ({}): ", current.name)).await?;

    let type_input = console
        .optional(&format!("Type ({}): ", current.table_type))
        .await?;
    let table_type = match type_input.as_deref() {
        None => None,
        Some(raw) => match TableType::parse(raw) {
            Some(table_type) => Some(table_type),
            None => {
                println!("Invalid table type. Keeping previous value.");
                None
            }
        },
    };

    let status_input = console
        .optional(&format!("Status ({}): ", current.status))
        .await?;
    let status = match status_input.as_deref() {
        None => None,
        Some(raw) => match TableStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                println!("Invalid status. Keeping previous value.");
                None
            }
        },
    };

    let staff_display = current
        .staff_id
        .map_or_else(|| "None".to_string(), |staff_id| staff_id.to_string());
    let staff_input = console
        .optional(&format!("Staff ID ({staff_display}): "))
        .await?;
    let staff_id = match staff_input {
        None => None,
        Some(raw) => match raw.parse::<i64>() {
            Ok(staff_id) => Some(staff_id),
            Err(_) => {
                println!("Invalid staff ID input. Keeping previous value.");
                None
            }
        },
    };

    tables::update(
        &state.pool,
        id,
        &DiningTableUpdate {
            name,
            table_type,
            status,
            staff_id,
        },
    )
    .await?;
    println!("Table updated successfully.");
    Ok(())
}
