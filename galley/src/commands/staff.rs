//! `staff` — staff directory.

use shared::error::AppResult;
use shared::models::{StaffCreate, StaffUpdate};

use crate::console::Console;
use crate::db::staff;
use crate::state::AppState;

use super::{CommandSpec, print_usage, split_first};

pub const SPEC: CommandSpec = CommandSpec {
    name: "staff",
    description: "Manage staff records (list, add, info, update, remove).",
    usage: &[
        "staff list",
        "staff add",
        "staff info <id>",
        "staff update <id>",
        "staff remove <id>",
    ],
};

pub async fn execute(state: &AppState, console: &mut Console, args: &str) -> AppResult<()> {
    let (sub, rest) = split_first(args);
    match sub.to_ascii_lowercase().as_str() {
        "" => print_usage(&SPEC),
        "list" => list(state).await?,
        "info" => match rest.parse() {
            Ok(id) => info(state, id).await?,
            Err(_) => println!("Usage: staff info <id>"),
        },
        "add" => add(state, console).await?,
        "update" => match rest.parse() {
            Ok(id) => update(state, console, id).await?,
            Err(_) => println!("Usage: staff update <id>"),
        },
        "remove" => match rest.parse() {
            Ok(id) => remove(state, id).await?,
            Err(_) => println!("Usage: staff remove <id>"),
        },
        other => {
            println!("Unknown staff command: '{other}'");
            print_usage(&SPEC);
        }
    }
    Ok(())
}

async fn list(state: &AppState) -> AppResult<()> {
    let rows = staff::list(&state.pool).await?;
    if rows.is_empty() {
        println!("No staff records found.");
        return Ok(());
    }

    println!("=== Staff ===");
    println!(
        "{:>4} | {:<20} | {:<10} | {}",
        "ID", "Name", "Role", "Username"
    );
    println!("{}", "-".repeat(54));
    for member in &rows {
        println!(
            "{:>4} | {:<20} | {:<10} | {}",
            member.id, member.name, member.role, member.username
        );
    }
    Ok(())
}

async fn info(state: &AppState, id: i64) -> AppResult<()> {
    let member = staff::get(&state.pool, id).await?;
    println!("---------------------------------------");
    println!("ID       : {}", member.id);
    println!("Name     : {}", member.name);
    println!("Role     : {}", member.role);
    println!("Username : {}", member.username);
    println!("---------------------------------------");
    Ok(())
}

async fn add(state: &AppState, console: &mut Console) -> AppResult<()> {
    let name = console.required("Enter name: ").await?;
    let role = console.required("Enter role: ").await?;
    let username = console.required("Enter username: ").await?;
    let password = console.required("Enter password: ").await?;

    let member = staff::create(
        &state.pool,
        &StaffCreate {
            name,
            role,
            username,
            password,
        },
    )
    .await?;
    println!("Staff member added successfully (ID {}).", member.id);
    Ok(())
}

async fn update(state: &AppState, console: &mut Console, id: i64) -> AppResult<()> {
    let current = staff::get(&state.pool, id).await?;
    println!("Updating staff {id}. Leave input empty to keep the current value.");

    let name = console.optional(&format!("Name ({}): ", current.name)).await?;
    let role = console.optional(&format!("Role ({}): ", current.role)).await?;
    let username = console
        .optional(&format!("Username ({}): ", current.username))
        .await?;
    let password = if console.confirm("Update password? (y/n): ").await? {
        Some(console.required("New password: ").await?)
    } else {
        None
    };

    staff::update(
        &state.pool,
        id,
        &StaffUpdate {
            name,
            role,
            username,
            password,
        },
    )
    .await?;
    println!("Staff updated successfully.");
    Ok(())
}

async fn remove(state: &AppState, id: i64) -> AppResult<()> {
    staff::delete(&state.pool, id).await?;
    println!("Staff member {id} removed.");
    Ok(())
}
