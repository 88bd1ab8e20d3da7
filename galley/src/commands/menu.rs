//! `menu` — catalog management.

use shared::error::AppResult;
use shared::models::{MenuItemCreate, MenuItemUpdate};
use shared::query::PageRequest;

use crate::console::Console;
use crate::db::menu_items;
use crate::money;
use crate::state::AppState;

use super::{CommandSpec, parse_page, print_usage, split_first};

pub const SPEC: CommandSpec = CommandSpec {
    name: "menu",
    description: "Manage menu items (add, list, info, update, remove).",
    usage: &[
        "menu add",
        "menu list [page]",
        "menu info <id>",
        "menu update <id>",
        "menu remove <id>",
    ],
};

pub async fn execute(state: &AppState, console: &mut Console, args: &str) -> AppResult<()> {
    let (sub, rest) = split_first(args);
    match sub.to_ascii_lowercase().as_str() {
        "" => print_usage(&SPEC),
        "list" => list(state, parse_page(rest)).await?,
        "info" => match rest.parse() {
            Ok(id) => info(state, id).await?,
            Err(_) => println!("Usage: menu info <id>"),
        },
        "add" => add(state, console).await?,
        "update" => match rest.parse() {
            Ok(id) => update(state, console, id).await?,
            Err(_) => println!("Usage: menu update <id>"),
        },
        "remove" => match rest.parse() {
            Ok(id) => remove(state, id).await?,
            Err(_) => println!("Usage: menu remove <id>"),
        },
        other => {
            println!("Unknown menu command: '{other}'");
            print_usage(&SPEC);
        }
    }
    Ok(())
}

async fn list(state: &AppState, page: u32) -> AppResult<()> {
    let page = menu_items::list(&state.pool, PageRequest::new(page, state.page_size)).await?;
    if page.is_empty() {
        println!("No menu items found.");
        return Ok(());
    }

    println!(
        "=== Menu Items (page {}/{}, {} items) ===",
        page.page, page.total_pages, page.total
    );
    println!("{:>4} | {:<24} | {:>10}", "ID", "Name", "Price");
    println!("{}", "-".repeat(44));
    for item in &page.data {
        println!(
            "{:>4} | {:<24} | {:>10}",
            item.id,
            item.name,
            money::format_money(item.price)
        );
    }
    println!("Use 'menu list <page>' to see other pages.");
    Ok(())
}

async fn info(state: &AppState, id: i64) -> AppResult<()> {
    let item = menu_items::get(&state.pool, id).await?;
    println!("---------------------------------------");
    println!("ID          : {}", item.id);
    println!("Name        : {}", item.name);
    println!(
        "Description : {}",
        item.description.as_deref().unwrap_or("No description.")
    );
    println!("Price       : {}", money::format_money(item.price));
    println!("---------------------------------------");
    Ok(())
}

async fn add(state: &AppState, console: &mut Console) -> AppResult<()> {
    let name = console.required("Enter name: ").await?;
    let description = console.optional("Enter description (optional): ").await?;
    let price = console.parse_money("Enter price: ").await?;

    let item = menu_items::create(
        &state.pool,
        &MenuItemCreate {
            name,
            description,
            price,
        },
    )
    .await?;
    println!("Menu item added successfully (ID {}).", item.id);
    Ok(())
}

async fn update(state: &AppState, console: &mut Console, id: i64) -> AppResult<()> {
    let current = menu_items::get(&state.pool, id).await?;
    println!("Updating menu item {id}. Leave input empty to keep the current value.");

    let name = console.optional(&format!("Name ({}): ", current.name)).await?;
    let description = console
        .optional(&format!(
            "Description ({}): ",
            current.description.as_deref().unwrap_or("none")
        ))
        .await?;
    let price_input = console
        .optional(&format!("Price ({}): ", money::format_money(current.price)))
        .await?;
    let price = match price_input {
        None => None,
        Some(raw) => match raw.trim_start_matches('$').parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                println!("Invalid price input. Keeping previous value.");
                None
            }
        },
    };

    menu_items::update(
        &state.pool,
        id,
        &MenuItemUpdate {
            name,
            description,
            price,
        },
    )
    .await?;
    println!("Menu item updated successfully.");
    Ok(())
}

async fn remove(state: &AppState, id: i64) -> AppResult<()> {
    menu_items::delete(&state.pool, id).await?;
    println!("Menu item {id} removed.");
    Ok(())
}
