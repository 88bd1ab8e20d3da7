//! `order` — order lifecycle and line items.

use shared::error::{AppResult, ErrorCode};
use shared::query::PageRequest;

use crate::console::Console;
use crate::db::{menu_items, order_items, orders};
use crate::money;
use crate::state::AppState;

use super::{CommandSpec, format_timestamp, parse_page, print_usage, split_first};

pub const SPEC: CommandSpec = CommandSpec {
    name: "order",
    description: "Manage orders and their items (new, list, complete, cancel, additem...).",
    usage: &[
        "order new <tableId>",
        "order list [page]",
        "order complete <orderId>",
        "order cancel <orderId>",
        "order additem",
        "order viewitems <tableId>",
        "order removeitem <orderItemId>",
        "order updateitem <orderItemId> <newQuantity>",
    ],
};

pub async fn execute(state: &AppState, console: &mut Console, args: &str) -> AppResult<()> {
    let (sub, rest) = split_first(args);
    match sub.to_ascii_lowercase().as_str() {
        "" => print_usage(&SPEC),
        "new" => match rest.parse() {
            Ok(table_id) => new_order(state, table_id).await?,
            Err(_) => println!("Usage: order new <tableId>"),
        },
        "list" => list(state, parse_page(rest)).await?,
        "complete" => match rest.parse() {
            Ok(order_id) => complete(state, order_id).await?,
            Err(_) => println!("Usage: order complete <orderId>"),
        },
        "cancel" => match rest.parse() {
            Ok(order_id) => cancel(state, order_id).await?,
            Err(_) => println!("Usage: order cancel <orderId>"),
        },
        "additem" => add_items(state, console).await?,
        "viewitems" => match rest.parse() {
            Ok(table_id) => view_items(state, table_id).await?,
            Err(_) => println!("Usage: order viewitems <tableId>"),
        },
        "removeitem" => match rest.parse() {
            Ok(item_id) => remove_item(state, item_id).await?,
            Err(_) => println!("Usage: order removeitem <orderItemId>"),
        },
        "updateitem" => update_item(state, rest).await?,
        other => {
            println!("Unknown order command: '{other}'");
            print_usage(&SPEC);
        }
    }
    Ok(())
}

async fn new_order(state: &AppState, table_id: i64) -> AppResult<()> {
    let order_id = orders::create(&state.pool, table_id).await?;
    println!("New order created with ID {order_id} for Table {table_id}.");
    Ok(())
}

async fn list(state: &AppState, page: u32) -> AppResult<()> {
    let page = orders::list(&state.pool, PageRequest::new(page, state.page_size)).await?;
    if page.is_empty() {
        println!("No orders found.");
        return Ok(());
    }

    println!(
        "=== Orders (page {}/{}, {} orders) ===",
        page.page, page.total_pages, page.total
    );
    for order in &page.data {
        println!(
            "Order ID: {}, Table: {}, Status: {}, Date: {}",
            order.id,
            order.table_name,
            order.status,
            format_timestamp(order.opened_at)
        );
    }
    Ok(())
}

async fn complete(state: &AppState, order_id: i64) -> AppResult<()> {
    let table_id = orders::complete(&state.pool, order_id).await?;
    println!("Order {order_id} marked as completed. Table {table_id} is now available.");
    Ok(())
}

async fn cancel(state: &AppState, order_id: i64) -> AppResult<()> {
    let table_id = orders::cancel(&state.pool, order_id).await?;
    println!("Order {order_id} cancelled. Table {table_id} is now available.");
    Ok(())
}

/// Interactive item entry: reuses the table's active order or opens one,
/// then loops until the operator types 'done'. Bad input re-prompts
/// without aborting the loop.
async fn add_items(state: &AppState, console: &mut Console) -> AppResult<()> {
    let table_id = console.parse_i64("Enter table ID: ").await?;

    let order_id = match orders::active_order_for_table(&state.pool, table_id).await? {
        Some(order_id) => order_id,
        None => {
            let order_id = orders::create(&state.pool, table_id).await?;
            println!("New order created with ID {order_id} for Table {table_id}.");
            order_id
        }
    };

    loop {
        let input = console
            .required("Enter menu item ID (or 'done' to finish): ")
            .await?;
        if input.eq_ignore_ascii_case("done") {
            break;
        }
        let Ok(menu_item_id) = input.parse::<i64>() else {
            println!("Invalid ID. Please enter a number.");
            continue;
        };

        let item = match menu_items::get(&state.pool, menu_item_id).await {
            Ok(item) => item,
            Err(err) if err.code == ErrorCode::MenuItemNotFound => {
                println!("{}", err.message);
                continue;
            }
            Err(err) => return Err(err),
        };
        println!("Selected: {} - {}", item.name, money::format_money(item.price));

        let quantity = console.parse_i64("Enter quantity: ").await?;
        let quantity = i32::try_from(quantity).unwrap_or(-1);
        if money::validate_quantity(quantity).is_err() {
            println!("Invalid quantity.");
            continue;
        }

        order_items::add(&state.pool, order_id, menu_item_id, quantity).await?;
        println!("Added {}x {} to Order #{}.", quantity, item.name, order_id);
    }

    println!("Finished adding items.");
    Ok(())
}

async fn view_items(state: &AppState, table_id: i64) -> AppResult<()> {
    let Some(order_id) = orders::active_order_for_table(&state.pool, table_id).await? else {
        println!("No active order found for Table {table_id}.");
        return Ok(());
    };

    let lines = order_items::list_for_order(&state.pool, order_id).await?;
    println!("Items for Table {table_id} (Order #{order_id}):");
    println!("{}", "-".repeat(46));
    for line in &lines {
        println!(
            "[{}] {}x {} @ {} = {}",
            line.id,
            line.quantity,
            line.name,
            money::format_money(line.price),
            money::format_money(money::to_f64(line.line_total())),
        );
    }
    println!("{}", "-".repeat(46));
    println!(
        "Total amount: {}",
        money::format_money(money::to_f64(order_items::grand_total(&lines)))
    );
    Ok(())
}

async fn remove_item(state: &AppState, item_id: i64) -> AppResult<()> {
    order_items::remove(&state.pool, item_id).await?;
    println!("Order item {item_id} removed.");
    Ok(())
}

async fn update_item(state: &AppState, rest: &str) -> AppResult<()> {
    let mut parts = rest.split_whitespace();
    let parsed = match (parts.next(), parts.next()) {
        (Some(id), Some(quantity)) => id.parse::<i64>().ok().zip(quantity.parse::<i32>().ok()),
        _ => None,
    };
    let Some((item_id, quantity)) = parsed else {
        println!("Usage: order updateitem <orderItemId> <newQuantity>");
        return Ok(());
    };

    order_items::update_quantity(&state.pool, item_id, quantity).await?;
    println!("Order item {item_id} quantity updated to {quantity}.");
    Ok(())
}
