//! `report` — sales aggregates.

use chrono::NaiveDate;
use shared::error::AppResult;
use shared::util::today;

use crate::db::reports;
use crate::money;
use crate::state::AppState;

use super::{CommandSpec, print_usage, split_first};

pub const SPEC: CommandSpec = CommandSpec {
    name: "report",
    description: "Sales reports (daily, items, method).",
    usage: &[
        "report daily [YYYY-MM-DD]",
        "report items",
        "report method",
    ],
};

pub async fn execute(state: &AppState, args: &str) -> AppResult<()> {
    let (sub, rest) = split_first(args);
    match sub.to_ascii_lowercase().as_str() {
        "" => print_usage(&SPEC),
        "daily" => daily(state, rest).await?,
        "items" => items(state).await?,
        "method" => method(state).await?,
        other => {
            println!("Unknown report command: '{other}'");
            print_usage(&SPEC);
        }
    }
    Ok(())
}

async fn daily(state: &AppState, rest: &str) -> AppResult<()> {
    let date = if rest.is_empty() {
        today()
    } else {
        match NaiveDate::parse_from_str(rest.trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                println!("Invalid date '{}'. Expected YYYY-MM-DD.", rest.trim());
                return Ok(());
            }
        }
    };

    let sales = reports::daily_sales(&state.pool, date).await?;
    println!("=== Daily Sales Report ===");
    println!("Date          : {date}");
    println!("Payments made : {}", sales.payments);
    println!("Total revenue : {}", money::format_money(sales.revenue));
    Ok(())
}

async fn items(state: &AppState) -> AppResult<()> {
    let rows = reports::top_selling_items(&state.pool).await?;
    if rows.is_empty() {
        println!("No items sold yet.");
        return Ok(());
    }

    println!("=== Top Selling Items ===");
    println!("{:<24} | {:>9} | {:>10}", "Item", "Qty Sold", "Revenue");
    println!("{}", "-".repeat(49));
    for row in &rows {
        println!(
            "{:<24} | {:>9} | {:>10}",
            row.name,
            row.quantity_sold,
            money::format_money(row.revenue)
        );
    }
    Ok(())
}

async fn method(state: &AppState) -> AppResult<()> {
    let rows = reports::sales_by_method(&state.pool).await?;
    if rows.is_empty() {
        println!("No payments recorded yet.");
        return Ok(());
    }

    println!("=== Sales by Payment Method ===");
    println!("{:<10} | {:>6} | {:>10}", "Method", "Count", "Revenue");
    println!("{}", "-".repeat(32));
    for row in &rows {
        println!(
            "{:<10} | {:>6} | {:>10}",
            row.method,
            row.transactions,
            money::format_money(row.revenue)
        );
    }
    Ok(())
}
