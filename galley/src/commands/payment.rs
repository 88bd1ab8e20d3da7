//! `payment` — settlement and history.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::PaymentMethod;
use shared::query::PageRequest;

use crate::console::Console;
use crate::db::{orders, payments};
use crate::money;
use crate::state::AppState;

use super::{CommandSpec, format_timestamp, print_usage, split_first};

pub const SPEC: CommandSpec = CommandSpec {
    name: "payment",
    description: "Process payments for tables and browse payment history.",
    usage: &[
        "payment process <tableId>",
        "payment history [page] [pageSize]",
        "payment info <paymentId>",
    ],
};

pub async fn execute(state: &AppState, console: &mut Console, args: &str) -> AppResult<()> {
    let (sub, rest) = split_first(args);
    match sub.to_ascii_lowercase().as_str() {
        "" => print_usage(&SPEC),
        "process" => match rest.parse() {
            Ok(table_id) => process(state, console, table_id).await?,
            Err(_) => println!("Usage: payment process <tableId>"),
        },
        "history" => history(state, rest).await?,
        "info" => match rest.parse() {
            Ok(payment_id) => info(state, payment_id).await?,
            Err(_) => println!("Usage: payment info <paymentId>"),
        },
        other => {
            println!("Unknown payment command: '{other}'");
            print_usage(&SPEC);
        }
    }
    Ok(())
}

/// Interactive settlement: show the total due, take the amount, pick a
/// method, confirm, then hand the whole movement to the db layer.
async fn process(state: &AppState, console: &mut Console, table_id: i64) -> AppResult<()> {
    let Some(order_id) = orders::active_order_for_table(&state.pool, table_id).await? else {
        return Err(AppError::with_message(
            ErrorCode::NoActiveOrder,
            format!("No active order found for Table {table_id}."),
        ));
    };
    let total = orders::total_for_table(&state.pool, table_id).await?;
    if total <= Decimal::ZERO {
        return Err(AppError::with_message(
            ErrorCode::OrderEmpty,
            "Order total is zero. Cannot process payment.",
        ));
    }

    println!(
        "Total due for Table #{table_id} (Order #{order_id}): {}",
        money::format_money(money::to_f64(total))
    );

    let amount = console.parse_money("Enter payment amount: ").await?;
    money::validate_payment_amount(amount)?;
    if !money::is_payment_sufficient(amount, total) {
        return Err(AppError::with_message(
            ErrorCode::PaymentInsufficientAmount,
            format!(
                "Payment of {} is less than total due {}. Please pay the full amount.",
                money::format_money(amount),
                money::format_money(money::to_f64(total)),
            ),
        ));
    }
    let change = money::to_decimal(amount) - total;
    if change > Decimal::ZERO {
        println!(
            "Change to return: {}",
            money::format_money(money::to_f64(change))
        );
    }

    let methods: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.as_str()).collect();
    let choice = console.choose("Select payment method:", &methods).await?;
    let method = PaymentMethod::ALL[choice];

    let confirmed = console
        .confirm(&format!(
            "Confirm payment of {} using {}? (y/n): ",
            money::format_money(amount),
            method
        ))
        .await?;
    if !confirmed {
        println!("Payment cancelled.");
        return Ok(());
    }

    let settlement = payments::settle(&state.pool, table_id, amount, method).await?;
    println!(
        "Payment of {} for Order #{} at Table #{} recorded successfully using {}.",
        money::format_money(amount),
        settlement.order_id,
        table_id,
        method
    );
    println!(
        "Order {} marked as completed. Table {} is now available.",
        settlement.order_id, table_id
    );
    if settlement.change > Decimal::ZERO {
        println!(
            "Don't forget to return change: {}",
            money::format_money(money::to_f64(settlement.change))
        );
    }
    Ok(())
}

async fn history(state: &AppState, rest: &str) -> AppResult<()> {
    let mut parts = rest.split_whitespace();
    let page = parts
        .next()
        .and_then(|arg| arg.parse().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1);
    let limit = parts
        .next()
        .and_then(|arg| arg.parse().ok())
        .filter(|l| *l >= 1)
        .unwrap_or(state.page_size);

    let page = payments::history(&state.pool, PageRequest::new(page, limit)).await?;
    if page.is_empty() {
        println!("No payment records found.");
        return Ok(());
    }

    println!(
        "=== Payment History (page {}/{}, {} payments) ===",
        page.page, page.total_pages, page.total
    );
    println!(
        "{:<7} | {:<7} | {:<9} | {:>10} | {}",
        "ID", "Order", "Method", "Amount", "Paid At"
    );
    println!("{}", "-".repeat(62));
    for payment in &page.data {
        println!(
            "{:<7} | {:<7} | {:<9} | {:>10} | {}",
            format!("P-{:03}", payment.id),
            format!("O-{:03}", payment.order_id),
            payment.method.as_str(),
            money::format_money(payment.paid_amount),
            format_timestamp(payment.paid_at),
        );
    }
    println!("Use 'payment history <page> [pageSize]' to navigate.");
    Ok(())
}

async fn info(state: &AppState, payment_id: i64) -> AppResult<()> {
    let detail = payments::detail(&state.pool, payment_id).await?;

    println!("=== Payment Details ===");
    println!("Payment ID   : P-{:03}", detail.id);
    println!("Order ID     : O-{:03}", detail.order_id);
    println!("Method       : {}", detail.method);
    println!("Amount paid  : {}", money::format_money(detail.paid_amount));
    println!("Paid at      : {}", format_timestamp(detail.paid_at));
    println!(
        "Table ID     : {}",
        detail
            .table_id
            .map_or_else(|| "N/A".to_string(), |id| id.to_string())
    );
    println!(
        "Table name   : {}",
        detail.table_name.as_deref().unwrap_or("N/A")
    );
    println!(
        "Table type   : {}",
        detail.table_type.as_deref().unwrap_or("N/A")
    );
    println!(
        "Order date   : {}",
        detail
            .opened_at
            .map_or_else(|| "N/A".to_string(), format_timestamp)
    );
    println!(
        "Order status : {}",
        detail.order_status.as_deref().unwrap_or("N/A")
    );
    Ok(())
}
