//! Command registry and handlers, one module per top-level verb.
//!
//! The registry is built once at startup and borrowed by the loop;
//! dispatch itself is a plain match on the verb. Each handler parses
//! its own sub-command and prints a usage block on malformed input.
//! Handlers print their results directly; returned errors are reported
//! by the loop.

pub mod help;
pub mod menu;
pub mod order;
pub mod payment;
pub mod report;
pub mod staff;
pub mod table;

/// Metadata for one top-level command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static [&'static str],
}

/// Every command the loop dispatches, in display order.
pub fn registry() -> Vec<CommandSpec> {
    vec![
        menu::SPEC,
        order::SPEC,
        table::SPEC,
        staff::SPEC,
        payment::SPEC,
        report::SPEC,
        help::SPEC,
    ]
}

/// Split the leading word from the rest of the input.
pub fn split_first(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(' ') {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    }
}

pub(crate) fn print_usage(spec: &CommandSpec) {
    println!("Usage:");
    for line in spec.usage {
        println!("  {line}");
    }
}

/// Render an epoch-millis timestamp in local time.
pub(crate) fn format_timestamp(millis: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => millis.to_string(),
    }
}

/// Parse an optional 1-based page argument; anything else means page 1.
pub(crate) fn parse_page(arg: &str) -> u32 {
    arg.trim().parse().ok().filter(|p| *p >= 1).unwrap_or(1)
}
