//! `help` — command listing.

use super::CommandSpec;

pub const SPEC: CommandSpec = CommandSpec {
    name: "help",
    description: "Displays a list of available commands.",
    usage: &["help"],
};

/// List every registered command with its description, sorted by name.
pub fn show(registry: &[CommandSpec]) {
    println!("Available commands:");
    println!("-------------------");
    let mut specs: Vec<&CommandSpec> = registry.iter().collect();
    specs.sort_by_key(|spec| spec.name);
    for spec in specs {
        println!("  {:<10} - {}", spec.name, spec.description);
    }
    println!("  {:<10} - Quits the application.", "exit");
}
