use galley::commands;
use galley::config::Config;
use galley::console::Console;
use galley::logger;
use galley::state::AppState;
use shared::error::{AppError, ErrorCategory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    // Guard must outlive the loop or buffered log lines are dropped.
    let _guard = logger::init(&config.log_dir())?;
    tracing::info!("Starting galley");

    let state = AppState::new(&config).await?;
    let registry = commands::registry();

    println!("=== Galley Restaurant POS ===");
    println!("Type 'help' to see available commands.");
    println!("Type 'exit' to quit.");
    println!();

    let mut console = Console::new();
    loop {
        let Some(line) = console.read_line("> ").await? else {
            break;
        };
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        let (verb, rest) = commands::split_first(&line);
        let result = match verb.to_ascii_lowercase().as_str() {
            "menu" => commands::menu::execute(&state, &mut console, rest).await,
            "order" => commands::order::execute(&state, &mut console, rest).await,
            "table" => commands::table::execute(&state, &mut console, rest).await,
            "staff" => commands::staff::execute(&state, &mut console, rest).await,
            "payment" => commands::payment::execute(&state, &mut console, rest).await,
            "report" => commands::report::execute(&state, rest).await,
            "help" => {
                commands::help::show(&registry);
                Ok(())
            }
            other => {
                println!("Unknown command: {other}");
                println!("Type 'help' to see available commands.");
                Ok(())
            }
        };

        if let Err(err) = result {
            report_error(&err);
        }
    }

    println!("Exiting... Goodbye!");
    Ok(())
}

/// Business and validation failures read as plain messages; storage and
/// internal failures get an `[ERROR]` prefix and a log entry.
fn report_error(err: &AppError) {
    match err.code.category() {
        ErrorCategory::System => {
            tracing::error!(code = %err.code, "{}", err.message);
            println!("[ERROR] {}", err.message);
        }
        _ => println!("{}", err.message),
    }
}
