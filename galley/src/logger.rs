//! File-only tracing setup.
//!
//! The terminal belongs to the interactive prompt, so log output goes to a
//! daily-rotated file under the data directory. Set `RUST_LOG` to override
//! the default filter.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

/// Initialize the global subscriber with a daily-rotated file appender.
///
/// The returned guard must be held for the lifetime of the process or
/// buffered log lines are lost on exit.
pub fn init(log_dir: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, "galley.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if cfg!(debug_assertions) {
        EnvFilter::new("info,sqlx=warn,galley=debug")
    } else {
        EnvFilter::new("info,sqlx=warn")
    };

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_writer(non_blocking_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(guard)
}
