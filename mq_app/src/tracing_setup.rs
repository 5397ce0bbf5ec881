use std::io;

use tracing::Level;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Hourly rolling `<app_name>.log` under `log_dir`, written off-thread
fn log_file(app_name: &str, log_dir: &str) -> (NonBlocking, WorkerGuard) {
    let _ = std::fs::create_dir_all(log_dir);
    let file_appender = tracing_appender::rolling::hourly(log_dir, format!("{app_name}.log"));
    tracing_appender::non_blocking(file_appender)
}

/// `RUST_LOG` wins over `default_level`
fn env_filter(default_level: Level) -> EnvFilter {
    EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy()
}

/// Log file plus stderr, leaving stdout to the tool's own output
pub fn init(app_name: &str, log_dir: &str, default_level: Level) -> WorkerGuard {
    let (non_blocking, guard) = log_file(app_name, log_dir);

    let file_layer = fmt::layer().with_writer(non_blocking).with_target(true).with_line_number(true).with_ansi(false).compact();
    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false).with_ansi(true).compact();

    tracing_subscriber::registry().with(env_filter(default_level)).with(file_layer).with(stderr_layer).init();

    guard
}

/// Log file plus stdout
pub fn init_with_stdout(app_name: &str, log_dir: &str, default_level: Level) -> WorkerGuard {
    let (non_blocking, guard) = log_file(app_name, log_dir);

    let file_layer = fmt::layer().with_writer(non_blocking).with_target(true).with_line_number(true).with_ansi(false).compact();
    let stdout_layer = fmt::layer().with_writer(io::stdout).with_target(true).with_line_number(true).with_ansi(true).compact();

    tracing_subscriber::registry().with(env_filter(default_level)).with(file_layer).with(stdout_layer).init();

    guard
}
