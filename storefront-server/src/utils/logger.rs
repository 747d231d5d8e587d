//! Logging Infrastructure
//!
//! Structured logging with an env filter; optional daily rolling file output.
//! Production writes one JSON object per event.

use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "storefront_server=info,tower_http=info";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, false);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level`; without either the default filter applies.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>, json: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir exists
    let file_appender = log_dir
        .map(Path::new)
        .filter(|path| path.exists())
        .and_then(Path::to_str)
        .map(|dir| tracing_appender::rolling::daily(dir, "storefront-server"));

    match (file_appender, json) {
        (Some(appender), true) => subscriber.json().with_writer(appender).with_ansi(false).init(),
        (Some(appender), false) => subscriber.with_writer(appender).with_ansi(false).init(),
        (None, true) => subscriber.json().init(),
        (None, false) => subscriber.init(),
    }
}

fn build_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| match log_level {
            Some(level) => EnvFilter::try_new(format!("storefront_server={level},tower_http={level}")),
            None => EnvFilter::try_new(DEFAULT_FILTER),
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

