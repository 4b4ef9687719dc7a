use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs the global subscriber. Logs go to stderr so command output on
/// stdout stays machine readable. The returned guard flushes the file layer
/// and must be held until exit.
pub fn setup_telemetry(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let stderr_layer = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_filter(env_filter());

    let file_appender = log_dir.and_then(|dir| {
        match RollingFileAppender::builder()
            .rotation(Rotation::HOURLY)
            .filename_prefix("uniforge-inspector")
            .filename_suffix("log")
            .max_log_files(48)
            .build(dir)
        {
            Ok(appender) => Some(appender),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to create log file appender: {}. Logging to stderr only.",
                    e
                );
                None
            }
        }
    });

    match file_appender {
        Some(file_appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .json()
                .with_filter(env_filter());
            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(stderr_layer).init();
            None
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
