//! Dual-output logging: JSONL to file, compact human-readable to stderr.
//!
//! The JSONL file lives at `~/.zed-tabs/logs/zed-tabs.jsonl`. Each line is a
//! structured JSON object suitable for machine parsing; stderr gets a
//! compact rendering for developers. `RUST_LOG` overrides the default
//! `info` filter.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Guard that must be kept alive for the duration of the program.
/// Dropping it flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that must be kept alive until exit. Safe to call only
/// once per process.
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let log_path = log_dir.join("zed-tabs.jsonl");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .unwrap_or_else(|e| {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            OpenOptions::new()
                .write(true)
                .open("/dev/null")
                .expect("Failed to open /dev/null")
        });

    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer)
        .init();

    tracing::debug!(log_path = %log_path.display(), "Logging initialized");

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Log directory (`~/.zed-tabs/logs/`)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".zed-tabs").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("zed-tabs-logs"))
}

/// Path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join("zed-tabs.jsonl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_is_under_zed_tabs_dir() {
        let path = log_path();
        let s = path.to_string_lossy();
        assert!(s.contains("zed-tabs"));
        assert!(s.ends_with("zed-tabs.jsonl"));
    }
}
