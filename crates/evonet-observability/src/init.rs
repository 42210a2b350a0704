// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Unified logging initialization for Evonet
//!
//! Console output is always installed. With the `file-logging` feature and
//! `log_to_file` enabled, each process additionally writes to a timestamped
//! run folder:
//!
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       └── evonet.log
//! ```
//!
//! Old run folders beyond the retention count are removed at startup.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

#[cfg(feature = "file-logging")]
use std::path::{Path, PathBuf};

#[cfg(feature = "file-logging")]
use anyhow::Context;

use crate::cli::CrateDebugFlags;
use crate::config::LoggingConfig;
#[cfg(feature = "file-logging")]
use crate::config::LogFormat;

/// Logging initialization result
///
/// Keep this guard alive for the life of the process; file writers flush on
/// drop.
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
    #[cfg(feature = "file-logging")]
    log_dir: Option<PathBuf>,
}

#[cfg(feature = "file-logging")]
impl LoggingGuard {
    /// Run folder receiving this process's file logs, if any
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Initialize the global tracing subscriber
///
/// Installs a human-readable console layer filtered by the debug flags
/// (falling back to `config.level`), plus a rotated file layer when the
/// `file-logging` feature and `config.log_to_file` are both on.
///
/// Must be called at most once per process; a second call panics inside
/// `tracing-subscriber`.
pub fn init_logging(config: &LoggingConfig, debug_flags: &CrateDebugFlags) -> Result<LoggingGuard> {
    let filter = debug_flags.to_filter_string(&config.level);

    let mut layers = Vec::new();

    // Console layer (human-readable)
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(EnvFilter::new(&filter))
        .boxed();
    layers.push(console_layer);

    #[cfg(feature = "file-logging")]
    let mut file_guards = Vec::new();
    #[cfg(feature = "file-logging")]
    let mut run_dir = None;

    #[cfg(feature = "file-logging")]
    if config.log_to_file {
        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let run_folder = config.log_dir.join(format!("run_{}", timestamp));
        std::fs::create_dir_all(&run_folder)
            .with_context(|| format!("Failed to create log directory: {}", run_folder.display()))?;

        cleanup_old_runs(&config.log_dir, config.retention_runs)?;

        let file_appender = tracing_appender::rolling::daily(&run_folder, "evonet.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        file_guards.push(guard);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let file_layer = match config.format {
            LogFormat::Json => file_layer.json().with_filter(EnvFilter::new(&filter)).boxed(),
            LogFormat::Text => file_layer.with_filter(EnvFilter::new(&filter)).boxed(),
        };
        layers.push(file_layer);
        run_dir = Some(run_folder);
    }

    Registry::default().with(layers).init();

    Ok(LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file_guards: file_guards,
        #[cfg(feature = "file-logging")]
        log_dir: run_dir,
    })
}

/// Initialize logging with default settings
pub fn init_logging_default(debug_flags: &CrateDebugFlags) -> Result<LoggingGuard> {
    init_logging(&LoggingConfig::default(), debug_flags)
}

/// Remove run folders beyond the retention count, oldest first
#[cfg(feature = "file-logging")]
fn cleanup_old_runs(base_log_dir: &Path, retention_runs: usize) -> Result<()> {
    use chrono::NaiveDateTime;

    if !base_log_dir.exists() {
        return Ok(());
    }

    let mut runs: Vec<(PathBuf, NaiveDateTime)> = Vec::new();

    for entry in std::fs::read_dir(base_log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            if let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) {
                if let Some(timestamp_str) = dir_name.strip_prefix("run_") {
                    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp_str, "%Y%m%d_%H%M%S") {
                        runs.push((path, dt));
                    }
                }
            }
        }
    }

    // oldest first
    runs.sort_by_key(|(_, dt)| *dt);

    if runs.len() > retention_runs {
        let to_remove = runs.len() - retention_runs;
        for (path, _) in runs.iter().take(to_remove) {
            if let Err(e) = std::fs::remove_dir_all(path) {
                eprintln!(
                    "Warning: Failed to remove old log directory {}: {}",
                    path.display(),
                    e
                );
            }
        }
    }

    Ok(())
}
