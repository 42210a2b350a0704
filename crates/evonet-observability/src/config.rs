// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Observability configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format for file output
    pub format: LogFormat,

    /// Write logs to rotated files in addition to the console
    pub log_to_file: bool,

    /// Base directory for per-run log folders
    pub log_dir: PathBuf,

    /// Keep the N most recent run folders
    pub retention_runs: usize,
}

/// Log format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    Text,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: LogFormat::Json,
            log_to_file: false,
            log_dir: PathBuf::from("./logs"),
            retention_runs: 10,
        }
    }
}
