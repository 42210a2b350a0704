// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # evonet-observability
//!
//! Logging infrastructure for Evonet.
//!
//! The core crates emit anomalies and per-generation summaries through
//! `tracing` macros; this crate wires those events to a console subscriber
//! and, with the `file-logging` feature, to rotated per-run log files.
//!
//! ## Features
//! - `file-logging`: File-based log rotation (desktop only)

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

// Re-export commonly used items
pub use cli::*;
pub use config::*;
pub use init::*;

/// Known Evonet crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "evonet-neural",
    "evonet-evolutionary",
    "evonet-config",
    "evonet-observability",
];
