// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! CLI argument parsing for per-crate debug flags
//!
//! Supports flags like `--debug-evonet-neural`, `--debug-evonet-evolutionary`,
//! etc. to enable/disable debug logging per crate.

use std::collections::HashMap;
use std::env;

use crate::KNOWN_CRATES;

/// Parse debug flags from command-line arguments
///
/// # Example
/// ```rust
/// use evonet_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_args(std::env::args());
/// if flags.is_enabled("evonet-evolutionary") {
///     // Enable debug logging for the evolution crate
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CrateDebugFlags {
    pub enabled_crates: HashMap<String, bool>,
}

impl CrateDebugFlags {
    /// Parse debug flags from command-line arguments
    ///
    /// Looks for arguments matching `--debug-{crate-name}` pattern.
    /// Also supports `--debug-all` to enable all crates.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut enabled_crates = HashMap::new();
        let mut debug_all = false;

        for arg in args {
            if arg == "--debug-all" {
                debug_all = true;
                continue;
            }

            if let Some(crate_name) = arg.strip_prefix("--debug-") {
                enabled_crates.insert(crate_name.to_string(), true);
            }
        }

        if debug_all {
            for crate_name in KNOWN_CRATES {
                enabled_crates.insert(crate_name.to_string(), true);
            }
        }

        CrateDebugFlags { enabled_crates }
    }

    /// Check if debug is enabled for a specific crate
    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains_key(crate_name)
    }

    /// Check if debug is enabled for any crate
    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// Create a tracing filter from debug flags
    ///
    /// Returns a filter string for `EnvFilter`, with crate names normalized
    /// to the underscored form tracing targets use. Format:
    /// "evonet_neural=debug,info" or the fallback level if none enabled.
    pub fn to_filter_string(&self, fallback_level: &str) -> String {
        if self.enabled_crates.is_empty() {
            return fallback_level.to_string();
        }

        let mut filters = Vec::new();
        for crate_name in self.enabled_crates.keys() {
            filters.push(format!("{}=debug", crate_name.replace('-', "_")));
        }
        // default level for everything else
        filters.push(fallback_level.to_string());
        filters.join(",")
    }
}

/// Helper function to parse debug flags from arguments and environment
///
/// Checks both command-line arguments and the `EVONET_DEBUG` environment
/// variable. Environment variable format: comma-separated crate names,
/// e.g., "evonet-neural,evonet-evolutionary", or "all".
pub fn parse_debug_flags() -> CrateDebugFlags {
    let mut flags = CrateDebugFlags::from_args(env::args());

    if let Ok(env_var) = env::var("EVONET_DEBUG") {
        if env_var == "all" {
            for crate_name in KNOWN_CRATES {
                flags.enabled_crates.insert(crate_name.to_string(), true);
            }
        } else {
            for crate_name in env_var.split(',') {
                let crate_name = crate_name.trim();
                if !crate_name.is_empty() {
                    flags.enabled_crates.insert(crate_name.to_string(), true);
                }
            }
        }
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crate_flag() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-evonet-neural".to_string()]);
        assert!(flags.is_enabled("evonet-neural"));
        assert!(!flags.is_enabled("evonet-evolutionary"));
    }

    #[test]
    fn test_multiple_crate_flags() {
        let flags = CrateDebugFlags::from_args(vec![
            "--debug-evonet-neural".to_string(),
            "--debug-evonet-evolutionary".to_string(),
        ]);
        assert!(flags.is_enabled("evonet-neural"));
        assert!(flags.is_enabled("evonet-evolutionary"));
        assert!(!flags.is_enabled("evonet-config"));
    }

    #[test]
    fn test_debug_all() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-all".to_string()]);
        for crate_name in KNOWN_CRATES {
            assert!(flags.is_enabled(crate_name), "{} should be enabled", crate_name);
        }
    }

    #[test]
    fn test_filter_string_uses_tracing_targets() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-evonet-neural".to_string()]);
        let filter = flags.to_filter_string("info");
        assert!(filter.contains("evonet_neural=debug"));
        assert!(filter.contains("info"));
    }

    #[test]
    fn test_filter_string_fallback() {
        let flags = CrateDebugFlags::default();
        assert_eq!(flags.to_filter_string("warn"), "warn");
    }
}
