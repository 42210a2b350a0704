// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, EvonetConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the Evonet configuration file
///
/// Search order:
/// 1. `EVONET_CONFIG_PATH` environment variable
/// 2. Current working directory: `./evonet_configuration.toml`
/// 3. Ancestor directories (up to 5 levels)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    // 1. Check environment variable first
    if let Ok(env_path) = env::var("EVONET_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by EVONET_CONFIG_PATH not found: {}",
                path.display()
            )));
        }
    }

    // 2. Search in common locations
    let mut search_paths = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join("evonet_configuration.toml"));

        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join("evonet_configuration.toml"));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Evonet configuration file 'evonet_configuration.toml' not found in any of these locations:\n{}\n\nSet EVONET_CONFIG_PATH environment variable to specify custom location.",
        search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Returns
///
/// Complete `EvonetConfig` with all overrides applied
///
/// # Errors
///
/// Returns error if config file is not found or contains invalid TOML
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<EvonetConfig> {
    let config_file = if let Some(path) = config_path {
        path.to_path_buf()
    } else {
        find_config_file()?
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: EvonetConfig = toml::from_str(&content)?;

    // Apply overrides in order
    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `EVONET_LOG_LEVEL` -> `system.log_level`
/// - `EVONET_DEBUG_MODE` -> `system.debug`
/// - `EVONET_POPULATION_SIZE` -> `evolution.population_size`
/// - `EVONET_MAX_GENERATIONS` -> `evolution.max_generations`
/// - `EVONET_CROSSOVER_RATE` -> `evolution.crossover_rate`
/// - `EVONET_MUTATION_RATE` -> `evolution.mutation_rate`
/// - `EVONET_LOG_DIR` -> `logging.log_dir`
pub fn apply_environment_overrides(config: &mut EvonetConfig) {
    // System settings
    if let Ok(value) = env::var("EVONET_LOG_LEVEL") {
        config.system.log_level = value;
    }
    if let Ok(value) = env::var("EVONET_DEBUG_MODE") {
        config.system.debug =
            value.to_lowercase() == "true" || value == "1" || value.to_lowercase() == "yes";
    }

    // Evolution settings
    if let Ok(value) = env::var("EVONET_POPULATION_SIZE") {
        if let Ok(size) = value.parse::<usize>() {
            config.evolution.population_size = size;
        }
    }
    if let Ok(value) = env::var("EVONET_MAX_GENERATIONS") {
        if let Ok(generations) = value.parse::<u64>() {
            config.evolution.max_generations = generations;
        }
    }
    if let Ok(value) = env::var("EVONET_CROSSOVER_RATE") {
        if let Ok(rate) = value.parse::<f64>() {
            config.evolution.crossover_rate = rate;
        }
    }
    if let Ok(value) = env::var("EVONET_MUTATION_RATE") {
        if let Ok(rate) = value.parse::<f64>() {
            config.evolution.mutation_rate = rate;
        }
    }

    // Logging settings
    if let Ok(value) = env::var("EVONET_LOG_DIR") {
        config.logging.log_dir = PathBuf::from(value);
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"population_size": "64", "log_level": "debug"}`)
pub fn apply_cli_overrides(config: &mut EvonetConfig, cli_args: &HashMap<String, String>) {
    // System settings
    if let Some(value) = cli_args.get("log_level") {
        config.system.log_level = value.clone();
    }
    if let Some(value) = cli_args.get("debug") {
        config.system.debug = value.to_lowercase() == "true" || value == "1";
    }

    // Evolution settings
    if let Some(value) = cli_args.get("population_size") {
        if let Ok(size) = value.parse::<usize>() {
            config.evolution.population_size = size;
        }
    }
    if let Some(value) = cli_args.get("max_generations") {
        if let Ok(generations) = value.parse::<u64>() {
            config.evolution.max_generations = generations;
        }
    }
    if let Some(value) = cli_args.get("crossover_rate") {
        if let Ok(rate) = value.parse::<f64>() {
            config.evolution.crossover_rate = rate;
        }
    }
    if let Some(value) = cli_args.get("mutation_rate") {
        if let Ok(rate) = value.parse::<f64>() {
            config.evolution.mutation_rate = rate;
        }
    }

    // Logging settings
    if let Some(value) = cli_args.get("log_dir") {
        config.logging.log_dir = PathBuf::from(value);
    }
}
