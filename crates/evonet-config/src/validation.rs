// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! This module provides validation logic to ensure configuration values are
//! consistent and within valid ranges before a population is built from them.

use crate::{ConfigError, ConfigResult, EvonetConfig};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    InvalidValue {
        field: String,
        reason: String,
    },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "{} = {} is outside valid range [{}, {}]",
                    field, value, min, max
                )
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Probability rates inside [0, 1]
/// - Nonzero layer sizes and population size
/// - A recognizable log level
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` with details if validation fails
pub fn validate_config(config: &EvonetConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_rates(config, &mut errors);
    validate_sizes(config, &mut errors);
    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_rates(config: &EvonetConfig, errors: &mut Vec<ConfigValidationError>) {
    for (field, value) in [
        ("evolution.crossover_rate", config.evolution.crossover_rate),
        ("evolution.mutation_rate", config.evolution.mutation_rate),
    ] {
        if !(0.0..=1.0).contains(&value) || !value.is_finite() {
            errors.push(ConfigValidationError::OutOfRange {
                field: field.to_string(),
                value,
                min: 0.0,
                max: 1.0,
            });
        }
    }
}

fn validate_sizes(config: &EvonetConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.evolution.population_size == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "evolution.population_size".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    for (field, value) in [
        ("network.ninput", config.network.ninput),
        ("network.noutput", config.network.noutput),
    ] {
        if value == 0 {
            errors.push(ConfigValidationError::InvalidValue {
                field: field.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
    }

    // hidden width only matters when hidden layers exist
    if config.network.nhiddenlayer > 0 && config.network.nhidden == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "network.nhidden".to_string(),
            reason: "must be at least 1 when hidden layers are configured".to_string(),
        });
    }
}

fn validate_logging(config: &EvonetConfig, errors: &mut Vec<ConfigValidationError>) {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LEVELS.contains(&config.system.log_level.to_lowercase().as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "system.log_level".to_string(),
            reason: format!(
                "unknown level '{}', expected one of {:?}",
                config.system.log_level, LEVELS
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&EvonetConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_rate_above_one() {
        let mut config = EvonetConfig::default();
        config.evolution.crossover_rate = 1.2;

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("evolution.crossover_rate"));
    }

    #[test]
    fn test_rejects_zero_population() {
        let mut config = EvonetConfig::default();
        config.evolution.population_size = 0;

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_hidden_width_with_hidden_layers() {
        let mut config = EvonetConfig::default();
        config.network.nhiddenlayer = 2;
        config.network.nhidden = 0;

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_hidden_width_without_hidden_layers_is_fine() {
        let mut config = EvonetConfig::default();
        config.network.nhiddenlayer = 0;
        config.network.nhidden = 0;

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut config = EvonetConfig::default();
        config.system.log_level = "verbose".to_string();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("system.log_level"));
    }

    #[test]
    fn test_errors_are_aggregated() {
        let mut config = EvonetConfig::default();
        config.evolution.crossover_rate = -0.1;
        config.evolution.population_size = 0;

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("evolution.crossover_rate"));
        assert!(message.contains("evolution.population_size"));
    }
}
