// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `evonet_configuration.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use evonet_neural::NeuralParameters;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EvonetConfig {
    pub system: SystemConfig,
    pub network: NetworkConfig,
    pub evolution: EvolutionConfig,
    pub logging: LoggingConfig,
}

impl EvonetConfig {
    /// Collapse the network and evolution sections into the parameter struct
    /// the core consumes.
    pub fn neural_parameters(&self) -> NeuralParameters {
        NeuralParameters {
            ninput: self.network.ninput,
            nhiddenlayer: self.network.nhiddenlayer,
            nhidden: self.network.nhidden,
            noutput: self.network.noutput,
            crossover_rate: self.evolution.crossover_rate,
            mutation_rate: self.evolution.mutation_rate,
        }
    }
}

/// System-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    pub debug: bool,
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
        }
    }
}

/// Network topology configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub ninput: usize,
    pub nhiddenlayer: usize,
    pub nhidden: usize,
    pub noutput: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ninput: 8,
            nhiddenlayer: 1,
            nhidden: 8,
            noutput: 4,
        }
    }
}

/// Evolutionary-loop configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    /// Upper bound on generations for a driving loop that honors it
    pub max_generations: u64,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            max_generations: 100,
            crossover_rate: 0.3,
            mutation_rate: 0.3,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_to_file: bool,
    pub log_dir: PathBuf,
    /// Keep the N most recent run folders
    pub retention_runs: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_to_file: false,
            log_dir: PathBuf::from("./logs"),
            retention_runs: 10,
        }
    }
}
