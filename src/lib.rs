// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Evonet - Evolutionary Neural Network Trainer
//!
//! Evonet trains small feedforward classifiers by evolutionary search: a
//! population of networks is repeatedly scored by a caller-supplied task
//! (`Game`), selected by fitness, recombined by gene splicing and mutated,
//! one generation per `run` call.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! evonet = "0.0.1-beta.1"
//! ```
//!
//! ```rust,no_run
//! use evonet::prelude::*;
//!
//! struct AlwaysLeft;
//!
//! impl Game for AlwaysLeft {
//!     fn evaluate(&self, network: &mut NeuralNetwork) -> bool {
//!         let decision = network.compute(&[1.0, 0.0]);
//!         network.set_score(if decision == 0 { 2.0 } else { 1.0 });
//!         false
//!     }
//! }
//!
//! let config = load_config(None, None).expect("Failed to load config");
//! let params = config.neural_parameters();
//! let mut population = Population::new(config.evolution.population_size, params)?;
//!
//! for _ in 0..config.evolution.max_generations {
//!     if population.run(&AlwaysLeft) {
//!         break;
//!     }
//! }
//! # Ok::<(), evonet::evolutionary::EvoError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - **`parallel`**: fan Game evaluation out across threads
//!   (`Population::run_parallel`)
//! - **`file-logging`**: rotated per-run log files from
//!   `evonet-observability`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: evonet-config, evonet-observability        │
//! │  (TOML configuration, tracing initialization)           │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Numeric core: evonet-neural                            │
//! │  (Layer, NeuralNetwork, genome operators)               │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Evolution: evonet-evolutionary                         │
//! │  (Game contract, Population, generation cycle)          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

// Re-export core
pub use evonet_neural as neural;

pub use evonet_evolutionary as evolutionary;

// Re-export infrastructure
pub use evonet_config as config;

pub use evonet_observability as observability;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::neural::{Layer, NeuralNetwork, NeuralParameters, UNSCORED};

    pub use crate::evolutionary::{EvoError, EvoResult, Game, Population};

    pub use crate::config::{load_config, validate_config, EvonetConfig};

    pub use crate::observability::{init_logging, CrateDebugFlags};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_facade_imports() {
        // Just test that re-exports work
        use crate::prelude::*;
        let _params = NeuralParameters {
            ninput: 2,
            nhiddenlayer: 0,
            nhidden: 0,
            noutput: 2,
            crossover_rate: 0.5,
            mutation_rate: 0.1,
        };
        let _config = EvonetConfig::default();
    }
}
