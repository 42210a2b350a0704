// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Network topology and evolution-rate parameters
//!
//! `NeuralParameters` is the only configuration surface of the numeric core.
//! `evonet-config` produces one from the TOML configuration; tests build it
//! directly.

use serde::{Deserialize, Serialize};

/// Sentinel for a network that has not been scored by a `Game` yet.
///
/// Both `score` and `fitness` start at this value and stay negative until the
/// evaluation and fitness passes write them.
pub const UNSCORED: f64 = -1.0;

/// Topology and recombination parameters for a population of networks
///
/// Rates are probabilities in `[0, 1]`. The core does not validate them;
/// `Population` construction and `evonet-config` validation do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeuralParameters {
    /// Neurons in the input layer
    pub ninput: usize,

    /// Number of hidden layers between input and output
    pub nhiddenlayer: usize,

    /// Neurons per hidden layer
    pub nhidden: usize,

    /// Neurons in the output layer (one per decision class)
    pub noutput: usize,

    /// Fraction of the genome taken from the first crossover parent
    pub crossover_rate: f64,

    /// Per-entry probability of a Gaussian perturbation during mutation
    pub mutation_rate: f64,
}

impl NeuralParameters {
    /// Total layer count of a network built from these parameters
    pub fn layer_count(&self) -> usize {
        self.nhiddenlayer + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_count() {
        let params = NeuralParameters {
            ninput: 8,
            nhiddenlayer: 3,
            nhidden: 8,
            noutput: 4,
            crossover_rate: 0.3,
            mutation_rate: 0.3,
        };
        assert_eq!(params.layer_count(), 5);
    }

    #[test]
    fn test_serde_round_trip() {
        let params = NeuralParameters {
            ninput: 2,
            nhiddenlayer: 0,
            nhidden: 0,
            noutput: 2,
            crossover_rate: 1.0,
            mutation_rate: 0.0,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: NeuralParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
