// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Tracing-based inspection of networks and populations
//!
//! Debug-level dumps of topology, activations and scores. Purely
//! observational; nothing here formats for end users or affects training.

use tracing::debug;

use evonet_neural::NeuralNetwork;

use crate::population::Population;

/// Dump one network's topology and per-layer state at debug level
pub fn log_network(network: &NeuralNetwork) {
    debug!(
        layers = network.layer_count(),
        score = network.score(),
        fitness = network.fitness(),
        "network"
    );
    for k in 0..network.layer_count() {
        let layer = &network[k];
        debug!(
            layer = k,
            neurons = layer.size(),
            activations = ?layer.activations(),
            "layer state"
        );
    }
}

/// Dump every member of the current generation at debug level
pub fn log_population(population: &Population) {
    debug!(
        generation = population.generation(),
        size = population.len(),
        "population"
    );
    for (i, member) in population.members().iter().enumerate() {
        debug!(
            member = i,
            score = member.score(),
            fitness = member.fitness(),
            decision = member.output(),
            "member state"
        );
    }
}
