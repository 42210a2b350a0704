// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # NeuralNetwork
//!
//! An ordered chain of fully-connected layers forming a feedforward
//! classifier, plus the genome operators the evolutionary loop needs.
//!
//! ## Genome layout
//!
//! For crossover, all weights and biases of every non-input layer form one
//! ordered gene sequence:
//!
//! ```text
//! layer 1 weights, layer 1 bias, layer 2 weights, layer 2 bias, ...
//! ```
//!
//! The splice point `cut = round(T * crossover_rate)` divides it: genes in
//! front of the cut come from the first parent (scanned front-to-back),
//! genes behind it from the second parent (scanned back-to-front). The two
//! scans partition the genome exactly, so `crossover_rate = 1.0` clones the
//! first parent's genome and `0.0` clones the second's.

use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::layer::Layer;
use crate::params::{NeuralParameters, UNSCORED};

/// A feedforward network with a task-assigned `score` and a
/// population-assigned `fitness`
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    layers: Vec<Layer>,
    score: f64,
    fitness: f64,
}

impl NeuralNetwork {
    /// Build a network from topology parameters: an input layer, then
    /// `nhiddenlayer` hidden layers of `nhidden` neurons, then the output
    /// layer, each wired to its immediate predecessor.
    pub fn new<R: Rng>(params: &NeuralParameters, rng: &mut R) -> Self {
        let mut layers = Vec::with_capacity(params.layer_count());
        layers.push(Layer::input(params.ninput));

        let mut previous = params.ninput;
        for _ in 0..params.nhiddenlayer {
            layers.push(Layer::dense(params.nhidden, previous, rng));
            previous = params.nhidden;
        }
        layers.push(Layer::dense(params.noutput, previous, rng));

        Self {
            layers,
            score: UNSCORED,
            fitness: UNSCORED,
        }
    }

    /// Number of layers (input and output included)
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Forward pass: propagate `inputs` through every layer, then return the
    /// decision index.
    ///
    /// `inputs` must have exactly `ninput` elements; length is not validated.
    pub fn compute(&mut self, inputs: &[f64]) -> usize {
        self.layers[0].forward_inputs(inputs);
        for k in 1..self.layers.len() {
            let (before, rest) = self.layers.split_at_mut(k);
            rest[0].forward(&before[k - 1]);
        }
        self.output()
    }

    /// Index of the output neuron with the maximal activation.
    ///
    /// Ties break toward the lowest index. Stable between forward passes.
    pub fn output(&self) -> usize {
        let output_layer = &self.layers[self.layers.len() - 1];
        let mut best = 0;
        for i in 1..output_layer.size() {
            if output_layer[i] > output_layer[best] {
                best = i;
            }
        }
        best
    }

    /// Overwrite this network's non-input genome with a two-ended splice of
    /// the two parents.
    ///
    /// The first `cut` genes come from `first`, front-to-back; the remaining
    /// `T - cut` come from `second`, back-to-front. Both scans visit layers
    /// weights-before-bias, so a single position check against `cut` selects
    /// the source of every gene.
    pub fn crossover(&mut self, first: &NeuralNetwork, second: &NeuralNetwork, crossover_rate: f64) {
        let total: usize = self.layers[1..]
            .iter()
            .map(|l| l.weights().len() + l.bias().len())
            .sum();
        let cut = (total as f64 * crossover_rate).round() as usize;

        let mut pos = 0usize;
        for (k, layer) in self.layers.iter_mut().enumerate().skip(1) {
            let first_layer = &first.layers[k];
            let second_layer = &second.layers[k];

            let weights = layer.weights_mut();
            for j in 0..weights.len() {
                weights[j] = if pos < cut {
                    first_layer.weights()[j]
                } else {
                    second_layer.weights()[j]
                };
                pos += 1;
            }

            let bias = layer.bias_mut();
            for j in 0..bias.len() {
                bias[j] = if pos < cut {
                    first_layer.bias()[j]
                } else {
                    second_layer.bias()[j]
                };
                pos += 1;
            }
        }
    }

    /// Mutate every non-input layer with the given per-entry rate
    pub fn mutate<R: Rng>(&mut self, rate: f64, rng: &mut R) {
        for layer in self.layers.iter_mut().skip(1) {
            layer.mutate(rate, rng);
        }
    }

    /// Raw task-assigned score (written by a `Game`)
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    /// Normalized selection weight (written by the population)
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl Index<usize> for NeuralNetwork {
    type Output = Layer;

    fn index(&self, index: usize) -> &Layer {
        &self.layers[index]
    }
}

impl IndexMut<usize> for NeuralNetwork {
    fn index_mut(&mut self, index: usize) -> &mut Layer {
        &mut self.layers[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(ninput: usize, nhiddenlayer: usize, nhidden: usize, noutput: usize) -> NeuralParameters {
        NeuralParameters {
            ninput,
            nhiddenlayer,
            nhidden,
            noutput,
            crossover_rate: 0.3,
            mutation_rate: 0.3,
        }
    }

    fn non_input_genome(network: &NeuralNetwork) -> Vec<f64> {
        let mut genes = Vec::new();
        for k in 1..network.layer_count() {
            genes.extend_from_slice(network[k].weights());
            genes.extend_from_slice(network[k].bias());
        }
        genes
    }

    #[test]
    fn test_construction_topology() {
        let mut rng = StdRng::seed_from_u64(10);
        let network = NeuralNetwork::new(&params(8, 2, 5, 4), &mut rng);

        assert_eq!(network.layer_count(), 4);
        assert_eq!(network[0].size(), 8);
        assert_eq!(network[1].size(), 5);
        assert_eq!(network[2].size(), 5);
        assert_eq!(network[3].size(), 4);

        // each layer's weight-matrix column count equals the previous
        // layer's neuron count
        for k in 1..network.layer_count() {
            assert_eq!(network[k].previous_size(), network[k - 1].size());
            assert_eq!(
                network[k].weights().len(),
                network[k].size() * network[k - 1].size()
            );
        }

        assert_eq!(network.score(), UNSCORED);
        assert_eq!(network.fitness(), UNSCORED);
    }

    #[test]
    fn test_compute_returns_valid_class() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut network = NeuralNetwork::new(&params(2, 0, 0, 2), &mut rng);

        let decision = network.compute(&[1.0, 0.0]);
        assert!(decision < 2);

        let out = &network[1];
        for i in 0..out.size() {
            assert!(out[i] > 0.0 && out[i] < 1.0);
        }
    }

    #[test]
    fn test_output_is_stable_without_recompute() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut network = NeuralNetwork::new(&params(3, 1, 4, 3), &mut rng);

        let decision = network.compute(&[0.5, -0.5, 2.0]);
        assert_eq!(network.output(), decision);
        assert_eq!(network.output(), decision);
    }

    #[test]
    fn test_output_tie_breaks_to_lowest_index() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut network = NeuralNetwork::new(&params(2, 0, 0, 3), &mut rng);

        let last = network.layer_count() - 1;
        network[last][0] = 0.25;
        network[last][1] = 0.75;
        network[last][2] = 0.75;
        assert_eq!(network.output(), 1);

        network[last][0] = 0.75;
        assert_eq!(network.output(), 0);
    }

    #[test]
    fn test_crossover_rate_one_clones_first_parent() {
        let mut rng = StdRng::seed_from_u64(14);
        let p = params(4, 1, 3, 2);
        let first = NeuralNetwork::new(&p, &mut rng);
        let second = NeuralNetwork::new(&p, &mut rng);
        let mut offspring = NeuralNetwork::new(&p, &mut rng);

        offspring.crossover(&first, &second, 1.0);
        assert_eq!(non_input_genome(&offspring), non_input_genome(&first));
    }

    #[test]
    fn test_crossover_rate_zero_clones_second_parent() {
        let mut rng = StdRng::seed_from_u64(15);
        let p = params(4, 1, 3, 2);
        let first = NeuralNetwork::new(&p, &mut rng);
        let second = NeuralNetwork::new(&p, &mut rng);
        let mut offspring = NeuralNetwork::new(&p, &mut rng);

        offspring.crossover(&first, &second, 0.0);
        assert_eq!(non_input_genome(&offspring), non_input_genome(&second));
    }

    #[test]
    fn test_crossover_splices_both_parents() {
        let mut rng = StdRng::seed_from_u64(16);
        let p = params(4, 1, 3, 2);
        let first = NeuralNetwork::new(&p, &mut rng);
        let second = NeuralNetwork::new(&p, &mut rng);
        let mut offspring = NeuralNetwork::new(&p, &mut rng);

        offspring.crossover(&first, &second, 0.5);

        let genes = non_input_genome(&offspring);
        let from_first = non_input_genome(&first);
        let from_second = non_input_genome(&second);
        let cut = (genes.len() as f64 * 0.5).round() as usize;

        assert_eq!(&genes[..cut], &from_first[..cut]);
        assert_eq!(&genes[cut..], &from_second[cut..]);
    }

    #[test]
    fn test_mutate_skips_input_layer() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut network = NeuralNetwork::new(&params(3, 1, 3, 2), &mut rng);

        network.mutate(1.0, &mut rng);
        assert!(network[0].bias().is_empty());
        assert!(network[0].weights().is_empty());
    }
}
