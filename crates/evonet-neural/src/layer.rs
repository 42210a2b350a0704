// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Layer
//!
//! One stage of a feedforward network: activations, bias, and the weight
//! matrix connecting it to the previous stage.
//!
//! ## Storage
//!
//! ```text
//! activations: N values in (0, 1) after a forward pass
//! bias:        N values, absent on the input layer
//! weights:     N * P values, flattened row-major -
//!              weights[i * P + j] connects previous neuron j to neuron i
//! ```
//!
//! Sizes are fixed at construction; contents mutate in place for the life of
//! the network. Element access is unchecked - an out-of-range index is a
//! caller error, not a reported failure.

use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::activation::sigmoid;
use crate::random::{standard_normal, uniform, MUTATION_SIGMA};

/// One fully-connected layer
#[derive(Debug, Clone)]
pub struct Layer {
    activations: Vec<f64>,
    bias: Vec<f64>,
    weights: Vec<f64>,
    /// Neuron count of the previous layer (0 for the input layer)
    previous_size: usize,
}

impl Layer {
    /// Input layer: `size` zeroed activations, no bias, no weights
    pub fn input(size: usize) -> Self {
        Self {
            activations: vec![0.0; size],
            bias: Vec::new(),
            weights: Vec::new(),
            previous_size: 0,
        }
    }

    /// Hidden or output layer wired to a previous layer of `previous_size`
    /// neurons.
    ///
    /// Bias starts uniform in `[-1, 1)` and weights uniform in `[0, 1)`,
    /// enough spread to break the symmetry between neurons. Callers must not
    /// assume more about the distribution than bounded and roughly centered.
    pub fn dense<R: Rng>(size: usize, previous_size: usize, rng: &mut R) -> Self {
        let mut bias = Vec::with_capacity(size);
        let mut weights = Vec::with_capacity(size * previous_size);

        for _ in 0..size {
            bias.push(uniform(rng, -1.0, 1.0));
            for _ in 0..previous_size {
                weights.push(uniform(rng, 0.0, 1.0));
            }
        }

        Self {
            activations: vec![0.0; size],
            bias,
            weights,
            previous_size,
        }
    }

    /// Neuron count
    pub fn size(&self) -> usize {
        self.activations.len()
    }

    /// Affine + sigmoid forward step from the previous layer's activations
    pub fn forward(&mut self, previous: &Layer) {
        let p = previous.size();
        for i in 0..self.activations.len() {
            let mut s = self.bias[i];
            for j in 0..p {
                s += self.weights[i * p + j] * previous.activations[j];
            }
            self.activations[i] = sigmoid(s);
        }
    }

    /// Input-layer forward step: sigmoid applied to the raw inputs.
    ///
    /// The input layer squashes, it does not pass through; downstream
    /// layers are calibrated against activations in (0, 1).
    pub fn forward_inputs(&mut self, inputs: &[f64]) {
        for i in 0..self.activations.len() {
            self.activations[i] = sigmoid(inputs[i]);
        }
    }

    /// Perturb bias and weight entries, each independently with probability
    /// `rate`, by `MUTATION_SIGMA` times a standard normal draw.
    pub fn mutate<R: Rng>(&mut self, rate: f64, rng: &mut R) {
        for b in &mut self.bias {
            if rng.gen::<f64>() < rate {
                *b += MUTATION_SIGMA * standard_normal(rng);
            }
        }
        for w in &mut self.weights {
            if rng.gen::<f64>() < rate {
                *w += MUTATION_SIGMA * standard_normal(rng);
            }
        }
    }

    pub fn activations(&self) -> &[f64] {
        &self.activations
    }

    pub fn bias(&self) -> &[f64] {
        &self.bias
    }

    pub fn bias_mut(&mut self) -> &mut [f64] {
        &mut self.bias
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// Neuron count of the previous layer (the weight matrix column count)
    pub fn previous_size(&self) -> usize {
        self.previous_size
    }
}

impl Index<usize> for Layer {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.activations[index]
    }
}

impl IndexMut<usize> for Layer {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.activations[index]
    }
}
