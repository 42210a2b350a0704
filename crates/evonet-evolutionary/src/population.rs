// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Population
//!
//! Double-buffered generations of networks and the evaluate -> select ->
//! recombine -> mutate -> swap cycle.
//!
//! ## Double buffering
//!
//! Two same-sized buffers hold the current and the old generation; an active
//! index (0 or 1) flips each generation instead of copying elements. Parents
//! are always drawn from the current buffer while offspring overwrite the
//! old one, so evolution never reads a buffer it is rewriting.
//!
//! ## Randomness
//!
//! The population owns a seedable `StdRng`; every construction, selection
//! and mutation draw goes through it. `from_seed` makes a whole training run
//! reproducible.

use std::ops::{Index, IndexMut};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use evonet_neural::{NeuralNetwork, NeuralParameters};

use crate::game::Game;
use crate::types::{EvoError, EvoResult};

/// A fixed-size population evolved one generation per `run` call
pub struct Population {
    buffers: [Vec<NeuralNetwork>; 2],
    /// Which buffer is the current generation (readable by Games, selectable
    /// as a crossover parent)
    active: usize,
    params: NeuralParameters,
    rng: StdRng,
    generation: u64,
}

impl Population {
    /// Build a population of `population_size` copies of one prototype
    /// network, with an entropy-seeded generator.
    pub fn new(population_size: usize, params: NeuralParameters) -> EvoResult<Self> {
        Self::with_rng(population_size, params, StdRng::from_entropy())
    }

    /// Deterministic construction for reproducible runs
    pub fn from_seed(population_size: usize, params: NeuralParameters, seed: u64) -> EvoResult<Self> {
        Self::with_rng(population_size, params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(population_size: usize, params: NeuralParameters, mut rng: StdRng) -> EvoResult<Self> {
        if population_size == 0 {
            return Err(EvoError::EmptyPopulation);
        }
        for (name, rate) in [
            ("crossover_rate", params.crossover_rate),
            ("mutation_rate", params.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(EvoError::InvalidRate { name, rate });
            }
        }

        let prototype = NeuralNetwork::new(&params, &mut rng);
        let first = vec![prototype; population_size];
        let second = first.clone();

        Ok(Self {
            buffers: [first, second],
            active: 0,
            params,
            rng,
            generation: 0,
        })
    }

    /// Members of the current generation
    pub fn members(&self) -> &[NeuralNetwork] {
        &self.buffers[self.active]
    }

    pub fn len(&self) -> usize {
        self.buffers[self.active].len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers[self.active].is_empty()
    }

    /// Generations completed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn params(&self) -> &NeuralParameters {
        &self.params
    }

    /// Advance training by exactly one generation: evaluate every current
    /// member through the `Game`, normalize scores into fitness, then breed
    /// the next generation and swap buffers.
    ///
    /// Returns `true` if any evaluation requested a training stop. The
    /// generation still completes, so the population is left consistent and
    /// advanced either way.
    pub fn run<G: Game>(&mut self, game: &G) -> bool {
        let mut stop = false;
        for member in self.buffers[self.active].iter_mut() {
            stop |= game.evaluate(member);
        }
        self.advance_generation();
        stop
    }

    /// `run` with the evaluation phase fanned out across threads.
    ///
    /// Members are scored independently; the parallel join is the barrier
    /// required before fitness calculation reads the scores. Selection and
    /// recombination stay sequential on the population's own generator.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<G: Game + Sync>(&mut self, game: &G) -> bool {
        use rayon::prelude::*;

        let stop = self.buffers[self.active]
            .par_iter_mut()
            .map(|member| game.evaluate(member))
            .reduce(|| false, |a, b| a || b);
        self.advance_generation();
        stop
    }

    fn advance_generation(&mut self) {
        let current = &self.buffers[self.active];
        let best = Self::best_index(current);
        let mean = current.iter().map(|n| n.score()).sum::<f64>() / current.len() as f64;
        debug!(
            generation = self.generation,
            best_score = current[best].score(),
            mean_score = mean,
            "generation evaluated"
        );

        self.calculate_fitness();
        self.evolve();
    }

    /// Normalize raw scores into selection weights: `fitness = score / sum`.
    ///
    /// A zero or non-finite score sum would poison selection with NaN, so it
    /// degrades to uniform weights instead.
    pub fn calculate_fitness(&mut self) {
        let current = &mut self.buffers[self.active];
        let sum: f64 = current.iter().map(|n| n.score()).sum();

        if sum == 0.0 || !sum.is_finite() {
            warn!(
                generation = self.generation,
                score_sum = sum,
                "degenerate score sum, falling back to uniform fitness"
            );
            let uniform = 1.0 / current.len() as f64;
            for member in current.iter_mut() {
                member.set_fitness(uniform);
            }
            return;
        }

        for member in current.iter_mut() {
            let fitness = member.score() / sum;
            member.set_fitness(fitness);
        }
    }

    /// Roulette-wheel selection over the current generation.
    ///
    /// Precondition: `calculate_fitness` has run, so fitnesses sum to 1.
    /// Floating-point drift can leave the draw positive after a full scan;
    /// the last member is the fallback.
    pub fn pick_one(&mut self) -> &NeuralNetwork {
        Self::select(&self.buffers[self.active], &mut self.rng)
    }

    fn select<'a, R: Rng>(generation: &'a [NeuralNetwork], rng: &mut R) -> &'a NeuralNetwork {
        let mut r: f64 = rng.gen();
        for member in generation {
            r -= member.fitness();
            if r <= 0.0 {
                return member;
            }
        }
        &generation[generation.len() - 1]
    }

    /// Breed the next generation: every slot of the old buffer is rewritten
    /// in place as a mutated crossover of two parents drawn independently
    /// from the current generation, its score reset to 0. The buffer roles
    /// then swap in O(1).
    pub fn evolve(&mut self) {
        let crossover_rate = self.params.crossover_rate;
        let mutation_rate = self.params.mutation_rate;

        let (left, right) = self.buffers.split_at_mut(1);
        let (current, old) = if self.active == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        };

        let rng = &mut self.rng;
        for offspring in old.iter_mut() {
            let first = Self::select(current, rng);
            let second = Self::select(current, rng);
            offspring.crossover(first, second, crossover_rate);
            offspring.mutate(mutation_rate, rng);
            offspring.set_score(0.0);
        }

        self.active = 1 - self.active;
        self.generation += 1;
    }

    /// Member of the current generation with the maximal score; ties break
    /// toward the first occurrence.
    pub fn best_element(&self) -> &NeuralNetwork {
        let current = &self.buffers[self.active];
        &current[Self::best_index(current)]
    }

    pub fn best_element_mut(&mut self) -> &mut NeuralNetwork {
        let best = Self::best_index(&self.buffers[self.active]);
        &mut self.buffers[self.active][best]
    }

    fn best_index(generation: &[NeuralNetwork]) -> usize {
        let mut best = 0;
        for i in 1..generation.len() {
            if generation[i].score() > generation[best].score() {
                best = i;
            }
        }
        best
    }
}

impl Index<usize> for Population {
    type Output = NeuralNetwork;

    fn index(&self, index: usize) -> &NeuralNetwork {
        &self.buffers[self.active][index]
    }
}

impl IndexMut<usize> for Population {
    fn index_mut(&mut self, index: usize) -> &mut NeuralNetwork {
        &mut self.buffers[self.active][index]
    }
}
