// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Full generation-cycle scenarios driven through the public API

use evonet_evolutionary::{Game, Population};
use evonet_neural::{NeuralNetwork, NeuralParameters};

fn small_params() -> NeuralParameters {
    NeuralParameters {
        ninput: 2,
        nhiddenlayer: 0,
        nhidden: 0,
        noutput: 2,
        crossover_rate: 0.3,
        mutation_rate: 0.3,
    }
}

/// Scores a network on a single fixed input; rewards deciding class 0.
struct LeftDecider;

impl Game for LeftDecider {
    fn evaluate(&self, network: &mut NeuralNetwork) -> bool {
        let decision = network.compute(&[1.0, 0.0]);
        network.set_score(if decision == 0 { 2.0 } else { 1.0 });
        false
    }
}

/// Always assigns score 1 and never asks to stop.
struct ConstantGame;

impl Game for ConstantGame {
    fn evaluate(&self, network: &mut NeuralNetwork) -> bool {
        network.set_score(1.0);
        false
    }
}

/// Requests a stop once it has evaluated `limit` networks in total.
struct StopAfter {
    calls: std::sync::atomic::AtomicUsize,
    limit: usize,
}

impl StopAfter {
    fn new(limit: usize) -> Self {
        Self {
            calls: std::sync::atomic::AtomicUsize::new(0),
            limit,
        }
    }
}

impl Game for StopAfter {
    fn evaluate(&self, network: &mut NeuralNetwork) -> bool {
        network.set_score(1.0);
        let seen = self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst) + 1;
        seen >= self.limit
    }
}

#[test]
fn test_minimal_topology_forward_pass() {
    let mut population = Population::from_seed(1, small_params(), 50).unwrap();

    let member = &mut population[0];
    let decision = member.compute(&[1.0, 0.0]);

    assert!(decision == 0 || decision == 1);
    let out = &member[1];
    for i in 0..out.size() {
        assert!(out[i] > 0.0 && out[i] < 1.0, "activation escaped (0,1)");
    }
}

#[test]
fn test_one_run_advances_exactly_one_generation() {
    let mut population = Population::from_seed(4, small_params(), 51).unwrap();

    let stop = population.run(&ConstantGame);

    assert!(!stop);
    assert_eq!(population.generation(), 1);
    assert_eq!(population.len(), 4);
    // offspring scores are reset at the end of evolve
    for member in population.members() {
        assert_eq!(member.score(), 0.0);
    }
    assert_eq!(population.best_element().score(), 0.0);
}

#[test]
fn test_many_generations_keep_population_consistent() {
    let mut population = Population::from_seed(8, small_params(), 52).unwrap();

    for _ in 0..25 {
        population.run(&LeftDecider);
        assert_eq!(population.len(), 8);
    }
    assert_eq!(population.generation(), 25);
}

#[test]
fn test_stop_signal_reaches_the_driving_loop() {
    let mut population = Population::from_seed(4, small_params(), 53).unwrap();
    let game = StopAfter::new(6);

    // 4 evaluations in the first generation, 2 more in the second: the stop
    // threshold is crossed mid-generation and must surface from that run.
    assert!(!population.run(&game));
    assert!(population.run(&game));
    assert_eq!(population.generation(), 2);
}

#[test]
fn test_mutation_diversifies_prototype_copies() {
    let mut params = small_params();
    params.mutation_rate = 1.0;
    let mut population = Population::from_seed(6, params, 54).unwrap();

    population.run(&ConstantGame);

    // all members started as copies of one prototype; with every gene
    // perturbed by an independent Gaussian draw, members must differ
    let first = population[0][1].weights().to_vec();
    let any_diverged = population
        .members()
        .iter()
        .any(|m| m[1].weights() != first.as_slice());
    assert!(any_diverged, "generation stayed identical after mutation");
}
