// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Game
//!
//! The task-specific evaluator contract. Evonet trains against whatever a
//! `Game` measures; the engine itself never defines a task.

use evonet_neural::NeuralNetwork;

/// A task-specific evaluator supplied by the caller.
///
/// `evaluate` exercises the network (calling [`NeuralNetwork::compute`] zero
/// or more times against task inputs) and writes the resulting `score`. It
/// returns `true` to request that training stop; [`crate::Population::run`]
/// aggregates that signal across the generation and reports it to the
/// driving loop.
///
/// Implementations hold no per-network state of their own, which keeps
/// evaluation of different population members independent.
pub trait Game {
    fn evaluate(&self, network: &mut NeuralNetwork) -> bool;
}
