// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for evolution operations
//!
//! Construction is the only fallible surface. Once a population exists, the
//! numeric degeneracies (zero fitness sum, roulette overrun) are contained
//! locally by policy instead of surfacing as errors.

use thiserror::Error;

/// Errors raised while building a population
#[derive(Debug, Error)]
pub enum EvoError {
    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("{name} must be in [0, 1], got {rate}")]
    InvalidRate { name: &'static str, rate: f64 },
}

/// Result type for evolution operations
pub type EvoResult<T> = Result<T, EvoError>;
