// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Evonet Neural Computation

Feedforward neural computation for Evonet:

- **Layer**: activations, bias and a flattened row-major weight matrix
- **NeuralNetwork**: an ordered chain of fully-connected layers
- **Genome operators**: two-ended splice crossover and per-entry mutation
- **Random**: explicit-generator uniform and Gaussian draws

## Architecture

This crate holds the **numeric core** only. Selection and generation
management (the genotype side) live in `evonet-evolutionary`.

```text
evonet-neural (Phenotype)     evonet-evolutionary (Population)
─────────────────────────     ────────────────────────────────
│ Forward pass          │  ←  │ Game evaluation loop          │
│ Crossover / mutation  │  ←  │ Roulette-wheel selection      │
│ Score / fitness slots │  →  │ Fitness normalization         │
└───────────────────────┘     └───────────────────────────────┘
```

All stochastic draws take `&mut impl Rng`, so callers own the generator and
seeded runs are reproducible.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod activation;
pub mod layer;
pub mod network;
pub mod params;
pub mod random;

// Re-export commonly used types
pub use activation::sigmoid;
pub use layer::Layer;
pub use network::NeuralNetwork;
pub use params::{NeuralParameters, UNSCORED};
pub use random::{standard_normal, uniform, MUTATION_SIGMA};
