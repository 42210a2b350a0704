// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Evonet Evolution

Generational evolutionary search over populations of feedforward networks:

- `Game` - the task-specific evaluator contract supplied by the caller
- `Population` - double-buffered generations with roulette-wheel selection,
  gene-splice crossover and probabilistic mutation
- tracing-based inspection helpers for networks and populations

## Generation cycle

```text
run(game):
    evaluate every current member   (Game writes score)
    calculate_fitness               (score / sum, uniform fallback on zero)
    evolve                          (old[i] = mutate(crossover(pick, pick)))
    swap buffers                    (O(1) active-index flip)
```

One `run` call advances training by exactly one generation and returns the
aggregated stop signal from the evaluators.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod game;
pub mod population;
pub mod printer;
pub mod types;

// Re-export commonly used types
pub use game::Game;
pub use population::Population;
pub use printer::{log_network, log_population};
pub use types::{EvoError, EvoResult};
