// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Random draws for Evonet evolution.

Every function takes an explicit `&mut impl Rng` instead of reaching for a
thread-local source. The `Population` owns the generator, which keeps seeded
runs reproducible and keeps parallel evaluation off the selection stream.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use rand::Rng;

/// Standard deviation scale applied to mutation perturbations.
pub const MUTATION_SIGMA: f64 = 0.05;

/// Uniform draw in `[lo, hi)`
pub fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + rng.gen::<f64>() * (hi - lo)
}

/// Standard normal draw via the Box-Muller transform
///
/// Two independent uniform draws produce one Gaussian value. The first draw
/// is mapped into `(0, 1]` so the logarithm stays finite.
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let val = uniform(&mut rng, -1.0, 1.0);
            assert!(val >= -1.0 && val < 1.0, "uniform out of range: {}", val);
        }
    }

    #[test]
    fn test_standard_normal_is_finite() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(standard_normal(&mut rng).is_finite());
        }
    }

    #[test]
    fn test_standard_normal_roughly_centered() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10_000;
        let mean: f64 = (0..n).map(|_| standard_normal(&mut rng)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "sample mean too far from zero: {}", mean);
    }

    #[test]
    fn test_seeded_determinism() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            assert_eq!(standard_normal(&mut a), standard_normal(&mut b));
        }
    }
}
