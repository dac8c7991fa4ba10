//! Shared event generators for integration tests

#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Uniform};

/// Seeded generator so every test sees the same events
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `n` sorted uniform arrival times on `[t_start, t_stop)`
pub fn uniform_events(n: usize, t_start: f64, t_stop: f64, seed: u64) -> Vec<f64> {
    let mut rng = rng(seed);
    let dist = Uniform::new(t_start, t_stop);
    let mut times: Vec<f64> = (0..n).map(|_| dist.sample(&mut rng)).collect();
    times.sort_by(|a, b| a.partial_cmp(b).unwrap());
    times.dedup();
    times
}

/// `n` events at the centres of `n` equal cells of `[t_start, t_stop]`
pub fn evenly_spaced(n: usize, t_start: f64, t_stop: f64) -> Vec<f64> {
    let width = (t_stop - t_start) / n as f64;
    (0..n).map(|i| t_start + (i as f64 + 0.5) * width).collect()
}

/// Homogeneous Poisson process with the given rate on `[t_start, t_stop)`
pub fn poisson_process(rate: f64, t_start: f64, t_stop: f64, rng: &mut ChaCha8Rng) -> Vec<f64> {
    let waiting = Exp::new(rate).unwrap();
    let mut times = Vec::new();
    let mut t = t_start + waiting.sample(rng);
    while t < t_stop {
        times.push(t);
        t += waiting.sample(rng);
    }
    times
}

/// Piecewise-constant rate process, one `(t_start, t_stop, rate)` per segment
pub fn piecewise_process(segments: &[(f64, f64, f64)], seed: u64) -> Vec<f64> {
    let mut rng = rng(seed);
    segments
        .iter()
        .flat_map(|&(start, stop, rate)| poisson_process(rate, start, stop, &mut rng))
        .collect()
}

/// Uniform background plus a tight burst of `burst` events from `at`
pub fn background_with_burst(n: usize, at: f64, burst: usize, spacing: f64, seed: u64) -> Vec<f64> {
    let mut times = uniform_events(n, 0.0, 1.0, seed);
    times.extend((0..burst).map(|j| at + j as f64 * spacing));
    times.sort_by(|a, b| a.partial_cmp(b).unwrap());
    times.dedup();
    times
}

pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] > w[0])
}
