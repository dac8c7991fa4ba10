//! Block fitness: the default Poisson kernel and pluggable strategies
//!
//! For a step ending at event `R`, the fitness of the candidate block that
//! starts at cell `k` is the maximum-likelihood Poisson log-likelihood
//!
//! `N_k * ln(N_k / T_k)` with `T_k = block_length[k] - block_length[R + 1]`
//! and `N_k = R - k + 1`.

use crate::types::Diagnostic;
use blocks_core::{ComputePrimitives, Result, StatisticalKernel};
use std::fmt;

/// Replacement for the default priors and per-step fitness
///
/// Lets a caller score blocks with a likelihood other than the unbinned
/// Poisson one (for example a likelihood that also models a source
/// component). Diagnostics emitted by [`evaluate`](Self::evaluate) are
/// informational and never affect the partition.
pub trait FitnessStrategy: Send + Sync {
    /// Priors for `n` events at false-positive probability `p0`
    ///
    /// Must return exactly `n` values.
    fn priors(&self, n: usize, p0: f64) -> Result<Vec<f64>>;

    /// Fitness of every candidate block ending at event `r`
    ///
    /// `edges` are the working-system cell edges (length N+1). The returned
    /// fitness must have length `r + 1`, indexed by candidate start cell.
    fn evaluate(&self, r: usize, edges: &[f64]) -> Result<StepEvaluation>;
}

/// Output of one [`FitnessStrategy::evaluate`] call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepEvaluation {
    pub fitness: Vec<f64>,
    pub diagnostics: Vec<Diagnostic>,
}

impl StepEvaluation {
    pub fn new(fitness: Vec<f64>) -> Self {
        Self {
            fitness,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

/// Which fitness function drives the dynamic program
#[derive(Clone, Copy, Default)]
pub enum FitnessModel<'a> {
    /// Unbinned Poisson log-likelihood with the closed-form prior
    #[default]
    Poisson,
    /// Caller-supplied priors and fitness
    Custom(&'a dyn FitnessStrategy),
}

impl FitnessModel<'_> {
    pub fn is_custom(&self) -> bool {
        matches!(self, FitnessModel::Custom(_))
    }
}

impl fmt::Debug for FitnessModel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessModel::Poisson => write!(f, "Poisson"),
            FitnessModel::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Event counts `[n, n-1, ..., 1]`
///
/// The counts for a step ending at `r` are the trailing `r + 1` entries, see
/// [`PoissonFitnessKernel::counts_for_step`].
pub fn descending_counts(n: usize) -> Vec<f64> {
    (1..=n).rev().map(|k| k as f64).collect()
}

/// Kernel for the unbinned Poisson fitness
///
/// Expresses the fitness in terms of primitive operations:
/// - scalar subtraction for the candidate durations
/// - the fused `N * ln(N / T)` term
#[derive(Clone, Debug)]
pub struct PoissonFitnessKernel<P: ComputePrimitives> {
    primitives: P,
}

impl<P: ComputePrimitives> PoissonFitnessKernel<P> {
    pub fn new(primitives: P) -> Self {
        Self { primitives }
    }

    /// Slice of `counts` (from [`descending_counts`]) for step `r`
    #[inline]
    pub fn counts_for_step(counts: &[f64], r: usize) -> &[f64] {
        &counts[counts.len() - r - 1..]
    }

    /// Write the fitness of every candidate block ending at `r` into
    /// `out[..=r]`
    ///
    /// `block_length` has length N+1 and `counts` is the step's count slice
    /// of length `r + 1`.
    pub fn evaluate(&self, block_length: &[f64], counts: &[f64], r: usize, out: &mut [f64]) {
        let out = &mut out[..=r];
        self.primitives
            .sub_scalar(&block_length[..=r], block_length[r + 1], out);
        self.primitives.count_log_likelihood(counts, out);
    }
}

impl<P: ComputePrimitives> StatisticalKernel for PoissonFitnessKernel<P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }
}
