//! Forward dynamic program over the cell tessellation
//!
//! For every last event `R` the score of a candidate block starting at cell
//! `k` is `A_R[k] = fitness(k) - prior[R] + best[k - 1]` (no `best` term for
//! `k = 0`). `best[R]` keeps the maximum and `last[R]` the first `k` that
//! achieves it.

use crate::fitness::{descending_counts, FitnessModel, PoissonFitnessKernel};
use crate::tessellation::Tessellation;
use crate::types::Diagnostic;
use blocks_core::{ComputePrimitives, Error, Result, StatisticalKernel};
use tracing::{debug, info, trace};

/// Filled `best`/`last` tables
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalPartition {
    best: Vec<f64>,
    last: Vec<usize>,
    peak: Option<Diagnostic>,
}

impl OptimalPartition {
    /// Optimal cumulative fitness of every prefix `[0..=R]`
    pub fn best(&self) -> &[f64] {
        &self.best
    }

    /// Start cell of the last block of every optimal prefix partition
    pub fn last(&self) -> &[usize] {
        &self.last
    }

    /// Largest diagnostic emitted by a custom strategy
    pub fn peak(&self) -> Option<Diagnostic> {
        self.peak
    }
}

/// First diagnostic with the largest score
fn peak_diagnostic(diagnostics: &[Diagnostic]) -> Option<Diagnostic> {
    let (first, rest) = diagnostics.split_first()?;
    let peak = rest
        .iter()
        .fold(first, |best, d| if d.score > best.score { d } else { best });
    Some(*peak)
}

/// Run the forward pass
///
/// `priors` must hold one value per event and `progress_step` controls how
/// often a trace event reports progress.
pub fn solve<P: ComputePrimitives>(
    primitives: &P,
    tessellation: &Tessellation,
    priors: &[f64],
    model: FitnessModel<'_>,
    progress_step: usize,
) -> Result<OptimalPartition> {
    let n = tessellation.len();
    if priors.len() != n {
        return Err(Error::size_mismatch(n, priors.len(), "priors"));
    }

    let mut best = vec![0.0; n];
    let mut last = vec![0usize; n];
    let mut a_r = vec![0.0; n];
    let mut diagnostics = Vec::new();

    let kernel = PoissonFitnessKernel::new(primitives.clone());
    let counts = match model {
        FitnessModel::Poisson => descending_counts(n),
        FitnessModel::Custom(_) => Vec::new(),
    };
    let block_length = tessellation.block_length();
    let progress_step = progress_step.max(1);

    debug!(
        n_events = n,
        kernel = kernel.name(),
        backend = kernel.primitives().backend_name(),
        lanes = kernel.primitives().simd_width(),
        ?model,
        "finding blocks"
    );

    for r in 0..n {
        let step = &mut a_r[..=r];

        match model {
            FitnessModel::Poisson => {
                let step_counts = PoissonFitnessKernel::<P>::counts_for_step(&counts, r);
                kernel.evaluate(block_length, step_counts, r, step);
            }
            FitnessModel::Custom(strategy) => {
                let evaluation = strategy.evaluate(r, tessellation.edges())?;
                if evaluation.fitness.len() != r + 1 {
                    return Err(Error::size_mismatch(
                        r + 1,
                        evaluation.fitness.len(),
                        "custom fitness",
                    ));
                }
                step.copy_from_slice(&evaluation.fitness);
                diagnostics.extend(evaluation.diagnostics);
            }
        }

        primitives.add_scalar(step, -priors[r]);
        primitives.add_assign(&mut step[1..], &best[..r]);

        let i_max = primitives
            .argmax(step)
            .ok_or_else(|| Error::Computation(format!("empty candidate set at step {r}")))?;
        last[r] = i_max;
        best[r] = step[i_max];

        if r % progress_step == 0 {
            trace!(step = r, of = n, "dynamic program progress");
        }
    }

    let peak = peak_diagnostic(&diagnostics);
    if let Some(peak) = &peak {
        info!(
            score = peak.score,
            t1 = peak.interval.0,
            t2 = peak.interval.1,
            "maximum diagnostic score is {peak}"
        );
    }

    Ok(OptimalPartition { best, last, peak })
}
