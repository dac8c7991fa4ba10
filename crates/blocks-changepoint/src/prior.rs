//! Change-point penalty (`ncp_prior`)
//!
//! The default prior is the closed-form false-positive calibration of
//! Scargle et al. (2013), eq. 21, for event data:
//!
//! `ncp_prior(R) = 4 - ln(73.53 * p0 * (R + 1)^-0.478)`

use crate::fitness::FitnessModel;
use blocks_core::{Error, Result};

const PRIOR_OFFSET: f64 = 4.0;
const PRIOR_SCALE: f64 = 73.53;
const PRIOR_EXPONENT: f64 = -0.478;

/// Penalty for a block ending at event index `r` (0-based)
#[inline]
pub fn ncp_prior(p0: f64, r: usize) -> f64 {
    PRIOR_OFFSET - (PRIOR_SCALE * p0 * ((r + 1) as f64).powf(PRIOR_EXPONENT)).ln()
}

/// Default priors for every candidate last-event index `0..n`
pub fn default_priors(n: usize, p0: f64) -> Vec<f64> {
    (0..n).map(|r| ncp_prior(p0, r)).collect()
}

/// Priors for `n` events under the selected fitness model
///
/// A custom strategy must return exactly one prior per event.
pub fn resolve_priors(model: FitnessModel<'_>, n: usize, p0: f64) -> Result<Vec<f64>> {
    match model {
        FitnessModel::Poisson => Ok(default_priors(n, p0)),
        FitnessModel::Custom(strategy) => {
            let priors = strategy.priors(n, p0)?;
            if priors.len() != n {
                return Err(Error::size_mismatch(n, priors.len(), "custom priors"));
            }
            Ok(priors)
        }
    }
}
