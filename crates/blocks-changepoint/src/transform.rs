//! Time transform into a homogeneous unit-rate process
//!
//! A background integral `B(x)` (expected cumulative background counts up to
//! `x`) maps an inhomogeneous Poisson process onto one with rate 1. Blocks are
//! then found in the transformed ("working") time system and mapped back by
//! the tessellation's index correspondence.

use std::borrow::Cow;
use tracing::debug;

/// Cumulative background counts as a function of time
///
/// Implementations must be monotonic non-decreasing. This is not checked;
/// a non-monotonic integral produces an ordering error at best and a
/// meaningless partition at worst.
pub trait BackgroundIntegral {
    /// Expected background counts between the time origin and `x`
    fn integral(&self, x: f64) -> f64;

    /// Vectorized form of [`integral`](Self::integral)
    ///
    /// Override when the background model can evaluate a whole array faster
    /// than point by point.
    fn integral_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.integral(x)).collect()
    }
}

impl<F> BackgroundIntegral for F
where
    F: Fn(f64) -> f64,
{
    fn integral(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Event times and interval bounds expressed in the working time system
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingTimes<'a> {
    times: Cow<'a, [f64]>,
    t_start: f64,
    t_stop: f64,
}

impl<'a> WorkingTimes<'a> {
    /// Transform `times` and the interval bounds through `background`, or
    /// borrow them unchanged when no background is given.
    pub fn new(
        times: &'a [f64],
        t_start: f64,
        t_stop: f64,
        background: Option<&dyn BackgroundIntegral>,
    ) -> Self {
        match background {
            Some(background) => {
                debug!(
                    n_events = times.len(),
                    "transforming inhomogeneous process to unit rate"
                );
                let transformed = background.integral_many(times);
                Self {
                    times: Cow::Owned(transformed),
                    t_start: background.integral(t_start),
                    t_stop: background.integral(t_stop),
                }
            }
            None => Self {
                times: Cow::Borrowed(times),
                t_start,
                t_stop,
            },
        }
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn t_start(&self) -> f64 {
        self.t_start
    }

    pub fn t_stop(&self) -> f64 {
        self.t_stop
    }

    /// Whether the times were mapped through a background integral
    pub fn is_transformed(&self) -> bool {
        matches!(self.times, Cow::Owned(_))
    }
}
