//! Bayesian Blocks segmentation of event arrival times
//!
//! Ties together the time transform, tessellation, priors, dynamic program,
//! backtracking and back-transformation.

use crate::backtrack::change_points;
use crate::dp::solve;
use crate::fitness::FitnessModel;
use crate::prior::resolve_priors;
use crate::tessellation::Tessellation;
use crate::traits::{
    BatchEventSegmenter, ConfigurableSegmenter, EventSegmenter, SegmenterProperties,
};
use crate::transform::{BackgroundIntegral, WorkingTimes};
use crate::types::Segmentation;
use blocks_core::{default_backend, ComputePrimitives, DefaultBackend, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bayesian Blocks parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BayesianBlocksParameters {
    /// Probability of creating a block where the rate is in fact constant
    /// (type I error per change point), in (0, 1)
    pub false_positive_rate: f64,
    /// Fraction of the events between two progress trace events, in (0, 1]
    pub progress_fraction: f64,
}

impl Default for BayesianBlocksParameters {
    fn default() -> Self {
        Self {
            false_positive_rate: 0.05,
            progress_fraction: 0.1,
        }
    }
}

impl BayesianBlocksParameters {
    pub fn validate(&self) -> Result<()> {
        let p0 = self.false_positive_rate;
        if !(p0 > 0.0 && p0 < 1.0) {
            return Err(Error::invalid_probability(p0));
        }
        let fraction = self.progress_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Progress fraction {fraction} must be in (0, 1]"
            )));
        }
        Ok(())
    }

    /// Steps between progress reports for `n` events
    pub fn progress_step(&self, n: usize) -> usize {
        ((n as f64 * self.progress_fraction) as usize).max(1)
    }
}

/// Bayesian Blocks segmenter
#[derive(Clone, Debug)]
pub struct BayesianBlocks<P: ComputePrimitives = DefaultBackend> {
    primitives: P,
    params: BayesianBlocksParameters,
}

impl<P: ComputePrimitives> BayesianBlocks<P> {
    /// Create a segmenter with the given false-positive probability
    pub fn new(primitives: P, false_positive_rate: f64) -> Result<Self> {
        Self::from_parameters(
            primitives,
            BayesianBlocksParameters {
                false_positive_rate,
                ..Default::default()
            },
        )
    }

    /// Create a segmenter from a full parameter set
    pub fn from_parameters(primitives: P, params: BayesianBlocksParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { primitives, params })
    }

    pub fn primitives(&self) -> &P {
        &self.primitives
    }

    pub fn false_positive_rate(&self) -> f64 {
        self.params.false_positive_rate
    }

    /// Segment `times` (sorted, unique) on `[t_start, t_stop]`
    pub fn segment(&self, times: &[f64], t_start: f64, t_stop: f64) -> Result<Segmentation> {
        self.segment_with(times, t_start, t_stop, None, FitnessModel::Poisson)
    }

    /// Segment relative to a time-varying background
    pub fn segment_with_background(
        &self,
        times: &[f64],
        t_start: f64,
        t_stop: f64,
        background: &dyn BackgroundIntegral,
    ) -> Result<Segmentation> {
        self.segment_with(times, t_start, t_stop, Some(background), FitnessModel::Poisson)
    }

    /// Segment with an optional background and any fitness model
    ///
    /// # Errors
    ///
    /// - [`Error::InputOrdering`] for unsorted or duplicated times, or events
    ///   outside the interval
    /// - [`Error::InvalidInput`] when a custom strategy returns priors or
    ///   fitness of the wrong length
    /// - any error returned by a custom strategy
    #[instrument(
        level = "debug",
        skip(self, times, background, model),
        fields(n_events = times.len(), p0 = self.params.false_positive_rate)
    )]
    pub fn segment_with(
        &self,
        times: &[f64],
        t_start: f64,
        t_stop: f64,
        background: Option<&dyn BackgroundIntegral>,
        model: FitnessModel<'_>,
    ) -> Result<Segmentation> {
        let n = times.len();
        if n == 0 {
            debug!("no events, returning the whole interval");
            return Ok(Segmentation::single_block(t_start, t_stop, 0));
        }

        let working = WorkingTimes::new(times, t_start, t_stop, background);
        let tessellation = Tessellation::build(times, t_start, t_stop, &working)?;

        if n < self.minimum_sample_size() {
            debug!(n_events = n, "too few events to split, returning the whole interval");
            return Ok(Segmentation::single_block(t_start, t_stop, n));
        }

        let p0 = self.params.false_positive_rate;
        let priors = resolve_priors(model, n, p0)?;
        let partition = solve(
            &self.primitives,
            &tessellation,
            &priors,
            model,
            self.params.progress_step(n),
        )?;

        let points = change_points(partition.last());
        let edges = crate::finalize::finalize_edges(&tessellation, &points, t_start, t_stop);
        debug!(blocks = edges.len() - 1, "segmentation complete");

        Ok(Segmentation::new(edges, points, n, partition.peak()))
    }
}

impl<P: ComputePrimitives> SegmenterProperties for BayesianBlocks<P> {
    fn algorithm_name(&self) -> &'static str {
        "Bayesian Blocks"
    }

    fn minimum_sample_size(&self) -> usize {
        2 // Fewer events always give a single block
    }
}

impl<P: ComputePrimitives> EventSegmenter for BayesianBlocks<P> {
    fn segment_events(&self, times: &[f64], t_start: f64, t_stop: f64) -> Result<Segmentation> {
        self.segment(times, t_start, t_stop)
    }
}

impl<P: ComputePrimitives> BatchEventSegmenter for BayesianBlocks<P> {}

impl<P: ComputePrimitives + Default> ConfigurableSegmenter for BayesianBlocks<P> {
    type Parameters = BayesianBlocksParameters;

    fn with_parameters(params: Self::Parameters) -> Result<Self> {
        Self::from_parameters(P::default(), params)
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn set_parameters(&mut self, params: Self::Parameters) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }
}

/// Builder for configuring and creating [`BayesianBlocks`] segmenters
#[derive(Debug, Clone, Default)]
pub struct BayesianBlocksBuilder {
    params: BayesianBlocksParameters,
}

impl BayesianBlocksBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the false-positive probability per change point
    ///
    /// Smaller values demand stronger evidence for each new block.
    pub fn false_positive_rate(mut self, p0: f64) -> Self {
        self.params.false_positive_rate = p0;
        self
    }

    /// Sets how often progress is traced, as a fraction of the events
    pub fn progress_fraction(mut self, fraction: f64) -> Self {
        self.params.progress_fraction = fraction;
        self
    }

    /// Builds the segmenter on the default backend
    pub fn build(self) -> Result<BayesianBlocks<DefaultBackend>> {
        self.build_with(default_backend())
    }

    /// Builds the segmenter on the given backend
    pub fn build_with<P: ComputePrimitives>(self, primitives: P) -> Result<BayesianBlocks<P>> {
        BayesianBlocks::from_parameters(primitives, self.params)
    }
}

/// Divide a series of events into blocks of perceptibly constant rate
///
/// `times` must be sorted and free of duplicates. With a `background`, the
/// blocks are those in which the excess over the background is perceptibly
/// constant. Returns the block edges; the first is `t_start` and the last
/// `t_stop`.
///
/// ```rust
/// use blocks_changepoint::{bayesian_blocks, FitnessModel};
///
/// let times: Vec<f64> = (0..100).map(|i| (i as f64 + 0.5) / 100.0).collect();
/// let edges = bayesian_blocks(&times, 0.0, 1.0, 0.05, None, FitnessModel::Poisson).unwrap();
/// assert_eq!(edges, vec![0.0, 1.0]);
/// ```
pub fn bayesian_blocks(
    times: &[f64],
    t_start: f64,
    t_stop: f64,
    p0: f64,
    background: Option<&dyn BackgroundIntegral>,
    model: FitnessModel<'_>,
) -> Result<Vec<f64>> {
    BayesianBlocks::new(default_backend(), p0)?
        .segment_with(times, t_start, t_stop, background, model)
        .map(Segmentation::into_edges)
}
