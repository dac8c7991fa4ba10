//! Core traits for event segmentation
//!
//! Following the three-layer architecture:
//! - Layer 3: segmentation algorithms (this module)
//! - Layer 2: domain-specific kernels (the fitness kernel)
//! - Layer 1: computational primitives (from blocks-core)

use crate::types::{EventStream, Segmentation};
use blocks_core::Result;

/// Properties of a segmenter that don't depend on the input
pub trait SegmenterProperties {
    /// Get the name of the segmentation algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum number of events required for a non-trivial result
    fn minimum_sample_size(&self) -> usize;
}

/// Segment a sorted list of event arrival times on `[t_start, t_stop]`
pub trait EventSegmenter: SegmenterProperties {
    fn segment_events(&self, times: &[f64], t_start: f64, t_stop: f64) -> Result<Segmentation>;
}

/// Batch processing of independent event lists
///
/// Runs in parallel with rayon when the `parallel` feature is enabled. Each
/// individual segmentation stays sequential.
pub trait BatchEventSegmenter: EventSegmenter + Sync {
    fn segment_batch(&self, streams: &[EventStream<'_>]) -> Result<Vec<Segmentation>> {
        #[cfg(feature = "parallel")]
        let results = {
            use rayon::prelude::*;
            streams
                .par_iter()
                .map(|s| self.segment_events(s.times, s.t_start, s.t_stop))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results = streams
            .iter()
            .map(|s| self.segment_events(s.times, s.t_start, s.t_stop))
            .collect();

        results
    }
}

/// Runtime-adjustable configuration
pub trait ConfigurableSegmenter: Sized {
    type Parameters;

    fn with_parameters(params: Self::Parameters) -> Result<Self>;
    fn parameters(&self) -> &Self::Parameters;
    fn set_parameters(&mut self, params: Self::Parameters) -> Result<()>;
}
