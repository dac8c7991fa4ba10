//! Bayesian Blocks change-point segmentation of event arrival times
//!
//! Finds the optimal partition of an observation interval into blocks of
//! piecewise-constant event rate (Scargle et al. 2013), using an exact
//! O(N²) dynamic program over the Voronoi cells of the events.
//!
//! # Pipeline
//!
//! 1. **Transform**: an optional background integral maps the events onto a
//!    unit-rate process ([`transform`])
//! 2. **Tessellation**: one cell per event, edges at the midpoints
//!    ([`tessellation`])
//! 3. **Priors**: the per-block penalty calibrated by the false-positive
//!    probability `p0` ([`prior`])
//! 4. **Dynamic program**: unbinned Poisson fitness on the compute primitives,
//!    or a caller-supplied [`FitnessStrategy`] ([`dp`], [`fitness`])
//! 5. **Backtracking** and mapping back to the original times
//!    ([`backtrack`], [`finalize`])
//!
//! ## Usage
//!
//! ```rust
//! use blocks_changepoint::BayesianBlocksBuilder;
//!
//! // A quiet stretch followed by a burst
//! let mut times: Vec<f64> = (0..50).map(|i| i as f64 * 0.02).collect();
//! times.extend((0..50).map(|i| 1.0 + i as f64 * 0.001));
//!
//! let detector = BayesianBlocksBuilder::new()
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! let segmentation = detector.segment(&times, 0.0, 1.1).unwrap();
//!
//! assert_eq!(segmentation.edges().first(), Some(&0.0));
//! assert_eq!(segmentation.edges().last(), Some(&1.1));
//! println!("{}", segmentation.light_curve(&times));
//! ```

pub mod backtrack;
pub mod detector;
pub mod dp;
pub mod finalize;
pub mod fitness;
pub mod prior;
pub mod tessellation;
pub mod traits;
pub mod transform;
pub mod types;

// Re-exports
pub use detector::{
    bayesian_blocks, BayesianBlocks, BayesianBlocksBuilder, BayesianBlocksParameters,
};

pub use traits::{BatchEventSegmenter, ConfigurableSegmenter, EventSegmenter, SegmenterProperties};

pub use fitness::{FitnessModel, FitnessStrategy, PoissonFitnessKernel, StepEvaluation};
pub use prior::{default_priors, ncp_prior};
pub use tessellation::Tessellation;
pub use transform::{BackgroundIntegral, WorkingTimes};

pub use types::{Block, Diagnostic, EventStream, LightCurve, Segmentation};
