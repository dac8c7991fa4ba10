//! Bayesian Blocks segmentation of event arrival times
//!
//! Umbrella crate re-exporting the workspace crates:
//!
//! - [`blocks_core`]: error type, compute primitives and kernel traits
//! - [`blocks_changepoint`]: the segmentation itself
//!
//! ```rust
//! use event_blocks::prelude::*;
//!
//! let times = [0.1, 0.2, 0.3, 0.35, 0.37, 0.38, 0.9];
//! let detector = BayesianBlocks::new(default_backend(), 0.05).unwrap();
//! let segmentation = detector.segment(&times, 0.0, 1.0).unwrap();
//! assert_eq!(segmentation.light_curve(&times).total_counts(), times.len());
//! ```

pub use blocks_changepoint;
pub use blocks_core;

pub use blocks_changepoint::{bayesian_blocks, BayesianBlocks, BayesianBlocksBuilder, Segmentation};
pub use blocks_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use blocks_changepoint::{
        bayesian_blocks, BackgroundIntegral, BatchEventSegmenter, BayesianBlocks,
        BayesianBlocksBuilder, BayesianBlocksParameters, ConfigurableSegmenter, Diagnostic,
        EventSegmenter, EventStream, FitnessModel, FitnessStrategy, LightCurve, Segmentation,
        StepEvaluation,
    };
    pub use blocks_core::prelude::*;
    pub use blocks_core::{default_backend, scalar_backend};
}
