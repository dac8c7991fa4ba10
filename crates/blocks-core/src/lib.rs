//! Core types for Bayesian Blocks segmentation
//!
//! This crate provides the lower two layers of the segmentation stack:
//!
//! 1. **Layer 1: Primitives** - elementwise vector operations behind the
//!    [`ComputePrimitives`] trait, with a scalar and a portable SIMD backend
//! 2. **Layer 2: Kernels** - the [`StatisticalKernel`] base trait that
//!    domain kernels implement on top of the primitives
//!
//! plus the unified [`Error`] type shared by every blocks crate.
//!
//! # Example
//!
//! ```rust
//! use blocks_core::{default_backend, ComputePrimitives};
//!
//! let backend = default_backend();
//! let mut durations = vec![4.0, 3.0, 2.0, 1.0];
//! let counts = [4.0, 3.0, 2.0, 1.0];
//! backend.count_log_likelihood(&counts, &mut durations);
//!
//! // Unit rate everywhere: every candidate block scores zero
//! assert!(durations.iter().all(|v| v.abs() < 1e-12));
//! ```

pub mod error;
pub mod kernels;
pub mod primitives;

// Re-export core types
pub use error::{Error, Result};

pub use primitives::{
    default_backend, default_backend_name, scalar_backend, ComputePrimitives, DefaultBackend,
    ScalarBackend,
};
#[cfg(feature = "simd")]
pub use primitives::{simd_backend, WideBackend};

pub use kernels::StatisticalKernel;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{ComputePrimitives, DefaultBackend, Result, ScalarBackend, StatisticalKernel};
}
