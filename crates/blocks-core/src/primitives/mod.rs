//! Vectorized computational primitives with compile-time dispatch
//!
//! # Architecture
//!
//! - Single `ComputePrimitives` trait for all elementwise operations
//! - Concrete backend types: `ScalarBackend`, `WideBackend` (feature `simd`)
//! - Zero-cost abstractions: no heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use blocks_core::{ComputePrimitives, ScalarBackend};
//!
//! let backend = ScalarBackend::new();
//! let mut durations = vec![0.5, 0.25];
//! backend.count_log_likelihood(&[2.0, 1.0], &mut durations);
//! assert_eq!(backend.argmax(&durations), Some(0));
//! ```

pub mod backends;
pub mod traits;

pub use backends::{default_backend, DefaultBackend, ScalarBackend};
#[cfg(feature = "simd")]
pub use backends::WideBackend;
pub use traits::ComputePrimitives;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Create the portable SIMD backend
#[cfg(feature = "simd")]
pub fn simd_backend() -> WideBackend {
    WideBackend::new()
}

/// Get the default backend name
pub fn default_backend_name() -> &'static str {
    default_backend().backend_name()
}
