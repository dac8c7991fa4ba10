//! Backend implementations without delegation
//!
//! Concrete backend types with direct implementations. No Box, no dyn, just
//! simple types with compile-time dispatch.

pub mod scalar;
#[cfg(feature = "simd")]
pub mod wide;

pub use scalar::ScalarBackend;
#[cfg(feature = "simd")]
pub use self::wide::WideBackend;

/// Backend chosen when the caller does not inject one
#[cfg(feature = "simd")]
pub type DefaultBackend = WideBackend;

/// Backend chosen when the caller does not inject one
#[cfg(not(feature = "simd"))]
pub type DefaultBackend = ScalarBackend;

/// Get the best available backend for this build
pub fn default_backend() -> DefaultBackend {
    DefaultBackend::default()
}
