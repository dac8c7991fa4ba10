//! Layer 2: Algorithm-specific kernel traits
//!
//! Kernels express a domain computation in terms of the Layer 1 primitives.
//! This module only defines the shared base trait; the segmentation crate
//! provides the implementations.

use crate::primitives::ComputePrimitives;

/// Base trait for all statistical kernels
pub trait StatisticalKernel: Clone + Send + Sync {
    /// The type of primitives used by this kernel
    type Primitives: ComputePrimitives;

    /// Get the primitives used by this kernel
    fn primitives(&self) -> &Self::Primitives;

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
