//! Scalar backend implementation
//!
//! This backend uses the default implementations of `ComputePrimitives`
//! without any SIMD instructions.

use crate::primitives::ComputePrimitives;

/// Scalar backend - always available
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ComputePrimitives for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All operations use the default implementations from the trait
}
