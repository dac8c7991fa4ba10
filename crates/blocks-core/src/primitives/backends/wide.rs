//! Portable SIMD backend built on the `wide` crate
//!
//! Processes four `f64` lanes at a time and falls back to the scalar
//! definitions for the remainder. `wide` selects the instruction set at
//! compile time. Every operation returns exactly what [`ScalarBackend`]
//! returns; only the arithmetic around the logarithm is vectorized.
//!
//! [`ScalarBackend`]: crate::primitives::ScalarBackend

use crate::primitives::ComputePrimitives;
use ::wide::f64x4;

const LANES: usize = 4;

/// 4-lane SIMD backend
#[derive(Clone, Copy, Debug, Default)]
pub struct WideBackend;

impl WideBackend {
    pub fn new() -> Self {
        Self
    }
}

#[inline(always)]
fn load(chunk: &[f64]) -> f64x4 {
    f64x4::from([chunk[0], chunk[1], chunk[2], chunk[3]])
}

#[inline(always)]
fn store(v: f64x4, chunk: &mut [f64]) {
    chunk.copy_from_slice(&v.to_array());
}

impl ComputePrimitives for WideBackend {
    fn backend_name(&self) -> &'static str {
        "wide"
    }

    fn simd_width(&self) -> usize {
        LANES
    }

    fn sub_scalar(&self, data: &[f64], scalar: f64, out: &mut [f64]) {
        debug_assert_eq!(data.len(), out.len(), "Input and output must have same length");

        let s = f64x4::splat(scalar);
        let mut src = data.chunks_exact(LANES);
        let mut dst = out.chunks_exact_mut(LANES);

        for (o, x) in (&mut dst).zip(&mut src) {
            store(load(x) - s, o);
        }

        // Handle remainder
        for (o, &x) in dst.into_remainder().iter_mut().zip(src.remainder()) {
            *o = x - scalar;
        }
    }

    fn add_scalar(&self, data: &mut [f64], scalar: f64) {
        let s = f64x4::splat(scalar);
        let mut chunks = data.chunks_exact_mut(LANES);

        for c in &mut chunks {
            let v = load(c) + s;
            store(v, c);
        }

        for x in chunks.into_remainder() {
            *x += scalar;
        }
    }

    fn add_assign(&self, data: &mut [f64], other: &[f64]) {
        debug_assert_eq!(data.len(), other.len(), "Operands must have same length");

        let mut dst = data.chunks_exact_mut(LANES);
        let mut src = other.chunks_exact(LANES);

        for (d, o) in (&mut dst).zip(&mut src) {
            let v = load(d) + load(o);
            store(v, d);
        }

        for (x, &y) in dst.into_remainder().iter_mut().zip(src.remainder()) {
            *x += y;
        }
    }

    fn count_log_likelihood(&self, counts: &[f64], values: &mut [f64]) {
        debug_assert_eq!(
            counts.len(),
            values.len(),
            "Counts and durations must have same length"
        );

        let mut dst = values.chunks_exact_mut(LANES);
        let mut src = counts.chunks_exact(LANES);

        // std logarithm per lane: bitwise equal to the scalar backend
        for (v, c) in (&mut dst).zip(&mut src) {
            let n = load(c);
            let rate = (n / load(v)).to_array().map(f64::ln);
            store(n * f64x4::from(rate), v);
        }

        for (v, &n) in dst.into_remainder().iter_mut().zip(src.remainder()) {
            *v = n * (n / *v).ln();
        }
    }

    // argmax: scalar first-maximum scan
}
