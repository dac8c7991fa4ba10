//! Unified compute primitives trait
//!
//! Every operation has a scalar default implementation. Backends override the
//! operations they can vectorize and inherit the rest.

/// Elementwise operations used by the segmentation kernels
///
/// All slice arguments of a single call must have the same length (checked
/// with `debug_assert!` only).
pub trait ComputePrimitives: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of elements processed in parallel)
    fn simd_width(&self) -> usize {
        1
    }

    /// out[i] = data[i] - scalar
    fn sub_scalar(&self, data: &[f64], scalar: f64, out: &mut [f64]) {
        debug_assert_eq!(data.len(), out.len(), "Input and output must have same length");

        for (o, &x) in out.iter_mut().zip(data) {
            *o = x - scalar;
        }
    }

    /// data[i] += scalar
    fn add_scalar(&self, data: &mut [f64], scalar: f64) {
        for x in data.iter_mut() {
            *x += scalar;
        }
    }

    /// data[i] += other[i]
    fn add_assign(&self, data: &mut [f64], other: &[f64]) {
        debug_assert_eq!(data.len(), other.len(), "Operands must have same length");

        for (x, &y) in data.iter_mut().zip(other) {
            *x += y;
        }
    }

    /// Maximum-likelihood Poisson term, in place over the durations
    ///
    /// On entry `values[i]` holds the duration `T` of a candidate block with
    /// `counts[i]` events; on exit it holds `N * ln(N / T)`.
    fn count_log_likelihood(&self, counts: &[f64], values: &mut [f64]) {
        debug_assert_eq!(counts.len(), values.len(), "Counts and durations must have same length");

        for (v, &n) in values.iter_mut().zip(counts) {
            *v = n * (n / *v).ln();
        }
    }

    /// Index of the first maximal element
    ///
    /// Ties resolve to the lowest index. NaN entries never win against a
    /// number. Returns `None` for an empty slice.
    fn argmax(&self, data: &[f64]) -> Option<usize> {
        let (&first, rest) = data.split_first()?;
        let mut best_idx = 0;
        let mut best = first;

        for (i, &x) in rest.iter().enumerate() {
            if x > best || (best.is_nan() && !x.is_nan()) {
                best = x;
                best_idx = i + 1;
            }
        }

        Some(best_idx)
    }
}
