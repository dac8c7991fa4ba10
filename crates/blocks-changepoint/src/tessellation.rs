//! Voronoi-style cell tessellation of the observation interval
//!
//! Each event owns the cell between the midpoints to its neighbours; the
//! first and last cells extend to the interval bounds. Cells are built twice,
//! once in the working time system and once in the original one, and the two
//! edge sequences correspond by index.

use crate::transform::WorkingTimes;
use blocks_core::{Error, Result};

/// Cell edges and block lengths for one segmentation call
#[derive(Debug, Clone, PartialEq)]
pub struct Tessellation {
    /// Working-system edges, length N+1
    edges: Vec<f64>,
    /// Original-system edges, only materialized when a transform was applied
    original_edges: Option<Vec<f64>>,
    /// `t_stop - edges[i]`, length N+1
    block_length: Vec<f64>,
}

/// `[start] ++ midpoints(times) ++ [stop]`
fn cell_edges(times: &[f64], start: f64, stop: f64) -> Vec<f64> {
    let mut edges = Vec::with_capacity(times.len() + 1);
    edges.push(start);
    edges.extend(times.windows(2).map(|w| 0.5 * (w[1] + w[0])));
    edges.push(stop);
    edges
}

/// Reject descending or duplicated timestamps
fn check_strictly_increasing(times: &[f64]) -> Result<()> {
    match times.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(Error::unordered_events(i + 1, times[i], times[i + 1])),
        None => Ok(()),
    }
}

impl Tessellation {
    /// Build the tessellation for `times` on `[t_start, t_stop]`
    ///
    /// `working` must have been built from the same `times` and bounds.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] when there are no events
    /// - [`Error::InputOrdering`] when the times are not strictly increasing,
    ///   or when more than one cell has non-positive length to the end of the
    ///   interval (events outside the interval or inverted bounds)
    pub fn build(
        times: &[f64],
        t_start: f64,
        t_stop: f64,
        working: &WorkingTimes<'_>,
    ) -> Result<Self> {
        if times.is_empty() {
            return Err(Error::InvalidInput(
                "tessellation needs at least one event".to_string(),
            ));
        }
        if working.times().len() != times.len() {
            return Err(Error::size_mismatch(
                times.len(),
                working.times().len(),
                "transformed event times",
            ));
        }

        check_strictly_increasing(times)?;

        let edges = cell_edges(working.times(), working.t_start(), working.t_stop());
        let original_edges = working
            .is_transformed()
            .then(|| cell_edges(times, t_start, t_stop));

        // The last block length is 0 by definition
        let t_stop_working = working.t_stop();
        let block_length: Vec<f64> = edges.iter().map(|&e| t_stop_working - e).collect();

        let non_positive = block_length.iter().filter(|&&b| b <= 0.0).count();
        if non_positive > 1 {
            return Err(Error::degenerate_cells(non_positive));
        }

        Ok(Self {
            edges,
            original_edges,
            block_length,
        })
    }

    /// Number of events (cells)
    pub fn len(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Working-system cell edges
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Original-system cell edges, index-aligned with [`edges`](Self::edges)
    pub fn original_edges(&self) -> &[f64] {
        self.original_edges.as_deref().unwrap_or(&self.edges)
    }

    /// Remaining working-system time from each edge to the end of the interval
    pub fn block_length(&self) -> &[f64] {
        &self.block_length
    }

    pub fn is_transformed(&self) -> bool {
        self.original_edges.is_some()
    }
}
