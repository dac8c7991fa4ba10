//! Mapping block edges back to the original time system

use crate::backtrack::edges_at;
use crate::tessellation::Tessellation;

/// Original-system block edges for `change_points`
///
/// Edges are looked up by index in the original-system cell edges, so the
/// back-transform is exact. The first and last edge are then pinned to the
/// caller's bounds.
pub fn finalize_edges(
    tessellation: &Tessellation,
    change_points: &[usize],
    t_start: f64,
    t_stop: f64,
) -> Vec<f64> {
    let mut edges = edges_at(tessellation.original_edges(), change_points);

    if let Some(first) = edges.first_mut() {
        *first = t_start;
    }
    if let Some(last) = edges.last_mut() {
        *last = t_stop;
    }

    edges
}
