//! Change-point reconstruction from the `last` table

/// Walk `last` back from the final event
///
/// Returns strictly increasing indices into the cell edges, always starting
/// with 0 and ending with `last.len()`. An all-singleton partition yields
/// `last.len() + 1` indices.
pub fn change_points(last: &[usize]) -> Vec<usize> {
    let n = last.len();
    let mut points = Vec::with_capacity(n + 1);
    let mut ind = n;

    loop {
        points.push(ind);
        if ind == 0 {
            break;
        }
        ind = last[ind - 1];
    }

    points.reverse();
    points
}

/// Select the edges at `change_points`
pub fn edges_at(edges: &[f64], change_points: &[usize]) -> Vec<f64> {
    change_points.iter().map(|&i| edges[i]).collect()
}
