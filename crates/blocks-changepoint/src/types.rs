//! Types used for Bayesian Blocks segmentation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A score attached to a time interval by a custom fitness strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub score: f64,
    pub interval: (f64, f64),
}

impl Diagnostic {
    pub fn new(score: f64, t1: f64, t2: f64) -> Self {
        Self {
            score,
            interval: (t1, t2),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score {} in time interval {}-{}",
            self.score, self.interval.0, self.interval.1
        )
    }
}

/// One independent event list to segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventStream<'a> {
    pub times: &'a [f64],
    pub t_start: f64,
    pub t_stop: f64,
}

impl<'a> EventStream<'a> {
    pub fn new(times: &'a [f64], t_start: f64, t_stop: f64) -> Self {
        Self {
            times,
            t_start,
            t_stop,
        }
    }
}

/// Result of a Bayesian Blocks segmentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Block edges in the original time system, first and last pinned to the
    /// interval bounds
    edges: Vec<f64>,
    /// Indices into the cell edges that became block edges
    change_points: Vec<usize>,
    /// Number of events analyzed
    sample_size: usize,
    /// Largest diagnostic reported by a custom fitness strategy
    peak: Option<Diagnostic>,
}

impl Segmentation {
    pub fn new(
        edges: Vec<f64>,
        change_points: Vec<usize>,
        sample_size: usize,
        peak: Option<Diagnostic>,
    ) -> Self {
        Self {
            edges,
            change_points,
            sample_size,
            peak,
        }
    }

    /// The whole interval as one block
    ///
    /// With no events the interval still counts as a single cell, so the
    /// change points are `[0, 1]`.
    pub fn single_block(t_start: f64, t_stop: f64, sample_size: usize) -> Self {
        Self::new(
            vec![t_start, t_stop],
            vec![0, sample_size.max(1)],
            sample_size,
            None,
        )
    }

    /// Block edges, length = number of blocks + 1
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<f64> {
        self.edges
    }

    pub fn change_points(&self) -> &[usize] {
        &self.change_points
    }

    pub fn block_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn peak(&self) -> Option<&Diagnostic> {
        self.peak.as_ref()
    }

    /// `(start, stop)` of every block
    pub fn blocks(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.edges.windows(2).map(|w| (w[0], w[1]))
    }

    /// Bin `times` (sorted) into the blocks
    pub fn light_curve(&self, times: &[f64]) -> LightCurve {
        LightCurve::from_edges(times, &self.edges)
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bayesian Blocks Result:")?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Blocks: {}", self.block_count())?;
        for (start, stop) in self.blocks() {
            writeln!(f, "    [{start}, {stop}]")?;
        }
        if let Some(peak) = &self.peak {
            writeln!(f, "  Peak diagnostic: {peak}")?;
        }
        Ok(())
    }
}

/// Events counted in one block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub start: f64,
    pub stop: f64,
    pub counts: usize,
}

impl Block {
    pub fn duration(&self) -> f64 {
        self.stop - self.start
    }

    /// Mean event rate over the block
    pub fn rate(&self) -> f64 {
        self.counts as f64 / self.duration()
    }
}

/// Event counts per block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LightCurve {
    blocks: Vec<Block>,
}

impl LightCurve {
    /// Count sorted `times` into the blocks delimited by `edges`
    ///
    /// Blocks are half-open on the left, `(start, stop]`, except the first
    /// one which also counts an event exactly at `edges[0]`. Events outside
    /// the edges are ignored.
    pub fn from_edges(times: &[f64], edges: &[f64]) -> Self {
        let blocks = edges
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let (start, stop) = (w[0], w[1]);
                let lo = if i == 0 {
                    times.partition_point(|&t| t < start)
                } else {
                    times.partition_point(|&t| t <= start)
                };
                let hi = times.partition_point(|&t| t <= stop);
                Block {
                    start,
                    stop,
                    counts: hi.saturating_sub(lo),
                }
            })
            .collect();

        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn total_counts(&self) -> usize {
        self.blocks.iter().map(|b| b.counts).sum()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Renders the `#Tstart Tstop counts` text table
impl fmt::Display for LightCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#Tstart Tstop counts")?;
        for block in &self.blocks {
            writeln!(f, "{} {} {}", block.start, block.stop, block.counts)?;
        }
        Ok(())
    }
}
