//! Parameter types configuring the bundling pipeline.
//!
//! All knobs are captured once in [`BundlingParams`] before a run starts;
//! changing a parameter means building a new value and bundling again. There
//! is no live mutation of a running pipeline.

use serde::Deserialize;

/// Factor by which the subdivision count grows each cycle. Doubling keeps
/// every earlier cycle's points on the refined path, so it is not exposed as
/// a knob.
pub(crate) const SUBDIVISION_RATE: u32 = 2;

/// Pipeline-wide parameters controlling compatibility and refinement.
///
/// - `stiffness`: global spring constant; higher values keep polylines
///   closer to the straight edge.
/// - `step_size`: initial distance a control point may move per update pass,
///   halved after every cycle.
/// - `cycles`: number of subdivision cycles beyond the first; the pipeline
///   runs `cycles + 1` of them.
/// - `iterations` / `iteration_rate`: update passes in the first cycle, and
///   the per-cycle decay factor (truncated to whole passes).
/// - `subdivision_seed`: interior control points created in the first cycle.
/// - `compatibility_threshold`: minimum pairwise score for two edges to
///   attract each other.
/// - `max_compatible_edges`: per-edge bound on recorded partners; surplus
///   candidates are dropped lowest-score-first.
/// - `max_buffer_dim`: maximum buffer width/height in cells. Edge counts
///   beyond it wrap into column tiles; configurations whose column count
///   still exceeds it are rejected.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct BundlingParams {
    pub stiffness: f32,
    pub step_size: f32,
    pub cycles: u32,
    pub iterations: u32,
    pub iteration_rate: f32,
    pub subdivision_seed: u32,
    pub compatibility_threshold: f32,
    pub max_compatible_edges: usize,
    pub max_buffer_dim: usize,
}

impl Default for BundlingParams {
    fn default() -> Self {
        Self {
            stiffness: 0.1,
            step_size: 0.1,
            cycles: 6,
            iterations: 90,
            iteration_rate: 2.0 / 3.0,
            subdivision_seed: 1,
            compatibility_threshold: 0.6,
            max_compatible_edges: 500,
            max_buffer_dim: 16384,
        }
    }
}

impl BundlingParams {
    /// Control points per edge after the final cycle, including endpoints.
    ///
    /// Saturates instead of wrapping for absurd cycle counts; the layout
    /// capacity check rejects such configurations before allocation.
    pub fn final_point_count(&self) -> usize {
        let interior = (self.subdivision_seed as u64)
            .saturating_mul((SUBDIVISION_RATE as u64).saturating_pow(self.cycles))
            .saturating_add(2);
        usize::try_from(interior).unwrap_or(usize::MAX)
    }
}

/// Controls whether the compatibility stage and refinement passes fan out
/// across buffer rows with Rayon.
#[derive(Clone, Copy, Debug)]
pub struct ParallelOptions {
    enabled: bool,
    min_edges_for_parallel: usize,
}

impl ParallelOptions {
    /// Construct explicit options.
    pub fn new(enabled: bool, min_edges_for_parallel: usize) -> Self {
        Self {
            enabled,
            min_edges_for_parallel: min_edges_for_parallel.max(1),
        }
    }

    /// Disable parallel execution regardless of edge count.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_edges_for_parallel: usize::MAX,
        }
    }

    /// Returns true when passes should be parallelized for `edge_count`.
    pub fn should_parallelize(&self, edge_count: usize) -> bool {
        self.enabled && edge_count >= self.min_edges_for_parallel
    }

    /// Update the minimum edge count for parallel execution.
    pub fn with_min_edges(mut self, min_edges: usize) -> Self {
        self.min_edges_for_parallel = min_edges.max(1);
        self
    }
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            min_edges_for_parallel: 64,
        }
    }
}
