//! Bundling pipeline orchestrating compatibility, subdivision and updates.
//!
//! The [`EdgeBundler`] exposes a simple API: feed a graph and get one bundled
//! polyline per edge. Internally it sizes the tiled buffers, seeds each
//! edge's endpoints, runs the one-shot compatibility stage, then drives
//! `cycles + 1` refinement cycles. Each cycle doubles the subdivision
//! resolution and applies a decaying number of force passes with a halving
//! step size; every pass reads the front buffer, writes the back buffer and
//! swaps, so no point ever observes a same-pass update.
//!
//! Typical usage:
//! ```no_run
//! use edge_bundler::{BundleGraph, BundlingParams, EdgeBundler};
//!
//! # fn example(graph: BundleGraph) -> edge_bundler::Result<()> {
//! let bundler = EdgeBundler::new(BundlingParams::default());
//! let result = bundler.bundle(&graph)?;
//! println!("bundled {} edges in {:.3} ms", result.polylines.len(), result.bundling_ms);
//! # Ok(())
//! # }
//! ```

mod extract;
mod options;
mod schedule;
mod subdivision;
mod update;

pub use options::{BundlingParams, ParallelOptions};

use crate::buffers::BufferPair;
use crate::compat::{build_compatibility_lists, CompatibilityLists};
use crate::error::Result;
use crate::graph::{BundleGraph, ResolvedEdge};
use crate::layout::BufferLayout;
use crate::types::BundleResult;
use log::debug;
use schedule::CycleSchedule;
use std::time::Instant;

/// Edge bundler orchestrating buffer layout, compatibility scoring and the
/// subdivision/update refinement cycles.
pub struct EdgeBundler {
    params: BundlingParams,
    parallel: ParallelOptions,
}

impl EdgeBundler {
    /// Create a bundler with the supplied parameters.
    pub fn new(params: BundlingParams) -> Self {
        Self {
            params,
            parallel: ParallelOptions::default(),
        }
    }

    /// Override the parallel execution policy.
    pub fn with_parallel(mut self, parallel: ParallelOptions) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn params(&self) -> &BundlingParams {
        &self.params
    }

    /// Run the full pipeline and return one polyline per input edge.
    pub fn bundle(&self, graph: &BundleGraph) -> Result<BundleResult> {
        let setup_start = Instant::now();
        let edges = graph.resolve()?;
        let n_points = self.params.final_point_count();
        let layout = BufferLayout::new(
            edges.len(),
            n_points,
            self.params.max_compatible_edges,
            self.params.max_buffer_dim,
        )?;
        if layout.n_tiles() > 1 {
            debug!("EdgeBundler::bundle using {} tiles", layout.n_tiles());
        }

        let mut buffers = BufferPair::new(layout.n_columns(), layout.n_rows());
        seed_endpoints(&mut buffers, &layout, &edges);
        let lengths: Vec<f32> = edges.iter().map(ResolvedEdge::length).collect();
        let setup_ms = setup_start.elapsed().as_secs_f64() * 1000.0;

        let bundling_start = Instant::now();
        let compat = build_compatibility_lists(
            &edges,
            self.params.compatibility_threshold,
            self.params.max_compatible_edges,
            self.parallel,
        );
        self.run_cycles(&layout, &mut buffers, &compat, &lengths);
        let bundling_ms = bundling_start.elapsed().as_secs_f64() * 1000.0;

        let polylines = extract::extract_polylines(buffers.front(), &layout);
        Ok(BundleResult {
            polylines,
            n_points,
            setup_ms,
            bundling_ms,
        })
    }

    fn run_cycles(
        &self,
        layout: &BufferLayout,
        buffers: &mut BufferPair,
        compat: &CompatibilityLists,
        lengths: &[f32],
    ) {
        let use_parallel = self.parallel.should_parallelize(layout.n_edges());
        let mut schedule = CycleSchedule::new(&self.params);

        for cycle in 0..=self.params.cycles {
            let active = schedule.active_points();
            debug!(
                "EdgeBundler::bundle cycle {cycle}: {active} points, {} passes, step {:.5}",
                schedule.iteration_count(),
                schedule.step()
            );

            {
                let (front, back) = buffers.split();
                subdivision::subdivision_pass(
                    front,
                    back,
                    layout,
                    schedule.previous_points(),
                    active,
                    use_parallel,
                );
            }
            buffers.swap();

            for _ in 0..schedule.iteration_count() {
                let (front, back) = buffers.split();
                update::update_pass(
                    front,
                    back,
                    layout,
                    compat,
                    lengths,
                    active,
                    self.params.stiffness,
                    schedule.step(),
                    use_parallel,
                );
                buffers.swap();
            }

            schedule.advance();
        }
    }
}

/// Write each edge's endpoints into the first two columns of its tile span.
/// Interior columns stay undefined until the first subdivision pass.
fn seed_endpoints(buffers: &mut BufferPair, layout: &BufferLayout, edges: &[ResolvedEdge]) {
    let front = buffers.front_mut();
    for (index, edge) in edges.iter().enumerate() {
        let (row, column) = layout.cell(index, 0);
        front.set(column, row, edge.source);
        front.set(column + 1, row, edge.target);
    }
}
