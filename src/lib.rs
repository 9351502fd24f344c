#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod bundler;
pub mod error;
pub mod graph;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
pub mod buffers;
pub mod compat;
pub mod layout;

// --- High-level re-exports -------------------------------------------------

// Main entry points: bundler + results.
pub use crate::bundler::{BundlingParams, EdgeBundler, ParallelOptions};
pub use crate::error::{BundlingError, Result};
pub use crate::graph::{BundleGraph, GraphEdge};
pub use crate::types::BundleResult;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_bundler::prelude::*;
/// use nalgebra::Vector3;
/// use std::collections::HashMap;
///
/// # fn main() {
/// let mut nodes = HashMap::new();
/// nodes.insert("a".to_string(), Vector3::new(0.0, 0.0, 0.0));
/// nodes.insert("b".to_string(), Vector3::new(8.0, 2.0, 0.0));
/// let graph = BundleGraph::new(nodes, vec![GraphEdge::new("a", "b")]);
///
/// let bundler = EdgeBundler::new(BundlingParams::default());
/// let result = bundler.bundle(&graph).unwrap();
/// println!("points={} bundling_ms={:.3}", result.n_points, result.bundling_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::{BundleGraph, BundleResult, BundlingParams, EdgeBundler, GraphEdge};
}
