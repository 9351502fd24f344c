//! One-shot pairwise edge compatibility.
//!
//! Before any refinement cycle runs, every edge is scored against every other
//! edge by combining four similarity measures (angle, scale, midpoint
//! proximity, mutual visibility). Edges scoring above the configured
//! threshold become attraction partners for the update passes. Only the two
//! endpoints matter here, so the stage runs on the freshly seeded buffers and
//! is never recomputed: edge identities and endpoints do not change during a
//! run.
//!
//! Each edge keeps at most `max_compatible` partners. When more candidates
//! clear the threshold, the lowest-scoring surplus is dropped (ties broken by
//! ascending edge index). This truncation is a resource bound inherited from
//! the compatibility buffer width, not an error.

mod score;

pub use score::{
    angle_compatibility, compatibility_score, position_compatibility, scale_compatibility,
    visibility_compatibility, EdgeGeom,
};

use crate::bundler::ParallelOptions;
use crate::graph::ResolvedEdge;
use log::debug;

/// Read-only per-edge lists of compatible edge indices.
#[derive(Clone, Debug, Default)]
pub struct CompatibilityLists {
    lists: Vec<Vec<u32>>,
}

impl CompatibilityLists {
    pub fn n_edges(&self) -> usize {
        self.lists.len()
    }

    /// Compatible edge indices for `edge`, in ascending order.
    #[inline]
    pub fn for_edge(&self, edge: usize) -> &[u32] {
        &self.lists[edge]
    }
}

/// Score all edge pairs and collect the bounded compatibility lists.
pub(crate) fn build_compatibility_lists(
    edges: &[ResolvedEdge],
    threshold: f32,
    max_compatible: usize,
    parallel: ParallelOptions,
) -> CompatibilityLists {
    let geoms: Vec<EdgeGeom> = edges
        .iter()
        .map(|edge| EdgeGeom::new(edge.source, edge.target))
        .collect();

    let lists = if parallel.should_parallelize(edges.len()) {
        collect_parallel(&geoms, threshold, max_compatible)
    } else {
        (0..geoms.len())
            .map(|e| list_for_edge(&geoms, e, threshold, max_compatible))
            .collect()
    };

    let recorded: usize = lists.iter().map(Vec::len).sum();
    debug!(
        "Compatibility: {} edges, {} pairs recorded (threshold {threshold})",
        edges.len(),
        recorded
    );
    CompatibilityLists { lists }
}

#[cfg(feature = "parallel")]
fn collect_parallel(geoms: &[EdgeGeom], threshold: f32, max_compatible: usize) -> Vec<Vec<u32>> {
    use rayon::prelude::*;

    (0..geoms.len())
        .into_par_iter()
        .map(|e| list_for_edge(geoms, e, threshold, max_compatible))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_parallel(geoms: &[EdgeGeom], threshold: f32, max_compatible: usize) -> Vec<Vec<u32>> {
    (0..geoms.len())
        .map(|e| list_for_edge(geoms, e, threshold, max_compatible))
        .collect()
}

fn list_for_edge(
    geoms: &[EdgeGeom],
    edge: usize,
    threshold: f32,
    max_compatible: usize,
) -> Vec<u32> {
    let subject = &geoms[edge];
    let mut candidates: Vec<(f32, u32)> = Vec::new();
    for (other_idx, other) in geoms.iter().enumerate() {
        if other_idx == edge {
            continue;
        }
        let score = compatibility_score(subject, other);
        if score > threshold {
            candidates.push((score, other_idx as u32));
        }
    }
    if candidates.len() > max_compatible {
        candidates.sort_unstable_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        candidates.truncate(max_compatible);
    }
    let mut list: Vec<u32> = candidates.into_iter().map(|(_, idx)| idx).collect();
    list.sort_unstable();
    list
}
