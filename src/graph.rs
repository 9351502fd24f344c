//! Graph inputs: node positions keyed by id plus an ordered edge list.
//!
//! Nodes and edges are immutable inputs owned by the caller. Construction is
//! cheap; edge endpoints are resolved against the node set once per bundling
//! run, which is where dangling node ids are reported.

use crate::error::{BundlingError, Result};
use nalgebra::Vector3;
use std::collections::HashMap;

/// Directed connection between two node ids.
#[derive(Clone, Debug)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Node positions and connectivity consumed by the bundler.
#[derive(Clone, Debug, Default)]
pub struct BundleGraph {
    nodes: HashMap<String, Vector3<f32>>,
    edges: Vec<GraphEdge>,
}

impl BundleGraph {
    pub fn new(nodes: HashMap<String, Vector3<f32>>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &HashMap<String, Vector3<f32>> {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Copy of the graph with self-loop-like edges removed.
    ///
    /// An edge is dropped when both endpoints resolve to the same position
    /// (or when either id is unknown). The main pipeline keeps such edges in
    /// its output and merely exempts them from compatibility and forces; use
    /// this filter when they should not appear in the layout at all.
    pub fn without_self_loops(&self) -> BundleGraph {
        let edges = self
            .edges
            .iter()
            .filter(|edge| {
                match (self.nodes.get(&edge.source), self.nodes.get(&edge.target)) {
                    (Some(s), Some(t)) => s != t,
                    _ => false,
                }
            })
            .cloned()
            .collect();
        BundleGraph {
            nodes: self.nodes.clone(),
            edges,
        }
    }

    /// Resolve edge endpoints against the node set.
    pub(crate) fn resolve(&self) -> Result<Vec<ResolvedEdge>> {
        self.edges
            .iter()
            .enumerate()
            .map(|(edge_index, edge)| {
                let lookup = |node_id: &String| {
                    self.nodes
                        .get(node_id)
                        .copied()
                        .ok_or_else(|| BundlingError::NodeNotFound {
                            edge_index,
                            node_id: node_id.clone(),
                        })
                };
                Ok(ResolvedEdge {
                    source: lookup(&edge.source)?,
                    target: lookup(&edge.target)?,
                })
            })
            .collect()
    }
}

/// Edge with endpoints resolved to positions.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ResolvedEdge {
    pub source: Vector3<f32>,
    pub target: Vector3<f32>,
}

impl ResolvedEdge {
    #[inline]
    pub fn vector(&self) -> Vector3<f32> {
        self.target - self.source
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.vector().norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Vector3<f32> {
        0.5 * (self.source + self.target)
    }

    /// True when both endpoints share one position; such edges carry no
    /// direction and are exempt from compatibility and force updates.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.source == self.target
    }
}
