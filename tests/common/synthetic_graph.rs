use edge_bundler::{BundleGraph, GraphEdge};
use nalgebra::Vector3;
use std::collections::HashMap;

/// `n` horizontal edges of the given length, stacked `spacing` apart in y.
/// All edges run left to right, so nearby rows are mutually compatible.
pub fn parallel_flows(n: usize, length: f32, spacing: f32) -> BundleGraph {
    let mut nodes = HashMap::new();
    let mut edges = Vec::with_capacity(n);
    for i in 0..n {
        let y = i as f32 * spacing;
        nodes.insert(format!("l{i}"), Vector3::new(0.0, y, 0.0));
        nodes.insert(format!("r{i}"), Vector3::new(length, y, 0.0));
        edges.push(GraphEdge::new(format!("l{i}"), format!("r{i}")));
    }
    BundleGraph::new(nodes, edges)
}

/// Two-edge graph with the rows `gap` apart, plus an optional self loop.
pub fn edge_pair(gap: f32, with_self_loop: bool) -> BundleGraph {
    let mut nodes = HashMap::new();
    nodes.insert("a0".to_string(), Vector3::new(0.0, 0.0, 0.0));
    nodes.insert("b0".to_string(), Vector3::new(10.0, 0.0, 0.0));
    nodes.insert("a1".to_string(), Vector3::new(0.0, gap, 0.0));
    nodes.insert("b1".to_string(), Vector3::new(10.0, gap, 0.0));
    nodes.insert("lone".to_string(), Vector3::new(5.0, -3.0, 0.0));
    let mut edges = vec![GraphEdge::new("a0", "b0"), GraphEdge::new("a1", "b1")];
    if with_self_loop {
        edges.push(GraphEdge::new("lone", "lone"));
    }
    BundleGraph::new(nodes, edges)
}
