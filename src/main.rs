use edge_bundler::{BundleGraph, BundlingParams, EdgeBundler, GraphEdge};
use nalgebra::Vector3;
use std::collections::HashMap;

fn main() {
    // Demo stub: bundles two groups of near-parallel flows and prints a
    // summary; pass a path to also dump the polylines as JSON.
    let mut nodes = HashMap::new();
    let mut edges = Vec::new();
    for i in 0..8 {
        let y = i as f32;
        nodes.insert(format!("l{i}"), Vector3::new(0.0, y, 0.0));
        nodes.insert(format!("r{i}"), Vector3::new(40.0, y * 0.5, 0.0));
        edges.push(GraphEdge::new(format!("l{i}"), format!("r{i}")));
    }
    let graph = BundleGraph::new(nodes, edges);

    let bundler = EdgeBundler::new(BundlingParams::default());
    match bundler.bundle(&graph) {
        Ok(result) => {
            println!(
                "edges={} points={} setup_ms={:.3} bundling_ms={:.3}",
                result.polylines.len(),
                result.n_points,
                result.setup_ms,
                result.bundling_ms
            );
            if let Some(path) = std::env::args().nth(1) {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => {
                        if let Err(e) = std::fs::write(&path, json) {
                            eprintln!("Failed to write {path}: {e}");
                        }
                    }
                    Err(e) => eprintln!("Failed to serialize result: {e}"),
                }
            }
        }
        Err(e) => eprintln!("bundling failed: {e}"),
    }
}
