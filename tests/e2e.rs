mod common;

use common::synthetic_graph::{edge_pair, parallel_flows};
use edge_bundler::{
    BundleGraph, BundlingError, BundlingParams, EdgeBundler, GraphEdge, ParallelOptions,
};
use nalgebra::Vector3;
use std::collections::HashMap;

#[test]
fn every_edge_yields_one_full_polyline_with_pinned_endpoints() {
    let graph = parallel_flows(5, 10.0, 1.0);
    let bundler = EdgeBundler::new(BundlingParams::default());
    let result = bundler.bundle(&graph).unwrap();

    assert_eq!(result.n_points, 66);
    assert_eq!(result.polylines.len(), graph.edges().len());
    for (i, polyline) in result.polylines.iter().enumerate() {
        assert_eq!(polyline.len(), 66);
        let y = i as f32;
        assert_eq!(polyline[0], Vector3::new(0.0, y, 0.0));
        assert_eq!(polyline[65], Vector3::new(10.0, y, 0.0));
    }
}

#[test]
fn compatible_edges_bundle_toward_each_other() {
    let graph = edge_pair(2.0, false);
    let params = BundlingParams {
        cycles: 3,
        ..Default::default()
    };
    let result = EdgeBundler::new(params).bundle(&graph).unwrap();

    let mid = result.n_points / 2;
    let gap = (result.polylines[0][mid] - result.polylines[1][mid]).norm();
    assert!(
        gap < 0.5,
        "expected interior points to close most of the 2.0 gap, got {gap}"
    );
    // The lower edge bends upward, toward the shared route, without
    // overshooting past the upper edge.
    let bent = result.polylines[0][mid].y;
    assert!(bent > 0.1 && bent < 2.0, "unexpected bend: {bent}");
}

#[test]
fn incompatible_edges_stay_straight() {
    // Far-apart rows never clear the compatibility threshold, so only the
    // spring force acts and each polyline hugs its straight edge.
    let graph = edge_pair(50.0, false);
    let result = EdgeBundler::new(BundlingParams::default())
        .bundle(&graph)
        .unwrap();
    for (i, polyline) in result.polylines.iter().enumerate() {
        let y = 50.0 * i as f32;
        for point in polyline {
            assert!(
                (point.y - y).abs() < 1e-3,
                "edge {i} drifted to y={}",
                point.y
            );
        }
    }
}

#[test]
fn runs_are_deterministic_across_thread_counts() {
    let graph = parallel_flows(20, 10.0, 0.5);
    let params = BundlingParams::default();

    let threaded = EdgeBundler::new(params)
        .with_parallel(ParallelOptions::new(true, 1))
        .bundle(&graph)
        .unwrap();
    let sequential = EdgeBundler::new(params)
        .with_parallel(ParallelOptions::disabled())
        .bundle(&graph)
        .unwrap();
    let repeat = EdgeBundler::new(params)
        .with_parallel(ParallelOptions::new(true, 1))
        .bundle(&graph)
        .unwrap();

    assert_eq!(threaded.polylines, sequential.polylines);
    assert_eq!(threaded.polylines, repeat.polylines);
}

#[test]
fn tiling_is_transparent_to_the_output() {
    // Same run with the edge rows wrapped into two column tiles: bundled
    // polylines must match the untiled layout bit for bit.
    let graph = parallel_flows(12, 10.0, 1.0);
    let base = BundlingParams {
        cycles: 0,
        max_compatible_edges: 3,
        ..Default::default()
    };
    let untiled = EdgeBundler::new(base).bundle(&graph).unwrap();

    let tiled_params = BundlingParams {
        max_buffer_dim: 6,
        ..base
    };
    let tiled = EdgeBundler::new(tiled_params).bundle(&graph).unwrap();

    assert_eq!(untiled.polylines, tiled.polylines);
}

#[test]
fn self_loops_stay_put_and_do_not_disturb_neighbors() {
    let with_loop = EdgeBundler::new(BundlingParams::default())
        .bundle(&edge_pair(1.0, true))
        .unwrap();
    let without_loop = EdgeBundler::new(BundlingParams::default())
        .bundle(&edge_pair(1.0, false))
        .unwrap();

    // The degenerate edge collapses onto its node position.
    let anchor = Vector3::new(5.0, -3.0, 0.0);
    assert!(with_loop.polylines[2].iter().all(|p| *p == anchor));

    // And it exerts no force on the real edges.
    assert_eq!(with_loop.polylines[0], without_loop.polylines[0]);
    assert_eq!(with_loop.polylines[1], without_loop.polylines[1]);
}

#[test]
fn over_capacity_configurations_are_rejected() {
    let graph = parallel_flows(4, 10.0, 1.0);
    let params = BundlingParams {
        max_buffer_dim: 32,
        ..Default::default()
    };
    let err = EdgeBundler::new(params).bundle(&graph).unwrap_err();
    assert!(matches!(
        err,
        BundlingError::CapacityExceeded { required: 66, max_dim: 32 }
    ));
}

#[test]
fn unknown_node_ids_are_reported() {
    let graph = BundleGraph::new(HashMap::new(), vec![GraphEdge::new("ghost", "ghost")]);
    let err = EdgeBundler::new(BundlingParams::default())
        .bundle(&graph)
        .unwrap_err();
    assert!(matches!(err, BundlingError::NodeNotFound { edge_index: 0, .. }));
}

#[test]
fn empty_graphs_produce_empty_results() {
    let graph = BundleGraph::default();
    let result = EdgeBundler::new(BundlingParams::default())
        .bundle(&graph)
        .unwrap();
    assert!(result.polylines.is_empty());
    assert_eq!(result.n_points, 66);
}
