//! Subdivision pass: arc-length resampling of every edge's polyline.

use crate::buffers::PointGrid;
use crate::layout::BufferLayout;
use nalgebra::Vector3;

const EPS: f32 = 1e-6;

/// Resample every edge from `old_points` to `new_points` control points,
/// reading the front buffer and writing the back buffer. Endpoints stay
/// fixed; interior points reflow to equal arc-length spacing along the
/// currently stored path.
pub(crate) fn subdivision_pass(
    front: &PointGrid,
    back: &mut PointGrid,
    layout: &BufferLayout,
    old_points: usize,
    new_points: usize,
    use_parallel: bool,
) {
    if layout.n_edges() == 0 {
        return;
    }
    let stride = back.stride;
    let run_row = |row: usize, out: &mut [Vector3<f32>]| {
        for tile in 0..layout.n_tiles() {
            if layout.edge_at(row, tile).is_none() {
                continue;
            }
            resample_edge(
                front,
                row,
                layout.tile_offset(tile),
                old_points,
                new_points,
                out,
            );
        }
    };

    if use_parallel {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            back.data
                .par_chunks_mut(stride)
                .enumerate()
                .for_each(|(row, out)| run_row(row, out));
            return;
        }
    }
    for (row, out) in back.data.chunks_mut(stride).enumerate() {
        run_row(row, out);
    }
}

fn resample_edge(
    front: &PointGrid,
    row: usize,
    offset: usize,
    old_points: usize,
    new_points: usize,
    out: &mut [Vector3<f32>],
) {
    let old: Vec<Vector3<f32>> = (0..old_points)
        .map(|i| front.get(offset + i, row))
        .collect();
    let mut seg_len = Vec::with_capacity(old_points - 1);
    let mut total = 0.0f32;
    for pair in old.windows(2) {
        let len = (pair[1] - pair[0]).norm();
        seg_len.push(len);
        total += len;
    }

    out[offset] = old[0];
    out[offset + new_points - 1] = old[old_points - 1];
    if total <= EPS {
        // Degenerate path: every point collapses onto the shared endpoint.
        for j in 1..new_points - 1 {
            out[offset + j] = old[0];
        }
        return;
    }

    let mut seg = 0usize;
    let mut consumed = 0.0f32;
    for j in 1..new_points - 1 {
        let target = total * j as f32 / (new_points - 1) as f32;
        while seg + 1 < seg_len.len() && consumed + seg_len[seg] < target {
            consumed += seg_len[seg];
            seg += 1;
        }
        let along = if seg_len[seg] > EPS {
            ((target - consumed) / seg_len[seg]).clamp(0.0, 1.0)
        } else {
            0.0
        };
        out[offset + j] = old[seg] + along * (old[seg + 1] - old[seg]);
    }
}
