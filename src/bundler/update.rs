//! Update pass: spring and attraction forces on interior control points.

use crate::buffers::PointGrid;
use crate::compat::CompatibilityLists;
use crate::layout::BufferLayout;
use nalgebra::Vector3;

const EPS: f32 = 1e-6;

/// Move every interior control point once, reading the front buffer and
/// writing the back buffer. Each point feels a spring pull toward its two
/// path neighbors (stiffness scaled by edge length and resolution) and a
/// unit attraction toward the same-index point of every compatible edge; the
/// resulting displacement is capped at `step`. Endpoints and degenerate
/// edges never move.
#[allow(clippy::too_many_arguments)]
pub(crate) fn update_pass(
    front: &PointGrid,
    back: &mut PointGrid,
    layout: &BufferLayout,
    compat: &CompatibilityLists,
    lengths: &[f32],
    active_points: usize,
    stiffness: f32,
    step: f32,
    use_parallel: bool,
) {
    if layout.n_edges() == 0 {
        return;
    }
    let stride = back.stride;
    let run_row = |row: usize, out: &mut [Vector3<f32>]| {
        for tile in 0..layout.n_tiles() {
            let Some(edge) = layout.edge_at(row, tile) else {
                continue;
            };
            move_edge_points(
                front,
                layout,
                compat,
                lengths[edge],
                edge,
                row,
                layout.tile_offset(tile),
                active_points,
                stiffness,
                step,
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

#[allow(clippy::too_many_arguments)]
fn move_edge_points(
    front: &PointGrid,
    layout: &BufferLayout,
    compat: &CompatibilityLists,
    length: f32,
    edge: usize,
    row: usize,
    offset: usize,
    active_points: usize,
    stiffness: f32,
    step: f32,
    out: &mut [Vector3<f32>],
) {
    out[offset] = front.get(offset, row);
    out[offset + active_points - 1] = front.get(offset + active_points - 1, row);

    if length <= EPS {
        for j in 1..active_points - 1 {
            out[offset + j] = front.get(offset + j, row);
        }
        return;
    }

    let spring_k = stiffness / (length * (active_points - 1) as f32);
    let partners = compat.for_edge(edge);
    for j in 1..active_points - 1 {
        let point = front.get(offset + j, row);
        let prev = front.get(offset + j - 1, row);
        let next = front.get(offset + j + 1, row);
        let mut force = spring_k * ((prev - point) + (next - point));

        for &other in partners {
            let (other_row, other_column) = layout.cell(other as usize, j);
            let delta = front.get(other_column, other_row) - point;
            let dist = delta.norm();
            if dist > EPS {
                force += delta / dist;
            }
        }

        let magnitude = force.norm();
        if magnitude <= EPS {
            out[offset + j] = point;
            continue;
        }
        // Displacement is step * force, capped at step along the force
        // direction.
        let displacement = if magnitude > 1.0 {
            force * (step / magnitude)
        } else {
            force * step
        };
        out[offset + j] = point + displacement;
    }
}
