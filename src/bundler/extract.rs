//! Readback of bundled polylines from the final front buffer.

use crate::buffers::PointGrid;
use crate::layout::BufferLayout;
use nalgebra::Vector3;

/// Undo the tiling transform and collect, per edge, its ordered control
/// points. Must address through the same [`BufferLayout`] the buffers were
/// allocated with.
pub(crate) fn extract_polylines(
    front: &PointGrid,
    layout: &BufferLayout,
) -> Vec<Vec<Vector3<f32>>> {
    (0..layout.n_edges())
        .map(|edge| {
            (0..layout.n_points())
                .map(|point| {
                    let (row, column) = layout.cell(edge, point);
                    front.get(column, row)
                })
                .collect()
        })
        .collect()
}
