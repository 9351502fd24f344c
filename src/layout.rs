//! Tiling and addressing for the control-point and compatibility buffers.
//!
//! The bundling passes run over a 2D buffer whose width and height are both
//! capped by a maximum buffer dimension. One row holds one edge; when the
//! edge count exceeds the cap, the surplus edges wrap into additional column
//! tiles, each `n_points` columns wide. All (edge, point) to (row, column)
//! arithmetic lives here so allocation and addressing cannot drift apart.

use crate::error::{BundlingError, Result};

/// Buffer dimensions and cell addressing for one bundling run.
///
/// Immutable once constructed; a different edge count or cycle count requires
/// a fresh layout and fresh buffers.
#[derive(Clone, Copy, Debug)]
pub struct BufferLayout {
    n_edges: usize,
    n_points: usize,
    n_rows: usize,
    n_tiles: usize,
    n_columns: usize,
}

impl BufferLayout {
    /// Compute buffer dimensions, failing when either the control-point
    /// columns or the compatibility columns would exceed `max_dim`.
    pub fn new(
        n_edges: usize,
        n_points: usize,
        max_compatible: usize,
        max_dim: usize,
    ) -> Result<Self> {
        let n_rows = n_edges.min(max_dim);
        let n_tiles = n_edges.div_ceil(max_dim.max(1));
        let n_columns = n_points.saturating_mul(n_tiles);
        if n_columns > max_dim {
            return Err(BundlingError::CapacityExceeded {
                required: n_columns,
                max_dim,
            });
        }
        let compat_columns = n_tiles.saturating_mul(max_compatible);
        if compat_columns > max_dim {
            return Err(BundlingError::CapacityExceeded {
                required: compat_columns,
                max_dim,
            });
        }
        Ok(Self {
            n_edges,
            n_points,
            n_rows,
            n_tiles,
            n_columns,
        })
    }

    #[inline]
    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    #[inline]
    pub fn n_tiles(&self) -> usize {
        self.n_tiles
    }

    #[inline]
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// (row, column) of control point `point` of edge `edge`.
    #[inline]
    pub fn cell(&self, edge: usize, point: usize) -> (usize, usize) {
        debug_assert!(edge < self.n_edges, "edge index {edge} out of range");
        debug_assert!(point < self.n_points, "point index {point} out of range");
        let row = edge % self.n_rows;
        let column = point + (edge / self.n_rows) * self.n_points;
        (row, column)
    }

    /// First column of `tile`'s span.
    #[inline]
    pub fn tile_offset(&self, tile: usize) -> usize {
        tile * self.n_points
    }

    /// Edge stored at (`row`, `tile`), if any. The last tile may be ragged.
    #[inline]
    pub fn edge_at(&self, row: usize, tile: usize) -> Option<usize> {
        debug_assert!(row < self.n_rows, "row {row} out of range");
        let edge = tile * self.n_rows + row;
        (edge < self.n_edges).then_some(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn single_tile_dimensions() {
        let layout = BufferLayout::new(100, 66, 500, 16384).unwrap();
        assert_eq!(layout.n_rows(), 100);
        assert_eq!(layout.n_tiles(), 1);
        assert_eq!(layout.n_columns(), 66);
    }

    #[test]
    fn tiled_dimensions_cover_all_edges() {
        let layout = BufferLayout::new(10, 4, 2, 16).unwrap();
        assert_eq!(layout.n_rows(), 10);
        assert_eq!(layout.n_tiles(), 1);

        let layout = BufferLayout::new(10, 4, 1, 4).unwrap();
        assert_eq!(layout.n_rows(), 4);
        assert_eq!(layout.n_tiles(), 3);
        assert_eq!(layout.n_columns(), 12);
        assert!(layout.n_rows() * layout.n_tiles() >= layout.n_edges());
    }

    #[test]
    fn addressing_is_a_bijection() {
        let layout = BufferLayout::new(10, 4, 1, 4).unwrap();
        let mut seen = HashSet::new();
        for edge in 0..layout.n_edges() {
            for point in 0..layout.n_points() {
                let (row, column) = layout.cell(edge, point);
                assert!(row < layout.n_rows());
                assert!(column < layout.n_columns());
                assert!(seen.insert((row, column)), "cell reused");
            }
        }
        assert_eq!(seen.len(), layout.n_edges() * layout.n_points());
    }

    #[test]
    fn edge_at_inverts_cell_addressing() {
        let layout = BufferLayout::new(10, 4, 1, 4).unwrap();
        for edge in 0..layout.n_edges() {
            let (row, column) = layout.cell(edge, 0);
            let tile = column / layout.n_points();
            assert_eq!(layout.edge_at(row, tile), Some(edge));
        }
        // Ragged last tile: rows beyond the final edge hold nothing.
        assert_eq!(layout.edge_at(2, 2), None);
        assert_eq!(layout.edge_at(3, 2), None);
    }

    #[test]
    fn point_columns_over_capacity_are_rejected() {
        let err = BufferLayout::new(10, 5, 2, 4).unwrap_err();
        match err {
            BundlingError::CapacityExceeded { required, max_dim } => {
                assert_eq!(required, 15);
                assert_eq!(max_dim, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn compatibility_columns_over_capacity_are_rejected() {
        // Point columns fit (3 tiles x 1 point), compatibility columns do not.
        let err = BufferLayout::new(10, 1, 500, 4).unwrap_err();
        match err {
            BundlingError::CapacityExceeded { required, .. } => assert_eq!(required, 1500),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_edge_list_yields_empty_layout() {
        let layout = BufferLayout::new(0, 66, 500, 16384).unwrap();
        assert_eq!(layout.n_rows(), 0);
        assert_eq!(layout.n_tiles(), 0);
        assert_eq!(layout.n_columns(), 0);
    }
}
