//! Double-buffered 2D control-point storage.
//!
//! [`PointGrid`] is an owned row-major buffer of 3D positions; rows map to
//! edges and columns to tiled control points (see [`crate::layout`]).
//! [`BufferPair`] owns the front/back grids: passes read the front, write the
//! back, then [`BufferPair::swap`] exchanges the roles without copying data.
//! [`BufferPair::split`] hands out `(&front, &mut back)` so a pass cannot
//! mutate the buffer it reads from.

use nalgebra::Vector3;

/// Owned 2D buffer of `Vector3<f32>` in row-major layout (stride == width).
#[derive(Clone, Debug)]
pub struct PointGrid {
    /// Buffer width in cells
    pub w: usize,
    /// Buffer height in cells
    pub h: usize,
    /// Number of cells between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Vector3<f32>>,
}

impl PointGrid {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![Vector3::zeros(); w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the cell value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Vector3<f32> {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the cell value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: Vector3<f32>) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[Vector3<f32>] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Vector3<f32>] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

/// Front/back grid pair with O(1) role exchange.
#[derive(Clone, Debug)]
pub struct BufferPair {
    front: PointGrid,
    back: PointGrid,
}

impl BufferPair {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            front: PointGrid::new(w, h),
            back: PointGrid::new(w, h),
        }
    }

    /// Current state, read by the next pass and by extraction.
    #[inline]
    pub fn front(&self) -> &PointGrid {
        &self.front
    }

    /// Mutable front access for seeding before the first pass.
    #[inline]
    pub fn front_mut(&mut self) -> &mut PointGrid {
        &mut self.front
    }

    /// Read view of the front plus write access to the back, for one pass.
    #[inline]
    pub fn split(&mut self) -> (&PointGrid, &mut PointGrid) {
        (&self.front, &mut self.back)
    }

    /// Exchange front/back roles. Handle swap only, no cell copies.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}
