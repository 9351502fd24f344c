use nalgebra::Vector3;
use serde::Serialize;

/// Bundled layout produced by [`crate::EdgeBundler::bundle`].
///
/// `polylines[e]` is the ordered control-point path for input edge `e`; every
/// path has exactly `n_points` entries and keeps the edge's original source
/// and target positions at its ends.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BundleResult {
    pub polylines: Vec<Vec<Vector3<f32>>>,
    /// Control points per edge, `subdivision_seed * 2^cycles + 2`.
    pub n_points: usize,
    /// Time spent resolving the graph and seeding buffers.
    pub setup_ms: f64,
    /// Time spent in the compatibility stage and refinement cycles.
    pub bundling_ms: f64,
}
