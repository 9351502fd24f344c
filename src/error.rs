//! Error types surfaced by the bundling pipeline.
//!
//! Every fallible stage reports through [`BundlingError`]; there is no
//! partial-result return. Addressing mistakes (out-of-range edge or point
//! indices) are programming errors and panic instead of returning a variant.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BundlingError>;

/// Failures reported by graph validation and buffer sizing.
#[derive(Debug, Error)]
pub enum BundlingError {
    /// The control-point or compatibility buffer would exceed the maximum
    /// buffer dimension. Raised before any allocation; there is no automatic
    /// fallback beyond the computed tile count.
    #[error("required buffer dimension {required} exceeds the maximum {max_dim}")]
    CapacityExceeded { required: usize, max_dim: usize },

    /// An edge references a node id missing from the node set.
    #[error("edge {edge_index} references unknown node id `{node_id}`")]
    NodeNotFound { edge_index: usize, node_id: String },
}
