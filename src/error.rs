//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Every variant is recoverable. The crate never panics and never aborts the
/// process on invalid input; failed operations leave the point they were
/// called on unchanged.
#[derive(Debug, Clone, Error)]
pub enum PuntoError {
    /// Indexed access with an index outside of the point's coordinate range.
    #[error("coordinate index {index} is out of range 0..{dim}")]
    OutOfRange {
        /// The requested coordinate index.
        index: usize,
        /// Number of coordinates the point holds.
        dim: usize,
    },

    /// A runtime coordinate sequence of the wrong length was given to a
    /// constructor.
    #[error("expected {expected} coordinates, got {actual}")]
    DimensionMismatch {
        /// Number of coordinates the point type requires.
        expected: usize,
        /// Number of coordinates actually supplied.
        actual: usize,
    },
}
