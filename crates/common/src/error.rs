use std::fmt;

use crate::types::Vertex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No edges were supplied, or an edge references vertex id 0.
    InvalidGraph,

    /// The largest vertex id is too big for dense N x N matrices.
    GraphTooLarge(Vertex),

    /// Relaxation produced a negative distance from the given vertex back to itself.
    NegativeCycle(Vertex),

    /// A query referenced a vertex outside `[1, N]`.
    VertexOutOfRange(Vertex),

    /// Following the predecessor chain did not reach the source within N steps.
    PathReconstructionFailed { from: Vertex, to: Vertex },

    /// A finite sum left the representable distance range.
    WeightOverflow,

    /// The run was stopped through the cancellation flag.
    Cancelled,

    /// The matrix is partially relaxed after a failed run and must not be read.
    InvalidatedMatrix,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidGraph => write!(f, "Graph has no vertices or uses vertex id 0."),

            Error::GraphTooLarge(n) => write!(
                f,
                "Graph with {} vertices is too large for dense matrices.",
                n
            ),

            Error::NegativeCycle(v) => {
                write!(f, "Negative cycle detected through vertex {}.", v)
            }

            Error::VertexOutOfRange(v) => write!(f, "Vertex {} does not exist.", v),

            Error::PathReconstructionFailed { from, to } => write!(
                f,
                "Path reconstruction from {} to {} failed due to broken predecessor chain.",
                from, to
            ),

            Error::WeightOverflow => write!(f, "Path weight overflowed the distance range."),

            Error::Cancelled => write!(f, "Relaxation was cancelled."),

            Error::InvalidatedMatrix => write!(
                f,
                "Matrix was left partially relaxed by a failed run and cannot be queried."
            ),
        }
    }
}

impl std::error::Error for Error {}
