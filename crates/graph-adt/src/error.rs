//! Error types for graph-adt.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! every way a vertex or edge operation can be rejected.

use thiserror::Error;

/// Errors produced by graph construction and mutation.
///
/// Every fallible [`Graph`](crate::Graph) operation validates its input before
/// touching the vertex arena, so receiving any of these means the graph is
/// unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The parallel arrays of a vertex disagree in length, or carry metadata
    /// the graph kind does not track.
    #[error("malformed vertex: {reason}")]
    MalformedVertex { reason: String },

    /// An edge specification could not be interpreted.
    #[error("malformed edge: {reason}")]
    MalformedEdge { reason: String },

    /// A vertex index is outside the current vertex collection.
    #[error("vertex not found: index {index} (graph has {len} vertices)")]
    VertexNotFound { index: usize, len: usize },

    /// No vertex carries the requested payload.
    #[error("vertex not found: no vertex holds the requested data")]
    VertexDataNotFound,

    /// A lookup was given the wrong combination of selectors.
    #[error("invalid arguments: {reason}")]
    Argument { reason: String },

    /// An integer that is not a valid direction sign.
    #[error("invalid direction: {value} (expected -1, 0 or 1)")]
    InvalidDirection { value: i64 },

    /// A structural invariant of the graph does not hold.
    #[error("graph inconsistency: {reason}")]
    Inconsistent { reason: String },
}

impl GraphError {
    /// Returns `true` when the requested vertex does not exist, whether it
    /// was looked up by index or by data.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::VertexNotFound { .. } | GraphError::VertexDataNotFound
        )
    }
}
