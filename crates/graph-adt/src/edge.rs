//! Edge inputs and edge enumeration records.
//!
//! Edges are not stored as objects: a graph keeps them as positional entries
//! on both endpoints. [`EdgeSpec`] describes an edge to insert, and
//! [`EdgeRecord`] describes one logical edge read back out of a graph.

use crate::error::GraphError;
use crate::kind::Direction;

/// Input for [`Graph::add_edge`](crate::Graph::add_edge).
///
/// `direction` is the orientation recorded on the front vertex; the back
/// vertex records its reverse. Weights are given front first, then back.
/// Metadata the graph kind does not track is ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeSpec {
    direction: Direction,
    weights: Vec<f64>,
}

impl EdgeSpec {
    /// A neutral edge with both endpoint weights at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Endpoint weights. An empty list means `[0, 0]`, a single weight is
    /// padded with a trailing `0`.
    pub fn weights(mut self, weights: impl IntoIterator<Item = f64>) -> Self {
        self.weights = weights.into_iter().collect();
        self
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Resolves the `(front, back)` weight pair.
    ///
    /// Returns [`GraphError::MalformedEdge`] for more than two weights.
    pub fn endpoint_weights(&self) -> Result<(f64, f64), GraphError> {
        match self.weights.as_slice() {
            [] => Ok((0.0, 0.0)),
            [front] => Ok((*front, 0.0)),
            [front, back] => Ok((*front, *back)),
            more => Err(GraphError::MalformedEdge {
                reason: format!("expected at most 2 endpoint weights, got {}", more.len()),
            }),
        }
    }
}

impl From<Direction> for EdgeSpec {
    fn from(direction: Direction) -> Self {
        EdgeSpec::new().direction(direction)
    }
}

/// One logical edge of a graph, as produced by
/// [`Graph::edges`](crate::Graph::edges).
///
/// `front` is the lower vertex index. `direction` is the front vertex's
/// orientation; `weights` holds the front weight, then the back weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    pub front: usize,
    pub back: usize,
    pub direction: Option<Direction>,
    pub weights: Option<(f64, f64)>,
}

impl EdgeRecord {
    /// Returns `true` if both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.front == self.back
    }
}
