//! Vertex model shared by all graph kinds.
//!
//! A [`Vertex`] stores its adjacency as parallel arrays: `edges[i]` is the
//! index of a neighbor, and `directions[i]` / `weights[i]` (when the graph
//! kind tracks them) describe that same edge from this vertex's side.
//! [`VertexSpec`] is the caller-facing description a vertex is built from.

use std::fmt;

use crate::error::GraphError;
use crate::kind::{Direction, GraphKind};

/// Input for [`Graph::add_vertex`](crate::Graph::add_vertex).
///
/// Arrays are positional: the i-th direction and the i-th weight belong to
/// the i-th edge target. Arrays for capabilities the graph kind does not
/// track must stay empty.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexSpec<T> {
    pub(crate) payload: T,
    pub(crate) edges: Vec<usize>,
    pub(crate) directions: Vec<Direction>,
    pub(crate) weights: Vec<f64>,
}

impl<T> VertexSpec<T> {
    /// A vertex with the given payload and no edges.
    pub fn new(payload: T) -> Self {
        VertexSpec {
            payload,
            edges: Vec::new(),
            directions: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Indices of existing vertices the new vertex connects to.
    pub fn edges(mut self, edges: impl IntoIterator<Item = usize>) -> Self {
        self.edges = edges.into_iter().collect();
        self
    }

    /// Directions of the new vertex's edges, one per edge target.
    pub fn directions(mut self, directions: impl IntoIterator<Item = Direction>) -> Self {
        self.directions = directions.into_iter().collect();
        self
    }

    /// Weights the new vertex holds for its edges, one per edge target.
    pub fn weights(mut self, weights: impl IntoIterator<Item = f64>) -> Self {
        self.weights = weights.into_iter().collect();
        self
    }

    /// The edge targets declared so far.
    pub fn edge_targets(&self) -> &[usize] {
        &self.edges
    }
}

/// One positional adjacency entry of a vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incidence {
    /// Index of the neighbor.
    pub target: usize,
    /// This vertex's orientation of the edge, if directions are tracked.
    pub direction: Option<Direction>,
    /// The weight this vertex holds for the edge, if weights are tracked.
    pub weight: Option<f64>,
}

impl fmt::Display for Incidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)?;
        match (self.direction, self.weight) {
            (Some(d), Some(w)) => write!(f, "[{} w={}]", d, w),
            (Some(d), None) => write!(f, "[{}]", d),
            (None, Some(w)) => write!(f, "[w={}]", w),
            (None, None) => Ok(()),
        }
    }
}

/// A node of a [`Graph`](crate::Graph).
///
/// Fields are private: the adjacency arrays are only changed by graph
/// operations, which keep them parallel and symmetric across vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<T> {
    payload: T,
    edges: Vec<usize>,
    directions: Option<Vec<Direction>>,
    weights: Option<Vec<f64>>,
}

impl<T> Vertex<T> {
    /// Builds a vertex for a graph of the given kind.
    ///
    /// Returns [`GraphError::MalformedVertex`] if a tracked array differs in
    /// length from `edges`, or if an untracked array is non-empty.
    pub fn new(kind: GraphKind, spec: VertexSpec<T>) -> Result<Self, GraphError> {
        let VertexSpec {
            payload,
            edges,
            directions,
            weights,
        } = spec;

        let directions = if kind.tracks_directions() {
            if directions.len() != edges.len() {
                return Err(GraphError::MalformedVertex {
                    reason: format!(
                        "{} edges but {} directions",
                        edges.len(),
                        directions.len()
                    ),
                });
            }
            Some(directions)
        } else {
            if !directions.is_empty() {
                return Err(GraphError::MalformedVertex {
                    reason: format!("{} graphs do not track directions", kind),
                });
            }
            None
        };

        let weights = if kind.tracks_weights() {
            if weights.len() != edges.len() {
                return Err(GraphError::MalformedVertex {
                    reason: format!("{} edges but {} weights", edges.len(), weights.len()),
                });
            }
            Some(weights)
        } else {
            if !weights.is_empty() {
                return Err(GraphError::MalformedVertex {
                    reason: format!("{} graphs do not track weights", kind),
                });
            }
            None
        };

        Ok(Vertex {
            payload,
            edges,
            directions,
            weights,
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Neighbor indices in insertion order.
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Per-edge directions, `None` if the graph kind does not track them.
    pub fn directions(&self) -> Option<&[Direction]> {
        self.directions.as_deref()
    }

    /// Per-edge weights, `None` if the graph kind does not track them.
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Mutable per-edge weights. Values may change, the length may not.
    pub fn weights_mut(&mut self) -> Option<&mut [f64]> {
        self.weights.as_deref_mut()
    }

    /// Number of adjacency entries (a self-loop counts twice).
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Iterates the adjacency entries in positional order.
    pub fn incidences(&self) -> impl Iterator<Item = Incidence> + '_ {
        self.edges.iter().enumerate().map(move |(i, &target)| Incidence {
            target,
            direction: self.directions.as_ref().map(|d| d[i]),
            weight: self.weights.as_ref().map(|w| w[i]),
        })
    }

    // -----------------------------------------------------------------------
    // Crate-internal mutation (keeps the arrays parallel)
    // -----------------------------------------------------------------------

    /// Appends an entry; metadata for untracked capabilities is dropped.
    pub(crate) fn push_incidence(&mut self, target: usize, direction: Direction, weight: f64) {
        self.edges.push(target);
        if let Some(directions) = self.directions.as_mut() {
            directions.push(direction);
        }
        if let Some(weights) = self.weights.as_mut() {
            weights.push(weight);
        }
    }

    /// Position of the first entry pointing at `target`.
    pub(crate) fn position_of(&self, target: usize) -> Option<usize> {
        self.edges.iter().position(|&t| t == target)
    }

    pub(crate) fn remove_position(&mut self, pos: usize) {
        self.edges.remove(pos);
        if let Some(directions) = self.directions.as_mut() {
            directions.remove(pos);
        }
        if let Some(weights) = self.weights.as_mut() {
            weights.remove(pos);
        }
    }

    /// Drops every entry pointing at `removed` and shifts targets above it
    /// down by one. Returns the number of dropped entries.
    pub(crate) fn detach_and_renumber(&mut self, removed: usize) -> usize {
        let mut dropped = 0;
        let mut pos = 0;
        while pos < self.edges.len() {
            let target = self.edges[pos];
            if target == removed {
                self.remove_position(pos);
                dropped += 1;
                continue;
            }
            if target > removed {
                self.edges[pos] = target - 1;
            }
            pos += 1;
        }
        dropped
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.payload)
    }
}
