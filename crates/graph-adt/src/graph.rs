//! Graph: an index-addressed arena of vertices with symmetric adjacency.
//!
//! [`Graph`] is the single entry point for building and querying graphs of
//! every [`GraphKind`]. Edges are stored on both endpoints as positional
//! entries (`edges[i]` plus the parallel `directions[i]` / `weights[i]`), and
//! every mutation keeps the two sides in step.
//!
//! # Indices
//!
//! A vertex is addressed by its position in the arena. Positions are not
//! stable: removing vertex `r` shifts every vertex above it down by one, and
//! every stored edge target above `r` is renumbered to match. An index held
//! by a caller is only valid until the next vertex removal.
//!
//! # Pairing
//!
//! For two distinct vertices `u` and `v`, the k-th entry for `v` on `u` and
//! the k-th entry for `u` on `v` describe the same edge. A self-loop occupies
//! two consecutive occurrences on its vertex. With directions tracked, the
//! two entries of an edge always hold opposite directions.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::edge::{EdgeRecord, EdgeSpec};
use crate::error::GraphError;
use crate::kind::{Direction, GraphKind};
use crate::lookup::VertexLookup;
use crate::vertex::{Vertex, VertexSpec};

/// An undirected, directed or weighted graph over payloads of type `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
    kind: GraphKind,
    /// Stored attribute only. No operation computes or updates it.
    has_cycles: bool,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Graph::new(GraphKind::default())
    }
}

impl<T> Graph<T> {
    /// Creates an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            vertices: Vec::new(),
            kind,
            has_cycles: false,
        }
    }

    pub fn undirected() -> Self {
        Graph::new(GraphKind::Undirected)
    }

    pub fn directed() -> Self {
        Graph::new(GraphKind::Directed)
    }

    pub fn weighted() -> Self {
        Graph::new(GraphKind::Weighted)
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn has_cycles(&self) -> bool {
        self.has_cycles
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex<T>> {
        self.vertices.get(index)
    }

    /// Mutable access to one vertex. Only its payload and weight values can
    /// be changed through it; adjacency stays under the graph's control.
    pub fn vertex_mut(&mut self, index: usize) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Neighbor indices of a vertex, in insertion order.
    pub fn neighbors(&self, index: usize) -> Result<&[usize], GraphError> {
        self.check_index(index)?;
        Ok(self.vertices[index].edges())
    }

    /// Returns `true` if at least one edge joins `a` and `b`.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.vertices
            .get(a)
            .is_some_and(|v| v.position_of(b).is_some())
    }

    /// Number of logical edges. Each edge has two entries, a self-loop
    /// included.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    /// Every logical edge once, with the lower index as `front`.
    pub fn edges(&self) -> Vec<EdgeRecord> {
        self.paired_positions()
            .into_iter()
            .map(|(u, i, v, j)| {
                let front = &self.vertices[u];
                let back = &self.vertices[v];
                EdgeRecord {
                    front: u,
                    back: v,
                    direction: front.directions().map(|d| d[i]),
                    weights: match (front.weights(), back.weights()) {
                        (Some(fw), Some(bw)) => Some((fw[i], bw[j])),
                        _ => None,
                    },
                }
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Vertex mutation
    // -----------------------------------------------------------------------

    /// Appends a vertex and completes the reciprocal entry on every
    /// neighbor it declares.
    ///
    /// Neighbors receive the reversed direction and a weight of `0`. Returns
    /// the new vertex's index. Errors with [`GraphError::VertexNotFound`] if
    /// an edge target is not an existing vertex, or
    /// [`GraphError::MalformedVertex`] if the spec's arrays do not fit this
    /// graph's kind. The graph is unchanged on error.
    pub fn add_vertex(&mut self, spec: VertexSpec<T>) -> Result<usize, GraphError> {
        let len = self.vertices.len();
        if let Some(&index) = spec.edge_targets().iter().find(|&&t| t >= len) {
            return Err(GraphError::VertexNotFound { index, len });
        }

        let vertex = Vertex::new(self.kind, spec)?;
        let links: Vec<(usize, Direction)> = vertex
            .incidences()
            .map(|inc| (inc.target, inc.direction.unwrap_or_default()))
            .collect();

        let index = len;
        self.vertices.push(vertex);
        for (target, direction) in links {
            self.link_reciprocal(target, index, direction, 0.0);
        }

        debug!(index, degree = self.vertices[index].degree(), "vertex added");

        #[cfg(debug_assertions)]
        self.assert_consistency();

        Ok(index)
    }

    /// Removes the vertex at `index` together with every edge touching it,
    /// renumbering targets above `index`. Returns the removed vertex.
    pub fn remove_vertex_at(&mut self, index: usize) -> Result<Vertex<T>, GraphError> {
        self.check_index(index)?;

        let mut detached = 0;
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            if i != index {
                detached += vertex.detach_and_renumber(index);
            }
        }
        trace!(index, detached, "renumbered edge targets");

        let removed = self.vertices.remove(index);
        debug!(index, remaining = self.vertices.len(), "vertex removed");

        #[cfg(debug_assertions)]
        self.assert_consistency();

        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Edge mutation
    // -----------------------------------------------------------------------

    /// Adds an edge between `front` and `back`.
    ///
    /// Adjacency is always recorded on both vertices. With directions
    /// tracked, `front` records the spec's direction and `back` its reverse;
    /// with weights tracked, each endpoint records its own weight. Errors
    /// with [`GraphError::VertexNotFound`] for an unknown index or
    /// [`GraphError::MalformedEdge`] for more than two weights.
    pub fn add_edge(
        &mut self,
        front: usize,
        back: usize,
        spec: impl Into<EdgeSpec>,
    ) -> Result<(), GraphError> {
        self.check_index(front)?;
        self.check_index(back)?;
        let spec = spec.into();
        let (front_weight, back_weight) = spec.endpoint_weights()?;
        let direction = spec.get_direction();

        self.vertices[front].push_incidence(back, direction, front_weight);
        self.link_reciprocal(back, front, direction, back_weight);

        debug!(front, back, %direction, "edge added");

        #[cfg(debug_assertions)]
        self.assert_consistency();

        Ok(())
    }

    /// Adds a neutral, zero-weighted edge.
    pub fn connect(&mut self, front: usize, back: usize) -> Result<(), GraphError> {
        self.add_edge(front, back, EdgeSpec::new())
    }

    /// Removes the first edge between `front` and `back`.
    ///
    /// Returns `Ok(false)` without changing anything if no such edge exists.
    /// Errors with [`GraphError::VertexNotFound`] for an unknown index.
    pub fn remove_edge(&mut self, front: usize, back: usize) -> Result<bool, GraphError> {
        self.check_index(front)?;
        self.check_index(back)?;

        let Some(pos) = self.vertices[front].position_of(back) else {
            debug!(front, back, "no edge to remove");
            return Ok(false);
        };
        self.vertices[front].remove_position(pos);
        if let Some(pos) = self.vertices[back].position_of(front) {
            self.vertices[back].remove_position(pos);
        }

        debug!(front, back, "edge removed");

        #[cfg(debug_assertions)]
        self.assert_consistency();

        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn check_index(&self, index: usize) -> Result<(), GraphError> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound {
                index,
                len: self.vertices.len(),
            })
        }
    }

    /// Installs the mirror entry of an edge `source` declared towards
    /// `target`: `target` gains `source` with the reversed direction and the
    /// given weight.
    fn link_reciprocal(
        &mut self,
        target: usize,
        source: usize,
        source_direction: Direction,
        target_weight: f64,
    ) {
        self.vertices[target].push_incidence(source, source_direction.reversed(), target_weight);
    }

    /// Positions of every target on every vertex, keyed by
    /// `(vertex, target)`, in positional order.
    fn occurrence_positions(&self) -> HashMap<(usize, usize), Vec<usize>> {
        let mut positions: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
        for (u, vertex) in self.vertices.iter().enumerate() {
            for (i, &v) in vertex.edges().iter().enumerate() {
                positions.entry((u, v)).or_default().push(i);
            }
        }
        positions
    }

    /// Matches the two entries of every logical edge.
    ///
    /// Yields `(u, i, v, j)` with `u <= v`, where `vertices[u].edges[i]` and
    /// `vertices[v].edges[j]` are the two entries of one edge.
    fn paired_positions(&self) -> Vec<(usize, usize, usize, usize)> {
        self.pair_entries(&self.occurrence_positions())
    }

    fn pair_entries(
        &self,
        positions: &HashMap<(usize, usize), Vec<usize>>,
    ) -> Vec<(usize, usize, usize, usize)> {
        let mut pairs = Vec::with_capacity(self.edge_count());
        let mut seen: HashMap<(usize, usize), usize> = HashMap::new();
        for (u, vertex) in self.vertices.iter().enumerate() {
            for (i, &v) in vertex.edges().iter().enumerate() {
                if v < u {
                    continue;
                }
                let counter = seen.entry((u, v)).or_insert(0);
                let k = *counter;
                *counter += 1;
                let mate = if v == u {
                    // A loop's entries are occurrences 2m and 2m+1.
                    if k % 2 == 1 {
                        continue;
                    }
                    positions.get(&(u, u)).and_then(|p| p.get(k + 1))
                } else {
                    positions.get(&(v, u)).and_then(|p| p.get(k))
                };
                if let Some(&j) = mate {
                    pairs.push((u, i, v, j));
                }
            }
        }
        pairs
    }

    // -----------------------------------------------------------------------
    // Invariant checking
    // -----------------------------------------------------------------------

    /// Verifies the structural invariants of the graph.
    ///
    /// Checks that each vertex carries exactly the arrays its kind tracks,
    /// that they are parallel, that every target is in range, that adjacency
    /// is symmetric and that paired directions are opposite. Runs in time
    /// linear in the number of adjacency entries.
    pub fn check_invariants(&self) -> Result<(), GraphError> {
        let n = self.vertices.len();
        for (u, vertex) in self.vertices.iter().enumerate() {
            let degree = vertex.degree();
            if vertex.directions().is_some() != self.kind.tracks_directions()
                || vertex.weights().is_some() != self.kind.tracks_weights()
            {
                return Err(inconsistent(format!(
                    "vertex {} does not match {} capabilities",
                    u, self.kind
                )));
            }
            if vertex.directions().is_some_and(|d| d.len() != degree)
                || vertex.weights().is_some_and(|w| w.len() != degree)
            {
                return Err(inconsistent(format!("vertex {} has ragged arrays", u)));
            }
            if let Some(&v) = vertex.edges().iter().find(|&&v| v >= n) {
                return Err(inconsistent(format!(
                    "vertex {} points at missing vertex {}",
                    u, v
                )));
            }
        }

        let positions = self.occurrence_positions();
        for (&(u, v), forward) in &positions {
            if u == v {
                if forward.len() % 2 != 0 {
                    return Err(inconsistent(format!(
                        "vertex {} has an unpaired self-loop entry",
                        u
                    )));
                }
            } else if forward.len() != positions.get(&(v, u)).map_or(0, Vec::len) {
                return Err(inconsistent(format!(
                    "adjacency between {} and {} is not symmetric",
                    u, v
                )));
            }
        }

        for (u, i, v, j) in self.pair_entries(&positions) {
            let (Some(du), Some(dv)) = (
                self.vertices[u].directions(),
                self.vertices[v].directions(),
            ) else {
                continue;
            };
            if du[i] != dv[j].reversed() {
                return Err(inconsistent(format!(
                    "edge {}-{} holds directions {} and {}",
                    u, v, du[i], dv[j]
                )));
            }
        }

        Ok(())
    }

    /// Panics if [`check_invariants`](Self::check_invariants) fails.
    ///
    /// Only called in debug builds (via `cfg(debug_assertions)`).
    #[cfg(debug_assertions)]
    fn assert_consistency(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }
}

impl<T: PartialEq> Graph<T> {
    /// Removes the vertex selected by `lookup`.
    ///
    /// Exactly one of index or data must be set, otherwise
    /// [`GraphError::Argument`]. A data lookup removes the first vertex whose
    /// payload matches.
    pub fn remove_vertex(&mut self, lookup: VertexLookup<'_, T>) -> Result<Vertex<T>, GraphError> {
        let index = lookup.resolve(&self.vertices)?;
        self.remove_vertex_at(index)
    }

    /// Removes the first vertex whose payload equals `data`.
    pub fn remove_vertex_by_data(&mut self, data: &T) -> Result<Vertex<T>, GraphError> {
        self.remove_vertex(VertexLookup::data(data))
    }

    /// Index of the first vertex whose payload equals `data`.
    pub fn find_vertex(&self, data: &T) -> Option<usize> {
        self.vertices.iter().position(|v| v.payload() == data)
    }
}

impl<T: fmt::Display> Graph<T> {
    /// String form of every payload, in index order.
    pub fn all_vertices(&self) -> Vec<String> {
        self.vertices.iter().map(ToString::to_string).collect()
    }
}

/// One line per vertex: `index: payload -> incidences`.
impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", index, vertex)?;
            for (n, incidence) in vertex.incidences().enumerate() {
                let sep = if n == 0 { " -> " } else { ", " };
                write!(f, "{}{}", sep, incidence)?;
            }
        }
        Ok(())
    }
}

fn inconsistent(reason: String) -> GraphError {
    GraphError::Inconsistent { reason }
}
