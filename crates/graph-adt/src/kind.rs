//! Graph variants and edge orientation.
//!
//! [`GraphKind`] selects which per-edge metadata a graph tracks, and
//! [`Direction`] is the orientation sign a vertex records for each of its
//! edges.

use std::fmt;

use crate::error::GraphError;

/// The three graph variants.
///
/// Each variant is a set of capabilities layered over plain adjacency:
/// directions are tracked by [`Directed`](GraphKind::Directed) and
/// [`Weighted`](GraphKind::Weighted), weights only by `Weighted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphKind {
    /// Plain adjacency, no per-edge metadata.
    #[default]
    Undirected,
    /// Adjacency plus a direction sign per edge endpoint.
    Directed,
    /// Adjacency plus a direction sign and a weight per edge endpoint.
    Weighted,
}

impl GraphKind {
    /// Returns `true` if vertices of this kind carry a `directions` array.
    pub fn tracks_directions(self) -> bool {
        matches!(self, GraphKind::Directed | GraphKind::Weighted)
    }

    /// Returns `true` if vertices of this kind carry a `weights` array.
    pub fn tracks_weights(self) -> bool {
        matches!(self, GraphKind::Weighted)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphKind::Undirected => "undirected",
            GraphKind::Directed => "directed",
            GraphKind::Weighted => "weighted",
        };
        f.write_str(name)
    }
}

/// Orientation of an edge as seen from one of its endpoints.
///
/// The two endpoints of an edge always hold opposite directions
/// (`Neutral` is its own opposite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// This vertex is the edge's destination (`-1`).
    Incoming,
    /// No orientation (`0`).
    #[default]
    Neutral,
    /// This vertex is the edge's origin (`1`).
    Outgoing,
}

impl Direction {
    /// The direction the other endpoint records for the same edge.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Incoming => Direction::Outgoing,
            Direction::Neutral => Direction::Neutral,
            Direction::Outgoing => Direction::Incoming,
        }
    }

    /// Integer sign of this direction: `-1`, `0` or `1`.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Incoming => -1,
            Direction::Neutral => 0,
            Direction::Outgoing => 1,
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = GraphError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Direction::Incoming),
            0 => Ok(Direction::Neutral),
            1 => Ok(Direction::Outgoing),
            _ => Err(GraphError::InvalidDirection { value }),
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = GraphError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Direction::try_from(i64::from(value))
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction.sign()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Incoming => "in",
            Direction::Neutral => "none",
            Direction::Outgoing => "out",
        };
        f.write_str(name)
    }
}
