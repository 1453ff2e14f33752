//! Vertex selection for removal.
//!
//! A [`VertexLookup`] names a vertex either by index or by payload. Exactly
//! one of the two must be set; [`resolve`](VertexLookup::resolve) rejects
//! any other combination.

use crate::error::GraphError;
use crate::vertex::Vertex;

/// Selects a vertex by index or by payload equality.
#[derive(Debug)]
pub struct VertexLookup<'a, T> {
    index: Option<usize>,
    data: Option<&'a T>,
}

impl<'a, T> Default for VertexLookup<'a, T> {
    fn default() -> Self {
        VertexLookup {
            index: None,
            data: None,
        }
    }
}

impl<'a, T> Clone for VertexLookup<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for VertexLookup<'a, T> {}

impl<'a, T> VertexLookup<'a, T> {
    /// Lookup by position.
    pub fn index(index: usize) -> Self {
        VertexLookup {
            index: Some(index),
            data: None,
        }
    }

    /// Lookup by the first vertex whose payload equals `data`.
    pub fn data(data: &'a T) -> Self {
        VertexLookup {
            index: None,
            data: Some(data),
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_data(mut self, data: &'a T) -> Self {
        self.data = Some(data);
        self
    }
}

impl<'a, T: PartialEq> VertexLookup<'a, T> {
    /// Resolves the lookup to an index into `vertices`.
    ///
    /// Errors with [`GraphError::Argument`] unless exactly one selector is
    /// set, [`GraphError::VertexNotFound`] for an out-of-range index and
    /// [`GraphError::VertexDataNotFound`] when no payload matches.
    pub fn resolve(&self, vertices: &[Vertex<T>]) -> Result<usize, GraphError> {
        match (self.index, self.data) {
            (Some(index), None) => {
                if index < vertices.len() {
                    Ok(index)
                } else {
                    Err(GraphError::VertexNotFound {
                        index,
                        len: vertices.len(),
                    })
                }
            }
            (None, Some(data)) => vertices
                .iter()
                .position(|v| v.payload() == data)
                .ok_or(GraphError::VertexDataNotFound),
            (Some(_), Some(_)) => Err(GraphError::Argument {
                reason: "specify either an index or data, not both".into(),
            }),
            (None, None) => Err(GraphError::Argument {
                reason: "specify an index or data".into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::GraphKind;
    use crate::vertex::VertexSpec;

    fn vertices(payloads: &[i32]) -> Vec<Vertex<i32>> {
        payloads
            .iter()
            .map(|&p| Vertex::new(GraphKind::Undirected, VertexSpec::new(p)).unwrap())
            .collect()
    }

    #[test]
    fn resolves_index_in_range() {
        let vs = vertices(&[3, 4]);
        assert_eq!(VertexLookup::index(1).resolve(&vs).unwrap(), 1);
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        let vs = vertices(&[3, 4]);
        assert_eq!(
            VertexLookup::index(2).resolve(&vs).unwrap_err(),
            GraphError::VertexNotFound { index: 2, len: 2 }
        );
    }

    #[test]
    fn data_resolves_to_first_match() {
        let vs = vertices(&[7, 3, 7]);
        assert_eq!(VertexLookup::data(&7).resolve(&vs).unwrap(), 0);
        assert_eq!(
            VertexLookup::data(&9).resolve(&vs).unwrap_err(),
            GraphError::VertexDataNotFound
        );
    }

    #[test]
    fn neither_or_both_selectors_is_an_argument_error() {
        let vs = vertices(&[3]);
        assert!(matches!(
            VertexLookup::<i32>::default().resolve(&vs),
            Err(GraphError::Argument { .. })
        ));
        assert!(matches!(
            VertexLookup::index(0).with_data(&3).resolve(&vs),
            Err(GraphError::Argument { .. })
        ));
        assert!(matches!(
            VertexLookup::data(&3).with_index(0).resolve(&vs),
            Err(GraphError::Argument { .. })
        ));
    }
}
