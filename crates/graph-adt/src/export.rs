//! Conversion to `petgraph` for callers that want to run their own
//! analyses over a graph.
//!
//! Vertex `i` becomes `NodeIndex(i)`, and every logical edge becomes one
//! undirected petgraph edge weighted by its [`EdgeRecord`].

use petgraph::graph::{NodeIndex, UnGraph};

use crate::edge::EdgeRecord;
use crate::graph::Graph;

/// The petgraph node a vertex index maps to.
pub fn node_index(vertex: usize) -> NodeIndex<u32> {
    NodeIndex::new(vertex)
}

/// The vertex index a petgraph node maps back to.
pub fn vertex_index(node: NodeIndex<u32>) -> usize {
    node.index()
}

impl<T> Graph<T> {
    /// Builds an undirected petgraph view borrowing the payloads.
    ///
    /// Orientation and weights travel on the edge weight; the view is a
    /// snapshot and does not follow later mutations.
    pub fn to_petgraph(&self) -> UnGraph<&T, EdgeRecord> {
        let mut out = UnGraph::with_capacity(self.len(), self.edge_count());
        for vertex in self.vertices() {
            out.add_node(vertex.payload());
        }
        for record in self.edges() {
            out.add_edge(node_index(record.front), node_index(record.back), record);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Direction;
    use crate::vertex::VertexSpec;
    use crate::EdgeSpec;

    #[test]
    fn index_bridge_roundtrip() {
        assert_eq!(vertex_index(node_index(42)), 42);
    }

    #[test]
    fn empty_graph_exports_empty() {
        let graph: Graph<i32> = Graph::undirected();
        let pg = graph.to_petgraph();
        assert_eq!(pg.node_count(), 0);
        assert_eq!(pg.edge_count(), 0);
    }

    #[test]
    fn nodes_and_edges_match() {
        let mut graph = Graph::weighted();
        graph.add_vertex(VertexSpec::new("a")).unwrap();
        graph.add_vertex(VertexSpec::new("b")).unwrap();
        graph
            .add_vertex(
                VertexSpec::new("c")
                    .edges([0, 1])
                    .directions([Direction::Outgoing, Direction::Neutral])
                    .weights([2.0, 7.0]),
            )
            .unwrap();
        graph
            .add_edge(0, 1, EdgeSpec::new().direction(Direction::Incoming).weights([1.0]))
            .unwrap();

        let pg = graph.to_petgraph();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 3);
        assert_eq!(*pg[node_index(2)], "c");

        let ca = pg.find_edge(node_index(0), node_index(2)).unwrap();
        assert_eq!(
            pg[ca],
            EdgeRecord {
                front: 0,
                back: 2,
                direction: Some(Direction::Incoming),
                weights: Some((0.0, 2.0)),
            }
        );

        let neighbors: Vec<usize> = pg.neighbors(node_index(1)).map(vertex_index).collect();
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&0));
        assert!(neighbors.contains(&2));
    }
}
