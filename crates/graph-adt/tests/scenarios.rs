//! End-to-end scenarios across all three graph kinds.

use graph_adt::{Direction, EdgeSpec, Graph, GraphError, GraphKind, VertexLookup, VertexSpec};

const KINDS: [GraphKind; 3] = [
    GraphKind::Undirected,
    GraphKind::Directed,
    GraphKind::Weighted,
];

#[test]
fn two_vertices_connected_on_insertion() {
    for kind in KINDS {
        let mut graph = Graph::new(kind);
        graph.add_vertex(VertexSpec::new(3)).unwrap();
        let spec = if kind.tracks_weights() {
            VertexSpec::new(4)
                .edges([0])
                .directions([Direction::Neutral])
                .weights([0.0])
        } else if kind.tracks_directions() {
            VertexSpec::new(4).edges([0]).directions([Direction::Neutral])
        } else {
            VertexSpec::new(4).edges([0])
        };
        graph.add_vertex(spec).unwrap();

        assert_eq!(graph.all_vertices(), vec!["3", "4"]);
        assert_eq!(graph.vertices()[0].edges(), &[1]);
        assert_eq!(graph.vertices()[1].edges(), &[0]);
    }
}

#[test]
fn removing_one_of_two_connected_vertices_leaves_it_bare() {
    for kind in KINDS {
        let mut graph = Graph::new(kind);
        graph.add_vertex(VertexSpec::new("x")).unwrap();
        graph.add_vertex(VertexSpec::new("y")).unwrap();
        graph.connect(0, 1).unwrap();

        graph.remove_vertex(VertexLookup::index(0)).unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.all_vertices(), vec!["y"]);
        assert!(graph.vertices()[0].edges().is_empty());
    }
}

#[test]
fn weighted_insertion_with_declared_weight() {
    let mut graph = Graph::weighted();
    graph.add_vertex(VertexSpec::new(3)).unwrap();
    graph
        .add_vertex(
            VertexSpec::new(4)
                .edges([0])
                .directions([Direction::try_from(1i8).unwrap()])
                .weights([3.0]),
        )
        .unwrap();

    let v0 = &graph.vertices()[0];
    let v1 = &graph.vertices()[1];
    assert_eq!(v0.weights().unwrap(), &[0.0]);
    assert_eq!(v1.weights().unwrap(), &[3.0]);
    assert_eq!(v0.directions().unwrap(), &[Direction::Incoming]);
    assert_eq!(v1.directions().unwrap(), &[Direction::Outgoing]);
    assert_eq!(v0.directions().unwrap()[0].sign(), -1);
}

#[test]
fn duplicate_payloads_resolve_to_first_match() {
    let mut graph = Graph::undirected();
    graph.add_vertex(VertexSpec::new("dup")).unwrap();
    graph.add_vertex(VertexSpec::new("other")).unwrap();
    graph.add_vertex(VertexSpec::new("dup").edges([1])).unwrap();

    let removed = graph.remove_vertex_by_data(&"dup").unwrap();
    assert!(removed.edges().is_empty());
    assert_eq!(graph.all_vertices(), vec!["other", "dup"]);
    assert_eq!(graph.neighbors(0).unwrap(), &[1]);
    assert_eq!(graph.neighbors(1).unwrap(), &[0]);
}

#[test]
fn stale_index_after_removal_is_rejected() {
    let mut graph = Graph::directed();
    for p in 0..3 {
        graph.add_vertex(VertexSpec::new(p)).unwrap();
    }
    graph.remove_vertex_at(0).unwrap();

    assert_eq!(
        graph.add_edge(0, 2, Direction::Outgoing).unwrap_err(),
        GraphError::VertexNotFound { index: 2, len: 2 }
    );
}

#[test]
fn star_graph_hub_removal() {
    let mut graph = Graph::weighted();
    graph.add_vertex(VertexSpec::new("hub")).unwrap();
    for (i, leaf) in ["a", "b", "c"].into_iter().enumerate() {
        graph
            .add_vertex(
                VertexSpec::new(leaf)
                    .edges([0])
                    .directions([Direction::Incoming])
                    .weights([i as f64 + 1.0]),
            )
            .unwrap();
    }
    graph
        .add_edge(1, 3, EdgeSpec::new().direction(Direction::Outgoing).weights([9.0, 8.0]))
        .unwrap();

    assert_eq!(graph.vertices()[0].edges(), &[1, 2, 3]);
    assert_eq!(
        graph.vertices()[0].directions().unwrap(),
        &[Direction::Outgoing; 3]
    );
    assert_eq!(graph.edge_count(), 4);

    graph.remove_vertex_by_data(&"hub").unwrap();

    assert_eq!(graph.all_vertices(), vec!["a", "b", "c"]);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(0).unwrap(), &[2]);
    assert!(graph.neighbors(1).unwrap().is_empty());
    assert_eq!(graph.neighbors(2).unwrap(), &[0]);
    assert_eq!(graph.vertices()[0].weights().unwrap(), &[9.0]);
    assert_eq!(graph.vertices()[2].weights().unwrap(), &[8.0]);
    assert!(graph.check_invariants().is_ok());
}

#[test]
fn edge_records_survive_renumbering() {
    let mut graph = Graph::directed();
    for p in ["p", "q", "r", "s"] {
        graph.add_vertex(VertexSpec::new(p)).unwrap();
    }
    graph.add_edge(3, 2, Direction::Outgoing).unwrap();
    graph.add_edge(0, 3, Direction::Incoming).unwrap();

    graph.remove_vertex_at(1).unwrap();

    let records = graph.edges();
    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .any(|r| r.front == 1 && r.back == 2 && r.direction == Some(Direction::Incoming)));
    assert!(records
        .iter()
        .any(|r| r.front == 0 && r.back == 2 && r.direction == Some(Direction::Incoming)));
}

#[test]
fn has_cycles_is_never_computed() {
    let mut graph = Graph::undirected();
    for p in 0..3 {
        graph.add_vertex(VertexSpec::new(p)).unwrap();
    }
    graph.connect(0, 1).unwrap();
    graph.connect(1, 2).unwrap();
    graph.connect(2, 0).unwrap();

    assert!(!graph.has_cycles());
}

#[test]
fn undirected_display_snapshot() {
    let mut graph = Graph::undirected();
    graph.add_vertex(VertexSpec::new(10)).unwrap();
    graph.add_vertex(VertexSpec::new(20).edges([0])).unwrap();
    graph.add_vertex(VertexSpec::new(30).edges([0, 1])).unwrap();

    insta::assert_snapshot!(graph.to_string(), @r"
    0: 10 -> 1, 2
    1: 20 -> 0, 2
    2: 30 -> 0, 1
    ");
}

#[test]
fn weighted_display_snapshot_before_and_after_removal() {
    let mut graph = Graph::weighted();
    graph.add_vertex(VertexSpec::new("a")).unwrap();
    graph
        .add_vertex(
            VertexSpec::new("b")
                .edges([0])
                .directions([Direction::Incoming])
                .weights([0.0]),
        )
        .unwrap();
    graph
        .add_vertex(
            VertexSpec::new("c")
                .edges([0])
                .directions([Direction::Neutral])
                .weights([1.5]),
        )
        .unwrap();
    graph
        .add_edge(1, 2, EdgeSpec::new().direction(Direction::Outgoing).weights([2.0, 4.0]))
        .unwrap();

    insta::assert_snapshot!(graph.to_string(), @r"
    0: a -> 1[out w=0], 2[none w=0]
    1: b -> 0[in w=0], 2[out w=2]
    2: c -> 0[none w=1.5], 1[in w=4]
    ");

    graph.remove_vertex_at(0).unwrap();

    insta::assert_snapshot!(graph.to_string(), @r"
    0: b -> 1[out w=2]
    1: c -> 0[in w=4]
    ");
}
