/// End-to-end runs of every algorithm on small hand-checked graphs.
use greedy_graph::{
    dijkstra, kruskal, prim, Coverage, Distance, Edge, KruskalStep, KruskalSteps, Reachability,
    WeightedGraph,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn matrix<const N: usize>(rows: [[u32; N]; N]) -> WeightedGraph {
    WeightedGraph::from_zero_absent_matrix(&rows).unwrap()
}

fn finite(values: &[u64]) -> Vec<Distance> {
    values.iter().copied().map(Distance::Finite).collect()
}

#[test]
fn square_mst_weight_agrees() {
    init_logging();
    let g = matrix([[0, 2, 0, 6], [2, 0, 3, 8], [0, 3, 0, 5], [6, 8, 5, 0]]);

    let k = kruskal(&g);
    let p = prim(&g);
    assert_eq!(k.total_weight(), 10);
    assert_eq!(p.total_weight(), 10);
    assert_eq!(
        k.edges(),
        &[Edge::new(0, 1, 2), Edge::new(1, 2, 3), Edge::new(2, 3, 5)]
    );
    assert!(k.is_complete() && p.is_complete());
}

#[test]
fn square_rejects_cycle_edge_when_examined() {
    init_logging();
    // Without the completion cutoff (0,3,6) would be the next edge examined.
    let g = WeightedGraph::from_edges(
        4,
        [
            Edge::new(0, 1, 2),
            Edge::new(0, 3, 6),
            Edge::new(1, 2, 3),
            Edge::new(1, 3, 8),
            Edge::new(2, 3, 5),
            Edge::new(0, 2, 4),
        ],
    )
    .unwrap();
    let steps: Vec<KruskalStep> = KruskalSteps::new(&g).collect();
    assert_eq!(steps[2], KruskalStep::Rejected(Edge::new(0, 2, 4)));
    assert_eq!(kruskal(&g).total_weight(), 10);
}

#[test]
fn triangle_shortest_path() {
    init_logging();
    let g = WeightedGraph::from_edges(
        3,
        [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 4)],
    )
    .unwrap();
    let sp = dijkstra(&g, 0).unwrap();
    assert_eq!(sp.distances(), finite(&[0, 1, 3]).as_slice());
    let path = sp.path_to(2).unwrap().unwrap();
    assert_eq!(path.vertices(), &[0, 1, 2]);
    assert_eq!(path.distance(), 3);

    // Same graph through the matrix constructor gives the same MST.
    let m = matrix([[0, 1, 4], [1, 0, 2], [4, 2, 0]]);
    assert_eq!(kruskal(&m).total_weight(), 3);
    assert_eq!(prim(&m).total_weight(), 3);
}

#[test]
fn disconnected_graph_yields_two_edges() {
    init_logging();
    let g = WeightedGraph::from_edges(4, [Edge::new(0, 1, 1), Edge::new(2, 3, 2)]).unwrap();

    for forest in [kruskal(&g), prim(&g)] {
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.coverage(), Coverage::Partial { missing_edges: 1 });
    }

    let sp = dijkstra(&g, 0).unwrap();
    assert_eq!(sp.reachability(3).unwrap(), Reachability::Unreachable);
    assert_eq!(sp.path_to(3).unwrap(), None);
}

#[test]
fn five_vertex_network_distances() {
    init_logging();
    let g = matrix([
        [0, 10, 0, 30, 100],
        [10, 0, 50, 0, 0],
        [0, 50, 0, 20, 10],
        [30, 0, 20, 0, 60],
        [100, 0, 10, 60, 0],
    ]);
    let sp = dijkstra(&g, 0).unwrap();
    assert_eq!(sp.distances(), finite(&[0, 10, 50, 30, 60]).as_slice());
    assert_eq!(sp.predecessors(), &[None, Some(0), Some(3), Some(0), Some(2)]);
    assert_eq!(sp.path_to(4).unwrap().unwrap().vertices(), &[0, 3, 2, 4]);
}

#[test]
fn sparse_chain_distances_and_tree() {
    init_logging();
    let g = matrix([
        [0, 4, 0, 0, 0],
        [4, 0, 8, 0, 0],
        [0, 8, 0, 7, 9],
        [0, 0, 7, 0, 14],
        [0, 0, 9, 14, 0],
    ]);
    let sp = dijkstra(&g, 0).unwrap();
    assert_eq!(sp.distances(), finite(&[0, 4, 12, 19, 21]).as_slice());
    assert_eq!(sp.path_to(4).unwrap().unwrap().vertices(), &[0, 1, 2, 4]);

    let k = kruskal(&g);
    assert_eq!(k.total_weight(), 28);
    assert!(!k.edges().contains(&Edge::new(3, 4, 14)));
}

#[test]
fn five_vertex_mst_by_both_builders() {
    init_logging();
    let g = matrix([
        [0, 4, 2, 0, 0],
        [4, 0, 8, 0, 10],
        [2, 8, 0, 7, 9],
        [0, 0, 7, 0, 14],
        [0, 10, 9, 14, 0],
    ]);
    let p = prim(&g);
    assert_eq!(
        p.edges(),
        &[
            Edge::new(0, 2, 2),
            Edge::new(0, 1, 4),
            Edge::new(2, 3, 7),
            Edge::new(2, 4, 9),
        ]
    );
    assert_eq!(p.total_weight(), 22);
    assert_eq!(kruskal(&g).total_weight(), 22);
}

#[test]
fn star_graph_uses_every_edge() {
    init_logging();
    let g = matrix([
        [0, 1, 2, 3, 4],
        [1, 0, 0, 0, 0],
        [2, 0, 0, 0, 0],
        [3, 0, 0, 0, 0],
        [4, 0, 0, 0, 0],
    ]);
    let p = prim(&g);
    assert_eq!(p.len(), 4);
    assert_eq!(p.total_weight(), 10);
    assert_eq!(kruskal(&g).edges(), g.edges());
}

#[test]
fn complete_graph_on_four_vertices() {
    init_logging();
    let g = matrix([[0, 1, 3, 4], [1, 0, 2, 5], [3, 2, 0, 6], [4, 5, 6, 0]]);
    let expected = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 3, 4)];
    assert_eq!(prim(&g).edges(), &expected);
    assert_eq!(kruskal(&g).edges(), &expected);
}

#[test]
fn single_vertex_graph() {
    init_logging();
    let g = matrix([[0]]);
    assert!(prim(&g).is_empty());
    assert!(kruskal(&g).is_complete());
    let sp = dijkstra(&g, 0).unwrap();
    assert_eq!(sp.distances(), &[Distance::Finite(0)]);
    assert_eq!(sp.path_to(0).unwrap().unwrap().vertices(), &[0]);
}

#[test]
fn zero_weight_edges_survive_the_option_matrix() {
    init_logging();
    let rows: [[Option<u32>; 3]; 3] = [
        [None, Some(0), Some(5)],
        [Some(0), None, Some(1)],
        [Some(5), Some(1), None],
    ];
    let g = WeightedGraph::from_adjacency_matrix(&rows).unwrap();
    assert_eq!(g.edge_count(), 3);
    assert_eq!(kruskal(&g).total_weight(), 1);
    assert_eq!(dijkstra(&g, 0).unwrap().distance(2).unwrap(), Distance::Finite(1));
}

#[cfg(feature = "serde")]
#[test]
fn graph_from_toml() {
    use greedy_graph::{dijkstra_with, prim_with, GraphConfig};

    init_logging();
    let config = GraphConfig::from_toml_str(
        r#"
        vertex_count = 4
        edges = [[0, 1, 2], [0, 3, 6], [1, 2, 3], [1, 3, 8], [2, 3, 5]]

        [prim]
        start = 3
        "#,
    )
    .unwrap();
    let g = config.build().unwrap();
    let algorithms = config.algorithms();
    assert_eq!(prim_with(&g, &algorithms.prim).unwrap().total_weight(), 10);
    let sp = dijkstra_with(&g, 0, &algorithms.dijkstra).unwrap();
    assert_eq!(sp.distance(3).unwrap(), Distance::Finite(6));
}

#[cfg(feature = "serde")]
#[test]
fn toml_config_and_serialized_results() {
    use greedy_graph::{ConfigError, GraphConfig, GraphError, InvalidGraph};

    init_logging();
    let config: GraphConfig =
        toml::from_str("vertex_count = 3\nedges = [[0, 1, 1], [1, 2, 2], [0, 2, 4]]\n").unwrap();
    let g = config.build().unwrap();
    let text = toml::to_string(&kruskal(&g)).unwrap();
    assert!(text.contains("total_weight = 3"));

    let huge = GraphConfig::from_toml_str("vertex_count = 9223372036854775807\n").unwrap();
    assert!(matches!(
        huge.build(),
        Err(ConfigError::Graph(GraphError::InvalidGraph(
            InvalidGraph::TooManyVertices { .. }
        )))
    ));
}
