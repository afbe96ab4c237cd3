use rustc_hash::FxHashMap;
use sixdegrees_core::pathfinding::{
    CollaborationStrength, Edge, EdgeWeigher, StrategyKind, WeightedGraph, collaboration_graph,
};
use sixdegrees_core::{Artist, Track, dijkstra, rank_path};

fn graph_of(edges: &[(&str, &str, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    for (from, to, weight) in edges {
        graph.add_edge(Edge::new(from, to, *weight));
    }
    graph
}

#[test]
fn test_two_hop_distance_is_sum_of_weights() {
    let graph = graph_of(&[("A", "B", 1.5), ("B", "C", 2.25)]);
    let paths = dijkstra(&graph, "A", None);

    assert_eq!(paths.distance_to("C"), Some(3.75));
    let edge = paths.edge_to("C").unwrap();
    assert_eq!(edge.from, "B");
    assert_eq!(edge.to, "C");
}

#[test]
fn test_decrease_key_finds_cheaper_detour() {
    let graph = graph_of(&[("A", "B", 5.0), ("A", "C", 1.0), ("C", "B", 1.0), ("B", "D", 1.0)]);
    let paths = dijkstra(&graph, "A", None);

    assert_eq!(paths.distance_to("B"), Some(2.0));
    assert_eq!(paths.edge_to("B").unwrap().from, "C");
    assert_eq!(paths.distance_to("D"), Some(3.0));

    let route: Vec<String> = paths
        .path_to("D")
        .unwrap()
        .into_iter()
        .map(|edge| edge.to)
        .collect();
    assert_eq!(route, vec!["C", "B", "D"]);
}

#[test]
fn test_edge_with_unknown_endpoint_is_ignored() {
    let mut keys = FxHashMap::default();
    keys.insert("A".to_string(), 0);
    keys.insert("B".to_string(), 1);
    let adjacency = vec![
        vec![Edge::new("A", "Ghost", 0.5), Edge::new("A", "B", 2.0), Edge::new("", "B", 0.1)],
        vec![Edge::new("Ghost", "A", 0.0)],
    ];
    let graph = WeightedGraph::from_adjacency(keys, adjacency);

    let paths = dijkstra(&graph, "A", None);
    assert_eq!(paths.distance_to("B"), Some(2.0));
    assert_eq!(paths.distance_to("Ghost"), None);
    assert_eq!(paths.distance_to("A"), Some(0.0));
}

#[test]
fn test_empty_endpoint_is_not_added() {
    let graph = graph_of(&[("A", "", 1.0), ("", "A", 1.0)]);
    assert_eq!(graph.edge_count(), 0);
    let paths = dijkstra(&graph, "A", None);
    assert_eq!(paths.distance_to("A"), None);
}

#[test]
fn test_self_loop_keeps_source_at_zero() {
    let graph = graph_of(&[("A", "A", 7.0), ("A", "B", 1.0), ("B", "B", -3.0)]);
    let paths = dijkstra(&graph, "A", None);

    assert_eq!(paths.distance_to("A"), Some(0.0));
    assert_eq!(paths.distance_to("B"), Some(1.0));
    assert!(paths.edge_to("A").is_none());
}

#[test]
fn test_non_finite_weights_are_skipped() {
    let graph = graph_of(&[("A", "B", f64::NAN), ("A", "C", f64::INFINITY), ("A", "D", 1.0)]);
    let paths = dijkstra(&graph, "A", None);

    assert!(!paths.has_path_to("B"));
    assert!(!paths.has_path_to("C"));
    assert!(paths.has_path_to("D"));
    assert_eq!(paths.distance_to("B"), Some(f64::INFINITY));
    assert_eq!(paths.path_to("B"), None);
}

#[test]
fn test_negative_cycle_is_dropped() {
    let graph = graph_of(&[("A", "B", -1.0), ("B", "A", -1.0), ("A", "C", 2.0), ("C", "B", 0.5)]);
    let paths = dijkstra(&graph, "A", None);

    assert_eq!(paths.distance_to("A"), Some(0.0));
    assert_eq!(paths.distance_to("B"), Some(2.5));
    assert_eq!(paths.edge_to("B").unwrap().from, "C");
}

#[test]
fn test_unknown_source_reaches_nothing() {
    let graph = graph_of(&[("A", "B", 1.0)]);
    let paths = dijkstra(&graph, "Z", None);
    assert!(!paths.has_path_to("A"));
    assert!(!paths.has_path_to("B"));
}

#[test]
fn test_path_to_source_is_empty() {
    let graph = graph_of(&[("A", "B", 1.0)]);
    let paths = dijkstra(&graph, "A", None);
    assert_eq!(paths.path_to("A"), Some(vec![]));
}

fn artist(name: &str, popularity: f64, tracks: Vec<Track>) -> (String, Artist) {
    (name.to_string(), Artist::new(name, name, popularity).with_tracks(tracks))
}

fn song(primary: &str, featured: &str, name: &str) -> Track {
    Track::new(name, name, primary, vec![featured.to_string()])
}

/// A reaches T through B (popularity 20) or C (popularity 85); the target
/// has popularity 90.
fn popularity_fork() -> FxHashMap<String, Artist> {
    [
        artist(
            "A",
            50.0,
            vec![song("A", "B", "ab"), song("A", "C", "ac")],
        ),
        artist("B", 20.0, vec![song("B", "T", "bt"), song("B", "T", "bt2")]),
        artist("C", 85.0, vec![song("C", "T", "ct")]),
        artist("T", 90.0, vec![]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_weigher_uses_popularity_by_default() {
    let artists = popularity_fork();
    let (graph, _) = collaboration_graph(&artists);
    let weigher = EdgeWeigher::new(&artists["T"], &artists);

    let paths = dijkstra(&graph, "A", Some(&weigher));
    assert_eq!(paths.distance_to("T"), Some(5.0));
    assert_eq!(paths.edge_to("T").unwrap().from, "C");
    assert_eq!(paths.edge_to("C").unwrap().weight, 5.0);
}

#[test]
fn test_weigher_with_collaboration_strength() {
    let artists = popularity_fork();
    let (graph, contexts) = collaboration_graph(&artists);
    let weigher = EdgeWeigher::new(&artists["T"], &artists)
        .with_strategy(&CollaborationStrength)
        .with_contexts(&contexts);

    let paths = dijkstra(&graph, "A", Some(&weigher));
    assert_eq!(paths.distance_to("T"), Some(1.5));
    assert_eq!(paths.edge_to("T").unwrap().from, "B");
}

#[test]
fn test_rank_path_reports_route_and_total() {
    let artists = popularity_fork();

    let ranked = rank_path(&artists, "A", "T", StrategyKind::Popularity).unwrap();
    assert_eq!(ranked.artists(), vec!["A", "C", "T"]);
    assert_eq!(ranked.total, 5.0);
    assert_eq!(ranked.strategy, StrategyKind::Popularity);

    let ranked = rank_path(&artists, "A", "T", StrategyKind::Collaboration).unwrap();
    assert_eq!(ranked.artists(), vec!["A", "B", "T"]);

    assert!(rank_path(&artists, "T", "A", StrategyKind::Popularity).is_none());
    assert!(rank_path(&artists, "A", "Missing", StrategyKind::Popularity).is_none());
}
