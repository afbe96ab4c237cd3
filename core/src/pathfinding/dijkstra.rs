use super::graph::{Edge, EdgeContexts, WeightedGraph, collaboration_graph};
use super::index_min_pq::IndexMinPq;
use super::strategy::{PopularityDifference, StrategyKind, WeightStrategy};
use crate::artist::Artist;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Recomputes edge weights from artist data instead of the weights stored
/// in the graph.
pub struct EdgeWeigher<'a> {
    strategy: &'a dyn WeightStrategy,
    target: &'a Artist,
    artists: &'a FxHashMap<String, Artist>,
    contexts: Option<&'a EdgeContexts>,
}

impl<'a> EdgeWeigher<'a> {
    /// Weighs by popularity difference against `target`.
    pub fn new(target: &'a Artist, artists: &'a FxHashMap<String, Artist>) -> Self {
        Self {
            strategy: &PopularityDifference,
            target,
            artists,
            contexts: None,
        }
    }

    pub fn with_strategy(mut self, strategy: &'a dyn WeightStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_contexts(mut self, contexts: &'a EdgeContexts) -> Self {
        self.contexts = Some(contexts);
        self
    }

    /// NaN when either endpoint is unknown, which drops the edge.
    pub fn weigh(&self, edge: &Edge) -> f64 {
        let (Some(from), Some(to)) = (self.artists.get(&edge.from), self.artists.get(&edge.to)) else {
            return f64::NAN;
        };
        let context = self
            .contexts
            .and_then(|contexts| contexts.get(&(edge.from.clone(), edge.to.clone())))
            .copied()
            .unwrap_or_default();
        self.strategy.weight(self.target, from, to, &context)
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

/// Single-source shortest distances and the edge used to reach each vertex.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    keys: FxHashMap<String, usize>,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<Edge>>,
}

impl ShortestPaths {
    /// `None` for names that are not vertices of the graph; infinity for
    /// vertices the source cannot reach.
    pub fn distance_to(&self, name: &str) -> Option<f64> {
        self.keys.get(name).map(|&index| self.dist_to[index])
    }

    pub fn has_path_to(&self, name: &str) -> bool {
        self.distance_to(name).is_some_and(f64::is_finite)
    }

    pub fn edge_to(&self, name: &str) -> Option<&Edge> {
        self.keys
            .get(name)
            .and_then(|&index| self.edge_to[index].as_ref())
    }

    /// Edges from the source to `name` in travel order. Empty for the source
    /// itself, `None` when unreachable.
    pub fn path_to(&self, name: &str) -> Option<Vec<Edge>> {
        if !self.has_path_to(name) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = name;
        for _ in 0..self.dist_to.len() {
            let Some(edge) = self.edge_to(current) else {
                path.reverse();
                return Some(path);
            };
            path.push(edge.clone());
            current = &edge.from;
        }
        None
    }
}

/// Dijkstra over `graph` from `source` with an indexed min priority queue.
///
/// Edges are weighed by `weigher` when given, by their stored weight
/// otherwise. Self-loops, edges naming an unknown artist and edges whose
/// weight is negative or not finite are skipped, so every run terminates.
pub fn dijkstra(graph: &WeightedGraph, source: &str, weigher: Option<&EdgeWeigher<'_>>) -> ShortestPaths {
    let vertex_count = graph.vertex_count();
    let mut dist_to = vec![f64::INFINITY; vertex_count];
    let mut edge_to: Vec<Option<Edge>> = vec![None; vertex_count];
    let mut pq = IndexMinPq::new(vertex_count);

    if let Some(s) = graph.vertex(source) {
        dist_to[s] = 0.0;
        pq.insert(s, 0.0);
    }

    while let Some(v) = pq.del_min() {
        for edge in graph.edges(v) {
            let (Some(from), Some(w)) = (graph.vertex(&edge.from), graph.vertex(&edge.to)) else {
                continue;
            };
            if from != v || from == w {
                continue;
            }

            let weight = weigher.map_or(edge.weight, |weigher| weigher.weigh(edge));
            if !weight.is_finite() || weight < 0.0 {
                debug!(from = %edge.from, to = %edge.to, weight, "skipping edge with unusable weight");
                continue;
            }

            let candidate = dist_to[v] + weight;
            if candidate < dist_to[w] {
                dist_to[w] = candidate;
                edge_to[w] = Some(Edge::new(&edge.from, &edge.to, weight));
                if pq.contains(w) {
                    pq.decrease_key(w, candidate);
                } else {
                    pq.insert(w, candidate);
                }
            }
        }
    }

    ShortestPaths {
        keys: graph.keys().clone(),
        dist_to,
        edge_to,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedPath {
    pub steps: Vec<Edge>,
    pub total: f64,
    pub strategy: StrategyKind,
}

impl WeightedPath {
    pub fn artists(&self) -> Vec<String> {
        let mut names: Vec<String> = self.steps.iter().map(|edge| edge.from.clone()).collect();
        if let Some(last) = self.steps.last() {
            names.push(last.to.clone());
        }
        names
    }
}

/// Cheapest route from `start` to `target` through the collaborations known
/// in `artists`, weighed with `kind` against the target artist.
pub fn rank_path(
    artists: &FxHashMap<String, Artist>,
    start: &str,
    target: &str,
    kind: StrategyKind,
) -> Option<WeightedPath> {
    let target_artist = artists.get(target)?;
    let (graph, contexts) = collaboration_graph(artists);
    let strategy = kind.strategy();
    let weigher = EdgeWeigher::new(target_artist, artists)
        .with_strategy(strategy.as_ref())
        .with_contexts(&contexts);

    let paths = dijkstra(&graph, start, Some(&weigher));
    let steps = paths.path_to(target)?;
    let total = paths.distance_to(target)?;
    debug!(start, target, strategy = weigher.strategy_name(), total, "ranked path");

    Some(WeightedPath {
        steps,
        total,
        strategy: kind,
    })
}

