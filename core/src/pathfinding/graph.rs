use crate::artist::Artist;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Directed, weighted collaboration edge between two artist names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: &str, to: &str, weight: f64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Side information about one `(from, to)` pair consumed by weight strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeContext {
    /// Tracks on which both artists are credited.
    pub shared_count: u32,
}

pub type EdgeContexts = FxHashMap<(String, String), EdgeContext>;

/// Explicit adjacency structure: artist name to vertex index, plus the
/// outgoing edges of every vertex.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    keys: FxHashMap<String, usize>,
    names: Vec<String>,
    adj: Vec<Vec<Edge>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a graph built elsewhere. Edges whose endpoints are missing from
    /// `keys` are kept and ignored when the engine relaxes them, as are
    /// adjacency rows past the highest vertex index.
    pub fn from_adjacency(keys: FxHashMap<String, usize>, adjacency: Vec<Vec<Edge>>) -> Self {
        let vertex_count = keys
            .values()
            .map(|&index| index + 1)
            .max()
            .unwrap_or(0)
            .max(adjacency.len());

        let mut names = vec![String::new(); vertex_count];
        for (name, &index) in &keys {
            names[index] = name.clone();
        }
        let mut adj = adjacency;
        adj.resize_with(vertex_count, Vec::new);

        Self { keys, names, adj }
    }

    /// Registers `name` as a vertex and returns its index.
    pub fn add_vertex(&mut self, name: &str) -> usize {
        if let Some(&index) = self.keys.get(name) {
            return index;
        }
        let index = self.names.len();
        self.keys.insert(name.to_string(), index);
        self.names.push(name.to_string());
        self.adj.push(Vec::new());
        index
    }

    /// Adds `edge`, registering both endpoints. Edges with an empty endpoint
    /// name are dropped.
    pub fn add_edge(&mut self, edge: Edge) {
        if edge.from.is_empty() || edge.to.is_empty() {
            return;
        }
        let from = self.add_vertex(&edge.from);
        self.add_vertex(&edge.to);
        self.adj[from].push(edge);
    }

    pub fn vertex(&self, name: &str) -> Option<usize> {
        self.keys.get(name).copied()
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names
            .get(index)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    pub fn edges(&self, index: usize) -> &[Edge] {
        self.adj.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keys(&self) -> &FxHashMap<String, usize> {
        &self.keys
    }
}

/// Replays the tracks of every enriched artist as unit-weight edges
/// `primary → featured`, counting how many tracks each pair shares.
pub fn collaboration_graph(artists: &FxHashMap<String, Artist>) -> (WeightedGraph, EdgeContexts) {
    let mut contexts: EdgeContexts = FxHashMap::default();

    let mut names: Vec<&String> = artists.keys().collect();
    names.sort();

    let mut ordered_pairs: Vec<(String, String)> = Vec::new();
    for name in names {
        for track in &artists[name].tracks {
            for featured in &track.featured {
                let key = (track.primary.clone(), featured.clone());
                let context = contexts.entry(key.clone()).or_insert_with(|| {
                    ordered_pairs.push(key);
                    EdgeContext::default()
                });
                context.shared_count += 1;
            }
        }
    }

    let mut graph = WeightedGraph::new();
    for (from, to) in ordered_pairs {
        graph.add_edge(Edge::new(&from, &to, 1.0));
    }
    (graph, contexts)
}
