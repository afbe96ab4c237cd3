pub mod bfs;
pub mod dijkstra;
pub mod graph;
pub mod index_min_pq;
pub mod strategy;
pub mod utils;

pub use bfs::{Hop, SearchState, bfs_find_path};
pub use dijkstra::{EdgeWeigher, ShortestPaths, WeightedPath, dijkstra, rank_path};
pub use graph::{Edge, EdgeContext, EdgeContexts, WeightedGraph, collaboration_graph};
pub use index_min_pq::IndexMinPq;
pub use strategy::{
    CollaborationStrength, GenreOverlap, NO_COLLABORATION_PENALTY, PopularityDifference, StrategyKind,
    WeightStrategy,
};
pub use utils::{FrontierSearchResult, PathStep, SearchOutcome, reconstruct_path};
