pub mod artist;
pub mod catalog;
pub mod connection;
pub mod pathfinding;
pub mod registry;
pub mod search_config;
pub mod string_normalization;

// Re-export commonly used items
pub use artist::{Artist, Track};
pub use catalog::memory::{CatalogSnapshot, InMemoryCatalog};
pub use catalog::{AlbumTrack, ArtistMetadata, Catalog, CatalogError, TrackCredit};
pub use connection::{ConnectionError, ConnectionReport, find_connection};
pub use pathfinding::{FrontierSearchResult, SearchOutcome, StrategyKind, bfs_find_path, dijkstra, rank_path};
pub use registry::{AlbumCache, ArtistRegistry};
pub use search_config::SearchConfig;

#[cfg(feature = "spotify")]
pub use catalog::spotify::SpotifyCatalog;
