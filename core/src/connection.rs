//! End-to-end search between two artist names: resolve both, enrich the
//! start, run the frontier search and optionally re-rank what was found.

use crate::catalog::{Catalog, CatalogError};
use crate::pathfinding::{FrontierSearchResult, PathStep, WeightedPath, bfs_find_path, rank_path};
use crate::registry::{AlbumCache, ArtistRegistry};
use crate::search_config::SearchConfig;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Start artist \"{0}\" not found")]
    StartNotFound(String),

    #[error("Target artist \"{0}\" not found")]
    TargetNotFound(String),

    #[error("Could not load start artist \"{name}\": {source}")]
    StartUnavailable {
        name: String,
        #[source]
        source: CatalogError,
    },

    #[error("Could not look up target artist \"{name}\": {source}")]
    TargetUnavailable {
        name: String,
        #[source]
        source: CatalogError,
    },
}

#[derive(Debug, Clone)]
pub struct ConnectionReport {
    pub start: String,
    pub target: String,
    pub search: FrontierSearchResult,
    pub steps: Vec<PathStep>,
    pub ranked: Option<WeightedPath>,
    pub artists_discovered: usize,
}

impl ConnectionReport {
    pub fn found(&self) -> bool {
        self.search.found()
    }
}

pub fn find_connection(
    catalog: &dyn Catalog,
    album_cache: &AlbumCache,
    start: &str,
    target: &str,
    config: &SearchConfig,
) -> Result<ConnectionReport, ConnectionError> {
    let mut registry = ArtistRegistry::new(catalog, album_cache, config);

    let start_name = registry.resolve_name(start);
    if !registry.get(&start_name).is_some_and(|artist| artist.is_resolved()) {
        return Err(match registry.lookup_error(start) {
            Some(error) if !matches!(error, CatalogError::NotFound(_)) => ConnectionError::StartUnavailable {
                name: start.to_string(),
                source: error.clone(),
            },
            _ => ConnectionError::StartNotFound(start.to_string()),
        });
    }
    let target_name = registry.resolve_name(target);
    if !registry.get(&target_name).is_some_and(|artist| artist.is_resolved()) {
        return Err(match registry.lookup_error(target) {
            Some(error) if !matches!(error, CatalogError::NotFound(_)) => ConnectionError::TargetUnavailable {
                name: target.to_string(),
                source: error.clone(),
            },
            _ => ConnectionError::TargetNotFound(target.to_string()),
        });
    }

    registry
        .enrich_source(&start_name)
        .map_err(|source| ConnectionError::StartUnavailable {
            name: start_name.clone(),
            source,
        })?;

    info!(start = %start_name, target = %target_name, "searching for connection");
    let search = bfs_find_path(&mut registry, &start_name, &target_name);
    let steps = search.steps();

    let ranked = match config.rank {
        Some(kind) if search.found() => {
            let ranked = rank_path(registry.artists(), &start_name, &target_name, kind);
            if ranked.is_none() {
                debug!(strategy = kind.as_str(), "weighted engine found no route");
            }
            ranked
        }
        _ => None,
    };

    Ok(ConnectionReport {
        start: start_name,
        target: target_name,
        artists_discovered: registry.len(),
        search,
        steps,
        ranked,
    })
}
