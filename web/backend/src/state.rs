use crate::models::PathResponse;
use moka::future::Cache;
use sixdegrees_core::catalog::spotify::SpotifyCatalog;
use sixdegrees_core::{AlbumCache, Catalog, InMemoryCatalog, SearchConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    /// Shared by every request; each request still gets its own registry.
    pub album_cache: Arc<AlbumCache>,
    pub config: SearchConfig,
    pub responses: Cache<String, PathResponse>,
    searches_run: AtomicUsize,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>, config: SearchConfig) -> Self {
        Self::with_album_cache(catalog, config, AlbumCache::new())
    }

    pub fn with_album_cache(catalog: Arc<dyn Catalog>, config: SearchConfig, album_cache: AlbumCache) -> Self {
        let responses = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(Duration::from_secs(60 * 60)) // 1 hour
            .build();

        Self {
            catalog,
            album_cache: Arc::new(album_cache),
            config,
            responses,
            searches_run: AtomicUsize::new(0),
        }
    }

    /// Builds the state from `SIXDEGREES_CATALOG_FILE` (offline snapshot) or
    /// the Spotify credentials in the environment, with `SIXDEGREES_MAX_DEPTH`
    /// as the default hop bound and `SIXDEGREES_ALBUM_CACHE_CAPACITY` bounding
    /// the shared album cache.
    pub async fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let max_depth = std::env::var("SIXDEGREES_MAX_DEPTH")
            .ok()
            .and_then(|value| value.trim().parse::<i64>().ok())
            .and_then(SearchConfig::max_depth_from_hops);
        let config = SearchConfig::default().with_max_depth(max_depth);

        let (catalog, config): (Arc<dyn Catalog>, SearchConfig) =
            match std::env::var("SIXDEGREES_CATALOG_FILE").ok().map(PathBuf::from) {
                Some(path) => {
                    let catalog = InMemoryCatalog::load(&path)?;
                    info!(artists = catalog.artist_count(), path = ?path, "loaded offline catalog");
                    (Arc::new(catalog), config.offline())
                }
                None => {
                    // the blocking client must not be built on an async worker
                    let catalog = tokio::task::spawn_blocking(SpotifyCatalog::from_env).await??;
                    info!("using the Spotify Web API");
                    (Arc::new(catalog), config)
                }
            };

        let album_cache = std::env::var("SIXDEGREES_ALBUM_CACHE_CAPACITY")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map_or_else(AlbumCache::new, AlbumCache::with_capacity);

        Ok(Self::with_album_cache(catalog, config, album_cache))
    }

    pub fn record_search(&self) {
        self.searches_run.fetch_add(1, Ordering::Relaxed);
    }

    pub fn searches_run(&self) -> usize {
        self.searches_run.load(Ordering::Relaxed)
    }
}
