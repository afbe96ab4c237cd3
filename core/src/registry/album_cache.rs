use crate::catalog::{AlbumTrack, CatalogError};
use moka::sync::Cache;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

pub type AlbumTracks = Arc<[AlbumTrack]>;

/// Albums kept by [`AlbumCache::new`]; least useful entries are evicted past it.
pub const DEFAULT_ALBUM_CAPACITY: u64 = 50_000;

/// Memoized album track listings.
///
/// One cache may back many search runs (wrap it in an `Arc`). Nothing is
/// locked while the catalog is called, so two runs racing on the same album
/// can both fetch it; the catalog is idempotent and the second insert wins.
/// Failed fetches are not remembered.
#[derive(Debug)]
pub struct AlbumCache {
    albums: Cache<String, AlbumTracks>,
    fetches: AtomicUsize,
}

impl AlbumCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ALBUM_CAPACITY)
    }

    pub fn with_capacity(max_albums: u64) -> Self {
        Self {
            albums: Cache::builder().max_capacity(max_albums).build(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn get(&self, album_id: &str) -> Option<AlbumTracks> {
        self.albums.get(album_id)
    }

    pub fn get_or_fetch<F>(&self, album_id: &str, fetch: F) -> Result<AlbumTracks, CatalogError>
    where
        F: FnOnce(&str) -> Result<Vec<AlbumTrack>, CatalogError>,
    {
        if let Some(tracks) = self.get(album_id) {
            debug!(album_id, "album tracks served from cache");
            return Ok(tracks);
        }

        let tracks: AlbumTracks = fetch(album_id)?.into();
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.albums.insert(album_id.to_string(), Arc::clone(&tracks));
        Ok(tracks)
    }

    pub fn contains(&self, album_id: &str) -> bool {
        self.albums.contains_key(album_id)
    }

    /// Albums currently held, after pending evictions are applied.
    pub fn len(&self) -> usize {
        self.albums.run_pending_tasks();
        self.albums.entry_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful catalog fetches performed through this cache.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.albums.invalidate_all();
    }
}

impl Default for AlbumCache {
    fn default() -> Self {
        Self::new()
    }
}
