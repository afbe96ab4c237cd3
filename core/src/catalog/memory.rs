use super::{AlbumTrack, ArtistMetadata, Catalog, CatalogError, is_compilation};
use crate::string_normalization::clean_str;
use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serializable catalog contents, the format read by `--catalog-file`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub artists: Vec<ArtistMetadata>,
    pub albums: Vec<SnapshotAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotAlbum {
    pub id: String,
    /// Artists whose album listing includes this album.
    pub artist_ids: Vec<String>,
    /// Album-level credits, used to spot compilations.
    #[serde(default)]
    pub album_artists: Vec<String>,
    pub tracks: Vec<AlbumTrack>,
}

/// Offline catalog backed by hash maps.
///
/// Every call is counted so callers can observe how often the catalog was hit.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    artists: FxHashMap<String, ArtistMetadata>,
    artist_ids: FxHashSet<String>,
    albums_by_artist: FxHashMap<String, Vec<String>>,
    album_tracks: FxHashMap<String, Vec<AlbumTrack>>,
    compilations: FxHashSet<String>,
    failing_artists: FxHashSet<String>,
    failing_albums: FxHashSet<String>,
    searches: AtomicUsize,
    album_listings: AtomicUsize,
    track_fetches: Mutex<FxHashMap<String, usize>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let mut catalog = Self::new();
        for artist in snapshot.artists {
            catalog.add_artist(artist);
        }
        for album in snapshot.albums {
            let artist_ids: Vec<&str> = album.artist_ids.iter().map(String::as_str).collect();
            if is_compilation(album.album_artists.iter().map(String::as_str)) {
                catalog.add_compilation(&album.id, &artist_ids, album.tracks);
            } else {
                catalog.add_album(&album.id, &artist_ids, album.tracks);
            }
        }
        catalog
    }

    pub fn load(path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&contents)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn add_artist(&mut self, metadata: ArtistMetadata) {
        self.artist_ids.insert(metadata.id.clone());
        self.artists.insert(clean_str(&metadata.name), metadata);
    }

    pub fn with_artist(mut self, name: &str, id: &str, popularity: f64) -> Self {
        self.add_artist(ArtistMetadata {
            id: id.to_string(),
            name: name.to_string(),
            popularity,
            genres: Vec::new(),
        });
        self
    }

    pub fn add_album(&mut self, album_id: &str, artist_ids: &[&str], tracks: Vec<AlbumTrack>) {
        for &artist_id in artist_ids {
            self.albums_by_artist
                .entry(artist_id.to_string())
                .or_default()
                .push(album_id.to_string());
        }
        self.album_tracks.insert(album_id.to_string(), tracks);
    }

    pub fn with_album(mut self, album_id: &str, artist_ids: &[&str], tracks: Vec<AlbumTrack>) -> Self {
        self.add_album(album_id, artist_ids, tracks);
        self
    }

    /// Listed under the artists but, like every compilation, never returned
    /// by [`Catalog::artist_albums`].
    pub fn add_compilation(&mut self, album_id: &str, artist_ids: &[&str], tracks: Vec<AlbumTrack>) {
        self.compilations.insert(album_id.to_string());
        self.add_album(album_id, artist_ids, tracks);
    }

    pub fn fail_artist_albums(&mut self, artist_id: &str) {
        self.failing_artists.insert(artist_id.to_string());
    }

    pub fn fail_album(&mut self, album_id: &str) {
        self.failing_albums.insert(album_id.to_string());
    }

    pub fn search_calls(&self) -> usize {
        self.searches.load(Ordering::Relaxed)
    }

    pub fn album_listing_calls(&self) -> usize {
        self.album_listings.load(Ordering::Relaxed)
    }

    pub fn album_track_fetches(&self, album_id: &str) -> usize {
        self.track_fetches.lock().get(album_id).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        let track_calls: usize = self.track_fetches.lock().values().sum();
        self.search_calls() + self.album_listing_calls() + track_calls
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }
}

impl Catalog for InMemoryCatalog {
    fn search_artist(&self, name: &str) -> Result<ArtistMetadata, CatalogError> {
        self.searches.fetch_add(1, Ordering::Relaxed);
        self.artists
            .get(&clean_str(name))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("artist \"{}\"", name)))
    }

    fn artist_albums(&self, artist_id: &str, limit: usize) -> Result<Vec<String>, CatalogError> {
        self.album_listings.fetch_add(1, Ordering::Relaxed);
        if self.failing_artists.contains(artist_id) {
            return Err(CatalogError::Server { status: 503 });
        }

        match self.albums_by_artist.get(artist_id) {
            Some(album_ids) => Ok(album_ids
                .iter()
                .filter(|album_id| !self.compilations.contains(*album_id))
                .take(limit)
                .cloned()
                .collect()),
            None if self.artist_ids.contains(artist_id) => Ok(Vec::new()),
            None => Err(CatalogError::NotFound(format!("artist id {}", artist_id))),
        }
    }

    fn album_tracks(&self, album_id: &str) -> Result<Vec<AlbumTrack>, CatalogError> {
        *self
            .track_fetches
            .lock()
            .entry(album_id.to_string())
            .or_insert(0) += 1;

        if self.failing_albums.contains(album_id) {
            return Err(CatalogError::RateLimited);
        }
        self.album_tracks
            .get(album_id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("album {}", album_id)))
    }
}
