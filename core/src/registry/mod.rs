//! Per-run entity registry.
//!
//! Holds at most one [`Artist`] per name for the duration of a search, looks
//! names up in the catalog at most once, and fills in each artist's tracks
//! lazily through the shared [`AlbumCache`].

pub mod album_cache;

pub use album_cache::{AlbumCache, AlbumTracks};

use crate::artist::{Artist, Track};
use crate::catalog::{ArtistMetadata, Catalog, CatalogError, TrackCredit};
use crate::search_config::SearchConfig;
use crate::string_normalization::same_name;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

pub struct ArtistRegistry<'a> {
    catalog: &'a dyn Catalog,
    album_cache: &'a AlbumCache,
    config: &'a SearchConfig,
    artists: FxHashMap<String, Artist>,
    aliases: FxHashMap<String, String>,
    lookup_errors: FxHashMap<String, CatalogError>,
    catalog_calls: usize,
    degraded: bool,
}

impl<'a> ArtistRegistry<'a> {
    pub fn new(catalog: &'a dyn Catalog, album_cache: &'a AlbumCache, config: &'a SearchConfig) -> Self {
        Self {
            catalog,
            album_cache,
            config,
            artists: FxHashMap::default(),
            aliases: FxHashMap::default(),
            lookup_errors: FxHashMap::default(),
            catalog_calls: 0,
            degraded: false,
        }
    }

    pub fn config(&self) -> &'a SearchConfig {
        self.config
    }

    pub fn get(&self, name: &str) -> Option<&Artist> {
        self.canonical_name(name)
            .and_then(|canonical| self.artists.get(&canonical))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.canonical_name(name).is_some()
    }

    pub fn artists(&self) -> &FxHashMap<String, Artist> {
        &self.artists
    }

    pub fn into_artists(self) -> FxHashMap<String, Artist> {
        self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Catalog calls made by this run; album cache hits are free.
    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls
    }

    pub fn budget_exhausted(&self) -> bool {
        self.config
            .max_catalog_calls
            .is_some_and(|budget| self.catalog_calls >= budget)
    }

    /// Whether a catalog call failed for a reason other than a missing
    /// record, or the call budget ran out. Results of a degraded run may
    /// differ on a later attempt.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Why the catalog lookup of `name` failed, if it did.
    pub fn lookup_error(&self, name: &str) -> Option<&CatalogError> {
        self.lookup_errors.get(name)
    }

    fn note_failure(&mut self, error: &CatalogError) {
        if !matches!(error, CatalogError::NotFound(_) | CatalogError::Unresolved(_)) {
            self.degraded = true;
        }
    }

    /// Admits a hand-built artist, replacing any record with the same name.
    pub fn insert(&mut self, artist: Artist) -> String {
        let name = artist.name.clone();
        self.aliases.insert(name.clone(), name.clone());
        self.artists.insert(name.clone(), artist);
        name
    }

    fn canonical_name(&self, name: &str) -> Option<String> {
        if self.artists.contains_key(name) {
            return Some(name.to_string());
        }
        self.aliases.get(name).cloned()
    }

    /// Looks `name` up in the catalog once per run. A failed lookup yields an
    /// unresolved placeholder instead of an error; check
    /// [`Artist::is_resolved`] before relying on it.
    pub fn resolve(&mut self, name: &str) -> &Artist {
        let canonical = self.resolve_name(name);
        &self.artists[&canonical]
    }

    pub fn resolve_name(&mut self, name: &str) -> String {
        if let Some(canonical) = self.canonical_name(name) {
            return canonical;
        }

        let artist = match self.lookup(name) {
            Some(metadata) => Artist::from_metadata(metadata),
            None => Artist::placeholder(name),
        };

        let canonical = artist.name.clone();
        self.artists.entry(canonical.clone()).or_insert(artist);
        self.aliases.insert(name.to_string(), canonical.clone());
        canonical
    }

    /// Admits an artist credited on a track. The record is keyed by the
    /// credited name, so track evidence and registry entries always agree.
    pub fn resolve_credit(&mut self, credit: &TrackCredit) -> String {
        if let Some(canonical) = self.canonical_name(&credit.name) {
            return canonical;
        }

        let mut artist = Artist::new(&credit.name, &credit.id, 0.0);
        if self.config.resolve_credits {
            match self.lookup(&credit.name) {
                Some(metadata) if matches_credit(&metadata, credit) => {
                    artist = Artist::from_metadata(metadata);
                    artist.name = credit.name.clone();
                    if !credit.id.is_empty() {
                        artist.id = credit.id.clone();
                    }
                }
                Some(metadata) => debug!(
                    credited = %credit.name,
                    matched = %metadata.name,
                    "catalog best match differs from credit, keeping placeholder"
                ),
                None => {}
            }
        }

        self.artists.insert(credit.name.clone(), artist);
        credit.name.clone()
    }

    fn lookup(&mut self, name: &str) -> Option<ArtistMetadata> {
        let result = if self.budget_exhausted() {
            Err(CatalogError::BudgetExhausted)
        } else {
            self.catalog_calls += 1;
            self.catalog.search_artist(name)
        };

        match result {
            Ok(metadata) => Some(metadata),
            Err(CatalogError::BudgetExhausted) => {
                debug!(artist = name, "call budget reached, lookup skipped");
                self.degraded = true;
                self.lookup_errors.insert(name.to_string(), CatalogError::BudgetExhausted);
                None
            }
            Err(error) => {
                warn!(artist = name, %error, "artist lookup failed");
                self.note_failure(&error);
                self.lookup_errors.insert(name.to_string(), error);
                None
            }
        }
    }

    /// Fetches albums and their tracks for `name` once. Any later call is a
    /// no-op, including after a failure.
    pub fn enrich(&mut self, name: &str) -> Result<(), CatalogError> {
        self.enrich_albums(name, self.config.album_limit, None)
    }

    pub fn enrich_source(&mut self, name: &str) -> Result<(), CatalogError> {
        self.enrich_albums(name, self.config.source_album_limit, None)
    }

    /// Like [`enrich`](Self::enrich), but stops fetching further albums as
    /// soon as a fetched track credits `stop_on`.
    pub fn enrich_until(&mut self, name: &str, stop_on: &str) -> Result<(), CatalogError> {
        self.enrich_albums(name, self.config.album_limit, Some(stop_on))
    }

    fn enrich_albums(
        &mut self,
        name: &str,
        album_limit: usize,
        stop_on: Option<&str>,
    ) -> Result<(), CatalogError> {
        let canonical = self
            .canonical_name(name)
            .ok_or_else(|| CatalogError::NotFound(format!("artist \"{}\" is not registered", name)))?;

        let budget_exhausted = self.budget_exhausted();
        let owner = match self.artists.get_mut(&canonical) {
            Some(artist) if artist.is_enriched() => return Ok(()),
            Some(_) if budget_exhausted => {
                self.degraded = true;
                return Err(CatalogError::BudgetExhausted);
            }
            Some(artist) => {
                artist.mark_enriched();
                Artist::new(&artist.name, &artist.id, artist.popularity)
            }
            None => return Ok(()),
        };
        if !owner.is_resolved() {
            return Err(CatalogError::Unresolved(canonical));
        }

        debug!(artist = %owner.name, "fetching albums and tracks");
        self.catalog_calls += 1;
        let album_ids = match self.catalog.artist_albums(&owner.id, album_limit) {
            Ok(album_ids) => album_ids,
            Err(error) => {
                self.note_failure(&error);
                return Err(error);
            }
        };

        let mut tracks: Vec<Track> = Vec::new();
        for album_id in album_ids.iter().take(album_limit) {
            if self.budget_exhausted() {
                debug!(artist = %owner.name, "call budget reached mid-enrichment");
                self.degraded = true;
                break;
            }

            let catalog = self.catalog;
            let mut fetched = false;
            let album = self.album_cache.get_or_fetch(album_id, |id| {
                fetched = true;
                catalog.album_tracks(id)
            });
            if fetched {
                self.catalog_calls += 1;
            }

            let album_tracks = match album {
                Ok(album_tracks) => album_tracks,
                Err(error) => {
                    warn!(artist = %owner.name, album_id = %album_id, %error, "album tracks unavailable");
                    self.note_failure(&error);
                    continue;
                }
            };

            for album_track in album_tracks.iter() {
                for credit in &album_track.credits {
                    if is_other_artist(&owner, credit) {
                        self.resolve_credit(credit);
                    }
                }
                tracks.push(Track::from_album_track(&owner, album_track));
            }

            if let Some(stop_on) = stop_on {
                if tracks.iter().any(|track| track.credits(stop_on)) {
                    debug!(artist = %owner.name, target = stop_on, "target credited, stopping early");
                    break;
                }
            }
        }

        debug!(artist = %owner.name, tracks = tracks.len(), "enriched");
        if let Some(artist) = self.artists.get_mut(&canonical) {
            artist.tracks.extend(tracks);
        }

        if !self.config.pacing.is_zero() {
            std::thread::sleep(self.config.pacing);
        }
        Ok(())
    }
}

fn matches_credit(metadata: &ArtistMetadata, credit: &TrackCredit) -> bool {
    (!credit.id.is_empty() && metadata.id == credit.id) || same_name(&metadata.name, &credit.name)
}

fn is_other_artist(owner: &Artist, credit: &TrackCredit) -> bool {
    !credit.name.is_empty()
        && credit.name != owner.name
        && (owner.id.is_empty() || credit.id != owner.id)
}
