use crate::catalog::{AlbumTrack, ArtistMetadata};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One node of the collaboration graph.
///
/// Entities are identified by `name` inside a search run. The catalog `id` may
/// be empty for placeholders that were never resolved, in which case two
/// distinct artists sharing a display name collapse into one record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub popularity: f64,
    pub genres: FxHashMap<String, u32>,
    pub tracks: Vec<Track>,
    #[serde(skip)]
    enriched: bool,
}

impl Artist {
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn new(name: &str, id: &str, popularity: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            popularity,
            ..Default::default()
        }
    }

    pub fn from_metadata(metadata: ArtistMetadata) -> Self {
        let mut artist = Self::new(&metadata.name, &metadata.id, metadata.popularity);
        for genre in metadata.genres {
            *artist.genres.entry(genre).or_insert(0) += 1;
        }
        artist
    }

    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        self.tracks = tracks;
        self
    }

    pub fn is_resolved(&self) -> bool {
        !self.id.is_empty()
    }

    /// An artist is enriched once its albums were fetched, or as soon as it
    /// holds any track. Either way it is never fetched again.
    pub fn is_enriched(&self) -> bool {
        self.enriched || !self.tracks.is_empty()
    }

    pub(crate) fn mark_enriched(&mut self) {
        self.enriched = true;
    }

    /// First track (in enrichment order) that credits `name`.
    pub fn track_crediting(&self, name: &str) -> Option<&Track> {
        self.tracks.iter().find(|track| track.credits(name))
    }

    pub fn collaborators(&self) -> impl Iterator<Item = &str> {
        self.tracks
            .iter()
            .flat_map(|track| track.featured.iter().map(String::as_str))
    }
}

/// Evidence that `primary` recorded a track together with every `featured` artist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub primary: String,
    pub featured: Vec<String>,
}

impl Track {
    pub fn new(id: &str, name: &str, primary: &str, featured: Vec<String>) -> Self {
        let mut track = Self {
            id: id.to_string(),
            name: name.to_string(),
            primary: primary.to_string(),
            featured: Vec::with_capacity(featured.len()),
        };
        for artist_name in featured {
            track.feature(artist_name);
        }
        track
    }

    /// Builds the track owned by `primary` from an album listing. Credits for
    /// the primary itself (by name or catalog id) are dropped.
    pub fn from_album_track(primary: &Artist, album_track: &AlbumTrack) -> Self {
        let featured = album_track
            .credits
            .iter()
            .filter(|credit| primary.id.is_empty() || credit.id != primary.id)
            .map(|credit| credit.name.clone())
            .collect();
        Self::new(&album_track.id, &album_track.name, &primary.name, featured)
    }

    pub(crate) fn feature(&mut self, artist_name: String) {
        if artist_name.is_empty()
            || artist_name == self.primary
            || self.featured.contains(&artist_name)
        {
            return;
        }
        self.featured.push(artist_name);
    }

    pub fn credits(&self, name: &str) -> bool {
        self.primary == name || self.featured.iter().any(|featured| featured == name)
    }

    pub fn is_solo(&self) -> bool {
        self.featured.is_empty()
    }
}
