//! Catalog service boundary.
//!
//! The search only ever talks to a [`Catalog`]; the real Spotify client
//! (feature `spotify`) and the offline [`memory::InMemoryCatalog`] both
//! implement it.

pub mod memory;
#[cfg(feature = "spotify")]
pub mod spotify;

use serde::{Deserialize, Serialize};

pub const VARIOUS_ARTISTS: &str = "Various Artists";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistMetadata {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackCredit {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl TrackCredit {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumTrack {
    pub id: String,
    pub name: String,
    pub credits: Vec<TrackCredit>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Server error: HTTP {status}")]
    Server { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Authorization failed: {0}")]
    Auth(String),

    #[error("Artist \"{0}\" has no catalog id")]
    Unresolved(String),

    #[error("Catalog call budget exhausted")]
    BudgetExhausted,
}

impl CatalogError {
    /// Whether repeating the same request later could succeed. Retrying is the
    /// client's business; the search treats every error as a dead end.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited | Self::Network(_) => true,
            Self::Server { status } => *status >= 500,
            _ => false,
        }
    }
}

pub trait Catalog: Send + Sync {
    /// Best match for `name`.
    fn search_artist(&self, name: &str) -> Result<ArtistMetadata, CatalogError>;

    /// Up to `limit` album ids for the artist, compilations excluded.
    fn artist_albums(&self, artist_id: &str, limit: usize) -> Result<Vec<String>, CatalogError>;

    fn album_tracks(&self, album_id: &str) -> Result<Vec<AlbumTrack>, CatalogError>;
}

/// Albums credited to "Various Artists" never contribute collaboration edges.
pub fn is_compilation<'a>(album_artists: impl IntoIterator<Item = &'a str>) -> bool {
    album_artists
        .into_iter()
        .any(|name| name == VARIOUS_ARTISTS)
}
