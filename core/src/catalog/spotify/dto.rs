//! Wire types of the Spotify Web API, reduced to the fields the search needs.

use crate::catalog::{AlbumTrack, ArtistMetadata, TrackCredit, is_compilation};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        !self.items.is_empty() && self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub artists: Page<FullArtist>,
}

#[derive(Debug, Deserialize)]
pub struct FullArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl From<FullArtist> for ArtistMetadata {
    fn from(artist: FullArtist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            popularity: artist.popularity.unwrap_or_default(),
            genres: artist.genres,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SimpleArtist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

impl From<SimpleArtist> for TrackCredit {
    fn from(artist: SimpleArtist) -> Self {
        Self {
            id: artist.id.unwrap_or_default(),
            name: artist.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SimpleAlbum {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimpleArtist>,
}

impl SimpleAlbum {
    pub fn is_compilation(&self) -> bool {
        is_compilation(self.artists.iter().map(|artist| artist.name.as_str()))
    }
}

#[derive(Debug, Deserialize)]
pub struct SimpleTrack {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimpleArtist>,
}

impl From<SimpleTrack> for AlbumTrack {
    fn from(track: SimpleTrack) -> Self {
        Self {
            id: track.id.unwrap_or_default(),
            name: track.name,
            credits: track.artists.into_iter().map(TrackCredit::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
}
