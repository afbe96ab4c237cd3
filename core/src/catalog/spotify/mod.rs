//! Spotify Web API catalog.

pub mod auth;
pub mod client;
pub mod dto;

pub use auth::{Credentials, TokenProvider};

use super::{AlbumTrack, ArtistMetadata, Catalog, CatalogError};
use crate::string_normalization::same_name;
use client::HttpClient;
use dto::{Page, SearchResponse, SimpleAlbum, SimpleTrack};
use tracing::debug;

const API_BASE: &str = "https://api.spotify.com/v1";
const PAGE_SIZE: usize = 50;

pub struct SpotifyCatalog {
    client: HttpClient,
    api_base: String,
}

impl SpotifyCatalog {
    pub fn new(credentials: Credentials) -> Result<Self, CatalogError> {
        Ok(Self {
            client: HttpClient::new(TokenProvider::new(credentials))?,
            api_base: API_BASE.to_string(),
        })
    }

    pub fn from_env() -> Result<Self, CatalogError> {
        Self::new(Credentials::from_env()?)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

impl Catalog for SpotifyCatalog {
    fn search_artist(&self, name: &str) -> Result<ArtistMetadata, CatalogError> {
        let url = format!("{}/search", self.api_base);
        let response: SearchResponse = self.client.get_json(
            &url,
            &[("q", name.to_string()), ("type", "artist".to_string())],
        )?;

        let mut candidates = response.artists.items;
        let best = candidates
            .iter()
            .position(|artist| same_name(&artist.name, name))
            .unwrap_or(0);
        if candidates.is_empty() {
            return Err(CatalogError::NotFound(format!("artist \"{}\"", name)));
        }
        Ok(candidates.swap_remove(best).into())
    }

    fn artist_albums(&self, artist_id: &str, limit: usize) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/artists/{}/albums", self.api_base, artist_id);
        let mut album_ids = Vec::new();
        let mut offset = 0;

        while album_ids.len() < limit {
            let page: Page<SimpleAlbum> = self.client.get_json(
                &url,
                &[
                    ("include_groups", "album,single".to_string()),
                    ("market", "US".to_string()),
                    ("limit", PAGE_SIZE.to_string()),
                    ("offset", offset.to_string()),
                ],
            )?;
            let has_next = page.has_next();
            offset += page.items.len();

            for album in page.items {
                if album.is_compilation() {
                    debug!(album = %album.name, "skipping compilation");
                    continue;
                }
                album_ids.push(album.id);
            }
            if !has_next {
                break;
            }
        }

        album_ids.truncate(limit);
        Ok(album_ids)
    }

    fn album_tracks(&self, album_id: &str) -> Result<Vec<AlbumTrack>, CatalogError> {
        let url = format!("{}/albums/{}/tracks", self.api_base, album_id);
        let mut tracks = Vec::new();
        let mut offset = 0;

        loop {
            let page: Page<SimpleTrack> = self.client.get_json(
                &url,
                &[("limit", PAGE_SIZE.to_string()), ("offset", offset.to_string())],
            )?;
            let has_next = page.has_next();
            offset += page.items.len();
            tracks.extend(page.items.into_iter().map(AlbumTrack::from));
            if !has_next {
                break;
            }
        }

        Ok(tracks)
    }
}
