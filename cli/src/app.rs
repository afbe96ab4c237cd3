use sixdegrees_core::catalog::spotify::SpotifyCatalog;
use sixdegrees_core::{AlbumCache, Catalog, InMemoryCatalog};
use std::error::Error;
use std::path::Path;
use tracing::info;

pub struct SixDegreesApp {
    pub catalog: Box<dyn Catalog>,
    pub album_cache: AlbumCache,
}

impl SixDegreesApp {
    /// Uses the snapshot at `catalog_file` when given, the Spotify Web API
    /// otherwise.
    pub fn new(catalog_file: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let catalog: Box<dyn Catalog> = match catalog_file {
            Some(path) => {
                if !path.exists() {
                    return Err(format!("Catalog file does not exist: {:?}", path).into());
                }
                let catalog = InMemoryCatalog::load(path)
                    .map_err(|e| format!("Could not read catalog file {:?}: {}", path, e))?;
                info!(artists = catalog.artist_count(), "loaded offline catalog");
                Box::new(catalog)
            }
            None => Box::new(SpotifyCatalog::from_env()?),
        };

        Ok(Self {
            catalog,
            album_cache: AlbumCache::new(),
        })
    }
}
