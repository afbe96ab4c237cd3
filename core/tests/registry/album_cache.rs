use super::fixtures::{catalog_with, offline_config, track};
use sixdegrees_core::{AlbumCache, ArtistRegistry, Catalog, InMemoryCatalog};
use std::sync::Arc;
use std::thread;

fn shared_album_catalog() -> InMemoryCatalog {
    let mut catalog = catalog_with(&[("X", 60.0), ("Y", 40.0), ("Z", 10.0)]);
    catalog.add_album("shared", &["x", "y"], vec![track("Joint", &["X", "Y", "Z"])]);
    catalog.add_album("x-solo", &["x"], vec![track("Alone", &["X"])]);
    catalog
}

#[test]
fn test_two_artists_sharing_an_album_fetch_it_once() {
    let catalog = shared_album_catalog();
    let cache = AlbumCache::new();
    let config = offline_config();
    let mut registry = ArtistRegistry::new(&catalog, &cache, &config);

    registry.resolve("X");
    registry.resolve("Y");
    registry.enrich("X").unwrap();
    registry.enrich("Y").unwrap();

    assert_eq!(catalog.album_track_fetches("shared"), 1);
    assert_eq!(cache.fetch_count(), 2);
    assert_eq!(registry.get("X").unwrap().tracks.len(), 2);
    assert_eq!(registry.get("Y").unwrap().tracks.len(), 1);
    assert_eq!(registry.get("Y").unwrap().tracks[0].primary, "Y");
    assert_eq!(
        registry.get("Y").unwrap().tracks[0].featured,
        vec!["X".to_string(), "Z".to_string()]
    );
}

#[test]
fn test_cache_outlives_a_registry() {
    let catalog = shared_album_catalog();
    let cache = AlbumCache::new();
    let config = offline_config();

    {
        let mut registry = ArtistRegistry::new(&catalog, &cache, &config);
        registry.resolve("X");
        registry.enrich("X").unwrap();
    }
    let calls_before = catalog.total_calls();

    let mut registry = ArtistRegistry::new(&catalog, &cache, &config);
    registry.resolve("Y");
    registry.enrich("Y").unwrap();

    assert_eq!(catalog.album_track_fetches("shared"), 1);
    // lookup of Y, its album listing and the credit lookups of X and Z
    assert_eq!(catalog.total_calls() - calls_before, 4);
}

#[test]
fn test_cache_hits_are_not_counted_as_calls() {
    let catalog = shared_album_catalog();
    let cache = AlbumCache::new();
    let config = offline_config().with_resolve_credits(false);

    let mut first = ArtistRegistry::new(&catalog, &cache, &config);
    first.resolve("X");
    first.enrich("X").unwrap();
    assert_eq!(first.catalog_calls(), 4);

    let mut second = ArtistRegistry::new(&catalog, &cache, &config);
    second.resolve("X");
    second.enrich("X").unwrap();
    assert_eq!(second.catalog_calls(), 2);
}

#[test]
fn test_concurrent_runs_share_one_cache() {
    let catalog: Arc<dyn Catalog> = Arc::new(shared_album_catalog());
    let cache = Arc::new(AlbumCache::new());

    let handles: Vec<_> = ["X", "Y"]
        .into_iter()
        .map(|name| {
            let catalog = Arc::clone(&catalog);
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let config = offline_config();
                let mut registry = ArtistRegistry::new(catalog.as_ref(), &cache, &config);
                registry.resolve(name);
                registry.enrich(name).unwrap();
                registry.get(name).map(|artist| artist.tracks.len())
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_some_and(|tracks| tracks > 0));
    }
    assert!(cache.contains("shared"));
    assert!(cache.contains("x-solo"));
}
