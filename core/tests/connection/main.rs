#[path = "../pathfinding/fixtures.rs"]
mod fixtures;

use fixtures::{catalog_with, chain_catalog, offline_config, track};
use sixdegrees_core::{
    AlbumCache, CatalogError, CatalogSnapshot, ConnectionError, InMemoryCatalog, SearchOutcome, StrategyKind,
    find_connection,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_finds_connection_with_steps() {
    let catalog = chain_catalog(&["Kendrick Lamar", "SZA", "Travis Scott"]);
    let cache = AlbumCache::new();

    let report = find_connection(&catalog, &cache, "kendrick lamar", "travis scott", &offline_config()).unwrap();

    assert!(report.found());
    assert_eq!(report.start, "Kendrick Lamar");
    assert_eq!(report.target, "Travis Scott");
    assert_eq!(report.steps.len(), 2);
    assert_eq!(report.steps[1].from, "SZA");
    assert_eq!(report.steps[1].track, "SZA x Travis Scott");
    assert!(report.ranked.is_none());
    assert_eq!(report.artists_discovered, 3);
    assert!(!report.search.degraded);
}

#[test]
fn test_unknown_endpoints_are_distinct_errors() {
    let catalog = chain_catalog(&["A", "B"]);
    let cache = AlbumCache::new();
    let config = offline_config();

    let error = find_connection(&catalog, &cache, "Nobody", "B", &config).unwrap_err();
    assert!(matches!(error, ConnectionError::StartNotFound(name) if name == "Nobody"));

    let error = find_connection(&catalog, &cache, "A", "Nobody", &config).unwrap_err();
    assert!(matches!(error, ConnectionError::TargetNotFound(name) if name == "Nobody"));
}

#[test]
fn test_failed_lookup_is_not_reported_as_missing() {
    let catalog = chain_catalog(&["A", "B"]);
    let cache = AlbumCache::new();

    let config = offline_config().with_max_catalog_calls(Some(1));
    let error = find_connection(&catalog, &cache, "A", "B", &config).unwrap_err();
    assert!(matches!(
        error,
        ConnectionError::TargetUnavailable { ref name, source: CatalogError::BudgetExhausted } if name == "B"
    ));

    let config = offline_config().with_max_catalog_calls(Some(0));
    let error = find_connection(&catalog, &cache, "A", "B", &config).unwrap_err();
    assert!(matches!(
        error,
        ConnectionError::StartUnavailable { source: CatalogError::BudgetExhausted, .. }
    ));
}

#[test]
fn test_failed_album_marks_search_degraded() {
    let mut catalog = chain_catalog(&["A", "B", "C"]);
    catalog.fail_album("album-b");
    let cache = AlbumCache::new();

    let report = find_connection(&catalog, &cache, "A", "C", &offline_config()).unwrap();

    assert!(!report.found());
    assert!(report.search.degraded);
}

#[test]
fn test_start_without_tracks_is_fatal() {
    let mut catalog = chain_catalog(&["A", "B"]);
    catalog.fail_artist_albums("a");
    let cache = AlbumCache::new();

    let error = find_connection(&catalog, &cache, "A", "B", &offline_config()).unwrap_err();
    assert!(matches!(error, ConnectionError::StartUnavailable { .. }));
    assert!(error.to_string().contains("\"A\""));
}

#[test]
fn test_no_path_is_not_an_error() {
    let catalog = catalog_with(&[("A", 50.0), ("B", 50.0)]);
    let cache = AlbumCache::new();

    let report = find_connection(&catalog, &cache, "A", "B", &offline_config()).unwrap();
    assert!(!report.found());
    assert_eq!(report.search.outcome, SearchOutcome::FrontierExhausted);
    assert!(report.steps.is_empty());
}

#[test]
fn test_rank_adds_weighted_path() {
    let mut catalog = catalog_with(&[("A", 50.0), ("B", 20.0), ("C", 85.0), ("T", 90.0)]);
    catalog.add_album(
        "album-a",
        &["a"],
        vec![track("ab", &["A", "B"]), track("ac", &["A", "C"])],
    );
    catalog.add_album("album-b", &["b"], vec![track("bt", &["B", "T"])]);
    catalog.add_album("album-c", &["c"], vec![track("ct", &["C", "T"])]);
    let cache = AlbumCache::new();
    let config = offline_config().with_rank(Some(StrategyKind::Popularity));

    let report = find_connection(&catalog, &cache, "A", "T", &config).unwrap();

    let hop_path = report.search.path.clone().unwrap();
    assert_eq!(hop_path, vec!["A", "B", "T"]);
    // C was never expanded, so the weighted engine only knows the route via B
    let ranked = report.ranked.unwrap();
    assert_eq!(ranked.artists(), vec!["A", "B", "T"]);
    assert_eq!(ranked.total, 70.0);
    assert_eq!(ranked.strategy, StrategyKind::Popularity);
}

#[test]
fn test_snapshot_file_round_trip() {
    let source = chain_catalog(&["A", "B"]);
    let cache = AlbumCache::new();
    let expected = find_connection(&source, &cache, "A", "B", &offline_config()).unwrap();

    let snapshot = serde_json::json!({
        "artists": [
            {"id": "a", "name": "A", "popularity": 50.0},
            {"id": "b", "name": "B", "popularity": 50.0}
        ],
        "albums": [
            {
                "id": "album-a",
                "artist_ids": ["a"],
                "tracks": [
                    {"id": "t", "name": "A x B", "credits": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}]}
                ]
            }
        ]
    });
    let _: CatalogSnapshot = serde_json::from_value(snapshot.clone()).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", snapshot).unwrap();
    let loaded = InMemoryCatalog::load(file.path()).unwrap();

    let report = find_connection(&loaded, &AlbumCache::new(), "A", "B", &offline_config()).unwrap();
    assert_eq!(report.search.path, expected.search.path);
    assert_eq!(report.steps, expected.steps);
}
