use axum::Router;
use sixdegrees_core::{AlbumTrack, InMemoryCatalog, SearchConfig, TrackCredit};
use sixdegrees_web::create_router;
use sixdegrees_web::state::AppState;
use std::sync::Arc;

pub const TAYLOR: &str = "Taylor Swift";
pub const ED: &str = "Ed Sheeran";
pub const JUSTIN: &str = "Justin Bieber";
pub const BILLIE: &str = "Billie Eilish";
pub const LONELY: &str = "Lonely Artist";

pub fn id_of(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

fn track(name: &str, credited: &[&str]) -> AlbumTrack {
    AlbumTrack {
        id: id_of(name),
        name: name.to_string(),
        credits: credited
            .iter()
            .map(|artist| TrackCredit::new(&id_of(artist), artist))
            .collect(),
    }
}

/// Taylor Swift → Ed Sheeran → Justin Bieber → Billie Eilish, plus an artist
/// nobody has worked with.
pub fn test_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new()
        .with_artist(TAYLOR, &id_of(TAYLOR), 100.0)
        .with_artist(ED, &id_of(ED), 90.0)
        .with_artist(JUSTIN, &id_of(JUSTIN), 92.0)
        .with_artist(BILLIE, &id_of(BILLIE), 95.0)
        .with_artist(LONELY, &id_of(LONELY), 10.0);

    catalog.add_album("reputation", &[&id_of(TAYLOR)], vec![track("End Game", &[TAYLOR, ED])]);
    catalog.add_album("no-6", &[&id_of(ED)], vec![track("I Don't Care", &[ED, JUSTIN])]);
    catalog.add_album("justice", &[&id_of(JUSTIN)], vec![track("Lovely Remix", &[JUSTIN, BILLIE])]);
    catalog.add_album("alone", &[&id_of(LONELY)], vec![track("Solo", &[LONELY])]);
    catalog
}

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub catalog: Arc<InMemoryCatalog>,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(test_catalog())
}

pub fn create_test_app_with(catalog: InMemoryCatalog) -> TestApp {
    create_test_app_with_config(catalog, SearchConfig::default().offline())
}

pub fn create_test_app_with_config(catalog: InMemoryCatalog, config: SearchConfig) -> TestApp {
    let catalog = Arc::new(catalog);
    let state = Arc::new(AppState::new(catalog.clone(), config));
    TestApp {
        router: create_router(state.clone()),
        state,
        catalog,
    }
}
