use sixdegrees_core::{AlbumTrack, InMemoryCatalog, SearchConfig, TrackCredit};

pub fn id_of(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

pub fn credit(name: &str) -> TrackCredit {
    TrackCredit::new(&id_of(name), name)
}

pub fn track(name: &str, credited: &[&str]) -> AlbumTrack {
    AlbumTrack {
        id: id_of(name),
        name: name.to_string(),
        credits: credited.iter().map(|artist| credit(artist)).collect(),
    }
}

pub fn catalog_with(artists: &[(&str, f64)]) -> InMemoryCatalog {
    artists
        .iter()
        .fold(InMemoryCatalog::new(), |catalog, (name, popularity)| {
            catalog.with_artist(name, &id_of(name), *popularity)
        })
}

/// One album per artist holding a single track shared with the next artist
/// in `names`, so edges only run forward along the chain.
pub fn chain_catalog(names: &[&str]) -> InMemoryCatalog {
    let mut catalog = catalog_with(&names.iter().map(|name| (*name, 50.0)).collect::<Vec<_>>());
    for pair in names.windows(2) {
        let owner = id_of(pair[0]);
        catalog.add_album(
            &format!("album-{}", owner),
            &[owner.as_str()],
            vec![track(&format!("{} x {}", pair[0], pair[1]), &[pair[0], pair[1]])],
        );
    }
    catalog
}

pub fn offline_config() -> SearchConfig {
    SearchConfig::default().offline()
}
