//! Lazy breadth-first search over the collaboration graph.
//!
//! Edges are discovered while searching: an artist's tracks are fetched only
//! when the frontier reaches it. Expansion is strictly FIFO in discovery
//! order, so the first path reported is hop-minimal. Popularity-first
//! ordering converges faster on celebrity-dense graphs but gives up that
//! guarantee, and is not offered.
//!
//! A popped artist's tracks are scanned in full for a direct credit of the
//! target before any of its collaborators are looked at. Newly discovered
//! collaborators are enriched on the spot and checked for the target as
//! well; such a hit lies one hop further out, so it is held back until every
//! artist that could still produce a shorter path has been scanned.

mod state;

pub use state::{Hop, SearchState};

use super::utils::{FrontierSearchResult, SearchOutcome};
use crate::catalog::CatalogError;
use crate::registry::ArtistRegistry;
use std::time::Instant;
use tracing::{debug, info, warn};

struct PendingHit {
    via: String,
    track: String,
    distance: usize,
}

/// Searches for the shortest chain of collaborations from `start` to
/// `target`.
///
/// Both names are resolved through the registry first, which is free when the
/// caller already did it. The start artist should have been enriched by the
/// caller; if it was not, it is enriched here with the source album limit.
/// Enrichment failures turn the affected artist into a dead end.
pub fn bfs_find_path(registry: &mut ArtistRegistry<'_>, start: &str, target: &str) -> FrontierSearchResult {
    let search_timer = Instant::now();
    let config = registry.config();

    let start = registry.resolve_name(start);
    let target = registry.resolve_name(target);
    let mut state = SearchState::new(&start);

    if start == target {
        return FrontierSearchResult {
            path: Some(vec![start]),
            state,
            outcome: SearchOutcome::Found { hops: 0 },
            catalog_calls: registry.catalog_calls(),
            elapsed: search_timer.elapsed().as_secs_f64(),
            degraded: registry.is_degraded(),
        };
    }

    let mut pending: Option<PendingHit> = None;
    let mut found = false;
    let mut depth_limited = false;
    let mut budget_hit = false;

    while let Some((current, distance)) = state.next() {
        if pending
            .as_ref()
            .is_some_and(|hit| distance + 1 >= hit.distance)
        {
            break;
        }
        if !config.allows_hops(distance + 1) {
            debug!(artist = %current, distance, "depth bound reached, not expanding");
            depth_limited = true;
            continue;
        }

        let enriched = if current == start {
            registry.enrich_source(&current)
        } else {
            registry.enrich(&current)
        };
        if let Err(error) = enriched {
            if matches!(error, CatalogError::BudgetExhausted) {
                budget_hit = true;
            } else {
                warn!(artist = %current, %error, "enrichment failed, treating as dead end");
            }
        }

        if config.verbose {
            info!(depth = distance, artist = %current, "expanding");
        }

        let Some(artist) = registry.get(&current) else {
            continue;
        };

        if let Some(track) = artist.track_crediting(&target) {
            let track = track.name.clone();
            state.record(&target, &current, &track, distance + 1);
            found = true;
            break;
        }
        if pending.is_some() {
            continue;
        }

        let links: Vec<(String, String)> = artist
            .tracks
            .iter()
            .flat_map(|track| {
                track
                    .featured
                    .iter()
                    .map(move |featured| (featured.clone(), track.name.clone()))
            })
            .collect();

        for (featured, track) in links {
            if !state.visit(&featured, &current, &track, distance + 1) {
                continue;
            }
            if config.verbose {
                info!(depth = distance + 1, artist = %featured, via = %current, track = %track, "discovered");
            }

            if pending.is_some() || !config.allows_hops(distance + 2) {
                continue;
            }
            if let Err(error) = registry.enrich_until(&featured, &target) {
                if matches!(error, CatalogError::BudgetExhausted) {
                    budget_hit = true;
                } else {
                    warn!(artist = %featured, %error, "enrichment failed, treating as dead end");
                }
            }

            let hit = registry
                .get(&featured)
                .and_then(|artist| artist.track_crediting(&target))
                .map(|track| track.name.clone());
            if let Some(track) = hit {
                debug!(via = %featured, track = %track, "target credited one hop ahead");
                pending = Some(PendingHit {
                    via: featured,
                    track,
                    distance: distance + 2,
                });
            }
        }
    }

    if !found {
        if let Some(hit) = pending {
            state.record(&target, &hit.via, &hit.track, hit.distance);
            found = true;
        }
    }

    let path = if found { state.path_to(&start, &target) } else { None };
    let outcome = match &path {
        Some(path) => SearchOutcome::Found { hops: path.len() - 1 },
        None if budget_hit || registry.budget_exhausted() => SearchOutcome::BudgetExhausted,
        None if depth_limited => SearchOutcome::DepthExhausted,
        None => SearchOutcome::FrontierExhausted,
    };
    debug!(
        start = %start,
        target = %target,
        outcome = outcome.describe(),
        visited = state.visited.len(),
        calls = registry.catalog_calls(),
        "frontier search finished"
    );

    FrontierSearchResult {
        path,
        state,
        outcome,
        catalog_calls: registry.catalog_calls(),
        elapsed: search_timer.elapsed().as_secs_f64(),
        degraded: registry.is_degraded(),
    }
}
