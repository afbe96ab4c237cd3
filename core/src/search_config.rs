use crate::pathfinding::StrategyKind;
use std::time::Duration;

/// Configuration for one connection search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of hops from the start artist (None = unbounded)
    pub max_depth: Option<usize>,
    /// Trace every expanded artist and discovered feature at info level
    pub verbose: bool,
    /// Albums fetched for the start artist
    pub source_album_limit: usize,
    /// Albums fetched for every artist discovered during the search
    pub album_limit: usize,
    /// Look up featured artists by name to learn their popularity and genres
    pub resolve_credits: bool,
    /// Fixed delay after each enrichment to respect the catalog's request rate
    pub pacing: Duration,
    /// Stop discovering once this many catalog calls were made
    pub max_catalog_calls: Option<usize>,
    /// Re-rank the discovered graph with the weighted engine
    pub rank: Option<StrategyKind>,
}

impl SearchConfig {
    pub fn new(max_depth: Option<usize>, verbose: bool) -> Self {
        Self {
            max_depth,
            verbose,
            ..Self::default()
        }
    }

    /// Negative hop counts mean "unbounded".
    pub fn max_depth_from_hops(hops: i64) -> Option<usize> {
        usize::try_from(hops).ok()
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_album_limits(mut self, source_album_limit: usize, album_limit: usize) -> Self {
        self.source_album_limit = source_album_limit;
        self.album_limit = album_limit;
        self
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_max_catalog_calls(mut self, max_catalog_calls: Option<usize>) -> Self {
        self.max_catalog_calls = max_catalog_calls;
        self
    }

    pub fn with_rank(mut self, rank: Option<StrategyKind>) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_resolve_credits(mut self, resolve_credits: bool) -> Self {
        self.resolve_credits = resolve_credits;
        self
    }

    /// Offline runs skip pacing; there is no rate limit to respect.
    pub fn offline(self) -> Self {
        self.with_pacing(Duration::ZERO)
    }

    pub(crate) fn allows_hops(&self, hops: usize) -> bool {
        self.max_depth.is_none_or(|max_depth| hops <= max_depth)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            verbose: false,
            source_album_limit: 15,
            album_limit: 6,
            resolve_credits: true,
            pacing: Duration::from_millis(300),
            max_catalog_calls: None,
            rank: None,
        }
    }
}
