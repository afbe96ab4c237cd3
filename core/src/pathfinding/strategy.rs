use super::graph::EdgeContext;
use crate::artist::Artist;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Penalty for an edge whose artists share no known track.
pub const NO_COLLABORATION_PENALTY: f64 = 10.0;

/// Computes the cost of walking `from → to` when heading for `target`.
pub trait WeightStrategy: Send + Sync {
    fn weight(&self, target: &Artist, from: &Artist, to: &Artist, context: &EdgeContext) -> f64;

    fn name(&self) -> &'static str;
}

/// `|target.popularity - to.popularity|`: prefers stepping to artists about
/// as popular as the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopularityDifference;

impl WeightStrategy for PopularityDifference {
    fn weight(&self, target: &Artist, _from: &Artist, to: &Artist, _context: &EdgeContext) -> f64 {
        (target.popularity - to.popularity).abs()
    }

    fn name(&self) -> &'static str {
        "popularity"
    }
}

/// `1 / shared_count`: prefers pairs with many tracks together.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollaborationStrength;

impl WeightStrategy for CollaborationStrength {
    fn weight(&self, _target: &Artist, _from: &Artist, _to: &Artist, context: &EdgeContext) -> f64 {
        if context.shared_count == 0 {
            return NO_COLLABORATION_PENALTY;
        }
        1.0 / f64::from(context.shared_count)
    }

    fn name(&self) -> &'static str {
        "collaboration"
    }
}

/// `1 - jaccard(genres(target), genres(to))`. Two artists without any genre
/// tags are as far apart as possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreOverlap;

impl WeightStrategy for GenreOverlap {
    fn weight(&self, target: &Artist, _from: &Artist, to: &Artist, _context: &EdgeContext) -> f64 {
        let target_genres: FxHashSet<&str> = target.genres.keys().map(String::as_str).collect();
        let to_genres: FxHashSet<&str> = to.genres.keys().map(String::as_str).collect();

        let union = target_genres.union(&to_genres).count();
        if union == 0 {
            return 1.0;
        }
        let intersection = target_genres.intersection(&to_genres).count();
        1.0 - intersection as f64 / union as f64
    }

    fn name(&self) -> &'static str {
        "genre"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Popularity,
    Collaboration,
    Genre,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Collaboration => "collaboration",
            Self::Genre => "genre",
        }
    }

    pub fn strategy(self) -> Box<dyn WeightStrategy> {
        match self {
            Self::Popularity => Box::new(PopularityDifference),
            Self::Collaboration => Box::new(CollaborationStrength),
            Self::Genre => Box::new(GenreOverlap),
        }
    }
}

impl From<&str> for StrategyKind {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "collaboration" | "collab" => Self::Collaboration,
            "genre" | "genres" => Self::Genre,
            _ => Self::Popularity,
        }
    }
}

impl From<String> for StrategyKind {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
