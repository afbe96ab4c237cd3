use super::bfs::SearchState;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One hop of a found path, with the track that proves the collaboration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub from: String,
    pub to: String,
    pub track: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SearchOutcome {
    Found { hops: usize },
    /// Every reachable artist was expanded without meeting the target.
    FrontierExhausted,
    /// Artists remained beyond the hop bound.
    DepthExhausted,
    /// The catalog call budget ran out before the frontier did.
    BudgetExhausted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Found { .. } => "path found",
            Self::FrontierExhausted => "no more collaborators to explore",
            Self::DepthExhausted => "maximum depth reached",
            Self::BudgetExhausted => "catalog call budget exhausted",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrontierSearchResult {
    pub path: Option<Vec<String>>,
    pub state: SearchState,
    pub outcome: SearchOutcome,
    pub catalog_calls: usize,
    pub elapsed: f64,
    /// Some catalog call failed transiently or the budget ran out, so the
    /// same search may end differently later.
    pub degraded: bool,
}

impl FrontierSearchResult {
    pub fn found(&self) -> bool {
        self.outcome.is_found()
    }

    pub fn artists_visited(&self) -> usize {
        self.state.visited.len()
    }

    pub fn steps(&self) -> Vec<PathStep> {
        self.path
            .as_deref()
            .map(|path| self.state.steps(path))
            .unwrap_or_default()
    }
}

/// Walks `parent_map` back from `target` to `start` and returns the path in
/// forward order. Gives `None` when the chain is broken or loops; the walk
/// never takes more steps than there are recorded parents.
pub fn reconstruct_path<V>(
    parent_map: &FxHashMap<String, V>,
    parent_of: impl Fn(&V) -> &str,
    start: &str,
    target: &str,
) -> Option<Vec<String>> {
    if start.is_empty() || target.is_empty() {
        return None;
    }
    if start == target {
        return Some(vec![start.to_string()]);
    }

    let mut path = vec![target.to_string()];
    let mut current = target;

    for _ in 0..parent_map.len() {
        let parent = parent_of(parent_map.get(current)?);
        path.push(parent.to_string());
        if parent == start {
            path.reverse();
            return Some(path);
        }
        current = parent;
    }

    None
}
