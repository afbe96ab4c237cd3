use super::super::utils::{PathStep, reconstruct_path};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// How an artist was first reached: the predecessor and the track both share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub from: String,
    pub track: String,
}

/// Bookkeeping of one frontier search. Every visited artist except the start
/// has exactly one recorded hop, written when it was first discovered.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    queue: VecDeque<String>,
    pub visited: FxHashSet<String>,
    pub dist_to: FxHashMap<String, usize>,
    pub parent_map: FxHashMap<String, Hop>,
}

impl SearchState {
    pub fn new(start: &str) -> Self {
        let mut state = Self::default();
        state.visited.insert(start.to_string());
        state.dist_to.insert(start.to_string(), 0);
        state.queue.push_back(start.to_string());
        state
    }

    /// Records `artist` as reached from `from` through `track`. Returns false
    /// and changes nothing when the artist was already visited.
    pub fn visit(&mut self, artist: &str, from: &str, track: &str, distance: usize) -> bool {
        if !self.record(artist, from, track, distance) {
            return false;
        }
        self.queue.push_back(artist.to_string());
        true
    }

    /// Same as [`visit`](Self::visit) without queueing the artist for expansion.
    pub(crate) fn record(&mut self, artist: &str, from: &str, track: &str, distance: usize) -> bool {
        if !self.visited.insert(artist.to_string()) {
            return false;
        }
        self.dist_to.insert(artist.to_string(), distance);
        self.parent_map.insert(
            artist.to_string(),
            Hop {
                from: from.to_string(),
                track: track.to_string(),
            },
        );
        true
    }

    pub(crate) fn next(&mut self) -> Option<(String, usize)> {
        let artist = self.queue.pop_front()?;
        let distance = self.distance(&artist).unwrap_or(0);
        Some((artist, distance))
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn has_visited(&self, artist: &str) -> bool {
        self.visited.contains(artist)
    }

    pub fn distance(&self, artist: &str) -> Option<usize> {
        self.dist_to.get(artist).copied()
    }

    pub fn predecessor(&self, artist: &str) -> Option<&str> {
        self.parent_map.get(artist).map(|hop| hop.from.as_str())
    }

    /// Name of the track linking `artist` to its predecessor.
    pub fn evidence(&self, artist: &str) -> Option<&str> {
        self.parent_map.get(artist).map(|hop| hop.track.as_str())
    }

    pub fn path_to(&self, start: &str, target: &str) -> Option<Vec<String>> {
        reconstruct_path(&self.parent_map, |hop| hop.from.as_str(), start, target)
    }

    pub fn steps(&self, path: &[String]) -> Vec<PathStep> {
        path.windows(2)
            .filter_map(|pair| {
                let hop = self.parent_map.get(&pair[1])?;
                Some(PathStep {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    track: hop.track.clone(),
                })
            })
            .collect()
    }
}
