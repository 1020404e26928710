//! Race leaderboard
//!
//! Rebuilt from scratch every frame from each actor's race progress.

use serde::{Deserialize, Serialize};

use crate::sim::RaceProgress;

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    /// 1-indexed
    pub rank: usize,
    /// laps * waypoint count + waypoint index
    pub score: u64,
    /// Position of this actor in the standings passed to `compute`
    pub slot: usize,
}

/// Ordered standings, leader first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rank actors by descending progress score.
    ///
    /// Equal scores keep their input order, so identical input always
    /// produces identical ranks.
    pub fn compute<'a, I>(standings: I, waypoint_count: usize) -> Self
    where
        I: IntoIterator<Item = (&'a str, RaceProgress)>,
    {
        let mut entries: Vec<LeaderboardEntry> = standings
            .into_iter()
            .enumerate()
            .map(|(slot, (name, progress))| LeaderboardEntry {
                name: name.to_string(),
                rank: 0,
                score: progress.score(waypoint_count),
                slot,
            })
            .collect();

        // sort_by is stable
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        Self { entries }
    }

    /// Rank of the first actor with this name (1-indexed)
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.rank)
    }

    /// Rank of the actor at `slot` in the input standings.
    /// Unlike `rank_of`, this stays correct when names repeat.
    pub fn rank_at(&self, slot: usize) -> Option<usize> {
        self.entries.iter().find(|e| e.slot == slot).map(|e| e.rank)
    }

    pub fn leader(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (name, rank) pairs in rank order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn progress(lap_count: u32, waypoint_index: usize) -> RaceProgress {
        RaceProgress {
            waypoint_index,
            lap_count,
        }
    }

    #[test]
    fn test_compute_orders_by_laps_then_waypoint() {
        let board = Leaderboard::compute(
            [
                ("Player", progress(0, 3)),
                ("Bot 1", progress(1, 0)),
                ("Bot 2", progress(0, 2)),
            ],
            4,
        );
        let names: Vec<_> = board.pairs().collect();
        assert_eq!(names, vec![("Bot 1", 1), ("Player", 2), ("Bot 2", 3)]);
        assert_eq!(board.leader().map(|e| e.score), Some(4));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let board = Leaderboard::compute(
            [("A", progress(0, 1)), ("B", progress(0, 1)), ("C", progress(0, 1))],
            4,
        );
        assert_eq!(board.rank_of("A"), Some(1));
        assert_eq!(board.rank_of("B"), Some(2));
        assert_eq!(board.rank_of("C"), Some(3));
        assert_eq!(board.rank_of("D"), None);
    }

    #[test]
    fn test_rank_at_handles_duplicate_names() {
        let board = Leaderboard::compute(
            [("Player", progress(1, 0)), ("Bot", progress(0, 0)), ("Bot", progress(5, 0))],
            4,
        );
        assert_eq!(board.rank_at(2), Some(1));
        assert_eq!(board.rank_at(0), Some(2));
        assert_eq!(board.rank_at(1), Some(3));
        assert_eq!(board.rank_at(3), None);
        // Name lookup only sees the first match
        assert_eq!(board.rank_of("Bot"), Some(1));
    }

    #[test]
    fn test_empty() {
        let board = Leaderboard::compute(std::iter::empty::<(&str, RaceProgress)>(), 4);
        assert!(board.is_empty());
        assert!(board.leader().is_none());
    }

    proptest! {
        #[test]
        fn prop_rank_order_is_non_increasing_in_score(
            raw in prop::collection::vec((0u32..20, 0usize..8), 0..16),
            n in 1usize..9,
        ) {
            let names: Vec<String> = (0..raw.len()).map(|i| format!("Bot {}", i)).collect();
            let standings = names
                .iter()
                .zip(&raw)
                .map(|(name, &(lap, idx))| (name.as_str(), progress(lap, idx % n)));
            let board = Leaderboard::compute(standings, n);

            prop_assert_eq!(board.len(), raw.len());
            for (i, pair) in board.entries.windows(2).enumerate() {
                prop_assert!(pair[0].score >= pair[1].score);
                prop_assert_eq!(pair[0].rank, i + 1);
            }
        }
    }
}
