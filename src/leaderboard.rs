//! Scoring ledger and standings
//!
//! This module keeps each player's running total for the current board and
//! a log of every award, so the end-of-board summary can report how many
//! clues each player won. Scores only ever grow; there is no penalty for a
//! wrong answer.

use std::cmp::Reverse;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Serialization helper for Leaderboard struct
#[derive(Deserialize)]
struct LeaderboardSerde {
    names: Vec<String>,
    awards: Vec<(usize, u64)>,
}

/// Per-player cumulative scores for one session
///
/// Players are addressed by their roster seat index.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(from = "LeaderboardSerde")]
pub struct Leaderboard {
    /// Display names in seat order
    names: Vec<String>,
    /// Every award since the last reset as (seat, points)
    awards: Vec<(usize, u64)>,

    /// Running totals in seat order (rebuilt from `awards`)
    #[serde(skip)]
    totals: Vec<u64>,
}

impl From<LeaderboardSerde> for Leaderboard {
    /// Rebuilds the running totals from the award log
    fn from(serde: LeaderboardSerde) -> Self {
        let LeaderboardSerde { names, awards } = serde;
        let mut totals: Vec<u64> = vec![0; names.len()];
        for (seat, points) in &awards {
            if let Some(total) = totals.get_mut(*seat) {
                *total = total.saturating_add(*points);
            }
        }
        Self {
            names,
            awards,
            totals,
        }
    }
}

/// Final line of the end-of-board summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// Player name
    pub name: String,
    /// Total points
    pub score: u64,
    /// Number of clues credited to the player
    pub clues_won: usize,
    /// One-based rank; tied scores share a rank
    pub position: usize,
}

impl Leaderboard {
    /// Creates a ledger with one zero score per name
    pub fn new(names: &[String]) -> Self {
        Self {
            names: names.to_vec(),
            awards: Vec::new(),
            totals: vec![0; names.len()],
        }
    }

    /// Adds a player with a zero score
    pub fn push(&mut self, name: String) {
        self.names.push(name);
        self.totals.push(0);
    }

    /// Adds `amount` to the player in seat `player`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if no player sits at that index.
    pub fn award(&mut self, player: usize, amount: u64) -> Result<(), Error> {
        let total = self.totals.get_mut(player).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "player {player} is outside a roster of {}",
                self.names.len()
            ))
        })?;
        *total = total.saturating_add(amount);
        self.awards.push((player, amount));
        log::info!(
            "{} +{amount} (total {})",
            self.names[player],
            self.totals[player]
        );
        Ok(())
    }

    /// Whether seat `player` is occupied
    pub fn contains(&self, player: usize) -> bool {
        player < self.totals.len()
    }

    /// Current total of the player in seat `player`
    pub fn score(&self, player: usize) -> Option<u64> {
        self.totals.get(player).copied()
    }

    /// `(name, score)` pairs in seat order, as shown on the scoreboard
    pub fn scores(&self) -> Vec<(String, u64)> {
        self.names
            .iter()
            .cloned()
            .zip(self.totals.iter().copied())
            .collect_vec()
    }

    /// Zeroes every score and clears the award log
    pub fn reset(&mut self) {
        self.awards.clear();
        self.totals.iter_mut().for_each(|total| *total = 0);
    }

    /// Standings in descending score order, ties kept in seat order
    pub fn standings(&self) -> Vec<Standing> {
        let mut clues_won = vec![0; self.names.len()];
        for (seat, _) in &self.awards {
            if let Some(count) = clues_won.get_mut(*seat) {
                *count += 1;
            }
        }

        let ordered = (0..self.names.len())
            .sorted_by_key(|seat| Reverse(self.totals[*seat]))
            .collect_vec();

        let mut standings: Vec<Standing> = Vec::with_capacity(ordered.len());
        for (i, seat) in ordered.into_iter().enumerate() {
            let score = self.totals[seat];
            let position = match standings.last() {
                Some(previous) if previous.score == score => previous.position,
                _ => i + 1,
            };
            standings.push(Standing {
                name: self.names[seat].clone(),
                score,
                clues_won: clues_won[seat],
                position,
            });
        }
        standings
    }

    /// Names of the players sharing the top score
    ///
    /// Empty while nobody has scored.
    pub fn leaders(&self) -> Vec<String> {
        let Some(best) = self.totals.iter().copied().max().filter(|best| *best > 0) else {
            return Vec::new();
        };
        self.names
            .iter()
            .zip(&self.totals)
            .filter(|(_, score)| **score == best)
            .map(|(name, _)| name.clone())
            .collect_vec()
    }
}
