//! # Jeopardy Game Library
//!
//! This library provides the core of a trivia board game. It fetches
//! categories and clues from a trivia service, lays them out on a board,
//! drives each clue through its reveal cycle and keeps score for up to four
//! players. Rendering is left to the host, which receives serialized
//! messages through the [`session::Surface`] trait.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::wildcard_imports)]
use serde::Serialize;

pub mod board;
pub mod clue;
pub mod constants;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod options;
pub mod roster;
pub mod sample;
pub mod session;
pub mod trivia;

use board::{CellView, Coords};
use leaderboard::Standing;

/// State of the start/restart control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trigger {
    /// Button caption
    pub label: String,
    /// Whether the button accepts clicks; off while a board is loading
    pub enabled: bool,
}

/// Incremental updates pushed to the rendering surface
///
/// Update messages describe a single change, such as one cell being
/// revealed or the scoreboard moving.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum UpdateMessage {
    /// A cell changed what it displays
    Cell {
        /// The cell that changed
        coords: Coords,
        /// What it now displays
        view: CellView,
    },
    /// Scoreboard totals in seat order
    Scores(Vec<(String, u64)>),
    /// A board load started; show the spinner and disable the trigger
    Loading,
    /// A board load failed; the trigger is enabled again for a retry
    LoadFailed(String),
    /// A roster edit was rejected
    RosterError(String),
    /// Every clue has been resolved
    Cleared {
        /// Final standings
        standings: Vec<Standing>,
    },
}

/// Full views sent when the surface needs to redraw from scratch
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum SyncMessage {
    /// Roster entry before the first game
    Setup {
        /// Names entered so far
        roster: Vec<String>,
        /// Number of name fields to offer
        max_players: usize,
        /// Start control
        trigger: Trigger,
    },
    /// A board is loading
    Loading {
        /// Start control, disabled
        trigger: Trigger,
    },
    /// The interactive board
    Board {
        /// Category headings in column order
        headings: Vec<String>,
        /// Value label of each row
        values: Vec<u64>,
        /// Cell views, `cells[row][column]`
        cells: Vec<Vec<CellView>>,
        /// Scoreboard totals in seat order
        scores: Vec<(String, u64)>,
        /// Restart control
        trigger: Trigger,
    },
    /// The last load failed
    Failed {
        /// What went wrong
        reason: String,
        /// Retry control
        trigger: Trigger,
    },
    /// Every clue has been resolved
    Summary {
        /// Final standings
        standings: Vec<Standing>,
        /// Names sharing the top score, empty if nobody scored
        winners: Vec<String>,
        /// Restart control
        trigger: Trigger,
    },
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

impl SyncMessage {
    /// Converts the sync message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_update_message_to_message() {
        let update_msg = UpdateMessage::Cell {
            coords: Coords::new(2, 0),
            view: CellView::Question("Hamlet Author".to_owned()),
        };
        let json_str = update_msg.to_message();

        assert!(json_str.contains("Cell"));
        assert!(json_str.contains(r#""coords":"2-0""#));
        assert!(json_str.contains("Hamlet Author"));
    }

    #[test]
    fn test_sync_message_to_message() {
        let sync_msg = SyncMessage::Loading {
            trigger: Trigger {
                label: "Restart Game".to_owned(),
                enabled: false,
            },
        };
        let json_str = sync_msg.to_message();

        assert!(json_str.contains("Loading"));
        assert!(json_str.contains(r#""enabled":false"#));
    }
}
