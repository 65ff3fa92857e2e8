//! Error taxonomy shared by the fetcher, the board and the game controller

use serde::Serialize;
use thiserror::Error;

/// Errors produced by the trivia board
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The trivia service was unreachable, timed out or answered with a
    /// non-success status
    #[error("trivia service request failed: {0}")]
    Network(String),
    /// A caller broke an argument contract, such as sampling more items than
    /// a pool holds or naming a player outside the roster
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation does not apply to the current state, such as activating
    /// a locked clue or restarting while a board is still loading
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    /// Whether the controller should treat this error as a silent no-op
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}
