//! Configuration constants for the trivia board
//!
//! This module contains the default dimensions, scoring values and limits
//! used throughout the game. Runtime overrides live in
//! [`Options`](crate::options::Options) and are validated against the
//! bounds declared here.

/// Board layout constants
pub mod board {
    /// Number of clues in each category column
    pub const ROWS: usize = 5;
    /// Number of category columns on the board
    pub const COLUMNS: usize = 6;
    /// Largest number of rows an [`Options`](crate::options::Options) may request
    pub const MAX_ROWS: usize = 10;
    /// Largest number of columns an [`Options`](crate::options::Options) may request
    pub const MAX_COLUMNS: usize = 10;
    /// Text shown on a cell whose clue has not been revealed yet
    pub const PLACEHOLDER: &str = "?";
}

/// Scoring constants
pub mod scoring {
    /// Value of a clue in the first row; row `n` is worth `(n + 1) * BASE_VALUE`
    pub const BASE_VALUE: u64 = 200;
    /// Largest base value an [`Options`](crate::options::Options) may request
    pub const MAX_BASE_VALUE: u64 = 10_000;
}

/// Roster constants
pub mod roster {
    /// Minimum number of players in a session
    pub const MIN_PLAYERS: usize = 1;
    /// Maximum number of players in a session
    pub const MAX_PLAYERS: usize = 4;
    /// Maximum length of a player name in bytes
    pub const MAX_NAME_LENGTH: usize = 30;
}

/// Trivia service constants
pub mod trivia {
    /// Base URL of the public jService API
    pub const BASE_URL: &str = "http://jservice.io/api/";
    /// Number of candidate categories requested before sampling the board columns
    pub const CATEGORY_POOL: usize = 100;
    /// Largest candidate pool the service accepts in one listing
    pub const MAX_CATEGORY_POOL: usize = 100;
}
