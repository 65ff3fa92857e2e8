//! Runtime options for a game session
//!
//! Options default to the values in [`crate::constants`] and may be loaded
//! from JSON by the host page. They are validated with `garde` before a game
//! is created.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Board dimensions, scoring and service settings for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Options {
    /// Clues per category
    #[garde(range(min = 1, max = constants::board::MAX_ROWS))]
    pub rows: usize,
    /// Categories on the board
    #[garde(range(min = 1, max = constants::board::MAX_COLUMNS))]
    pub columns: usize,
    /// Value of a first-row clue
    #[garde(range(min = 1, max = constants::scoring::MAX_BASE_VALUE))]
    pub base_value: u64,
    /// Candidate categories listed before the columns are sampled
    ///
    /// Never smaller than the largest allowed column count, so sampling the
    /// columns cannot run out of candidates.
    #[garde(range(min = constants::board::MAX_COLUMNS, max = constants::trivia::MAX_CATEGORY_POOL))]
    pub category_pool: usize,
    /// Base URL of the trivia service, ending with a slash
    #[garde(length(min = 1), custom(|v: &String, _: &()| validate_base_url(v)))]
    pub base_url: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rows: constants::board::ROWS,
            columns: constants::board::COLUMNS,
            base_value: constants::scoring::BASE_VALUE,
            category_pool: constants::trivia::CATEGORY_POOL,
            base_url: constants::trivia::BASE_URL.to_owned(),
        }
    }
}

fn validate_base_url(url: &str) -> garde::Result {
    if (url.starts_with("http://") || url.starts_with("https://")) && url.ends_with('/') {
        Ok(())
    } else {
        Err(garde::Error::new(
            "base_url must be an http(s) URL ending with '/'",
        ))
    }
}
