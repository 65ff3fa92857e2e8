//! Player roster capture and name validation
//!
//! A roster holds between one and four display names, in seat order. Blank
//! entries fall back to `Player N` where `N` is the one-based seat. Names are
//! trimmed, capped in length and screened for inappropriate content.

use rustrict::CensorStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::roster::{MAX_NAME_LENGTH, MAX_PLAYERS, MIN_PLAYERS};

/// Errors that can occur while building a roster
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No roster entries were given
    #[error("roster needs at least one player")]
    Empty,
    /// The name exceeds the maximum allowed length
    #[error("name is too long")]
    TooLong,
    /// The name contains inappropriate content
    #[error("name is inappropriate")]
    Sinful,
}

impl From<Error> for crate::error::Error {
    fn from(e: Error) -> Self {
        Self::InvalidArgument(e.to_string())
    }
}

/// Ordered display names of the players in a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

/// Cleans one roster entry for the given zero-based seat
///
/// # Errors
///
/// * `Error::TooLong` - Trimmed name exceeds 30 bytes
/// * `Error::Sinful` - Name contains inappropriate content
fn clean_name(seat: usize, name: &str) -> Result<String, Error> {
    let name = rustrict::trim_whitespace(name);
    if name.is_empty() {
        return Ok(format!("Player {}", seat + 1));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(Error::TooLong);
    }
    if name.is_inappropriate() {
        return Err(Error::Sinful);
    }
    Ok(name.to_owned())
}

impl Roster {
    /// Builds a roster from the entry fields
    ///
    /// Entries past the fourth are ignored.
    ///
    /// # Errors
    ///
    /// * `Error::Empty` - No entries were given
    /// * `Error::TooLong` / `Error::Sinful` - An entry failed validation
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self, Error> {
        if entries.len() < MIN_PLAYERS {
            return Err(Error::Empty);
        }
        if entries.len() > MAX_PLAYERS {
            log::warn!(
                "ignoring {} roster entries past the limit of {MAX_PLAYERS}",
                entries.len() - MAX_PLAYERS
            );
        }

        let names = entries
            .iter()
            .take(MAX_PLAYERS)
            .enumerate()
            .map(|(seat, name)| clean_name(seat, name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { names })
    }

    /// Adds a player in the next seat
    ///
    /// Returns the assigned name, or `None` when the roster is already full
    /// and the request was ignored.
    ///
    /// # Errors
    ///
    /// * `Error::TooLong` / `Error::Sinful` - The name failed validation
    pub fn add(&mut self, name: &str) -> Result<Option<String>, Error> {
        if self.is_full() {
            log::debug!("roster full, ignoring {name:?}");
            return Ok(None);
        }
        let name = clean_name(self.names.len(), name)?;
        self.names.push(name.clone());
        Ok(Some(name))
    }

    /// Whether no further players can join
    pub fn is_full(&self) -> bool {
        self.names.len() >= MAX_PLAYERS
    }

    /// Display names in seat order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of players
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the roster has no players
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
