//! Core game logic and state management
//!
//! This module contains the [`Game`] session object. It owns the board, the
//! roster and the scoring ledger, runs the start/restart lifecycle and
//! dispatches clue activations through the reveal state machine.
//!
//! Loading is split into [`Game::begin_loading`] and [`Game::finish_loading`]
//! so a host that shares the game behind a `RefCell` can release its borrow
//! while the fetch is in flight. Each load is identified by a
//! [`LoadTicket`]; only the live ticket may populate the board, and no new
//! load can begin while one is pending.

use std::fmt::Debug;

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    SyncMessage, Trigger, UpdateMessage,
    board::{Board, Coords},
    clue::{self, Action, Effect, Transition},
    constants,
    error::Error,
    leaderboard::Leaderboard,
    options::Options,
    roster::Roster,
    session::Surface,
    trivia::{TriviaService, fetch::fetch_board},
};

/// Represents the current phase of the game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    /// Roster entry before the first board
    Setup,
    /// A board is being fetched
    Loading,
    /// The board is interactive
    Ready,
    /// The last load failed; a restart retries it
    Failed(String),
    /// Every clue on the board has been resolved
    Cleared,
}

/// Identifies one board load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTicket(u64);

/// Input from the rendering surface
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum IncomingMessage {
    /// Replace the roster with these entry fields
    Roster(Vec<String>),
    /// Add one player
    AddPlayer(String),
    /// Act on a clue cell
    Clue {
        /// The cell acted on
        coords: Coords,
        /// What the user did
        action: Action,
    },
}

/// The main game session struct
#[derive(Serialize, Deserialize)]
pub struct Game {
    /// Board dimensions, scoring and service settings
    options: Options,
    /// Player names in seat order
    roster: Roster,
    /// Scores for the current board
    pub leaderboard: Leaderboard,
    /// The current board, empty until the first load completes
    board: Board,
    /// Current phase of the session
    pub state: State,
    /// Number of loads begun so far
    loads: u64,
    /// The load whose result may still populate the board
    pending: Option<LoadTicket>,
}

impl Debug for Game {
    /// Custom debug implementation that avoids printing the whole board
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("roster", &self.roster)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a session in the setup phase
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the options fail validation.
    pub fn new(options: Options) -> Result<Self, Error> {
        options
            .validate()
            .map_err(|e| Error::InvalidArgument(e.to_string()))?;

        Ok(Self {
            options,
            roster: Roster::default(),
            leaderboard: Leaderboard::default(),
            board: Board::default(),
            state: State::Setup,
            loads: 0,
            pending: None,
        })
    }

    /// The options the session was created with
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    fn ensure_not_loading(&self) -> Result<(), Error> {
        if matches!(self.state, State::Loading) {
            Err(Error::InvalidState("a board is loading".to_owned()))
        } else {
            Ok(())
        }
    }

    /// Replaces the roster and starts every player at zero
    ///
    /// Blank entries become `Player N`; entries past the fourth are ignored.
    /// Players cannot be removed while a board is loading or in play.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] - No entries, or a name failed validation
    /// * [`Error::InvalidState`] - A board is loading or in play
    pub fn configure_roster<S: AsRef<str>>(&mut self, entries: &[S]) -> Result<(), Error> {
        if matches!(self.state, State::Loading | State::Ready) {
            return Err(Error::InvalidState(format!(
                "roster is locked in {:?}",
                self.state
            )));
        }
        let roster = Roster::from_entries(entries)?;
        self.leaderboard = Leaderboard::new(roster.names());
        log::info!("roster set to {}", roster.names().iter().join(", "));
        self.roster = roster;
        Ok(())
    }

    /// Adds one player with a zero score
    ///
    /// Returns `false` when the roster is full and the request was ignored.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] - The name failed validation
    /// * [`Error::InvalidState`] - A board is loading
    pub fn add_player(&mut self, name: &str) -> Result<bool, Error> {
        self.ensure_not_loading()?;
        Ok(match self.roster.add(name)? {
            Some(name) => {
                self.leaderboard.push(name);
                true
            }
            None => false,
        })
    }

    /// Caption of the start/restart control
    pub fn trigger_label(&self) -> &'static str {
        if self.loads == 0 {
            "Start Game"
        } else {
            "Restart Game"
        }
    }

    fn trigger(&self) -> Trigger {
        Trigger {
            label: self.trigger_label().to_owned(),
            enabled: !matches!(self.state, State::Loading),
        }
    }

    /// Enters the loading phase for a new board
    ///
    /// Clears the current board and zeroes every score. The returned ticket
    /// must be handed to [`Game::finish_loading`] with the fetch result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if a load is already in flight or the
    /// roster is empty.
    pub fn begin_loading(&mut self) -> Result<LoadTicket, Error> {
        self.ensure_not_loading()?;
        if self.roster.is_empty() {
            return Err(Error::InvalidState(
                "configure the roster before starting".to_owned(),
            ));
        }

        self.loads += 1;
        let ticket = LoadTicket(self.loads);
        self.pending = Some(ticket);
        self.board = Board::default();
        self.leaderboard.reset();
        self.state = State::Loading;
        log::info!("loading board #{}", self.loads);
        Ok(ticket)
    }

    /// Applies the result of the load identified by `ticket`
    ///
    /// A fetched board makes the session interactive, or cleared outright if
    /// it holds no clue left to play. A failed fetch leaves
    /// the board empty and moves the session to [`State::Failed`], from which
    /// a new load may begin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] for a ticket that is not the pending
    /// one, otherwise passes the fetch error through.
    pub fn finish_loading(
        &mut self,
        ticket: LoadTicket,
        result: Result<Board, Error>,
    ) -> Result<(), Error> {
        if self.pending != Some(ticket) {
            return Err(Error::InvalidState(format!(
                "load {ticket:?} is no longer pending"
            )));
        }
        self.pending = None;

        match result {
            Ok(board) => {
                self.board = board;
                if self.board.is_cleared() {
                    log::warn!("board #{} has no playable clue", ticket.0);
                    self.state = State::Cleared;
                } else {
                    log::info!("board #{} ready", ticket.0);
                    self.state = State::Ready;
                }
                Ok(())
            }
            Err(e) => {
                log::warn!("board #{} failed: {e}", ticket.0);
                self.state = State::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetches a new board and makes it interactive
    ///
    /// The surface is told when loading starts and receives either the full
    /// board or the failure.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Game::begin_loading`] or of the fetch.
    pub async fn start_or_restart<S: TriviaService, T: Surface>(
        &mut self,
        service: &S,
        surface: &T,
    ) -> Result<(), Error> {
        let ticket = self.begin_loading()?;
        surface.send_message(&UpdateMessage::Loading);

        let result = fetch_board(service, &self.options).await;
        let outcome = self.finish_loading(ticket, result);

        if let Err(e) = &outcome {
            surface.send_message(&UpdateMessage::LoadFailed(e.to_string()));
        }
        surface.send_state(&self.state_message());
        outcome
    }

    /// Feeds one user action to the clue at `coords`
    ///
    /// Credits the chosen player when the action completes a correct
    /// answer, and moves the session to [`State::Cleared`] once the last
    /// clue resolves.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidState`] - The board is not interactive, there is no
    ///   clue at `coords`, the clue is malformed or locked, or the action does
    ///   not apply to the clue's state
    /// * [`Error::InvalidArgument`] - An award names a seat outside the roster
    pub fn activate(&mut self, coords: Coords, action: Action) -> Result<Transition, Error> {
        if self.state != State::Ready {
            return Err(Error::InvalidState(format!(
                "board is not interactive in {:?}",
                self.state
            )));
        }
        if let Action::Award { player } = action {
            if !self.leaderboard.contains(player) {
                return Err(Error::InvalidArgument(format!(
                    "player {player} is outside a roster of {}",
                    self.roster.len()
                )));
            }
        }

        let base_value = self.options.base_value;
        let clue = self
            .board
            .clue_mut(coords)
            .ok_or_else(|| Error::InvalidState(format!("no clue at {coords}")))?;
        if !clue.is_well_formed() {
            return Err(Error::InvalidState(format!("clue at {coords} is malformed")));
        }

        let step = clue::transition(clue.showing, action, coords.row, base_value)?;
        clue.showing = step.next;

        if let Some(Effect::Award { player, amount }) = step.effect {
            self.leaderboard.award(player, amount)?;
        }
        if self.board.is_cleared() {
            log::info!(
                "board cleared, led by {}",
                self.leaderboard.leaders().iter().join(", ")
            );
            self.state = State::Cleared;
        }
        Ok(step)
    }

    /// Processes a message from the rendering surface
    ///
    /// Rejected clue actions on locked or busy cells are ignored; other
    /// rejections are logged. Every accepted change is pushed back to the
    /// surface.
    pub fn receive_message<T: Surface>(&mut self, message: IncomingMessage, surface: &T) {
        match message {
            IncomingMessage::Roster(entries) => match self.configure_roster(entries.as_slice()) {
                Ok(()) => surface.send_state(&self.state_message()),
                Err(e) => surface.send_message(&UpdateMessage::RosterError(e.to_string())),
            },
            IncomingMessage::AddPlayer(name) => match self.add_player(&name) {
                Ok(true) => surface.send_state(&self.state_message()),
                Ok(false) => {}
                Err(e) => surface.send_message(&UpdateMessage::RosterError(e.to_string())),
            },
            IncomingMessage::Clue { coords, action } => match self.activate(coords, action) {
                Ok(step) => {
                    if let Some(clue) = self.board.clue(coords) {
                        surface.send_message(&UpdateMessage::Cell {
                            coords,
                            view: clue.view(),
                        });
                    }
                    if step.effect.is_some() {
                        surface.send_message(&UpdateMessage::Scores(self.leaderboard.scores()));
                    }
                    if self.state == State::Cleared {
                        surface.send_message(&UpdateMessage::Cleared {
                            standings: self.leaderboard.standings(),
                        });
                    }
                }
                Err(e) if e.is_benign() => log::debug!("ignoring {action:?} at {coords}: {e}"),
                Err(e) => log::warn!("rejected {action:?} at {coords}: {e}"),
            },
        }
    }

    /// Returns the message that redraws the surface from scratch
    pub fn state_message(&self) -> SyncMessage {
        match &self.state {
            State::Setup => SyncMessage::Setup {
                roster: self.roster.names().to_vec(),
                max_players: constants::roster::MAX_PLAYERS,
                trigger: self.trigger(),
            },
            State::Loading => SyncMessage::Loading {
                trigger: self.trigger(),
            },
            State::Ready => SyncMessage::Board {
                headings: self.board.headings(),
                values: (0..self.board.rows())
                    .map(|row| clue::clue_value(row, self.options.base_value))
                    .collect_vec(),
                cells: self.board.cells(),
                scores: self.leaderboard.scores(),
                trigger: self.trigger(),
            },
            State::Failed(reason) => SyncMessage::Failed {
                reason: reason.clone(),
                trigger: self.trigger(),
            },
            State::Cleared => SyncMessage::Summary {
                standings: self.leaderboard.standings(),
                winners: self.leaderboard.leaders(),
                trigger: self.trigger(),
            },
        }
    }
}
