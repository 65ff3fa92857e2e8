//! Clue reveal state machine
//!
//! Every board cell runs its own reveal cycle. A cell is activated to show
//! the question, then the answer, then a "correct?" prompt. Answering yes
//! asks which player to credit; answering no locks the cell straight away.
//! [`transition`] is a pure function over `(state, action)` so the game
//! controller can apply the result and any scoring effect in one place.

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Where a single clue is in its reveal cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum ClueState {
    /// Nothing revealed, the cell shows a placeholder
    #[default]
    Hidden,
    /// The question text is showing
    Question,
    /// The answer text is showing
    Answer,
    /// The cell asks whether the answer was given correctly
    ScoringPrompt,
    /// Answered correctly, waiting for the player to credit
    AwaitingPlayer,
    /// Scored or dismissed; further activations do nothing
    Resolved,
}

impl ClueState {
    /// Whether the cell ignores further input
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

/// Self-reported judgement on the answer shown in the scoring prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// "Yes": someone gave the right answer
    Correct,
    /// "No": nobody did
    Incorrect,
}

/// User input directed at one clue cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The cell was clicked
    Reveal,
    /// Yes/No was chosen in the scoring prompt
    Judge(Verdict),
    /// A player was picked to receive the clue's value
    Award {
        /// Roster index of the player to credit
        player: usize,
    },
}

/// Side effect the controller has to apply alongside a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Effect {
    /// Credit `amount` to the player at roster index `player`
    Award {
        /// Roster index of the player
        player: usize,
        /// Points to add
        amount: u64,
    },
}

/// Result of feeding one action to a clue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// State the clue moves into
    pub next: ClueState,
    /// Scoring to apply, if any
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(next: ClueState) -> Self {
        Self { next, effect: None }
    }
}

/// Value of a clue in the given zero-based row
///
/// Row 0 is worth `base_value`, row 1 twice that, and so on, matching the
/// dollar labels on the board. Saturates instead of overflowing.
pub fn clue_value(row: usize, base_value: u64) -> u64 {
    (row as u64 + 1).saturating_mul(base_value)
}

/// Computes the next state of a clue for an action
///
/// `row` and `base_value` are only used to price an award.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] when the action does not apply to the
/// current state, including any action on a resolved clue. Callers treat
/// this as a no-op.
pub fn transition(
    state: ClueState,
    action: Action,
    row: usize,
    base_value: u64,
) -> Result<Transition, Error> {
    Ok(match (state, action) {
        (ClueState::Hidden, Action::Reveal) => Transition::to(ClueState::Question),
        (ClueState::Question, Action::Reveal) => Transition::to(ClueState::Answer),
        (ClueState::Answer, Action::Reveal) => Transition::to(ClueState::ScoringPrompt),
        (ClueState::ScoringPrompt, Action::Judge(Verdict::Correct)) => {
            Transition::to(ClueState::AwaitingPlayer)
        }
        (ClueState::ScoringPrompt, Action::Judge(Verdict::Incorrect)) => {
            Transition::to(ClueState::Resolved)
        }
        (ClueState::AwaitingPlayer, Action::Award { player }) => Transition {
            next: ClueState::Resolved,
            effect: Some(Effect::Award {
                player,
                amount: clue_value(row, base_value),
            }),
        },
        (ClueState::Resolved, _) => {
            return Err(Error::InvalidState("clue is locked".to_owned()));
        }
        (state, action) => {
            return Err(Error::InvalidState(format!(
                "{action:?} does not apply to a clue in {state:?}"
            )));
        }
    })
}
