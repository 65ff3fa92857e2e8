//! Board state: categories, clue records and cell addressing
//!
//! A [`Board`] is a fixed grid of `columns` categories, each holding exactly
//! `rows` clues. It is built in one piece once every category has been
//! fetched and replaced wholesale on restart; only the per-clue reveal state
//! changes in between.

use std::{fmt::Display, str::FromStr};

use enum_map::EnumMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{clue::ClueState, constants, error::Error, trivia::CategoryId};

/// Position of a clue cell on the board
///
/// Serialized as the `row-column` cell identifier used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
pub struct Coords {
    /// Zero-based row, which also prices the clue
    pub row: usize,
    /// Zero-based category column
    pub column: usize,
}

impl Coords {
    /// Creates coordinates for `row` in category `column`
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl Display for Coords {
    /// Formats the coordinates as the cell identifier `row-column`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}

impl FromStr for Coords {
    type Err = Error;

    /// Parses a `row-column` cell identifier
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the identifier is not two
    /// non-negative integers joined by a dash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidArgument(format!("malformed cell id `{s}`"));
        let (row, column) = s.split_once('-').ok_or_else(invalid)?;
        Ok(Self {
            row: row.trim().parse().map_err(|_| invalid())?,
            column: column.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// One question/answer pair and how far it has been revealed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    /// Clue text shown first
    pub question: String,
    /// Expected response shown second
    pub answer: String,
    /// Reveal state, mutated only through [`crate::clue::transition`]
    pub showing: ClueState,
}

/// What a cell currently displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CellView {
    /// Placeholder text, nothing revealed yet
    Hidden(String),
    /// Question text
    Question(String),
    /// Answer text
    Answer(String),
    /// "Correct?" prompt with Yes/No controls
    Prompt,
    /// Player picker for crediting the clue
    PlayerPicker,
    /// Answer text on a locked cell
    Locked(String),
}

impl ClueRecord {
    /// Creates an unrevealed clue
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: ClueState::Hidden,
        }
    }

    /// Whether both the question and the answer carry text
    ///
    /// Malformed clues stay hidden and ignore activation.
    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }

    /// Returns what the cell for this clue should display
    pub fn view(&self) -> CellView {
        match self.showing {
            ClueState::Hidden => CellView::Hidden(constants::board::PLACEHOLDER.to_owned()),
            ClueState::Question => CellView::Question(self.question.clone()),
            ClueState::Answer => CellView::Answer(self.answer.clone()),
            ClueState::ScoringPrompt => CellView::Prompt,
            ClueState::AwaitingPlayer => CellView::PlayerPicker,
            ClueState::Resolved => CellView::Locked(self.answer.clone()),
        }
    }
}

/// A titled column of clues
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier at the trivia service
    pub id: CategoryId,
    /// Title as returned by the service
    pub title: String,
    /// Clues ordered by row
    pub clues: Vec<ClueRecord>,
}

impl Category {
    /// Title as shown in the board header
    pub fn heading(&self) -> String {
        self.title.trim().to_uppercase()
    }
}

/// The grid of categories for one game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Builds a board, checking that it has exactly `columns` categories of
    /// exactly `rows` clues each
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the shape does not match.
    pub fn new(categories: Vec<Category>, rows: usize, columns: usize) -> Result<Self, Error> {
        if categories.len() != columns {
            return Err(Error::InvalidArgument(format!(
                "expected {columns} categories, got {}",
                categories.len()
            )));
        }
        if let Some(category) = categories.iter().find(|c| c.clues.len() != rows) {
            return Err(Error::InvalidArgument(format!(
                "category {} has {} clues, expected {rows}",
                category.id,
                category.clues.len()
            )));
        }
        Ok(Self { categories })
    }

    /// Whether the board has not been populated
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories in column order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of category columns
    pub fn columns(&self) -> usize {
        self.categories.len()
    }

    /// Number of clue rows
    pub fn rows(&self) -> usize {
        self.categories.first().map_or(0, |c| c.clues.len())
    }

    /// Looks up the clue at `coords`
    pub fn clue(&self, coords: Coords) -> Option<&ClueRecord> {
        self.categories
            .get(coords.column)?
            .clues
            .get(coords.row)
    }

    /// Looks up the clue at `coords` for mutation
    pub(crate) fn clue_mut(&mut self, coords: Coords) -> Option<&mut ClueRecord> {
        self.categories
            .get_mut(coords.column)?
            .clues
            .get_mut(coords.row)
    }

    /// Column headings in order
    pub fn headings(&self) -> Vec<String> {
        self.categories.iter().map(Category::heading).collect_vec()
    }

    /// Cell views in row-major order, `cells[row][column]`
    pub fn cells(&self) -> Vec<Vec<CellView>> {
        (0..self.rows())
            .map(|row| {
                self.categories
                    .iter()
                    .filter_map(|c| c.clues.get(row).map(ClueRecord::view))
                    .collect_vec()
            })
            .collect_vec()
    }

    /// Counts clues in each reveal state
    pub fn tally(&self) -> EnumMap<ClueState, usize> {
        let mut tally = EnumMap::default();
        for clue in self.categories.iter().flat_map(|c| c.clues.iter()) {
            tally[clue.showing] += 1;
        }
        tally
    }

    /// Whether every well-formed clue has been resolved
    ///
    /// An empty board is never cleared.
    pub fn is_cleared(&self) -> bool {
        !self.is_empty()
            && self
                .categories
                .iter()
                .flat_map(|c| c.clues.iter())
                .filter(|clue| clue.is_well_formed())
                .all(|clue| clue.showing.is_locked())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn create_test_category(id: u64, rows: usize) -> Category {
        Category {
            id: CategoryId::from(id),
            title: format!("category {id}"),
            clues: (0..rows)
                .map(|row| {
                    ClueRecord::new(format!("question {id}/{row}"), format!("answer {id}/{row}"))
                })
                .collect_vec(),
        }
    }

    pub(crate) fn create_test_board(rows: usize, columns: usize) -> Board {
        Board::new(
            (0..columns as u64)
                .map(|id| create_test_category(id, rows))
                .collect_vec(),
            rows,
            columns,
        )
        .unwrap()
    }

    #[test]
    fn test_coords_display_and_parse() {
        let coords = Coords::new(2, 5);
        assert_eq!(coords.to_string(), "2-5");
        assert_eq!("2-5".parse::<Coords>().unwrap(), coords);
    }

    #[test]
    fn test_coords_serde_as_cell_id() {
        let coords = Coords::new(0, 3);
        assert_eq!(serde_json::to_string(&coords).unwrap(), r#""0-3""#);
        assert_eq!(serde_json::from_str::<Coords>(r#""0-3""#).unwrap(), coords);
    }

    #[test]
    fn test_coords_parse_malformed() {
        for id in ["", "2", "a-b", "-1-2", "2-"] {
            assert!(
                matches!(id.parse::<Coords>(), Err(Error::InvalidArgument(_))),
                "{id} should not parse"
            );
        }
    }

    #[test]
    fn test_board_shape() {
        let board = create_test_board(5, 6);
        assert_eq!(board.columns(), 6);
        assert_eq!(board.rows(), 5);
        assert!(!board.is_empty());
        assert_eq!(board.tally()[ClueState::Hidden], 30);
    }

    #[test]
    fn test_board_wrong_column_count() {
        let categories = (0..5).map(|id| create_test_category(id, 5)).collect_vec();
        assert!(matches!(
            Board::new(categories, 5, 6),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_board_wrong_row_count() {
        let mut categories = (0..6).map(|id| create_test_category(id, 5)).collect_vec();
        categories[3].clues.pop();
        assert!(Board::new(categories, 5, 6).is_err());
    }

    #[test]
    fn test_board_clue_lookup() {
        let board = create_test_board(5, 6);
        assert_eq!(
            board.clue(Coords::new(1, 4)).unwrap().question,
            "question 4/1"
        );
        assert!(board.clue(Coords::new(5, 0)).is_none());
        assert!(board.clue(Coords::new(0, 6)).is_none());
    }

    #[test]
    fn test_clue_views() {
        let mut clue = ClueRecord::new("Hamlet Author", "Shakespeare");
        assert_eq!(clue.view(), CellView::Hidden("?".to_owned()));
        clue.showing = ClueState::Question;
        assert_eq!(clue.view(), CellView::Question("Hamlet Author".to_owned()));
        clue.showing = ClueState::Answer;
        assert_eq!(clue.view(), CellView::Answer("Shakespeare".to_owned()));
        clue.showing = ClueState::ScoringPrompt;
        assert_eq!(clue.view(), CellView::Prompt);
        clue.showing = ClueState::AwaitingPlayer;
        assert_eq!(clue.view(), CellView::PlayerPicker);
        clue.showing = ClueState::Resolved;
        assert_eq!(clue.view(), CellView::Locked("Shakespeare".to_owned()));
    }

    #[test]
    fn test_clue_well_formed() {
        assert!(ClueRecord::new("Q", "A").is_well_formed());
        assert!(!ClueRecord::new("", "A").is_well_formed());
        assert!(!ClueRecord::new("Q", "  ").is_well_formed());
    }

    #[test]
    fn test_category_heading() {
        let category = create_test_category(7, 1);
        assert_eq!(category.heading(), "CATEGORY 7");
    }

    #[test]
    fn test_board_cells_row_major() {
        let mut board = create_test_board(2, 3);
        board.clue_mut(Coords::new(1, 2)).unwrap().showing = ClueState::Question;
        let cells = board.cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].len(), 3);
        assert_eq!(cells[1][2], CellView::Question("question 2/1".to_owned()));
    }

    #[test]
    fn test_board_cleared() {
        let mut board = create_test_board(1, 2);
        assert!(!board.is_cleared());
        board.clue_mut(Coords::new(0, 0)).unwrap().showing = ClueState::Resolved;
        assert!(!board.is_cleared());
        // malformed clues never need resolving
        board.clue_mut(Coords::new(0, 1)).unwrap().answer = String::new();
        assert!(board.is_cleared());
        assert!(!Board::default().is_cleared());
    }
}
