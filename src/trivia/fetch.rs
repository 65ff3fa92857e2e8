//! Category fetching and board assembly
//!
//! The board is assembled in two rounds: one listing call picks the column
//! categories, then every column is fetched concurrently. The join is
//! all-or-nothing, a single failed fetch discards every other result.

use futures::future::try_join_all;
use itertools::Itertools;

use crate::{
    board::{Board, Category, ClueRecord},
    error::Error,
    options::Options,
    sample::sample,
};

use super::{CategoryId, TriviaService};

/// Lists candidate categories and samples one per board column
///
/// Duplicate identifiers in the listing count once.
///
/// # Errors
///
/// Returns [`Error::Network`] from the service, or
/// [`Error::InvalidArgument`] if the listing holds fewer distinct categories
/// than the board has columns.
pub async fn fetch_category_ids<S: TriviaService>(
    service: &S,
    options: &Options,
) -> Result<Vec<CategoryId>, Error> {
    let listing = service.list_categories(options.category_pool).await?;
    let ids = listing.into_iter().map(|c| c.id).unique().collect_vec();
    log::debug!(
        "sampling {} of {} listed categories",
        options.columns,
        ids.len()
    );

    sample(&ids, options.columns).inspect_err(|e| log::error!("category sampling failed: {e}"))
}

/// Fetches one category and samples a clue per board row
///
/// # Errors
///
/// Returns [`Error::Network`] from the service, or
/// [`Error::InvalidArgument`] if the category has fewer clues than the board
/// has rows.
pub async fn fetch_category<S: TriviaService>(
    service: &S,
    id: CategoryId,
    options: &Options,
) -> Result<Category, Error> {
    let detail = service.get_category(id).await?;
    let clues = sample(&detail.clues, options.rows)
        .inspect_err(|e| log::error!("clue sampling failed for category {id}: {e}"))?
        .into_iter()
        .map(|clue| ClueRecord::new(clue.question, clue.answer))
        .collect_vec();

    Ok(Category {
        id,
        title: detail.title,
        clues,
    })
}

/// Fetches a complete board
///
/// The column categories are requested concurrently. Either every column
/// arrives and a full board is returned, or the first error is returned and
/// nothing is kept.
///
/// # Errors
///
/// Propagates the first error of [`fetch_category_ids`] or
/// [`fetch_category`].
pub async fn fetch_board<S: TriviaService>(
    service: &S,
    options: &Options,
) -> Result<Board, Error> {
    let ids = fetch_category_ids(service, options).await?;
    let categories = try_join_all(ids.into_iter().map(|id| fetch_category(service, id, options)))
        .await
        .inspect_err(|e| log::warn!("board fetch aborted: {e}"))?;

    Board::new(categories, options.rows, options.columns)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod tests {
    use std::{
        cell::{Cell, RefCell},
        collections::{BTreeMap, HashSet},
    };

    use futures::executor::block_on;

    use super::*;
    use crate::{
        clue::ClueState,
        trivia::{CategoryDetail, CategorySummary, ClueDetail},
    };

    /// In-memory trivia service with switchable failures
    #[derive(Default)]
    pub(crate) struct StaticService {
        categories: BTreeMap<CategoryId, CategoryDetail>,
        pub(crate) listing_fails: Cell<bool>,
        pub(crate) failing: RefCell<HashSet<CategoryId>>,
        pub(crate) requested: RefCell<Vec<CategoryId>>,
    }

    impl StaticService {
        /// `count` categories with `clues` clues each
        pub(crate) fn new(count: u64, clues: usize) -> Self {
            Self {
                categories: (1..=count)
                    .map(|id| {
                        (
                            CategoryId::from(id),
                            CategoryDetail {
                                title: format!("category {id}"),
                                clues: (0..clues)
                                    .map(|n| ClueDetail {
                                        question: format!("question {id}/{n}"),
                                        answer: format!("answer {id}/{n}"),
                                    })
                                    .collect_vec(),
                            },
                        )
                    })
                    .collect(),
                ..Self::default()
            }
        }

        /// Makes every category fetch fail
        pub(crate) fn fail_all_categories(&self) {
            self.failing
                .borrow_mut()
                .extend(self.categories.keys().copied());
        }
    }

    impl TriviaService for StaticService {
        async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, Error> {
            if self.listing_fails.get() {
                return Err(Error::Network("status 503".to_owned()));
            }
            Ok(self
                .categories
                .keys()
                .take(count)
                .map(|id| CategorySummary { id: *id })
                .collect_vec())
        }

        async fn get_category(&self, id: CategoryId) -> Result<CategoryDetail, Error> {
            self.requested.borrow_mut().push(id);
            if self.failing.borrow().contains(&id) {
                return Err(Error::Network(format!("category {id} unreachable")));
            }
            self.categories
                .get(&id)
                .cloned()
                .ok_or_else(|| Error::Network("status 404".to_owned()))
        }
    }

    #[test]
    fn test_fetch_category_ids() {
        let service = StaticService::new(100, 5);
        let options = Options::default();
        let ids = block_on(fetch_category_ids(&service, &options)).unwrap();
        assert_eq!(ids.len(), options.columns);
        assert_eq!(ids.iter().unique().count(), options.columns);
    }

    #[test]
    fn test_fetch_category_ids_listing_too_small() {
        let service = StaticService::new(3, 5);
        let result = block_on(fetch_category_ids(&service, &Options::default()));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_fetch_category_ids_network_error() {
        let service = StaticService::new(100, 5);
        service.listing_fails.set(true);
        let result = block_on(fetch_category_ids(&service, &Options::default()));
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[test]
    fn test_fetch_category() {
        let service = StaticService::new(10, 12);
        let category =
            block_on(fetch_category(&service, CategoryId::from(4), &Options::default())).unwrap();
        assert_eq!(category.id, CategoryId::from(4));
        assert_eq!(category.title, "category 4");
        assert_eq!(category.clues.len(), 5);
        assert!(category.clues.iter().all(|c| c.showing == ClueState::Hidden));
        assert!(category.clues.iter().all(|c| c.question.starts_with("question 4/")));
        assert_eq!(
            category.clues.iter().map(|c| &c.question).unique().count(),
            5
        );
    }

    #[test]
    fn test_fetch_category_too_few_clues() {
        let service = StaticService::new(10, 3);
        let result = block_on(fetch_category(
            &service,
            CategoryId::from(1),
            &Options::default(),
        ));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_fetch_board() {
        let service = StaticService::new(100, 8);
        let options = Options::default();
        let board = block_on(fetch_board(&service, &options)).unwrap();
        assert_eq!(board.columns(), 6);
        assert_eq!(board.rows(), 5);
        assert_eq!(board.tally()[ClueState::Hidden], 30);
        assert_eq!(service.requested.borrow().len(), 6);
    }

    #[test]
    fn test_fetch_board_one_failure_discards_all() {
        let service = StaticService::new(6, 5);
        service.failing.borrow_mut().insert(CategoryId::from(3));
        let result = block_on(fetch_board(&service, &Options::default()));
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[test]
    fn test_fetch_board_custom_shape() {
        let service = StaticService::new(20, 4);
        let options = Options {
            rows: 3,
            columns: 2,
            ..Options::default()
        };
        let board = block_on(fetch_board(&service, &options)).unwrap();
        assert_eq!(board.columns(), 2);
        assert_eq!(board.rows(), 3);
    }
}
