//! Trivia service interface and payloads
//!
//! The board is fed by an external trivia service exposing two read-only
//! endpoints: a category listing and a per-category clue listing. This
//! module defines the [`TriviaService`] seam, the JSON shapes it returns,
//! and the endpoint URLs of the public jService API. The fetch logic that
//! turns payloads into board categories lives in [`fetch`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

pub mod fetch;
#[cfg(feature = "jservice")]
pub mod jservice;

/// Identifier of a category at the trivia service
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct CategoryId(u64);

/// One entry of the category listing
///
/// Only the identifier is needed; the listing also carries titles and clue
/// counts, which are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category identifier
    pub id: CategoryId,
}

/// Full clue data for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    /// Category title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Every clue the service knows for the category
    #[serde(default)]
    pub clues: Vec<ClueDetail>,
}

/// A question/answer pair as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueDetail {
    /// Clue text
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    /// Expected response
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
}

/// Reads a possibly-null string field, mapping `null` to the empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read-only access to a trivia data service
///
/// Implementations report every transport failure, timeout and non-success
/// status as [`Error::Network`]. Callers never retry.
#[allow(async_fn_in_trait)]
pub trait TriviaService {
    /// Lists up to `count` categories
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the service cannot be reached.
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, Error>;

    /// Fetches the title and clues of one category
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the service cannot be reached.
    async fn get_category(&self, id: CategoryId) -> Result<CategoryDetail, Error>;
}

/// URL of the category listing endpoint
pub fn categories_url(base_url: &str, count: usize) -> String {
    format!("{base_url}categories?count={count}")
}

/// URL of the single-category endpoint
pub fn category_url(base_url: &str, id: CategoryId) -> String {
    format!("{base_url}category?id={id}")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::constants;

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            categories_url(constants::trivia::BASE_URL, 100),
            "http://jservice.io/api/categories?count=100"
        );
        assert_eq!(
            category_url(constants::trivia::BASE_URL, CategoryId::from(11_496)),
            "http://jservice.io/api/category?id=11496"
        );
    }

    #[test]
    fn test_category_listing_payload() {
        let listing: Vec<CategorySummary> = serde_json::from_str(
            r#"[
                {"id": 11531, "title": "mixed bag", "clues_count": 5},
                {"id": 11532, "title": "let's \"ch\"at", "clues_count": 5}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            listing.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![CategoryId::from(11_531), CategoryId::from(11_532)]
        );
    }

    #[test]
    fn test_category_detail_payload() {
        let detail: CategoryDetail = serde_json::from_str(
            r#"{
                "id": 2,
                "title": "authors",
                "clues_count": 2,
                "clues": [
                    {"id": 1, "answer": "Shakespeare", "question": "Hamlet Author", "value": 200},
                    {"id": 2, "answer": null, "question": "Bell Jar Author", "value": null}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(detail.title, "authors");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[0].question, "Hamlet Author");
        assert_eq!(detail.clues[1].answer, "");
    }

    #[test]
    fn test_category_detail_missing_clues() {
        let detail: CategoryDetail = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(detail.title, "");
        assert!(detail.clues.is_empty());
    }
}
