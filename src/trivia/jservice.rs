//! Browser transport for the public jService API
//!
//! Requests go through the page's `fetch()` via `gloo`. Every transport
//! failure, non-success status or undecodable body is reported as
//! [`Error::Network`].

use gloo::net::http::Request;
use serde::de::DeserializeOwned;

use crate::{error::Error, options::Options};

use super::{
    CategoryDetail, CategoryId, CategorySummary, TriviaService, categories_url, category_url,
};

/// jService client rooted at a base URL
#[derive(Debug, Clone)]
pub struct JService {
    base_url: String,
}

impl JService {
    /// Creates a client for the service configured in `options`
    pub fn new(options: &Options) -> Self {
        Self {
            base_url: options.base_url.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, Error> {
        log::debug!("GET {url}");
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("{url}: {e}")))?;

        if !response.ok() {
            return Err(Error::Network(format!(
                "{url} answered with status {}",
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Network(format!("{url}: {e}")))
    }
}

impl TriviaService for JService {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, Error> {
        Self::get_json(&categories_url(&self.base_url, count)).await
    }

    async fn get_category(&self, id: CategoryId) -> Result<CategoryDetail, Error> {
        Self::get_json(&category_url(&self.base_url, id)).await
    }
}
