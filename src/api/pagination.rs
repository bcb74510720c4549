//! Cursor pagination over `{results, next_page}` list responses

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_page: Option<String>,
}

impl<T> Page<T> {
    pub fn last(results: Vec<T>) -> Self {
        Self {
            results,
            next_page: None,
        }
    }

    /// Check if there are more results available
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Anything able to GET an absolute `next_page` URL with its own credentials
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<Page<Value>, ApiError>;
}

/// Follow `next_page` from `first` until it is null, concatenating results in
/// response order. Pages are requested one at a time since each URL is only
/// known once the previous page has arrived.
pub async fn collect_pages<S>(source: &S, first: Page<Value>) -> Result<Vec<Value>, ApiError>
where
    S: PageSource + ?Sized,
{
    let mut results = first.results;
    let mut next_page = first.next_page;
    let mut page_count = 1;

    while let Some(url) = next_page {
        debug!("Fetching page {} from {}", page_count + 1, url);
        let page = source.fetch_page(&url).await?;
        page_count += 1;
        results.extend(page.results);
        next_page = page.next_page;
    }

    debug!("Collected {} results over {} pages", results.len(), page_count);
    Ok(results)
}

/// Decode raw page results into typed records
pub fn decode_all<T: DeserializeOwned>(values: Vec<Value>) -> Result<Vec<T>, ApiError> {
    values
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(ApiError::from))
        .collect()
}
