//! HTTP client for the external word-lookup service.
//!
//! One GET per search. The service replies with a JSON array of word
//! records on success and an arbitrary non-2xx response on failure.

use std::time::Duration;

use url::Url;

use crate::config::SearchConfig;

use super::error::SearchError;
use super::query::RequestDescriptor;
use super::types::WordResult;

pub struct SearchClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SearchClient {
    /// Build a client against the configured service, applying the
    /// configured transport timeout.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Fetch the word list for one request descriptor.
    ///
    /// A 2xx body that is not a JSON array degrades to an empty list
    /// instead of an error; see `parse_word_results`.
    pub async fn fetch(&self, request: &RequestDescriptor) -> Result<Vec<WordResult>, SearchError> {
        let url = request.url(&self.base_url)?;
        log::debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Service {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        Ok(parse_word_results(body))
    }
}

/// Extract word records from the response body.
///
/// A non-array body is treated as an empty result set (fail soft); array
/// elements that do not match the record shape are skipped. Both cases are
/// logged so a misbehaving service stays observable.
fn parse_word_results(body: serde_json::Value) -> Vec<WordResult> {
    match body {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<WordResult>(item) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("Skipping malformed word record: {e}");
                    None
                }
            })
            .collect(),
        other => {
            log::warn!(
                "Search service returned a non-array body (found {}), treating as empty",
                json_kind(&other)
            );
            Vec::new()
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
