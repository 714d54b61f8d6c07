//! Query construction.
//!
//! Turns `SearchCriteria` into the parameter list the word-lookup service
//! expects. Pure: validation failures never reach the network.

use thiserror::Error;
use url::{form_urlencoded, Url};

use super::types::SearchCriteria;

/// Rejected search input. Surfaced inline on the form, never dispatched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("enter a prefix, substring, or suffix to search for")]
    NoTextFilter,
}

/// An ordered set of query parameters for one search request.
///
/// Ordering is deterministic: `starts_with`, `contained`, `ends_with`,
/// `length`, `or_more`, `bonus_letters`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    params: Vec<(&'static str, String)>,
}

impl RequestDescriptor {
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Render the percent-encoded query string.
    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Resolve the `search` endpoint on the service base URL.
    pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut url = base.join("search")?;
        url.set_query(Some(&self.query_string()));
        Ok(url)
    }
}

/// Build a request descriptor from validated form input.
///
/// The only blocking rule: `starts_with`, `contains`, and `ends_with` must
/// not all be empty after trimming. Length and bonus letters never block.
/// Empty text fields are omitted from the parameter list; `length` and
/// `or_more` are always sent; `bonus_letters` is sent only when non-empty.
pub fn build_request(criteria: &SearchCriteria) -> Result<RequestDescriptor, ValidationError> {
    if !criteria.has_text_filter() {
        return Err(ValidationError::NoTextFilter);
    }

    let mut params: Vec<(&'static str, String)> = Vec::with_capacity(6);
    let starts_with = criteria.starts_with.trim();
    let contains = criteria.contains.trim();
    let ends_with = criteria.ends_with.trim();

    if !starts_with.is_empty() {
        params.push(("starts_with", starts_with.to_string()));
    }
    if !contains.is_empty() {
        params.push(("contained", contains.to_string()));
    }
    if !ends_with.is_empty() {
        params.push(("ends_with", ends_with.to_string()));
    }
    params.push(("length", criteria.length.to_string()));
    params.push(("or_more", criteria.or_more.to_string()));

    let bonus = criteria
        .bonus_letters
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",");
    if !bonus.is_empty() {
        params.push(("bonus_letters", bonus));
    }

    Ok(RequestDescriptor { params })
}
