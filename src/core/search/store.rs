//! Result set store.
//!
//! Owns the session state: the current `ResultSet` and page position,
//! published through a `tokio::sync::watch` channel so the presentation
//! layer can read the current snapshot and await changes without this
//! module knowing anything about rendering.
//!
//! At most one search result is authoritative at a time. Every `search`
//! call takes a fresh generation number; a response is only allowed to
//! commit if its generation is still the latest when it arrives, so a slow
//! earlier response can never clobber a faster later one.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::core::export::{self, ExportError};

use super::client::SearchClient;
use super::pagination::{PageError, PageState};
use super::query::{build_request, ValidationError};
use super::types::{ResultSet, SearchCriteria, WordResult};

/// One immutable view of the session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub results: ResultSet,
    pub page: PageState,
}

pub struct SearchStore {
    client: SearchClient,
    generation: AtomicU64,
    state: watch::Sender<SessionSnapshot>,
}

impl SearchStore {
    pub fn new(client: SearchClient) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self {
            client,
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// The current state, cloned out of the channel.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes. Receivers see every committed
    /// transition and can always read the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    // ========================================================================
    // Searching
    // ========================================================================

    /// Run one search: validate, transition to `Loading` (page reset,
    /// prior error cleared), fetch, and commit `Success` or `Error`.
    ///
    /// Validation failures are returned to the caller without touching
    /// state or the network. Fetch failures are folded into the committed
    /// `ResultSet` rather than returned.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<(), ValidationError> {
        let request = build_request(criteria)?;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!("Search #{generation}: {}", request.query_string());

        self.state.send_modify(|state| {
            state.results = ResultSet::loading();
            state.page = state.page.reset();
        });

        let outcome = self.client.fetch(&request).await;

        let committed = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            state.results = match outcome {
                Ok(words) => {
                    log::info!("Search #{generation}: {} words", words.len());
                    ResultSet::success(words)
                }
                Err(e) => {
                    log::warn!("Search #{generation}: {e}");
                    ResultSet::failed(e.to_string())
                }
            };
            state.page = state.page.reset();
            true
        });

        if !committed {
            log::debug!("Search #{generation}: superseded, response discarded");
        }
        Ok(())
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Move to `page` within the current result set.
    pub fn go_to_page(&self, page: usize) -> Result<(), PageError> {
        let mut outcome = Ok(());
        self.state.send_if_modified(|state| {
            match state.page.go_to(page, state.results.len()) {
                Ok(next) => {
                    state.page = next;
                    true
                }
                Err(e) => {
                    outcome = Err(e);
                    false
                }
            }
        });
        outcome
    }

    /// The words visible on the current page.
    pub fn visible_page(&self) -> Vec<WordResult> {
        let state = self.state.borrow();
        state.page.slice(&state.results.words).to_vec()
    }

    /// 1-based inclusive index range shown on the current page.
    pub fn displayed_range(&self) -> (usize, usize) {
        let state = self.state.borrow();
        state.page.displayed_range(state.results.len())
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Export the full result set, ignoring pagination. Returns `false`
    /// when there was nothing to export.
    pub fn export_to(&self, path: &Path) -> Result<bool, ExportError> {
        let words = self.state.borrow().results.words.clone();
        export::write_xlsx(&words, path)
    }
}
