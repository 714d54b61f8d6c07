//! Search domain types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Search Criteria
// ============================================================================

/// The validated contents of the search form.
///
/// A `length` of 0 means "unconstrained"; with `or_more` set, a non-zero
/// `length` is a lower bound instead of an exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub starts_with: String,
    pub contains: String,
    pub ends_with: String,
    pub length: u32,
    pub or_more: bool,
    /// Bonus letters, in the order the user typed them.
    pub bonus_letters: Vec<char>,
}

impl SearchCriteria {
    /// True when at least one text-match field survives trimming.
    pub fn has_text_filter(&self) -> bool {
        !self.starts_with.trim().is_empty()
            || !self.contains.trim().is_empty()
            || !self.ends_with.trim().is_empty()
    }
}

/// Derive the bonus-letter sequence from the comma-separated form field.
///
/// Each non-empty token contributes its first character; order is preserved.
pub fn parse_bonus_letters(raw: &str) -> Vec<char> {
    raw.split(',')
        .filter_map(|token| token.trim().chars().next())
        .collect()
}

// ============================================================================
// Word Results
// ============================================================================

/// One candidate word returned by the service.
///
/// `length` is the server's letter count and is authoritative; the service
/// counts digraphs as single letters, so it can differ from `value.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResult {
    pub value: String,
    pub length: u32,
    /// Server-computed flag for words satisfying the bonus-letter rule.
    #[serde(rename = "is_bloque", default)]
    pub bonus_hit: bool,
}

/// Lifecycle of the current result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search has been issued yet.
    Idle,
    Loading,
    Success,
    Error,
}

/// The full ordered word list from the most recent search, plus its status.
///
/// Replaced wholesale on every transition, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub words: Vec<WordResult>,
    pub status: SearchStatus,
    pub error: Option<String>,
}

impl ResultSet {
    pub fn idle() -> Self {
        Self {
            words: Vec::new(),
            status: SearchStatus::Idle,
            error: None,
        }
    }

    pub fn loading() -> Self {
        Self {
            words: Vec::new(),
            status: SearchStatus::Loading,
            error: None,
        }
    }

    pub fn success(words: Vec<WordResult>) -> Self {
        Self {
            words,
            status: SearchStatus::Success,
            error: None,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            words: Vec::new(),
            status: SearchStatus::Error,
            error: Some(message),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::idle()
    }
}
