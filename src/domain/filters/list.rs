//! Editable list of filter phrases.

use serde::{Deserialize, Serialize};

use crate::domain::{FilterError, Result};

/// Minimum trimmed length accepted by the interactive add flow.
pub const DEFAULT_MIN_FILTER_LENGTH: usize = 2;

/// Whether the editing surface shows any phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Empty,
    NonEmpty,
}

/// Ordered phrases with no exact duplicates.
///
/// Order only matters for display: the most recently added phrase is last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterList {
    phrases: Vec<String>,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from stored phrases, keeping the order given.
    pub fn from_phrases(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// Add `phrase`, moving an identical existing entry to the end.
    ///
    /// Returns `false` without touching the list when `phrase` is blank.
    /// Equality is exact and case-sensitive.
    pub fn add(&mut self, phrase: &str) -> bool {
        if phrase.trim().is_empty() {
            return false;
        }
        self.phrases.retain(|existing| existing != phrase);
        self.phrases.push(phrase.to_string());
        true
    }

    /// Remove and return the phrase at row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::IndexOutOfRange`] for a stale row position.
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        if index >= self.phrases.len() {
            return Err(FilterError::IndexOutOfRange {
                index,
                len: self.phrases.len(),
            });
        }
        Ok(self.phrases.remove(index))
    }

    /// Insert `phrase` at row `index` (`index == len` appends).
    ///
    /// Unlike [`add`](Self::add) this does not deduplicate.
    pub fn insert_at(&mut self, index: usize, phrase: &str) -> Result<()> {
        if index > self.phrases.len() {
            return Err(FilterError::IndexOutOfRange {
                index,
                len: self.phrases.len(),
            });
        }
        self.phrases.insert(index, phrase.to_string());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.phrases
    }

    pub fn into_phrases(self) -> Vec<String> {
        self.phrases
    }

    pub fn state(&self) -> ListState {
        if self.phrases.is_empty() {
            ListState::Empty
        } else {
            ListState::NonEmpty
        }
    }

    /// Heading for the editing surface.
    pub fn title(&self) -> &'static str {
        match self.state() {
            ListState::Empty => "Press + to add filter words",
            ListState::NonEmpty => "Filtered words:",
        }
    }
}

/// Gate for the interactive add flow: `text` must have at least
/// `min_len` characters once trimmed.
pub fn is_acceptable_input(text: &str, min_len: usize) -> bool {
    text.trim().chars().count() >= min_len
}
