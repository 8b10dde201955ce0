//! Per-navigation decisions for a browser shell.
//!
//! The shell calls [`NavigationGuard::decide`] synchronously whenever a
//! page is about to load, [`NavigationGuard::commit`] once the load is
//! committed, and [`NavigationGuard::resume_offer`] at startup.

use tracing::{debug, info, warn};
use url::Url;

use crate::domain::filters::matching_word;
use crate::domain::{Decision, LoadFailure, Result};
use crate::service::store::Store;

/// Block/allow gate backed by a [`Store`].
pub struct NavigationGuard<'a> {
    store: &'a dyn Store,
    block_message: String,
}

impl<'a> NavigationGuard<'a> {
    pub fn new(store: &'a dyn Store, block_message: impl Into<String>) -> Self {
        Self {
            store,
            block_message: block_message.into(),
        }
    }

    /// Decide whether navigating to `candidate` may proceed.
    ///
    /// Reads one snapshot of the filter list; later edits do not affect
    /// a decision already in progress.
    pub fn decide(&self, candidate: &str) -> Result<Decision> {
        let filters = self.store.added_filters()?;
        if filters.is_empty() {
            debug!(url = %candidate, "No filters, allowing navigation");
            return Ok(Decision::Allow);
        }

        let candidate = candidate.to_lowercase();
        match matching_word(&candidate, filters.as_slice()) {
            Some(word) => {
                warn!(url = %candidate, word = %word, "Navigation blocked");
                Ok(Decision::Block {
                    message: self.block_message.clone(),
                })
            }
            None => {
                debug!(url = %candidate, "Navigation allowed");
                Ok(Decision::Allow)
            }
        }
    }

    /// Record `url` as the last opened page.
    pub fn commit(&self, url: &str) -> Result<()> {
        info!(url = %url, "Navigation committed");
        self.store.set_last_opened_page(Some(url))
    }

    /// Message to show the user for a failed load.
    ///
    /// Cancellations issued by the app itself are not failures from the
    /// user's point of view and yield `None`. Meant for embedders driving
    /// a real web view.
    pub fn failure_message(failure: &LoadFailure) -> Option<String> {
        match failure {
            LoadFailure::Cancelled => None,
            LoadFailure::Failed(description) => Some(description.clone()),
        }
    }

    /// Page to offer reopening at startup.
    ///
    /// Only offered when a last page exists, parses as a URL, is not
    /// blocked by the current filters, and nothing is showing yet.
    pub fn resume_offer(&self, page_showing: bool) -> Result<Option<Url>> {
        if page_showing {
            return Ok(None);
        }

        let Some(page) = self.store.last_opened_page()? else {
            return Ok(None);
        };

        let Ok(url) = Url::parse(&page) else {
            debug!(page = %page, "Ignoring unparseable last opened page");
            return Ok(None);
        };

        let filters = self.store.added_filters()?;
        if let Some(word) = matching_word(url.as_str(), filters.as_slice()) {
            debug!(page = %page, word = %word, "Last opened page is now blocked");
            return Ok(None);
        }

        Ok(Some(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::store::MemoryStore;

    fn guard(store: &MemoryStore) -> NavigationGuard<'_> {
        NavigationGuard::new(store, "Page is blocked")
    }

    #[test]
    fn test_no_filters_allows_everything() {
        let store = MemoryStore::new();
        assert_eq!(
            guard(&store).decide("https://casino.example").unwrap(),
            Decision::Allow
        );
    }

    #[test]
    fn test_blocks_with_configured_message() {
        let store = MemoryStore::with_filters(&["casino"]);
        let decision = NavigationGuard::new(&store, "Nope").decide("https://CASINO.example");
        assert_eq!(
            decision.unwrap(),
            Decision::Block {
                message: "Nope".to_string()
            }
        );
    }

    #[test]
    fn test_decision_uses_current_filters() {
        let store = MemoryStore::new();
        let guard = guard(&store);
        assert!(!guard.decide("https://cats.example").unwrap().is_blocked());

        let mut filters = store.added_filters().unwrap();
        filters.add("cat");
        store.set_added_filters(&filters).unwrap();
        assert!(guard.decide("https://cats.example").unwrap().is_blocked());
    }

    #[test]
    fn test_commit_records_last_page() {
        let store = MemoryStore::new();
        guard(&store).commit("https://example.com/").unwrap();
        assert_eq!(
            store.last_opened_page().unwrap().as_deref(),
            Some("https://example.com/")
        );
    }

    #[test]
    fn test_cancelled_load_is_silent() {
        assert_eq!(
            NavigationGuard::failure_message(&LoadFailure::Cancelled),
            None
        );
        assert_eq!(
            NavigationGuard::failure_message(&LoadFailure::Failed("offline".to_string())),
            Some("offline".to_string())
        );
    }

    #[test]
    fn test_resume_offer() {
        let store = MemoryStore::new();
        let guard = guard(&store);
        assert_eq!(guard.resume_offer(false).unwrap(), None);

        guard.commit("https://news.example/").unwrap();
        let offer = guard.resume_offer(false).unwrap().unwrap();
        assert_eq!(offer.as_str(), "https://news.example/");

        // Already showing a page
        assert_eq!(guard.resume_offer(true).unwrap(), None);
    }

    #[test]
    fn test_resume_skips_blocked_page() {
        let store = MemoryStore::with_filters(&["news"]);
        let guard = guard(&store);
        guard.commit("https://news.example/").unwrap();
        assert_eq!(guard.resume_offer(false).unwrap(), None);
    }

    #[test]
    fn test_resume_skips_unparseable_page() {
        let store = MemoryStore::new();
        store.set_last_opened_page(Some("not a url")).unwrap();
        assert_eq!(guard(&store).resume_offer(false).unwrap(), None);
    }
}
