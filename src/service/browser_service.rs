//! Browser shell service: address bar, navigation and filter editing.

use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::domain::filters::is_acceptable_input;
use crate::domain::{Decision, FilterList, ResolvedUrl, Result, UrlResolver};
use crate::service::navigation::NavigationGuard;
use crate::service::store::Store;

/// Outcome of submitting a new filter phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Phrase stored (or moved to the end if already present)
    Added,
    /// Phrase shorter than the configured minimum
    TooShort { min_len: usize },
}

/// Service tying the resolver, the filter list and the store together.
pub struct BrowserService<S: Store> {
    config: Config,
    store: S,
    resolver: UrlResolver,
}

impl<S: Store> BrowserService<S> {
    /// Create a new BrowserService over an opened store.
    pub fn new(config: Config, store: S) -> Self {
        let resolver = UrlResolver::new(config.search_url.clone());
        Self {
            config,
            store,
            resolver,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn guard(&self) -> NavigationGuard<'_> {
        NavigationGuard::new(&self.store, self.config.block_message.clone())
    }

    /// Resolve address bar text without navigating.
    pub fn resolve(&self, input: &str) -> Result<ResolvedUrl> {
        self.resolver.resolve(input)
    }

    /// Resolve `input` and attempt to navigate to it.
    ///
    /// An allowed navigation is committed as the last opened page.
    pub fn visit(&self, input: &str) -> Result<(ResolvedUrl, Decision)> {
        let url = self.resolver.resolve(input)?;
        let guard = self.guard();
        let decision = guard.decide(url.navigation_target())?;

        if let Decision::Allow = decision {
            guard.commit(url.navigation_target())?;
        }

        debug!(url = %url, blocked = decision.is_blocked(), "Visit finished");
        Ok((url, decision))
    }

    /// Current filter phrases in display order.
    pub fn filters(&self) -> Result<FilterList> {
        self.store.added_filters()
    }

    /// Submit a phrase from the add dialog.
    pub fn add_filter(&self, text: &str) -> Result<AddOutcome> {
        let min_len = self.config.min_filter_length;
        if !is_acceptable_input(text, min_len) {
            debug!(text = %text, min_len, "Filter phrase too short");
            return Ok(AddOutcome::TooShort { min_len });
        }

        let mut filters = self.store.added_filters()?;
        filters.add(text.trim());
        self.store.set_added_filters(&filters)?;

        info!(phrase = %text.trim(), total = filters.len(), "Filter added");
        Ok(AddOutcome::Added)
    }

    /// Delete the phrase shown at `row`.
    pub fn remove_filter(&self, row: usize) -> Result<String> {
        let mut filters = self.store.added_filters()?;
        let removed = filters.remove_at(row)?;
        self.store.set_added_filters(&filters)?;

        info!(phrase = %removed, total = filters.len(), "Filter removed");
        Ok(removed)
    }

    /// Page to offer reopening when nothing is showing.
    pub fn resume_offer(&self) -> Result<Option<Url>> {
        self.guard().resume_offer(false)
    }
}
