//! website-filter: browser shell core.
//!
//! Resolves address bar input into URLs or search queries and decides,
//! per navigation, whether a page is blocked by the user's filter words.

pub mod config;
pub mod domain;
pub mod service;

pub use domain::{
    is_blocked, resolve, Decision, FilterError, FilterList, ListState, LoadFailure, ResolvedUrl,
    UrlResolver,
};
pub use service::{BrowserService, FileStore, MemoryStore, NavigationGuard, Store};
