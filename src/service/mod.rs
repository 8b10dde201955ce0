//! Service layer containing business logic orchestration.

mod browser_service;
pub mod navigation;
pub mod store;

pub use browser_service::{AddOutcome, BrowserService};
pub use navigation::NavigationGuard;
pub use store::{FileStore, MemoryStore, Store};
