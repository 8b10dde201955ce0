//! Domain layer containing core business logic.
//!
//! This module contains:
//! - Address bar resolution into URLs or search queries
//! - Word filter matching and the editable filter list
//! - Navigation decision types
//! - Logger with rotation

mod error;
pub mod filters;
pub mod logger;
pub mod resolver;
mod types;

pub use error::{FilterError, Result};
pub use filters::{is_blocked, FilterList, ListState};
pub use resolver::{resolve, UrlResolver};
pub use types::{Decision, DecisionOutput, LoadFailure, ResolvedUrl};
