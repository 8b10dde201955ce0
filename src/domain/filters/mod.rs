//! Word filters: the block decision and the editable filter list.

mod engine;
mod list;

pub use engine::{is_blocked, match_words, matching_word};
pub use list::{is_acceptable_input, FilterList, ListState, DEFAULT_MIN_FILTER_LENGTH};
