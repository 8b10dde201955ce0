//! Substring matching of navigation candidates against filter words.

/// Split filter phrases into lowercase match words.
///
/// A phrase of several words contributes each word on its own, so
/// "foo bar" blocks URLs containing either "foo" or "bar".
pub fn match_words<S: AsRef<str>>(filters: &[S]) -> Vec<String> {
    filters
        .iter()
        .flat_map(|phrase| phrase.as_ref().split_whitespace())
        .map(str::to_lowercase)
        .collect()
}

/// Return the first filter word found in `candidate`, if any.
///
/// Matching is case-insensitive plain substring containment, so "cat"
/// matches "concatenate.com".
pub fn matching_word<S: AsRef<str>>(candidate: &str, filters: &[S]) -> Option<String> {
    if filters.is_empty() {
        return None;
    }

    let candidate = candidate.to_lowercase();
    match_words(filters)
        .into_iter()
        .find(|word| candidate.contains(word.as_str()))
}

/// Whether a navigation to `candidate` must be cancelled.
pub fn is_blocked<S: AsRef<str>>(candidate: &str, filters: &[S]) -> bool {
    matching_word(candidate, filters).is_some()
}
