//! Turns free-form address bar text into a navigable URL.
//!
//! Input that looks like a URL or a host name is navigated to directly;
//! anything else becomes a search-engine query.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::debug;
use url::Url;

use crate::domain::{FilterError, ResolvedUrl, Result};

/// Default search engine query prefix.
pub const DEFAULT_SEARCH_URL: &str = "https://google.com/search?q=";

/// Minimum number of characters (after removing spaces) for input to resolve.
pub const MIN_INPUT_LENGTH: usize = 2;

/// Characters escaped in a search query.
///
/// Everything outside the URL host-allowed set, plus the query delimiters
/// `&`, `+`, `=` so the text stays a single `q` value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Resolves user input against a configurable search engine.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    search_url: String,
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_URL)
    }
}

impl UrlResolver {
    /// Create a resolver whose search fallback appends the encoded query to `search_url`.
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
        }
    }

    /// Resolve `input` into a direct URL or a search query URL.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidInput`] when the input is shorter than
    /// two characters once spaces are removed, or when the constructed
    /// string is not a valid absolute URL. Direct URLs containing tabs,
    /// newlines or other control characters are rejected as well.
    pub fn resolve(&self, input: &str) -> Result<ResolvedUrl> {
        // Interior spaces are dropped too: "ex ample.com" -> "example.com"
        let compact: String = input.trim().chars().filter(|c| *c != ' ').collect();

        if compact.chars().count() < MIN_INPUT_LENGTH {
            return Err(FilterError::InvalidInput(format!(
                "'{}' is too short to resolve",
                input.trim()
            )));
        }

        let direct = has_http_scheme(&compact) || has_domain_suffix(&compact);
        if direct && compact.chars().any(|c| c.is_whitespace() || c.is_control()) {
            // The URL parser would silently drop tabs and newlines
            return Err(FilterError::InvalidInput(format!(
                "'{}' contains whitespace or control characters",
                compact.escape_debug()
            )));
        }

        let candidate = if has_http_scheme(&compact) {
            compact
        } else if direct {
            format!("https://{compact}")
        } else {
            let query = utf8_percent_encode(input.trim(), QUERY_VALUE);
            format!("{}{}", self.search_url, query)
        };

        let parsed = Url::parse(&candidate).map_err(|e| {
            FilterError::InvalidInput(format!("'{candidate}' is not a valid URL: {e}"))
        })?;

        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(FilterError::InvalidInput(format!(
                "'{candidate}' has no host to navigate to"
            )));
        }

        debug!(input = %input, resolved = %candidate, "Resolved address bar input");
        Ok(ResolvedUrl::new(candidate, parsed))
    }
}

/// Resolve `input` using the default search engine.
pub fn resolve(input: &str) -> Result<ResolvedUrl> {
    UrlResolver::default().resolve(input)
}

fn has_http_scheme(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// A `.` anywhere except the first position.
fn has_domain_suffix(text: &str) -> bool {
    text.chars().skip(1).any(|c| c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(input: &str) -> String {
        resolve(input).unwrap().into_string()
    }

    #[test]
    fn test_rejects_short_input() {
        for input in ["", " ", "a", "  a  ", " a ", "\t\n"] {
            assert!(
                matches!(resolve(input), Err(FilterError::InvalidInput(_))),
                "'{}' should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_spaces_do_not_count_toward_length() {
        // "a " has one character after stripping spaces
        assert!(resolve("a ").is_err());
        // "a b" strips to "ab", long enough, searched with the space kept
        assert_eq!(resolved("a b"), "https://google.com/search?q=a%20b");
    }

    #[test]
    fn test_host_gets_https() {
        assert_eq!(resolved("example.com"), "https://example.com");
        assert_eq!(resolved("  news.ycombinator.com  "), "https://news.ycombinator.com");
        assert_eq!(resolved("example.com/path?x=1"), "https://example.com/path?x=1");
    }

    #[test]
    fn test_explicit_scheme_kept_as_is() {
        assert_eq!(resolved("http://example.com"), "http://example.com");
        assert_eq!(resolved("https://example.com/a"), "https://example.com/a");
        assert_eq!(resolved("HTTPS://Example.com"), "HTTPS://Example.com");
    }

    #[test]
    fn test_interior_spaces_removed_before_domain_check() {
        assert_eq!(resolved("ex ample.com"), "https://example.com");
        assert_eq!(resolved("http://exa mple.com"), "http://example.com");
    }

    #[test]
    fn test_search_fallback() {
        assert_eq!(
            resolved("hello world"),
            "https://google.com/search?q=hello%20world"
        );
        assert_eq!(resolved("rust"), "https://google.com/search?q=rust");
    }

    #[test]
    fn test_leading_dot_is_not_a_domain() {
        assert_eq!(resolved(".com"), "https://google.com/search?q=.com");
    }

    #[test]
    fn test_search_query_escapes_delimiters() {
        assert_eq!(
            resolved("c++ & co"),
            "https://google.com/search?q=c%2B%2B%20%26%20co"
        );
        assert_eq!(resolved("50%"), "https://google.com/search?q=50%25");
    }

    #[test]
    fn test_search_query_encodes_unicode() {
        assert_eq!(resolved("кот"), "https://google.com/search?q=%D0%BA%D0%BE%D1%82");
    }

    #[test]
    fn test_unparseable_url_rejected() {
        assert!(matches!(resolve("http://"), Err(FilterError::InvalidInput(_))));
        assert!(matches!(
            resolve("https://[::1"),
            Err(FilterError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_direct_url_with_tab_or_newline_rejected() {
        for input in ["exa\tmple.com", "exam\nple.com", "https://exa\rmple.com"] {
            assert!(
                matches!(resolve(input), Err(FilterError::InvalidInput(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_search_query_escapes_tab() {
        assert_eq!(resolved("a\tb"), "https://google.com/search?q=a%09b");
    }

    #[test]
    fn test_percent_encoded_host_is_decoded_when_parsed() {
        let url = resolve("https://ex%61mple.com").unwrap();
        assert_eq!(url.as_str(), "https://ex%61mple.com");
        assert_eq!(url.navigation_target(), "https://example.com/");
    }

    #[test]
    fn test_custom_search_engine() {
        let resolver = UrlResolver::new("https://duckduckgo.com/?q=");
        assert_eq!(
            resolver.resolve("rust lang").unwrap().as_str(),
            "https://duckduckgo.com/?q=rust%20lang"
        );
        // Direct URLs ignore the search engine
        assert_eq!(
            resolver.resolve("example.org").unwrap().as_str(),
            "https://example.org"
        );
    }

    #[test]
    fn test_resolved_url_is_parsed() {
        let url = resolve("example.com").unwrap();
        assert_eq!(url.url().host_str(), Some("example.com"));
        assert_eq!(url.url().scheme(), "https");
    }
}
