//! Core domain types for navigation decisions.

use std::fmt;

use serde::Serialize;
use url::Url;

/// A URL produced by the resolver.
///
/// Keeps the exact string that was built from user input alongside the
/// parsed form, since `Url` re-serializes (`https://example.com` would
/// gain a trailing slash).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    raw: String,
    parsed: Url,
}

impl ResolvedUrl {
    pub(crate) fn new(raw: String, parsed: Url) -> Self {
        Self { raw, parsed }
    }

    /// The constructed URL string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The URL that actually loads, as the parser normalized it.
    ///
    /// Filter decisions and the last opened page use this form: a host
    /// like `ex%61mple.com` is decoded to `example.com` here.
    pub fn navigation_target(&self) -> &str {
        self.parsed.as_str()
    }

    /// The parsed URL.
    pub fn url(&self) -> &Url {
        &self.parsed
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Serializable form of a [`Decision`].
#[derive(Debug, Clone, Serialize)]
pub struct DecisionOutput {
    /// Decision: "allow" or "block"
    pub decision: String,

    /// The navigation candidate the decision was taken for
    pub url: String,

    /// Optional message (present when blocking)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Navigation decision with optional block message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the navigation proceed
    Allow,
    /// Cancel the navigation and tell the user why
    Block { message: String },
}

impl Decision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block { .. })
    }

    /// Convert decision to its serializable output.
    pub fn into_output(self, url: &str) -> DecisionOutput {
        match self {
            Decision::Allow => DecisionOutput {
                decision: "allow".to_string(),
                url: url.to_string(),
                message: None,
            },
            Decision::Block { message } => DecisionOutput {
                decision: "block".to_string(),
                url: url.to_string(),
                message: Some(message),
            },
        }
    }

    /// Get exit code for this decision.
    ///
    /// - Allow: 0
    /// - Block: 2
    pub fn exit_code(&self) -> i32 {
        match self {
            Decision::Allow => 0,
            Decision::Block { .. } => 2,
        }
    }
}

/// Why a page load did not complete.
///
/// Reported by an embedding web view; the CLI never loads pages itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The app itself cancelled the navigation (e.g. after a block decision)
    Cancelled,
    /// Any other failure, with a human-readable description
    Failed(String),
}
