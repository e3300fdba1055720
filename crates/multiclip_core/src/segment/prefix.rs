//! List marker matchers.
//!
//! Matchers are tried in priority order; the first match wins and yields the
//! line remainder after the marker and its separating spaces.

use once_cell::sync::Lazy;
use regex::Regex;

static DASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-\u{2013}\u{2014}]\s+(.*)$").expect("valid dash regex"));
static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\u{2022}\s+(.*)$").expect("valid bullet regex"));
static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+[.)]\s+(.*)$").expect("valid numbered regex"));

/// Recognizes one list marker style at the start of a line.
pub trait PrefixMatcher: Send + Sync {
    /// Short stable name used in diagnostics.
    fn name(&self) -> &str;

    /// Returns the text after the marker when `line` starts with one.
    fn strip_prefix<'a>(&self, line: &'a str) -> Option<&'a str>;
}

/// Regex-backed matcher; capture group 1 is the remainder.
#[derive(Debug, Clone)]
pub struct RegexPrefixMatcher {
    name: String,
    regex: Regex,
}

impl RegexPrefixMatcher {
    pub fn new(name: impl Into<String>, regex: Regex) -> Self {
        Self {
            name: name.into(),
            regex,
        }
    }

    /// Compiles `pattern`; it must contain at least one capture group.
    pub fn from_pattern(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(name, Regex::new(pattern)?))
    }
}

impl PrefixMatcher for RegexPrefixMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn strip_prefix<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|remainder| remainder.as_str())
    }
}

/// Built-in matchers in priority order: dash, bullet, numbered.
pub fn default_matchers() -> Vec<Box<dyn PrefixMatcher>> {
    vec![
        Box::new(RegexPrefixMatcher::new("dash", DASH_RE.clone())),
        Box::new(RegexPrefixMatcher::new("bullet", BULLET_RE.clone())),
        Box::new(RegexPrefixMatcher::new("numbered", NUMBERED_RE.clone())),
    ]
}
