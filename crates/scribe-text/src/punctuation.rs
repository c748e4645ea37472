//! Punctuation spacing normalization.
//!
//! Three substitutions, applied in order:
//!
//! 1. A single space before `. , ! ? : ;` is removed.
//! 2. A comma directly followed by a non-space character gets one space.
//! 3. Whitespace just inside a single-quoted span is trimmed.
//!
//! Quote handling is pattern-based, not a balance parser. An opening quote must
//! sit at line start or after a non-word character, which keeps apostrophes in
//! words like `don't` from opening a span.

use std::sync::LazyLock;

use regex::Regex;

use crate::stage::Stage;

static SPACE_BEFORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ([.,!?:;])").expect("invalid punctuation regex"));

static COMMA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",([^ ])").expect("invalid comma regex"));

static QUOTED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\W)'\s*([^']*?)\s*'").expect("invalid quote regex")
});

/// Normalizes spacing around punctuation and inside single quotes.
///
/// # Example
///
/// ```
/// use scribe_text::PunctuationNormalizer;
///
/// let normalizer = PunctuationNormalizer::new();
/// assert_eq!(normalizer.normalize("hello , world ."), "hello, world.");
/// assert_eq!(normalizer.normalize("' quoted text '"), "'quoted text'");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationNormalizer;

impl PunctuationNormalizer {
    /// Create a punctuation normalizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Normalize punctuation spacing in `line`.
    #[must_use]
    pub fn normalize(&self, line: &str) -> String {
        let line = SPACE_BEFORE_PATTERN.replace_all(line, "$1");
        let line = COMMA_PATTERN.replace_all(&line, ", $1");
        QUOTED_PATTERN.replace_all(&line, "$1'$2'").into_owned()
    }
}

impl Stage for PunctuationNormalizer {
    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn apply(&self, line: &str) -> String {
        self.normalize(line)
    }
}
