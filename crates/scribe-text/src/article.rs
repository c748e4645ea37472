//! Indefinite article correction.

use std::sync::LazyLock;

use regex::Regex;

use crate::stage::Stage;

/// Standalone `a`/`A` followed by whitespace.
static ARTICLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[aA]\s+").expect("invalid article regex"));

/// Rewrites `a` to `an` before words starting with a vowel or `h`.
///
/// # Example
///
/// ```
/// use scribe_text::ArticleCorrector;
///
/// let corrector = ArticleCorrector::new();
/// assert_eq!(corrector.correct("A owl and a hawk"), "An owl and an hawk");
/// assert_eq!(corrector.correct("a banana"), "a banana");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleCorrector;

impl ArticleCorrector {
    /// Create an article corrector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Correct every qualifying article in `line`.
    ///
    /// The article keeps its case and the whitespace after it is preserved.
    #[must_use]
    pub fn correct(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() + 4);
        let mut last = 0;

        for m in ARTICLE_PATTERN.find_iter(line) {
            let next = line[m.end()..].chars().next();
            if next.is_some_and(takes_an) {
                // The article is a single ASCII byte
                let article_end = m.start() + 1;
                out.push_str(&line[last..article_end]);
                out.push('n');
                last = article_end;
            }
        }

        out.push_str(&line[last..]);
        out
    }
}

impl Stage for ArticleCorrector {
    fn name(&self) -> &'static str {
        "articles"
    }

    fn apply(&self, line: &str) -> String {
        self.correct(line)
    }
}

fn takes_an(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'h')
}
