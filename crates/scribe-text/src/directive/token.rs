//! Line tokens and rendering.

use super::Directive;

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Run of alphanumeric/apostrophe characters with at least one alphanumeric.
    Word,
    /// Run of whitespace.
    Gap,
    /// Punctuation and any other non-word text.
    Other,
    /// Directive marker such as `(up, 2)`.
    Directive(Directive),
}

/// A slice of a line with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Current text. Stages rewrite word text in place.
    pub text: String,
    /// Set on directive tokens once they are resolved or deleted.
    pub dropped: bool,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_owned(),
            dropped: false,
        }
    }

    pub(crate) fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub(crate) fn is_gap(&self) -> bool {
        self.kind == TokenKind::Gap
    }
}

/// Join tokens back into a line, omitting dropped directives.
///
/// A dropped directive takes the whitespace directly before it with it. At the
/// start of the output it takes one whitespace character after it instead, so
/// `(hex) rest` renders as `rest`.
pub(crate) fn render(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());
    let mut strip_next = false;

    for token in tokens {
        if token.dropped {
            let kept = out.trim_end().len();
            out.truncate(kept);
            strip_next = out.is_empty();
            continue;
        }

        if strip_next && token.is_gap() {
            let mut chars = token.text.chars();
            chars.next();
            out.push_str(chars.as_str());
        } else {
            out.push_str(&token.text);
        }
        strip_next = false;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::super::tokenize;
    use super::*;

    fn drop_directives(line: &str) -> String {
        let mut tokens = tokenize(line);
        for token in &mut tokens {
            if matches!(token.kind, TokenKind::Directive(_)) {
                token.dropped = true;
            }
        }
        render(&tokens)
    }

    #[test]
    fn test_render_unchanged() {
        let line = "nothing  to (see) here, really.";
        assert_eq!(render(&tokenize(line)), line);
    }

    #[test]
    fn test_render_drops_preceding_gap() {
        assert_eq!(drop_directives("hello (up) world"), "hello world");
        assert_eq!(drop_directives("hello   (up)"), "hello");
    }

    #[test]
    fn test_render_at_line_start_strips_one_char() {
        assert_eq!(drop_directives("(hex) rest"), "rest");
        assert_eq!(drop_directives("(hex)   rest"), "  rest");
        assert_eq!(drop_directives("  (up) rest"), "rest");
        assert_eq!(drop_directives("(up)"), "");
    }

    #[test]
    fn test_render_consecutive_directives() {
        assert_eq!(drop_directives("word (up) (low) next"), "word next");
    }

    #[test]
    fn test_render_keeps_gap_after_punctuation() {
        assert_eq!(drop_directives("hi,(up) there"), "hi, there");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }
}
