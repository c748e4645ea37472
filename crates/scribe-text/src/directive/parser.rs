//! Directive and word parsing.
//!
//! Parses `(name)` and `(name, N)` markers and splits a line into tokens.

use super::{Token, TokenKind};

/// Kind of inline directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `(hex)`: base-16 literal to decimal.
    Hex,
    /// `(bin)`: base-2 literal to decimal.
    Bin,
    /// `(up)`: uppercase.
    Up,
    /// `(low)`: lowercase.
    Low,
    /// `(cap)`: first letter uppercase, remainder lowercase.
    Cap,
}

impl DirectiveKind {
    /// Look up a directive by its marker name.
    ///
    /// Names are matched exactly; `(HEX)` is not a directive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hex" => Some(Self::Hex),
            "bin" => Some(Self::Bin),
            "up" => Some(Self::Up),
            "low" => Some(Self::Low),
            "cap" => Some(Self::Cap),
            _ => None,
        }
    }

    /// Marker name as written inside the parentheses.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Bin => "bin",
            Self::Up => "up",
            Self::Low => "low",
            Self::Cap => "cap",
        }
    }

    /// Whether this is a numeric base marker (`hex`, `bin`).
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Hex | Self::Bin)
    }

    /// Whether this is a case-styling marker (`up`, `low`, `cap`).
    #[must_use]
    pub fn is_case(self) -> bool {
        !self.is_numeric()
    }
}

/// A parsed directive marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// Directive kind.
    pub kind: DirectiveKind,
    /// Number of preceding words the directive applies to (at least 1).
    pub width: usize,
}

/// Parse a directive marker at the start of `s`.
///
/// Returns the directive and the number of bytes the marker occupies.
/// Returns `None` if `s` does not start with a well-formed marker.
///
/// # Example
///
/// ```
/// use scribe_text::directive::{DirectiveKind, parse_directive};
///
/// let (directive, len) = parse_directive("(cap, 3) rest").unwrap();
/// assert_eq!(directive.kind, DirectiveKind::Cap);
/// assert_eq!(directive.width, 3);
/// assert_eq!(len, 8);
///
/// assert!(parse_directive("(hex, 2)").is_none());
/// ```
#[must_use]
pub fn parse_directive(s: &str) -> Option<(Directive, usize)> {
    let inner = s.strip_prefix('(')?;

    // Markers never nest: stop at the first bracket of either kind
    let close = inner.find(['(', ')'])?;
    if !inner[close..].starts_with(')') {
        return None;
    }

    let body = &inner[..close];
    let (name, arg) = match body.split_once(',') {
        Some((name, arg)) => (name.trim(), Some(arg.trim())),
        None => (body.trim(), None),
    };

    let kind = DirectiveKind::from_name(name)?;
    if kind.is_numeric() && arg.is_some() {
        return None;
    }

    let directive = Directive {
        kind,
        width: parse_width(arg),
    };

    // Opening and closing parentheses are one byte each
    Some((directive, close + 2))
}

/// Parse the optional span argument of a case directive.
///
/// Anything that is not a non-negative integer means one word, as does `0`.
/// A digit string too large for `usize` covers every preceding word.
fn parse_width(arg: Option<&str>) -> usize {
    let Some(arg) = arg else {
        return 1;
    };

    match arg.parse::<usize>() {
        Ok(0) => 1,
        Ok(width) => width,
        Err(_) if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) => usize::MAX,
        Err(_) => 1,
    }
}

/// Characters that make up a word: alphanumerics and apostrophes.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

/// Split a line into word, whitespace, punctuation, and directive tokens.
///
/// Concatenating the token texts reproduces the input exactly.
pub(crate) fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        let len = if c == '('
            && let Some((directive, len)) = parse_directive(rest)
        {
            tokens.push(Token::new(TokenKind::Directive(directive), &rest[..len]));
            len
        } else if c.is_whitespace() {
            let len = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            tokens.push(Token::new(TokenKind::Gap, &rest[..len]));
            len
        } else if is_word_char(c) {
            let len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
            let text = &rest[..len];
            // A run of bare apostrophes is quoting, not a word
            let kind = if text.chars().any(char::is_alphanumeric) {
                TokenKind::Word
            } else {
                TokenKind::Other
            };
            tokens.push(Token::new(kind, text));
            len
        } else {
            let len = c.len_utf8();
            tokens.push(Token::new(TokenKind::Other, &rest[..len]));
            len
        };

        rest = &rest[len..];
    }

    tokens
}
