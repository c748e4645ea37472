//! Hexadecimal and binary literal decoding.
//!
//! Replaces `<literal> (hex)` and `<literal> (bin)` with the decimal value of
//! the literal. One decoder sweeps every hex marker, then every bin marker,
//! over the same tokens. A literal converted by the hex sweep stays shielded
//! by its hex marker, so the bin sweep never re-reads the decimal.

use crate::directive::{DirectiveKind, Token, TokenKind, render, tokenize};
use crate::stage::Stage;

/// Numeric base handled by a [`NumericLiteralDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// Base 16, `(hex)` marker.
    Hex,
    /// Base 2, `(bin)` marker.
    Bin,
}

impl Base {
    /// Radix passed to the integer parser.
    #[must_use]
    pub fn radix(self) -> u32 {
        match self {
            Self::Hex => 16,
            Self::Bin => 2,
        }
    }

    fn marker(self) -> DirectiveKind {
        match self {
            Self::Hex => DirectiveKind::Hex,
            Self::Bin => DirectiveKind::Bin,
        }
    }
}

/// What to do with a literal that is not valid in the marker's base.
///
/// Invalid digits and values that overflow `u64` both count as malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MalformedLiteralPolicy {
    /// Replace the literal and marker with `0`.
    #[default]
    Zero,
    /// Leave the literal and marker untouched.
    Keep,
}

/// Decoder for hex and bin literals.
///
/// # Example
///
/// ```
/// use scribe_text::{Base, MalformedLiteralPolicy, NumericLiteralDecoder};
///
/// let decoder = NumericLiteralDecoder::new(&[Base::Hex, Base::Bin], MalformedLiteralPolicy::Zero);
/// assert_eq!(decoder.decode("1E (hex) files and 11 (bin) folders"), "30 files and 3 folders");
/// assert_eq!(decoder.decode("(hex) nothing before"), "nothing before");
/// assert_eq!(decoder.decode("10 (hex) (bin)"), "16");
/// ```
#[derive(Debug, Clone)]
pub struct NumericLiteralDecoder {
    bases: Vec<Base>,
    policy: MalformedLiteralPolicy,
}

impl NumericLiteralDecoder {
    /// Create a decoder that sweeps `bases` in the given order.
    #[must_use]
    pub fn new(bases: &[Base], policy: MalformedLiteralPolicy) -> Self {
        Self {
            bases: bases.to_vec(),
            policy,
        }
    }

    /// Bases in sweep order.
    #[must_use]
    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// Decode every marker of this decoder's bases in `line`.
    ///
    /// A marker directly preceded (ignoring whitespace) by a word has that word
    /// as its literal. Any other marker is bare and is deleted.
    #[must_use]
    pub fn decode(&self, line: &str) -> String {
        if !line.contains('(') {
            return line.to_owned();
        }

        let mut tokens = tokenize(line);
        for &base in &self.bases {
            self.sweep(&mut tokens, base);
        }
        render(&tokens)
    }

    fn sweep(&self, tokens: &mut [Token], base: Base) {
        let marker = base.marker();

        for index in 0..tokens.len() {
            let TokenKind::Directive(directive) = tokens[index].kind else {
                continue;
            };
            if directive.kind != marker {
                continue;
            }

            let Some(literal) = literal_before(tokens, index) else {
                tracing::trace!(marker = marker.name(), "Deleted bare marker");
                tokens[index].dropped = true;
                continue;
            };

            match u64::from_str_radix(&tokens[literal].text, base.radix()) {
                Ok(value) => {
                    tokens[literal].text = value.to_string();
                    tokens[index].dropped = true;
                }
                Err(e) => {
                    tracing::trace!(
                        literal = %tokens[literal].text,
                        marker = marker.name(),
                        error = %e,
                        "Malformed literal"
                    );
                    if self.policy == MalformedLiteralPolicy::Zero {
                        "0".clone_into(&mut tokens[literal].text);
                        tokens[index].dropped = true;
                    }
                }
            }
        }
    }
}

impl Stage for NumericLiteralDecoder {
    fn name(&self) -> &'static str {
        "numeric"
    }

    fn apply(&self, line: &str) -> String {
        self.decode(line)
    }
}

/// Index of the word a marker at `index` decodes, if any.
///
/// Only whitespace may separate the literal from the marker. A literal already
/// consumed by an earlier marker is shielded by that marker's token.
fn literal_before(tokens: &[Token], index: usize) -> Option<usize> {
    tokens[..index]
        .iter()
        .rposition(|t| !t.is_gap())
        .filter(|&i| tokens[i].is_word())
}
