//! Case-styling directive resolution.
//!
//! Resolves `(up)`, `(low)` and `(cap)` markers, with optional span widths such
//! as `(cap, 3)`, against the words that precede them.
//!
//! # Algorithm
//!
//! The line is tokenized once. Every case directive is then resolved in order
//! of appearance:
//!
//! 1. Walk backwards from the marker collecting up to `width` word tokens.
//!    Whitespace, punctuation and other markers are skipped, so markers that
//!    only have other markers between them and their words still resolve.
//! 2. No word found: the directive is bare and its marker is dropped.
//! 3. Otherwise the transform rewrites each collected word in place and the
//!    marker is dropped.
//!
//! Transforms never add or remove tokens, so word indices stay valid across
//! the whole pass. A directive whose span overlaps an earlier one sees the
//! earlier rewrite.
//!
//! Dropping a marker joins the text around it, which can spell a new marker
//! (`(lo (low)w)` renders as `(low)`). The rendered line is tokenized again
//! until no case directive remains. Every pass drops at least one marker, so
//! passes never exceed the number of directives settled.

use crate::directive::{Directive, DirectiveKind, Token, TokenKind, render, tokenize};
use crate::stage::Stage;

/// Resolution state of one directive occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectiveState {
    Unresolved,
    Resolving,
    /// Span transformed.
    Resolved,
    /// Bare marker removed.
    Deleted,
}

/// A case directive found in the token stream.
#[derive(Debug)]
struct Occurrence {
    /// Token index of the marker.
    index: usize,
    directive: Directive,
    state: DirectiveState,
}

/// Summary of one resolver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Directives whose span was transformed.
    pub resolved: usize,
    /// Bare directives that were deleted.
    pub deleted: usize,
    /// Passes over the line (0 when it had no case directives).
    pub passes: usize,
}

impl ResolveReport {
    /// Total directives settled.
    #[must_use]
    pub fn total(&self) -> usize {
        self.resolved + self.deleted
    }
}

/// Resolver for case-styling directives.
///
/// # Example
///
/// ```
/// use scribe_text::CaseDirectiveResolver;
///
/// let resolver = CaseDirectiveResolver::new();
/// assert_eq!(resolver.resolve("hello (up)"), "HELLO");
/// assert_eq!(resolver.resolve("the quick fox (cap, 2)"), "the Quick Fox");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseDirectiveResolver;

impl CaseDirectiveResolver {
    /// Create a resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolve every case directive in `line`.
    #[must_use]
    pub fn resolve(&self, line: &str) -> String {
        self.resolve_with_report(line).0
    }

    /// Resolve every case directive in `line` and report what happened.
    #[must_use]
    pub fn resolve_with_report(&self, line: &str) -> (String, ResolveReport) {
        let mut current = line.to_owned();
        let mut report = ResolveReport::default();

        while current.contains('(') {
            let mut tokens = tokenize(&current);
            let mut occurrences = collect_occurrences(&tokens);
            if occurrences.is_empty() {
                break;
            }

            for occurrence in &mut occurrences {
                debug_assert_eq!(occurrence.state, DirectiveState::Unresolved);
                occurrence.state = DirectiveState::Resolving;
                occurrence.state = apply(&mut tokens, occurrence);
            }

            report.resolved += count(&occurrences, DirectiveState::Resolved);
            report.deleted += count(&occurrences, DirectiveState::Deleted);
            report.passes += 1;
            current = render(&tokens);
        }

        if report.passes > 1 {
            tracing::trace!(passes = report.passes, "Rendering exposed new directives");
        }

        (current, report)
    }
}

impl Stage for CaseDirectiveResolver {
    fn name(&self) -> &'static str {
        "case"
    }

    fn apply(&self, line: &str) -> String {
        self.resolve(line)
    }
}

fn collect_occurrences(tokens: &[Token]) -> Vec<Occurrence> {
    tokens
        .iter()
        .enumerate()
        .filter_map(|(index, token)| match token.kind {
            TokenKind::Directive(directive) if directive.kind.is_case() => Some(Occurrence {
                index,
                directive,
                state: DirectiveState::Unresolved,
            }),
            _ => None,
        })
        .collect()
}

fn count(occurrences: &[Occurrence], state: DirectiveState) -> usize {
    occurrences.iter().filter(|o| o.state == state).count()
}

/// Resolve a single occurrence against the current tokens.
fn apply(tokens: &mut [Token], occurrence: &Occurrence) -> DirectiveState {
    let span = word_span(tokens, occurrence.index, occurrence.directive.width);
    tokens[occurrence.index].dropped = true;

    if span.is_empty() {
        tracing::trace!(
            marker = occurrence.directive.kind.name(),
            "Deleted bare directive"
        );
        return DirectiveState::Deleted;
    }

    for index in span {
        let styled = restyle(occurrence.directive.kind, &tokens[index].text);
        tokens[index].text = styled;
    }
    DirectiveState::Resolved
}

/// Indices of the last `width` words before `end`, nearest first.
fn word_span(tokens: &[Token], end: usize, width: usize) -> Vec<usize> {
    tokens[..end]
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, t)| t.is_word())
        .map(|(i, _)| i)
        .take(width)
        .collect()
}

fn restyle(kind: DirectiveKind, word: &str) -> String {
    match kind {
        DirectiveKind::Up => word.to_uppercase(),
        DirectiveKind::Low => word.to_lowercase(),
        DirectiveKind::Cap => capitalize(word),
        DirectiveKind::Hex | DirectiveKind::Bin => word.to_owned(),
    }
}

/// First alphanumeric character uppercase, remainder lowercase.
///
/// Leading apostrophes are kept, so `'tis` becomes `'Tis`.
fn capitalize(word: &str) -> String {
    let Some(first) = word.find(char::is_alphanumeric) else {
        return word.to_owned();
    };

    let (quotes, rest) = word.split_at(first);
    let mut chars = rest.chars();
    let mut out = String::with_capacity(word.len());
    out.push_str(quotes);
    if let Some(c) = chars.next() {
        out.extend(c.to_uppercase());
    }
    out.extend(chars.flat_map(char::to_lowercase));
    out
}
