//! Styled stderr reporting for `fix` and `check`.

use std::path::Path;

use console::{Style, Term};

/// Writes command summaries and line diffs to stderr.
///
/// Rewritten text only ever goes to the output file, never to the terminal.
pub(crate) struct Output {
    term: Term,
    location: Style,
    removed: Style,
    added: Style,
    failure: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            location: Style::new().cyan().bold(),
            removed: Style::new().yellow(),
            added: Style::new().green(),
            failure: Style::new().red(),
        }
    }

    /// Final one-line summary of a successful run.
    pub(crate) fn summary(&self, msg: &str) {
        self.write(&self.added.apply_to(msg).to_string());
    }

    /// Fatal error, printed just before exiting.
    pub(crate) fn error(&self, msg: &str) {
        self.write(&self.failure.apply_to(msg).to_string());
    }

    /// One line that a fix would rewrite, as `path:line` then before/after.
    pub(crate) fn line_change(&self, path: &Path, number: usize, before: &str, after: &str) {
        let location = format!("{}:{number}", path.display());
        self.write(&self.location.apply_to(location).to_string());
        self.write(&self.removed.apply_to(format!("  - {before}")).to_string());
        self.write(&self.added.apply_to(format!("  + {after}")).to_string());
    }

    fn write(&self, line: &str) {
        // Write failures on stderr are ignored
        let _ = self.term.write_line(line);
    }
}
