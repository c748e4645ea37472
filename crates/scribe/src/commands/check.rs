//! `scribe check` command implementation.

use std::path::PathBuf;

use clap::Args;
use scribe_config::{CliSettings, Config, MalformedLiteralPolicy};

use super::{changed_lines, pipeline_from_config, read_input};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// File to inspect.
    input: PathBuf,

    /// Path to configuration file (default: auto-discover scribe.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Process lines in parallel (overrides config).
    #[arg(long)]
    parallel: bool,

    /// Leave literals that are invalid in their base untouched (overrides config).
    #[arg(long)]
    keep_malformed: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Check` if any line would be rewritten, or an error
    /// if configuration fails or the input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            parallel: self.parallel.then_some(true),
            malformed_literals: self.keep_malformed.then_some(MalformedLiteralPolicy::Keep),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let pipeline = pipeline_from_config(&config);
        let text = read_input(&self.input)?;
        let lines: Vec<&str> = text.lines().collect();
        let rewritten = pipeline.process_lines(&lines);
        let diffs = changed_lines(&lines, &rewritten);

        tracing::info!(lines = lines.len(), changed = diffs.len(), "Check completed");

        if diffs.is_empty() {
            output.summary(&format!("{}: nothing to rewrite", self.input.display()));
            return Ok(());
        }

        for &(number, before, after) in &diffs {
            output.line_change(&self.input, number, before, after);
        }

        Err(CliError::Check {
            changed: diffs.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn args(dir: &Path, input: &str) -> CheckArgs {
        let config = dir.join("scribe.toml");
        std::fs::write(&config, "").unwrap();
        let input_path = dir.join("input.txt");
        std::fs::write(&input_path, input).unwrap();
        CheckArgs {
            input: input_path,
            config: Some(config),
            parallel: false,
            keep_malformed: false,
            verbose: false,
        }
    }

    #[test]
    fn test_check_clean_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = args(temp_dir.path(), "Nothing to see here.\nAn apple a day.\n");

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_check_reports_changed_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = args(
            temp_dir.path(),
            "fine\na apple\nalso fine\nshout (up)\n",
        );

        let err = args.execute().unwrap_err();

        assert!(matches!(err, CliError::Check { changed: 2 }));
        assert_eq!(err.to_string(), "2 line(s) need rewriting");
    }

    #[test]
    fn test_check_keep_malformed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut args = args(temp_dir.path(), "zz (hex)\n");
        args.keep_malformed = true;

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_check_does_not_write() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = args(temp_dir.path(), "a apple\n");
        let input_path = args.input.clone();

        let _ = args.execute();

        assert_eq!(std::fs::read_to_string(input_path).unwrap(), "a apple\n");
    }

    #[test]
    fn test_check_missing_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut args = args(temp_dir.path(), "");
        args.input = temp_dir.path().join("nope.txt");

        let err = args.execute().unwrap_err();

        assert!(matches!(err, CliError::Read { .. }));
    }
}
