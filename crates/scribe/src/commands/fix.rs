//! `scribe fix` command implementation.

use std::path::PathBuf;

use clap::Args;
use scribe_config::{CliSettings, Config, MalformedLiteralPolicy};

use super::{changed_lines, pipeline_from_config, read_input};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the fix command.
#[derive(Args)]
pub(crate) struct FixArgs {
    /// File to read.
    input: PathBuf,

    /// File to write the rewritten text to.
    output: PathBuf,

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

impl FixArgs {
    /// Execute the fix command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, or the input cannot be read
    /// or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            parallel: self.parallel.then_some(true),
            malformed_literals: self.keep_malformed.then_some(MalformedLiteralPolicy::Keep),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let pipeline = pipeline_from_config(&config);
        let text = read_input(&self.input)?;
        let result = pipeline.process_text(&text);

        let lines: Vec<&str> = text.lines().collect();
        let rewritten: Vec<&str> = result.split_terminator('\n').collect();
        let changed = changed_lines(&lines, &rewritten).len();

        std::fs::write(&self.output, &result).map_err(|source| CliError::Write {
            path: self.output.clone(),
            source,
        })?;

        tracing::info!(lines = lines.len(), changed, "Processing completed");
        output.summary(&format!(
            "Wrote {} ({} line(s), {changed} rewritten)",
            self.output.display(),
            lines.len()
        ));

        Ok(())
    }
}
