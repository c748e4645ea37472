//! Configuration management for scribe.
//!
//! Parses `scribe.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [pipeline]
//! hex = true
//! bin = true
//! case = true
//! articles = true
//! punctuation = true
//! malformed_literals = "zero"  # or "keep"
//!
//! [processing]
//! parallel = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use scribe_text::MalformedLiteralPolicy;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override parallel processing.
    pub parallel: Option<bool>,
    /// Override malformed literal handling.
    pub malformed_literals: Option<MalformedLiteralPolicy>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "scribe.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stage selection and stage options.
    pub pipeline: PipelineSection,
    /// Line processing options.
    pub processing: ProcessingSection,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[pipeline]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PipelineSection {
    /// Decode `(hex)` literals.
    pub hex: bool,
    /// Decode `(bin)` literals.
    pub bin: bool,
    /// Resolve case directives.
    pub case: bool,
    /// Correct indefinite articles.
    pub articles: bool,
    /// Normalize punctuation spacing.
    pub punctuation: bool,
    /// Handling of literals that are invalid in their base.
    pub malformed_literals: MalformedLiteralPolicy,
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            hex: true,
            bin: true,
            case: true,
            articles: true,
            punctuation: true,
            malformed_literals: MalformedLiteralPolicy::default(),
        }
    }
}

impl PipelineSection {
    /// Whether at least one stage is enabled.
    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.hex || self.bin || self.case || self.articles || self.punctuation
    }
}

/// `[processing]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProcessingSection {
    /// Process lines in parallel.
    pub parallel: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `scribe.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(parallel) = settings.parallel {
            self.processing.parallel = parallel;
        }
        if let Some(policy) = settings.malformed_literals {
            self.pipeline.malformed_literals = policy;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if every pipeline stage is disabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pipeline.any_enabled() {
            return Err(ConfigError::Validation(
                "[pipeline] must enable at least one stage".to_owned(),
            ));
        }
        Ok(())
    }
}
