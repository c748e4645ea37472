//! Line rewriting pipeline.
//!
//! Runs the stages in fixed order: numeric decoding (hex sweep, then bin
//! sweep), case directives, article correction, punctuation spacing. Decoding
//! comes first so a decoded number can itself be the target of a case
//! directive.

use rayon::prelude::*;

use crate::article::ArticleCorrector;
use crate::case::CaseDirectiveResolver;
use crate::numeric::{Base, MalformedLiteralPolicy, NumericLiteralDecoder};
use crate::punctuation::PunctuationNormalizer;
use crate::stage::Stage;

/// Configuration for [`Pipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Decode `(hex)` literals.
    pub hex: bool,
    /// Decode `(bin)` literals.
    pub bin: bool,
    /// Resolve `(up)`, `(low)`, `(cap)` directives.
    pub case: bool,
    /// Correct `a` to `an`.
    pub articles: bool,
    /// Normalize punctuation spacing.
    pub punctuation: bool,
    /// Handling of literals that are invalid in their base.
    pub malformed_literals: MalformedLiteralPolicy,
    /// Process lines on the rayon thread pool.
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            hex: true,
            bin: true,
            case: true,
            articles: true,
            punctuation: true,
            malformed_literals: MalformedLiteralPolicy::default(),
            parallel: false,
        }
    }
}

/// Ordered list of line stages.
///
/// # Example
///
/// ```
/// use scribe_text::{Pipeline, PipelineConfig};
///
/// let pipeline = Pipeline::new(PipelineConfig::default());
/// assert_eq!(
///     pipeline.process_line("it was a 1E (hex) hour wait , sadly (up)"),
///     "it was a 30 hour wait, SADLY"
/// );
/// assert_eq!(
///     pipeline.process_text("a orange (cap)\n1010 (bin) apples\n"),
///     "an Orange\n10 apples\n"
/// );
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    parallel: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl Pipeline {
    /// Create a pipeline with the stages enabled in `config`.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        let mut stages: Vec<Box<dyn Stage>> = Vec::with_capacity(4);

        let bases: Vec<Base> = [(config.hex, Base::Hex), (config.bin, Base::Bin)]
            .into_iter()
            .filter_map(|(enabled, base)| enabled.then_some(base))
            .collect();
        if !bases.is_empty() {
            stages.push(Box::new(NumericLiteralDecoder::new(
                &bases,
                config.malformed_literals,
            )));
        }
        if config.case {
            stages.push(Box::new(CaseDirectiveResolver::new()));
        }
        if config.articles {
            stages.push(Box::new(ArticleCorrector::new()));
        }
        if config.punctuation {
            stages.push(Box::new(PunctuationNormalizer::new()));
        }

        Self {
            stages,
            parallel: config.parallel,
        }
    }

    /// Append a custom stage after the built-in ones.
    #[must_use]
    pub fn with_stage<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Stage names in execution order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage over one line.
    #[must_use]
    pub fn process_line(&self, line: &str) -> String {
        self.stages
            .iter()
            .fold(line.to_owned(), |acc, stage| stage.apply(&acc))
    }

    /// Process lines independently; output order matches input order.
    #[must_use]
    pub fn process_lines<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Vec<String> {
        let output: Vec<String> = if self.parallel {
            lines
                .par_iter()
                .map(|line| self.process_line(line.as_ref()))
                .collect()
        } else {
            lines
                .iter()
                .map(|line| self.process_line(line.as_ref()))
                .collect()
        };

        if tracing::enabled!(tracing::Level::DEBUG) {
            for (number, (before, after)) in lines.iter().zip(&output).enumerate() {
                if before.as_ref() != after {
                    tracing::debug!(line = number + 1, "Line rewritten");
                }
            }
        }

        output
    }

    /// Process a whole text. Every output line ends with a single `\n`.
    #[must_use]
    pub fn process_text(&self, text: &str) -> String {
        let lines: Vec<&str> = text.lines().collect();
        let mut out = String::with_capacity(text.len() + 1);
        for line in self.process_lines(&lines) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn process(line: &str) -> String {
        Pipeline::default().process_line(line)
    }

    #[test]
    fn test_stage_order() {
        let pipeline = Pipeline::default();
        assert_eq!(
            pipeline.stage_names(),
            vec!["numeric", "case", "articles", "punctuation"]
        );
    }

    #[test]
    fn test_disabled_stages_skipped() {
        let pipeline = Pipeline::new(PipelineConfig {
            bin: false,
            articles: false,
            ..PipelineConfig::default()
        });
        assert_eq!(pipeline.stage_names(), vec!["numeric", "case", "punctuation"]);
        assert_eq!(pipeline.process_line("a apple 11 (bin)"), "a apple 11 (bin)");
    }

    #[test]
    fn test_no_stages_is_identity() {
        let pipeline = Pipeline::new(PipelineConfig {
            hex: false,
            bin: false,
            case: false,
            articles: false,
            punctuation: false,
            ..PipelineConfig::default()
        });
        assert_eq!(pipeline.process_line("a apple (up) ,"), "a apple (up) ,");
    }

    #[test]
    fn test_custom_stage_runs_last() {
        struct Exclaim;

        impl Stage for Exclaim {
            fn name(&self) -> &'static str {
                "exclaim"
            }

            fn apply(&self, line: &str) -> String {
                format!("{line}!")
            }
        }

        let pipeline = Pipeline::default().with_stage(Exclaim);
        assert_eq!(pipeline.stage_names().last(), Some(&"exclaim"));
        assert_eq!(pipeline.process_line("wow (up) ."), "WOW.!");
    }

    #[test]
    fn test_hex_output_shielded_from_bin() {
        assert_eq!(process("10 (hex) (bin) apples"), "16 apples");
        assert_eq!(process("12 (bin) apples"), "0 apples");
    }

    #[test]
    fn test_only_bin_enabled() {
        let pipeline = Pipeline::new(PipelineConfig {
            hex: false,
            ..PipelineConfig::default()
        });
        assert_eq!(pipeline.process_line("ff (hex) 11 (bin)"), "ff (hex) 3");
    }

    #[test]
    fn test_decoded_literal_is_case_target() {
        // Decoding runs first, so the span of (up, 2) sees the decimal
        assert_eq!(process("ff (hex) bottles (up, 2)"), "255 BOTTLES");
    }

    #[test]
    fn test_case_before_articles() {
        // The article rule sees the restyled word
        assert_eq!(process("a HOUR (low)"), "an hour");
    }

    #[test]
    fn test_articles_before_punctuation() {
        assert_eq!(process("a apple ."), "an apple.");
    }

    #[test]
    fn test_full_line() {
        assert_eq!(
            process("If I make you BREAKFAST IN BED (low, 3) just say thank you instead of: how (cap) did you get in my house (up, 2) ?"),
            "If I make you breakfast in bed just say thank you instead of: How did you get in MY HOUSE?"
        );
    }

    #[test]
    fn test_keep_policy() {
        let pipeline = Pipeline::new(PipelineConfig {
            malformed_literals: MalformedLiteralPolicy::Keep,
            ..PipelineConfig::default()
        });
        assert_eq!(pipeline.process_line("zz (hex) and 2 (bin)"), "zz (hex) and 2 (bin)");
    }

    #[test]
    fn test_process_lines_preserves_order() {
        let lines = vec!["one (up)", "two (cap)", "a egg", "3 ,4"];
        let expected = vec!["ONE", "Two", "an egg", "3, 4"];

        let sequential = Pipeline::default().process_lines(&lines);
        let parallel = Pipeline::new(PipelineConfig {
            parallel: true,
            ..PipelineConfig::default()
        })
        .process_lines(&lines);

        assert_eq!(sequential, expected);
        assert_eq!(parallel, expected);
    }

    #[test]
    fn test_process_lines_many_parallel() {
        let lines: Vec<String> = (0..500).map(|i| format!("{i:x} (hex) item")).collect();
        let pipeline = Pipeline::new(PipelineConfig {
            parallel: true,
            ..PipelineConfig::default()
        });

        let output = pipeline.process_lines(&lines);

        assert_eq!(output.len(), 500);
        for (i, line) in output.iter().enumerate() {
            assert_eq!(line, &format!("{i} item"));
        }
    }

    #[test]
    fn test_process_text_newlines() {
        let pipeline = Pipeline::default();
        assert_eq!(pipeline.process_text("a owl\nb (up)"), "an owl\nB\n");
        assert_eq!(pipeline.process_text("x\r\ny\n"), "x\ny\n");
        assert_eq!(pipeline.process_text(""), "");
    }

    #[test]
    fn test_process_text_keeps_empty_lines() {
        assert_eq!(Pipeline::default().process_text("a\n\nb\n"), "a\n\nb\n");
    }
}
