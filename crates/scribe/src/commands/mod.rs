//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod fix;

use std::path::Path;

use scribe_config::Config;
use scribe_text::{Pipeline, PipelineConfig};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use fix::FixArgs;

/// Build the line pipeline described by the loaded configuration.
pub(crate) fn pipeline_from_config(config: &Config) -> Pipeline {
    let stages = &config.pipeline;
    Pipeline::new(PipelineConfig {
        hex: stages.hex,
        bin: stages.bin,
        case: stages.case,
        articles: stages.articles,
        punctuation: stages.punctuation,
        malformed_literals: stages.malformed_literals,
        parallel: config.processing.parallel,
    })
}

/// Read the input file, naming the path on failure.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Lines that differ between input and output, as `(line number, before, after)`.
pub(crate) fn changed_lines<'a, S: AsRef<str>>(
    input: &[&'a str],
    output: &'a [S],
) -> Vec<(usize, &'a str, &'a str)> {
    input
        .iter()
        .zip(output)
        .enumerate()
        .map(|(i, (before, after))| (i + 1, *before, AsRef::<str>::as_ref(after)))
        .filter(|(_, before, after)| before != after)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scribe_config::MalformedLiteralPolicy;

    use super::*;

    #[test]
    fn test_pipeline_from_default_config() {
        let pipeline = pipeline_from_config(&Config::default());
        assert_eq!(
            pipeline.stage_names(),
            vec!["numeric", "case", "articles", "punctuation"]
        );
    }

    #[test]
    fn test_pipeline_from_config_respects_sections() {
        let mut config = Config::default();
        config.pipeline.punctuation = false;
        config.pipeline.malformed_literals = MalformedLiteralPolicy::Keep;

        let pipeline = pipeline_from_config(&config);

        assert_eq!(
            pipeline.stage_names(),
            vec!["numeric", "case", "articles"]
        );
        assert_eq!(pipeline.process_line("zz (hex) ,"), "zz (hex) ,");
    }

    #[test]
    fn test_read_input_missing_names_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("absent.txt");

        let err = read_input(&path).unwrap_err();

        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn test_changed_lines() {
        let input = vec!["same", "a apple", "also same"];
        let output = vec![
            "same".to_owned(),
            "an apple".to_owned(),
            "also same".to_owned(),
        ];

        assert_eq!(
            changed_lines(&input, &output),
            vec![(2, "a apple", "an apple")]
        );
    }

    #[test]
    fn test_changed_lines_from_rendered_text() {
        let input = vec!["x (up)", "y"];
        let rendered = "X\ny\n";
        let output: Vec<&str> = rendered.split_terminator('\n').collect();

        assert_eq!(changed_lines(&input, &output), vec![(1, "x (up)", "X")]);
    }
}
