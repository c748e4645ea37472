//! Pipeline stage trait.

/// A pure line-to-line rewrite.
///
/// Stages never see more than one line and keep no state between calls, so a
/// single instance can be shared across threads.
///
/// # Example
///
/// ```
/// use scribe_text::{Pipeline, PipelineConfig, Stage};
///
/// struct Trim;
///
/// impl Stage for Trim {
///     fn name(&self) -> &str { "trim" }
///
///     fn apply(&self, line: &str) -> String {
///         line.trim().to_owned()
///     }
/// }
///
/// let pipeline = Pipeline::new(PipelineConfig::default()).with_stage(Trim);
/// assert_eq!(pipeline.process_line("  hello (up)  "), "HELLO");
/// ```
pub trait Stage: Send + Sync {
    /// Stage name, used in logs and for inspecting stage order.
    fn name(&self) -> &str;

    /// Rewrite one line.
    fn apply(&self, line: &str) -> String;
}
