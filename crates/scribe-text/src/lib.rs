//! Inline directive resolution and prose cleanup for plain-text lines.
//!
//! Each line is rewritten independently by a fixed sequence of stages:
//!
//! 1. [`NumericLiteralDecoder`]: `1A (hex)` becomes `26`, then `101 (bin)`
//!    becomes `5`
//! 2. [`CaseDirectiveResolver`]: `the quick fox (cap, 2)` becomes `the Quick Fox`
//! 3. [`ArticleCorrector`]: `a apple` becomes `an apple`
//! 4. [`PunctuationNormalizer`]: `hello , world .` becomes `hello, world.`
//!
//! Every stage is total: malformed input degrades to a default instead of
//! failing, so processing a line always produces a line.
//!
//! # Example
//!
//! ```
//! use scribe_text::{Pipeline, PipelineConfig};
//!
//! let pipeline = Pipeline::new(PipelineConfig::default());
//! let output = pipeline.process_line("There is no greater agony than bearing a untold story inside you .");
//! assert_eq!(output, "There is no greater agony than bearing an untold story inside you.");
//! ```

mod article;
mod case;
pub mod directive;
mod numeric;
mod pipeline;
mod punctuation;
mod stage;

pub use article::ArticleCorrector;
pub use case::{CaseDirectiveResolver, ResolveReport};
pub use numeric::{Base, MalformedLiteralPolicy, NumericLiteralDecoder};
pub use pipeline::{Pipeline, PipelineConfig};
pub use punctuation::PunctuationNormalizer;
pub use stage::Stage;
