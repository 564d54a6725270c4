//! Synthesis of short regular expressions that match exactly a given set of
//! strings and nothing else.
//!
//! ```
//! let pattern = shortre::synthesize(&["walking", "talking"]);
//! assert_eq!(pattern, "(?:t|w)alking");
//! ```
//!
//! The pattern targets the `regex` crate's syntax. It is not anchored: wrap it
//! as `^(?:...)$` (see [`semantics::syntax::anchored`]) for whole-string
//! matching.

pub mod order;
pub mod search;
pub mod semantics;
pub mod validation;

pub use search::{SynthConfig, SynthesisResult, Synthesizer};
pub use semantics::cost::CostMetric;
pub use semantics::syntax::{GroupStyle, NEVER_MATCH};

/// Synthesize a pattern matching exactly the distinct values of `values`,
/// using the default configuration.
pub fn synthesize<S: AsRef<str>>(values: &[S]) -> String {
    Synthesizer::default().run(values).pattern
}

/// Synthesize with an explicit configuration, returning costs and statistics
/// along with the pattern.
pub fn synthesize_with_config<S: AsRef<str>>(values: &[S], config: &SynthConfig) -> SynthesisResult {
    Synthesizer::new(config.clone()).run(values)
}
