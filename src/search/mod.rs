//! Search for a short pattern matching exactly a set of strings
//!
//! This module provides the pieces of the synthesizer:
//! - Boundary: binary search for the edge of a monotonic predicate
//! - Affix discovery: shared prefixes/suffixes of adjacent pairs in sorted order
//! - Synthesis: recursive, cost-driven choice between factorizations
//! - Parallel: batch synthesis of many independent sets

pub mod affix;
pub mod boundary;
pub mod candidate;
pub mod config;
pub mod parallel;
pub mod result;
pub mod synthesis;

pub use candidate::{AffixKind, Candidate, Range};
pub use config::SynthConfig;
pub use result::{SynthesisResult, SynthesisStatistics};
pub use synthesis::Synthesizer;
