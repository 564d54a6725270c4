//! Validation utilities for checking synthesized patterns
//!
//! The synthesizer never runs a regex itself. These helpers compile a pattern
//! with the `regex` crate and confirm it accepts the set and rejects near
//! misses.

pub mod exactness;
pub mod near_miss;

pub use exactness::{check_exactness, compile_exact, ExactnessReport, ValidationError};
pub use near_miss::{generate_near_misses, NearMissConfig};

/// Check `pattern` against `members` and a generated near-miss corpus
pub fn verify_pattern<S: AsRef<str>>(
    pattern: &str,
    members: &[S],
    config: &NearMissConfig,
) -> Result<ExactnessReport, ValidationError> {
    let probes = generate_near_misses(members, config);
    check_exactness(pattern, members, &probes)
}
