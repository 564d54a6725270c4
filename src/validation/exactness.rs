//! Exactness checking: a pattern must match every member and nothing else

use std::collections::HashSet;
use std::fmt;

use regex::Regex;

use crate::semantics::syntax::anchored;

/// Why a pattern failed exactness checking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The regex engine rejected the pattern
    InvalidPattern { pattern: String, message: String },
    /// A member of the set did not match
    MissedMember(String),
    /// A string outside the set matched
    AcceptedOutsider(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidPattern { pattern, message } => {
                write!(f, "pattern {:?} does not compile: {}", pattern, message)
            }
            ValidationError::MissedMember(member) => {
                write!(f, "pattern does not match member {:?}", member)
            }
            ValidationError::AcceptedOutsider(probe) => {
                write!(f, "pattern matches non-member {:?}", probe)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Summary of a successful exactness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExactnessReport {
    /// Members confirmed to match
    pub members_checked: usize,
    /// Non-member probes confirmed not to match
    pub probes_checked: usize,
    /// Probes skipped because they are members
    pub probes_skipped: usize,
}

/// Compile `pattern` so that it must match a whole input
pub fn compile_exact(pattern: &str) -> Result<Regex, ValidationError> {
    Regex::new(&anchored(pattern)).map_err(|e| ValidationError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Check that `pattern` fully matches every member and none of the probes.
///
/// Probes that happen to be members are skipped rather than reported.
pub fn check_exactness<S, P>(
    pattern: &str,
    members: &[S],
    probes: &[P],
) -> Result<ExactnessReport, ValidationError>
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    let re = compile_exact(pattern)?;
    let mut report = ExactnessReport::default();

    // Members are checked in input order so the first failure reported is
    // stable across runs.
    let mut member_set: HashSet<&str> = HashSet::with_capacity(members.len());
    for member in members.iter().map(AsRef::as_ref) {
        if !member_set.insert(member) {
            continue;
        }
        if !re.is_match(member) {
            return Err(ValidationError::MissedMember(member.to_string()));
        }
        report.members_checked += 1;
    }

    for probe in probes {
        let probe = probe.as_ref();
        if member_set.contains(probe) {
            report.probes_skipped += 1;
            continue;
        }
        if re.is_match(probe) {
            return Err(ValidationError::AcceptedOutsider(probe.to_string()));
        }
        report.probes_checked += 1;
    }

    Ok(report)
}
