//! Cost model for regex fragments

use std::fmt;

use crate::semantics::syntax::escape_literal;

/// Cost metric for evaluating fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostMetric {
    /// Length of the pattern in UTF-8 bytes (default)
    #[default]
    Bytes,
    /// Number of characters in the pattern
    Chars,
}

impl fmt::Display for CostMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostMetric::Bytes => write!(f, "bytes"),
            CostMetric::Chars => write!(f, "chars"),
        }
    }
}

/// Get the cost of a pattern text
pub fn pattern_cost(pattern: &str, metric: CostMetric) -> usize {
    match metric {
        CostMetric::Bytes => pattern.len(),
        CostMetric::Chars => pattern.chars().count(),
    }
}

/// Cost of joining the escaped `values` with `|`.
///
/// This is the plain alternation every factored candidate has to beat.
pub fn naive_cost(values: &[&str], metric: CostMetric) -> usize {
    let literals: usize = values
        .iter()
        .map(|v| pattern_cost(&escape_literal(v), metric))
        .sum();
    literals + values.len().saturating_sub(1)
}

/// A synthesized pattern together with its cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub cost: usize,
}

impl Fragment {
    pub fn new(text: String, metric: CostMetric) -> Self {
        let cost = pattern_cost(&text, metric);
        Self { text, cost }
    }

    /// Whether this fragment should replace `other`: strictly cheaper, or
    /// equally cheap and lexicographically smaller.
    pub fn beats(&self, other: &Fragment) -> bool {
        self.cost < other.cost || (self.cost == other.cost && self.text < other.text)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cost {})", self.text, self.cost)
    }
}
