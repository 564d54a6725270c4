//! Synthesis result types and statistics

use std::time::Duration;

/// Result of synthesizing a pattern for one string set
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// The synthesized pattern
    pub pattern: String,
    /// Cost of the plain escaped alternation of the distinct inputs
    pub naive_cost: usize,
    /// Cost of `pattern`
    pub cost: usize,
    /// Statistics from the synthesis
    pub statistics: SynthesisStatistics,
}

impl SynthesisResult {
    pub fn new(pattern: String, naive_cost: usize, cost: usize, statistics: SynthesisStatistics) -> Self {
        Self {
            pattern,
            naive_cost,
            cost,
            statistics,
        }
    }

    /// Get the cost savings (naive cost - pattern cost)
    pub fn cost_savings(&self) -> i64 {
        self.naive_cost as i64 - self.cost as i64
    }

    /// Whether the top level used a shared affix rather than plain alternation
    pub fn is_factored(&self) -> bool {
        self.cost < self.naive_cost
    }
}

/// Statistics from a synthesis run
#[derive(Debug, Clone, Default)]
pub struct SynthesisStatistics {
    /// Total time spent synthesizing
    pub elapsed_time: Duration,
    /// Number of distinct sub-sets synthesized
    pub calls: u64,
    /// Number of sub-sets answered from earlier work in the same run
    pub memo_hits: u64,
    /// Number of candidate factorizations assembled and costed
    pub candidates_evaluated: u64,
    /// Candidates discovered in reverse (suffix) order
    pub suffix_candidates: u64,
    /// Candidates discovered in forward (prefix) order
    pub prefix_candidates: u64,
    /// Number of times a candidate replaced the best so far
    pub improvements_found: u64,
    /// Number of calls that ended in plain alternation
    pub fallbacks: u64,
    /// Deepest recursion reached
    pub max_depth: usize,
}

impl SynthesisStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the counters of `other` into `self`
    pub fn merge(&mut self, other: &SynthesisStatistics) {
        self.elapsed_time += other.elapsed_time;
        self.calls += other.calls;
        self.memo_hits += other.memo_hits;
        self.candidates_evaluated += other.candidates_evaluated;
        self.suffix_candidates += other.suffix_candidates;
        self.prefix_candidates += other.prefix_candidates;
        self.improvements_found += other.improvements_found;
        self.fallbacks += other.fallbacks;
        self.max_depth = self.max_depth.max(other.max_depth);
    }

    /// Fraction of evaluated candidates that improved on the best so far
    pub fn improvement_rate(&self) -> f64 {
        if self.candidates_evaluated == 0 {
            0.0
        } else {
            self.improvements_found as f64 / self.candidates_evaluated as f64
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Calls: {} ({} memoized)\n", self.calls, self.memo_hits));
        s.push_str(&format!("Max depth: {}\n", self.max_depth));
        s.push_str(&format!(
            "Candidates: {} ({} suffix, {} prefix)\n",
            self.candidates_evaluated, self.suffix_candidates, self.prefix_candidates
        ));
        s.push_str(&format!(
            "Improvements: {} ({:.1}%)\n",
            self.improvements_found,
            self.improvement_rate() * 100.0
        ));
        s.push_str(&format!("Fallbacks: {}\n", self.fallbacks));
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_savings() {
        let result = SynthesisResult::new("abcd?".to_string(), 8, 5, SynthesisStatistics::new());
        assert_eq!(result.cost_savings(), 3);
        assert!(result.is_factored());
    }

    #[test]
    fn test_unfactored_result() {
        let result = SynthesisResult::new("x|y".to_string(), 3, 3, SynthesisStatistics::new());
        assert_eq!(result.cost_savings(), 0);
        assert!(!result.is_factored());
    }

    #[test]
    fn test_improvement_rate_empty() {
        assert_eq!(SynthesisStatistics::new().improvement_rate(), 0.0);
    }

    #[test]
    fn test_merge() {
        let mut a = SynthesisStatistics {
            calls: 3,
            memo_hits: 2,
            candidates_evaluated: 4,
            improvements_found: 1,
            max_depth: 2,
            ..Default::default()
        };
        let b = SynthesisStatistics {
            calls: 5,
            candidates_evaluated: 4,
            improvements_found: 3,
            max_depth: 1,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.calls, 8);
        assert_eq!(a.memo_hits, 2);
        assert_eq!(a.candidates_evaluated, 8);
        assert_eq!(a.max_depth, 2);
        assert_eq!(a.improvement_rate(), 0.5);
    }

    #[test]
    fn test_format_summary() {
        let stats = SynthesisStatistics {
            calls: 7,
            memo_hits: 4,
            candidates_evaluated: 2,
            suffix_candidates: 1,
            prefix_candidates: 1,
            ..Default::default()
        };
        let summary = stats.format_summary();
        assert!(summary.contains("Calls: 7 (4 memoized)"));
        assert!(summary.contains("Candidates: 2 (1 suffix, 1 prefix)"));
    }
}
