//! Recursive synthesis of a pattern matching exactly a set of strings
//!
//! For every set the synthesizer compares three kinds of answers:
//! 1. Plain alternation of the escaped literals (the baseline)
//! 2. Factoring out a shared suffix, found in reverse order
//! 3. Factoring out a shared prefix, found in forward order
//!
//! A factored candidate looks like `before|PREFIX(?:middle)SUFFIX|after`,
//! where `before`, `middle` and `after` are synthesized recursively. Every
//! candidate is costed in full and the cheapest one wins; ties go to the
//! lexicographically smaller pattern so the output depends only on the set.

use std::collections::HashMap;
use std::time::Instant;

use crate::order::{sorted_forward, sorted_reverse};
use crate::search::affix::{common_affixes, shared_prefix, shared_suffix};
use crate::search::candidate::{AffixKind, Candidate};
use crate::search::config::SynthConfig;
use crate::search::result::{SynthesisResult, SynthesisStatistics};
use crate::semantics::cost::{naive_cost, pattern_cost, Fragment};
use crate::semantics::syntax::{embed_middle, escape_literal, NEVER_MATCH};

/// Patterns already synthesized during one run, keyed by the reverse-sorted
/// distinct set. Every sub-set borrows from the caller's strings.
type Memo<'a> = HashMap<Vec<&'a str>, String>;

/// Pattern synthesizer carrying its configuration and run statistics
pub struct Synthesizer {
    config: SynthConfig,
    statistics: SynthesisStatistics,
    depth: usize,
}

impl Synthesizer {
    pub fn new(config: SynthConfig) -> Self {
        Self {
            config,
            statistics: SynthesisStatistics::new(),
            depth: 0,
        }
    }

    /// Get statistics from the most recent run
    pub fn statistics(&self) -> &SynthesisStatistics {
        &self.statistics
    }

    /// Reset the run state for a new set
    pub fn reset(&mut self) {
        self.statistics = SynthesisStatistics::new();
        self.depth = 0;
    }

    /// Synthesize a pattern matching exactly the distinct values of `values`.
    ///
    /// `values` may be in any order and contain duplicates; it is never
    /// modified.
    pub fn run<S: AsRef<str>>(&mut self, values: &[S]) -> SynthesisResult {
        self.reset();
        let start_time = Instant::now();

        let values: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
        let mut memo = Memo::new();
        let pattern = self.synthesize(&values, &mut memo);

        let metric = self.config.cost_metric;
        let distinct = sorted_forward(&values);
        let naive = if distinct.is_empty() {
            pattern_cost(NEVER_MATCH, metric)
        } else {
            naive_cost(&distinct, metric)
        };
        let cost = pattern_cost(&pattern, metric);

        self.statistics.elapsed_time = start_time.elapsed();
        SynthesisResult::new(pattern, naive, cost, self.statistics.clone())
    }

    /// The pattern for a set depends only on its distinct members, so each
    /// sub-set is synthesized at most once per run.
    fn synthesize<'a>(&mut self, values: &[&'a str], memo: &mut Memo<'a>) -> String {
        let reversed = sorted_reverse(values);
        if let Some(pattern) = memo.get(&reversed) {
            self.statistics.memo_hits += 1;
            return pattern.clone();
        }

        self.statistics.calls += 1;
        self.depth += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(self.depth);

        let pattern = match reversed.as_slice() {
            [] => NEVER_MATCH.to_string(),
            [only] => escape_literal(only),
            _ => self.synthesize_distinct(&reversed, memo),
        };

        self.depth -= 1;
        memo.insert(reversed, pattern.clone());
        pattern
    }

    /// General case: at least two distinct values, sorted in reverse order.
    fn synthesize_distinct<'a>(&mut self, reversed: &[&'a str], memo: &mut Memo<'a>) -> String {
        let metric = self.config.cost_metric;
        let min_len = self.config.min_affix_len;
        let naive = naive_cost(reversed, metric);
        let mut best: Option<Fragment> = None;

        let suffixes = common_affixes(reversed, AffixKind::Suffix, min_len);
        self.statistics.suffix_candidates += suffixes.len() as u64;
        for candidate in &suffixes {
            let fragment = self.factor(reversed, candidate, memo);
            self.consider(&mut best, fragment, naive, candidate);
        }

        let forward = sorted_forward(reversed);
        let prefixes = common_affixes(&forward, AffixKind::Prefix, min_len);
        self.statistics.prefix_candidates += prefixes.len() as u64;
        for candidate in &prefixes {
            let fragment = self.factor(&forward, candidate, memo);
            self.consider(&mut best, fragment, naive, candidate);
        }

        match best {
            Some(fragment) => fragment.text,
            None => {
                self.statistics.fallbacks += 1;
                forward
                    .iter()
                    .map(|v| escape_literal(v))
                    .collect::<Vec<_>>()
                    .join("|")
            }
        }
    }

    /// Assemble the pattern that factors `candidate` out of `sorted`.
    fn factor<'a>(&mut self, sorted: &[&'a str], candidate: &Candidate<'a>, memo: &mut Memo<'a>) -> Fragment {
        let range = candidate.range;
        let block = &sorted[range.start..range.end];
        let (prefix, suffix) = match candidate.kind {
            AffixKind::Suffix => (shared_prefix(candidate.affix.len(), block), candidate.affix),
            AffixKind::Prefix => (candidate.affix, shared_suffix(candidate.affix.len(), block)),
        };

        let mut text = String::new();
        if range.has_before() {
            text.push_str(&self.synthesize(&sorted[..range.start], memo));
            text.push('|');
        }

        let middles: Vec<&'a str> = block
            .iter()
            .map(|&s| &s[prefix.len()..s.len() - suffix.len()])
            .collect();
        let middle = self.synthesize(&middles, memo);

        text.push_str(&escape_literal(prefix));
        text.push_str(&embed_middle(&middle, self.config.group_style));
        text.push_str(&escape_literal(suffix));

        if range.has_after(sorted.len()) {
            text.push('|');
            text.push_str(&self.synthesize(&sorted[range.end..], memo));
        }

        Fragment::new(text, self.config.cost_metric)
    }

    /// Keep `fragment` if it beats the best so far, or the naive cost when
    /// there is no best yet.
    fn consider(
        &mut self,
        best: &mut Option<Fragment>,
        fragment: Fragment,
        naive: usize,
        candidate: &Candidate<'_>,
    ) {
        self.statistics.candidates_evaluated += 1;

        let improves = match best {
            Some(current) => fragment.beats(current),
            None => fragment.cost < naive,
        };

        if self.config.verbose {
            let indent = "  ".repeat(self.depth);
            let verdict = if improves { "accepted" } else { "rejected" };
            eprintln!("{}{}: {} -> {}", indent, verdict, candidate, fragment);
        }

        if improves {
            self.statistics.improvements_found += 1;
            *best = Some(fragment);
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(SynthConfig::default())
    }
}
