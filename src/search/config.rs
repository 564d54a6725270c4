//! Configuration types for pattern synthesis

use crate::search::affix::DEFAULT_MIN_AFFIX_LEN;
use crate::semantics::cost::CostMetric;
use crate::semantics::syntax::GroupStyle;

/// Main synthesis configuration
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Shortest shared prefix or suffix (in bytes) worth factoring out.
    /// Never below 1, or factoring would stop shrinking the problem.
    pub min_affix_len: usize,
    /// Cost metric used to compare candidate patterns
    pub cost_metric: CostMetric,
    /// Grouping syntax for factored middles
    pub group_style: GroupStyle,
    /// Trace candidates and improvements to stderr
    pub verbose: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            min_affix_len: DEFAULT_MIN_AFFIX_LEN,
            cost_metric: CostMetric::default(),
            group_style: GroupStyle::default(),
            verbose: false,
        }
    }
}

impl SynthConfig {
    pub fn with_min_affix_len(mut self, len: usize) -> Self {
        self.min_affix_len = len.max(1);
        self
    }

    pub fn with_cost_metric(mut self, metric: CostMetric) -> Self {
        self.cost_metric = metric;
        self
    }

    pub fn with_group_style(mut self, style: GroupStyle) -> Self {
        self.group_style = style;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
