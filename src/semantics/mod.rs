//! Pattern semantics: regex dialect and cost model

pub mod cost;
pub mod syntax;

pub use cost::{naive_cost, pattern_cost, CostMetric, Fragment};
pub use syntax::{anchored, escape_literal, GroupStyle, NEVER_MATCH};
