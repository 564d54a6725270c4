//! Regex dialect: literal escaping, grouping and the never-matching pattern
//!
//! Patterns target the syntax of the `regex` crate.

use std::fmt;

/// A pattern no input can satisfy: `$` only matches at the very end, so no
/// character can follow it.
pub const NEVER_MATCH: &str = "$.^";

/// Escape every regex metacharacter in `literal`
pub fn escape_literal(literal: &str) -> String {
    regex::escape(literal)
}

/// How a factored middle is grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupStyle {
    /// `(?:...)`
    #[default]
    NonCapturing,
    /// `(...)`, shorter but allocates capture slots in the consuming engine
    Capturing,
}

impl GroupStyle {
    pub fn open(self) -> &'static str {
        match self {
            GroupStyle::NonCapturing => "(?:",
            GroupStyle::Capturing => "(",
        }
    }

    /// Wrap `inner` in a group, followed by `?` when `optional`
    pub fn wrap(self, inner: &str, optional: bool) -> String {
        let mut out = String::with_capacity(inner.len() + 5);
        out.push_str(self.open());
        out.push_str(inner);
        out.push(')');
        if optional {
            out.push('?');
        }
        out
    }
}

impl fmt::Display for GroupStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupStyle::NonCapturing => write!(f, "non-capturing"),
            GroupStyle::Capturing => write!(f, "capturing"),
        }
    }
}

/// Render a synthesized middle so it can sit between a prefix and a suffix.
///
/// A middle starting with `|` has the empty string as one alternative; that
/// alternative is dropped and the whole middle made optional instead. Anything
/// longer than one character is grouped.
pub fn embed_middle(middle: &str, style: GroupStyle) -> String {
    let (middle, optional) = match middle.strip_prefix('|') {
        Some(rest) => (rest, true),
        None => (middle, false),
    };

    if middle.chars().nth(1).is_some() {
        style.wrap(middle, optional)
    } else if optional && !middle.is_empty() {
        format!("{}?", middle)
    } else {
        middle.to_string()
    }
}

/// Wrap a pattern so it only matches whole inputs
pub fn anchored(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}
