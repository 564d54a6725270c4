//! Candidate factorizations discovered in a sorted view

use std::fmt;

/// Whether an affix is shared at the start or at the end of strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

impl AffixKind {
    /// Whether `s` carries `affix` at the relevant end
    pub fn is_affix_of(self, s: &str, affix: &str) -> bool {
        match self {
            AffixKind::Prefix => s.starts_with(affix),
            AffixKind::Suffix => s.ends_with(affix),
        }
    }

    /// Byte length of the longest run `a` and `b` share at the relevant end.
    ///
    /// Characters are compared whole, so the result always lands on a
    /// codepoint boundary in both strings.
    pub fn common_len(self, a: &str, b: &str) -> usize {
        match self {
            AffixKind::Prefix => common_char_run(a.chars(), b.chars()),
            AffixKind::Suffix => common_char_run(a.chars().rev(), b.chars().rev()),
        }
    }

    /// The first (or last) `len` bytes of `s`
    pub fn affix_of(self, s: &str, len: usize) -> &str {
        match self {
            AffixKind::Prefix => &s[..len],
            AffixKind::Suffix => &s[s.len() - len..],
        }
    }
}

impl fmt::Display for AffixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffixKind::Prefix => write!(f, "prefix"),
            AffixKind::Suffix => write!(f, "suffix"),
        }
    }
}

fn common_char_run(a: impl Iterator<Item = char>, b: impl Iterator<Item = char>) -> usize {
    a.zip(b)
        .take_while(|(x, y)| x == y)
        .map(|(c, _)| c.len_utf8())
        .sum()
}

/// Half-open run `[start, end)` of a sorted view.
///
/// Only meaningful together with the view it was computed on: prefix ranges
/// index the forward view, suffix ranges the reverse view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty range {}..{}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the range leaves elements out at the front of its view
    pub fn has_before(&self) -> bool {
        self.start > 0
    }

    /// Whether the range leaves elements out at the back of a view of `total`
    pub fn has_after(&self, total: usize) -> bool {
        self.end < total
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A shared affix and the maximal block of the sorted view that carries it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub kind: AffixKind,
    pub affix: &'a str,
    pub range: Range,
}

impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.affix, self.range)
    }
}
