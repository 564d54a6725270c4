//! Canonical total orders over text values
//!
//! Two orders are used by the synthesizer:
//! - Forward: plain lexicographic order over UTF-8 bytes. Strings sharing a
//!   prefix end up adjacent.
//! - Reverse: lexicographic order read from the end of each string, comparing
//!   whole codepoints at the first point of difference. Strings sharing a
//!   suffix end up adjacent.

use std::cmp::Ordering;

/// Which of the two canonical orders a sorted view was produced with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Forward,
    Reverse,
}

/// Compare two strings in forward order
///
/// UTF-8 byte order coincides with codepoint order, so this is `str`'s own `Ord`.
pub fn forward_cmp(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Compare two strings by walking both from their last byte backwards.
///
/// At the first differing byte the codepoints enclosing that byte are decoded
/// on both sides and compared, so a multi-byte character is never ordered by
/// one of its continuation bytes. If one string runs out first it sorts first.
pub fn reverse_cmp(a: &str, b: &str) -> Ordering {
    let (ab, bb) = (a.as_bytes(), b.as_bytes());
    let (mut m, mut n) = (ab.len(), bb.len());

    while m > 0 && n > 0 {
        m -= 1;
        n -= 1;
        if ab[m] != bb[n] {
            return char_containing(a, m).cmp(&char_containing(b, n));
        }
    }

    ab.len().cmp(&bb.len())
}

/// Decode the codepoint whose encoding contains byte `index`.
fn char_containing(s: &str, mut index: usize) -> char {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    s[index..].chars().next().unwrap_or_default()
}

/// Private copy of `values`, sorted in `order` with duplicates removed.
pub fn sorted_unique<'a>(values: &[&'a str], order: SortOrder) -> Vec<&'a str> {
    let mut sorted = values.to_vec();
    match order {
        SortOrder::Forward => sorted.sort_unstable_by(|a, b| forward_cmp(a, b)),
        SortOrder::Reverse => sorted.sort_unstable_by(|a, b| reverse_cmp(a, b)),
    }
    sorted.dedup();
    sorted
}

/// Private forward-sorted, deduplicated copy of `values`
pub fn sorted_forward<'a>(values: &[&'a str]) -> Vec<&'a str> {
    sorted_unique(values, SortOrder::Forward)
}

/// Private reverse-sorted, deduplicated copy of `values`
pub fn sorted_reverse<'a>(values: &[&'a str]) -> Vec<&'a str> {
    sorted_unique(values, SortOrder::Reverse)
}
