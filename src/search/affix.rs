//! Discovery of shared prefixes and suffixes in a sorted view
//!
//! In forward order every set of strings sharing a prefix forms one contiguous
//! block, and in reverse order the same holds for suffixes. That means every
//! affix worth factoring shows up as the common run of some adjacent pair, and
//! the block that carries it can be found by binary search on both sides.

use std::collections::BTreeMap;

use crate::search::boundary::find_first;
use crate::search::candidate::{AffixKind, Candidate, Range};

/// Shared affixes shorter than this many bytes never pay for their group syntax
pub const DEFAULT_MIN_AFFIX_LEN: usize = 2;

/// Find every affix of at least `min_len` bytes shared by an adjacent pair of
/// `sorted`, with the maximal block of `sorted` that carries it.
///
/// `sorted` must be deduplicated and sorted forward for prefixes, in reverse
/// for suffixes. The result is ordered by affix text.
pub fn common_affixes<'a>(sorted: &[&'a str], kind: AffixKind, min_len: usize) -> Vec<Candidate<'a>> {
    let mut found: BTreeMap<&'a str, Range> = BTreeMap::new();

    for (i, pair) in sorted.windows(2).enumerate() {
        let k = kind.common_len(pair[0], pair[1]);
        if k < min_len {
            continue;
        }
        let affix = kind.affix_of(pair[0], k);
        if found.contains_key(affix) {
            continue;
        }

        let start = find_first(&sorted[..i], |s| kind.is_affix_of(s, affix));
        // sorted[start] is known to carry the affix, so search past it.
        let end = start + 1 + find_first(&sorted[start + 1..], |s| !kind.is_affix_of(s, affix));
        found.insert(affix, Range::new(start, end));
    }

    found
        .into_iter()
        .map(|(affix, range)| Candidate { kind, affix, range })
        .collect()
}

/// Longest prefix shared by every string once the last `ignore` bytes of each
/// are disregarded.
///
/// Every string must be at least `ignore` bytes long and have a codepoint
/// boundary there (which holds when they all end with a common suffix of that
/// length).
pub fn shared_prefix<'a>(ignore: usize, values: &[&'a str]) -> &'a str {
    let Some((first, rest)) = values.split_first() else {
        return "";
    };
    let head = &first[..first.len() - ignore];
    let len = rest.iter().fold(head.len(), |len, s| {
        let body = &s[..s.len() - ignore];
        len.min(AffixKind::Prefix.common_len(&head[..len], body))
    });
    &head[..len]
}

/// Longest suffix shared by every string once the first `ignore` bytes of each
/// are disregarded.
pub fn shared_suffix<'a>(ignore: usize, values: &[&'a str]) -> &'a str {
    let Some((first, rest)) = values.split_first() else {
        return "";
    };
    let tail = &first[ignore..];
    let len = rest.iter().fold(tail.len(), |len, s| {
        let body = &s[ignore..];
        len.min(AffixKind::Suffix.common_len(&tail[tail.len() - len..], body))
    });
    &tail[tail.len() - len..]
}
