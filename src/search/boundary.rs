//! Binary search for the boundary of a monotonic predicate

/// Find the index of the first element of `items` that satisfies `predicate`.
///
/// Assumes the predicate is false on some leading run of `items` and true on
/// everything after it. Returns 0 if every element satisfies it and
/// `items.len()` if none does.
pub fn find_first<T, F>(items: &[T], mut predicate: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    // Invariant: items[l] fails and items[h] holds. -1 and len are sentinels
    // that are never evaluated.
    let (mut l, mut h): (isize, isize) = (-1, items.len() as isize);
    while l + 1 < h {
        let m = l + (h - l) / 2;
        if predicate(&items[m as usize]) {
            h = m;
        } else {
            l = m;
        }
    }
    h as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_empty() {
        let items: [u32; 0] = [];
        assert_eq!(find_first(&items, |_| true), 0);
    }

    #[test]
    fn test_find_first_all_true() {
        assert_eq!(find_first(&[1, 2, 3], |_| true), 0);
    }

    #[test]
    fn test_find_first_none_true() {
        assert_eq!(find_first(&[1, 2, 3], |_| false), 3);
    }

    #[test]
    fn test_find_first_every_split() {
        for len in 0..20usize {
            let items: Vec<usize> = (0..len).collect();
            for split in 0..=len {
                assert_eq!(find_first(&items, |&x| x >= split), split);
            }
        }
    }

    #[test]
    fn test_find_first_prefix_block() {
        let sorted = ["apple", "banana", "band", "bandit", "cherry"];
        assert_eq!(find_first(&sorted, |s| s.starts_with("ban") || *s > "ban"), 1);
        let block = &sorted[1..];
        assert_eq!(find_first(block, |s| !s.starts_with("ban")), 3);
    }

    #[test]
    fn test_find_first_counts_evaluations() {
        let items: Vec<u32> = (0..1024).collect();
        let mut calls = 0;
        let idx = find_first(&items, |&x| {
            calls += 1;
            x >= 700
        });
        assert_eq!(idx, 700);
        assert!(calls <= 11, "binary search took {} probes", calls);
    }
}
