//! Canonicalization: sort, then collapse duplicates.

use crate::model::CanonicalSet;

/// Turns an arbitrary sequence into a [`CanonicalSet`].
///
/// Sorts ascending and compacts adjacent duplicates in the same buffer.
/// Any permutation of the same multiset yields the same set, and applying
/// this to an already canonical sequence returns it unchanged.
pub fn canonicalize(mut elements: Vec<i32>) -> CanonicalSet {
    if elements.len() > 1 {
        elements.sort_unstable();
        compact(&mut elements);
    }
    CanonicalSet::from_canonical_vec(elements)
}

/// Removes adjacent duplicates from a sorted buffer in place.
fn compact(elements: &mut Vec<i32>) {
    let mut write = 1;
    for read in 1..elements.len() {
        if elements[read] != elements[write - 1] {
            elements[write] = elements[read];
            write += 1;
        }
    }
    elements.truncate(write);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_sorts_and_dedups() {
        let set = canonicalize(vec![3, 1, 2, 1]);
        assert_eq!(set.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_canonicalize_degenerate() {
        assert!(canonicalize(vec![]).is_empty());
        assert_eq!(canonicalize(vec![42]).as_slice(), &[42]);
    }

    #[test]
    fn test_canonicalize_all_equal() {
        assert_eq!(canonicalize(vec![7, 7, 7, 7]).as_slice(), &[7]);
    }

    #[test]
    fn test_canonicalize_extremes() {
        let set = canonicalize(vec![i32::MAX, i32::MIN, 0, i32::MAX]);
        assert_eq!(set.as_slice(), &[i32::MIN, 0, i32::MAX]);
    }

    #[test]
    fn test_canonicalize_idempotent() {
        let once = canonicalize(vec![5, 3, 5, 9, 1]);
        let twice = canonicalize(once.clone().into_vec());
        assert_eq!(once, twice);
    }
}
