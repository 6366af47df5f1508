//! Set algebra over canonical sets.
//!
//! Every binary operation is one linear co-iteration of the two ascending
//! element slices, O(|a| + |b|). Inputs are trusted to be canonical, which
//! [`CanonicalSet`] guarantees at construction.

use std::cmp::Ordering;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::model::CanonicalSet;

/// Which side of a merge an element was found on.
#[derive(Debug, Clone, Copy)]
struct Keep {
    left_only: bool,
    both: bool,
    right_only: bool,
}

const UNION: Keep = Keep {
    left_only: true,
    both: true,
    right_only: true,
};
const INTERSECTION: Keep = Keep {
    left_only: false,
    both: true,
    right_only: false,
};
const SYMMETRIC_DIFFERENCE: Keep = Keep {
    left_only: true,
    both: false,
    right_only: true,
};
const DIFFERENCE: Keep = Keep {
    left_only: true,
    both: false,
    right_only: false,
};

/// Merges two ascending slices, emitting the elements `keep` selects.
///
/// Tails are appended only for sides whose exclusive elements are kept:
/// once one side is exhausted, the rest of the other side cannot match.
fn merge(a: &[i32], b: &[i32], keep: Keep, capacity: usize) -> CanonicalSet {
    let mut out = Vec::with_capacity(capacity);
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                if keep.left_only {
                    out.push(a[i]);
                }
                i += 1;
            }
            Ordering::Greater => {
                if keep.right_only {
                    out.push(b[j]);
                }
                j += 1;
            }
            Ordering::Equal => {
                if keep.both {
                    out.push(a[i]);
                }
                i += 1;
                j += 1;
            }
        }
    }

    if keep.left_only {
        out.extend_from_slice(&a[i..]);
    }
    if keep.right_only {
        out.extend_from_slice(&b[j..]);
    }

    CanonicalSet::from_canonical_vec(out)
}

/// Returns true if `n` is an element of `set`.
pub fn contains(set: &CanonicalSet, n: i32) -> bool {
    set.iter().take_while(|&&e| e <= n).any(|&e| e == n)
}

/// Number of elements in `set`.
pub fn cardinality(set: &CanonicalSet) -> usize {
    set.len()
}

/// Returns true if every element of `b` is in `a`.
pub fn is_superset(a: &CanonicalSet, b: &CanonicalSet) -> bool {
    if a.len() < b.len() {
        return false;
    }
    let a = a.as_slice();
    let mut i = 0;
    for &needle in b {
        while i < a.len() && a[i] < needle {
            i += 1;
        }
        if i == a.len() || a[i] != needle {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if every element of `a` is in `b`.
pub fn is_subset(a: &CanonicalSet, b: &CanonicalSet) -> bool {
    is_superset(b, a)
}

/// Returns true if both sets hold the same elements.
pub fn equal(a: &CanonicalSet, b: &CanonicalSet) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Returns true if the sets differ.
pub fn not_equal(a: &CanonicalSet, b: &CanonicalSet) -> bool {
    !equal(a, b)
}

/// Elements in `a` or `b`.
pub fn union(a: &CanonicalSet, b: &CanonicalSet) -> CanonicalSet {
    merge(a.as_slice(), b.as_slice(), UNION, a.len() + b.len())
}

/// Elements in both `a` and `b`.
pub fn intersection(a: &CanonicalSet, b: &CanonicalSet) -> CanonicalSet {
    merge(a.as_slice(), b.as_slice(), INTERSECTION, a.len().min(b.len()))
}

/// Elements in exactly one of `a` and `b`.
pub fn symmetric_difference(a: &CanonicalSet, b: &CanonicalSet) -> CanonicalSet {
    merge(a.as_slice(), b.as_slice(), SYMMETRIC_DIFFERENCE, a.len() + b.len())
}

/// Elements of `a` not in `b`.
pub fn difference(a: &CanonicalSet, b: &CanonicalSet) -> CanonicalSet {
    merge(a.as_slice(), b.as_slice(), DIFFERENCE, a.len())
}

impl CanonicalSet {
    /// See [`contains`].
    pub fn contains(&self, n: i32) -> bool {
        contains(self, n)
    }

    /// See [`is_superset`].
    pub fn is_superset(&self, other: &CanonicalSet) -> bool {
        is_superset(self, other)
    }

    /// See [`is_subset`].
    pub fn is_subset(&self, other: &CanonicalSet) -> bool {
        is_subset(self, other)
    }

    /// See [`union`].
    pub fn union(&self, other: &CanonicalSet) -> CanonicalSet {
        union(self, other)
    }

    /// See [`intersection`].
    pub fn intersection(&self, other: &CanonicalSet) -> CanonicalSet {
        intersection(self, other)
    }

    /// See [`symmetric_difference`].
    pub fn symmetric_difference(&self, other: &CanonicalSet) -> CanonicalSet {
        symmetric_difference(self, other)
    }

    /// See [`difference`].
    pub fn difference(&self, other: &CanonicalSet) -> CanonicalSet {
        difference(self, other)
    }
}

impl BitOr for &CanonicalSet {
    type Output = CanonicalSet;

    fn bitor(self, rhs: &CanonicalSet) -> CanonicalSet {
        union(self, rhs)
    }
}

impl BitAnd for &CanonicalSet {
    type Output = CanonicalSet;

    fn bitand(self, rhs: &CanonicalSet) -> CanonicalSet {
        intersection(self, rhs)
    }
}

impl BitXor for &CanonicalSet {
    type Output = CanonicalSet;

    fn bitxor(self, rhs: &CanonicalSet) -> CanonicalSet {
        symmetric_difference(self, rhs)
    }
}

impl Sub for &CanonicalSet {
    type Output = CanonicalSet;

    fn sub(self, rhs: &CanonicalSet) -> CanonicalSet {
        difference(self, rhs)
    }
}
