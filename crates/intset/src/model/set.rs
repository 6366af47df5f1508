//! The canonical set value.

use std::fmt;
use std::str::FromStr;

use crate::error::{NotCanonical, ParseError};
use crate::model::canonical::canonicalize;

/// An ordered set of 32-bit signed integers.
///
/// Elements are strictly ascending, which every constructor enforces: the
/// set algebra relies on it and does not re-check its inputs. A set is
/// immutable once built; operations always return a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CanonicalSet {
    elements: Vec<i32>,
}

impl CanonicalSet {
    /// Creates the empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from elements that must already be strictly ascending.
    ///
    /// Returns the index of the first element that breaks the ordering.
    pub fn from_sorted(elements: Vec<i32>) -> Result<Self, NotCanonical> {
        if let Some(index) = first_unordered(&elements) {
            return Err(NotCanonical { index });
        }
        Ok(Self { elements })
    }

    /// Wraps a buffer the caller has already made canonical.
    pub(crate) fn from_canonical_vec(elements: Vec<i32>) -> Self {
        debug_assert!(first_unordered(&elements).is_none());
        Self { elements }
    }

    /// Returns the elements in ascending order.
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true for `{}`.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates the elements in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.elements.iter()
    }

    /// Smallest element.
    pub fn first(&self) -> Option<i32> {
        self.elements.first().copied()
    }

    /// Largest element.
    pub fn last(&self) -> Option<i32> {
        self.elements.last().copied()
    }

    /// Consumes the set, returning its ascending elements.
    pub fn into_vec(self) -> Vec<i32> {
        self.elements
    }
}

/// Index of the first element not strictly greater than its predecessor.
fn first_unordered(elements: &[i32]) -> Option<usize> {
    elements
        .windows(2)
        .position(|pair| pair[0] >= pair[1])
        .map(|i| i + 1)
}

impl From<Vec<i32>> for CanonicalSet {
    fn from(elements: Vec<i32>) -> Self {
        canonicalize(elements)
    }
}

impl FromIterator<i32> for CanonicalSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        canonicalize(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CanonicalSet {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for CanonicalSet {
    type Item = i32;
    type IntoIter = std::vec::IntoIter<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl AsRef<[i32]> for CanonicalSet {
    fn as_ref(&self) -> &[i32] {
        &self.elements
    }
}

impl fmt::Display for CanonicalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::text::to_text(self))
    }
}

impl FromStr for CanonicalSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::text::parse_text(s)
    }
}
