//! Algebraic laws of canonical sets.

use intset::{
    CanonicalSet, canonicalize, cardinality, decode_set, difference, encode_set,
    encode_set_compressed, equal, intersection, is_subset, is_superset, not_equal, parse_text,
    symmetric_difference, to_text, union,
};
use proptest::prelude::*;

/// Small element range so generated operands overlap often.
fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

/// A sequence paired with an arbitrary permutation of itself.
fn shuffled_elements() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    elements().prop_flat_map(|raw| (Just(raw.clone()), Just(raw).prop_shuffle()))
}

fn any_set() -> impl Strategy<Value = CanonicalSet> {
    elements().prop_map(canonicalize)
}

/// Sets expressible in the text grammar (no negative elements).
fn text_set() -> impl Strategy<Value = CanonicalSet> {
    prop::collection::vec(0i32..=i32::MAX, 0..40).prop_map(canonicalize)
}

fn is_strictly_ascending(set: &CanonicalSet) -> bool {
    set.as_slice().windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #[test]
    fn canonical_sets_are_strictly_ascending(raw in elements()) {
        prop_assert!(is_strictly_ascending(&canonicalize(raw)));
    }

    #[test]
    fn canonicalize_is_idempotent(raw in elements()) {
        let once = canonicalize(raw);
        let twice = canonicalize(once.clone().into_vec());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn canonicalize_ignores_order((raw, shuffled) in shuffled_elements()) {
        let mut sorted = raw.clone();
        sorted.sort_unstable();
        let expected = canonicalize(sorted);
        prop_assert_eq!(canonicalize(shuffled), expected.clone());
        prop_assert_eq!(canonicalize(raw), expected);
    }

    #[test]
    fn text_roundtrip(s in text_set()) {
        prop_assert_eq!(parse_text(&to_text(&s)).unwrap(), s);
    }

    #[test]
    fn binary_roundtrip(s in any_set()) {
        prop_assert_eq!(decode_set(&encode_set(&s).unwrap()).unwrap(), s.clone());
        prop_assert_eq!(decode_set(&encode_set_compressed(&s, 1).unwrap()).unwrap(), s);
    }

    #[test]
    fn self_identities(a in any_set()) {
        prop_assert_eq!(union(&a, &a), a.clone());
        prop_assert_eq!(intersection(&a, &a), a.clone());
        prop_assert!(symmetric_difference(&a, &a).is_empty());
        prop_assert!(difference(&a, &a).is_empty());
        prop_assert!(equal(&a, &a));
        prop_assert!(is_subset(&a, &a));
    }

    #[test]
    fn commutativity(a in any_set(), b in any_set()) {
        prop_assert_eq!(union(&a, &b), union(&b, &a));
        prop_assert_eq!(intersection(&a, &b), intersection(&b, &a));
        prop_assert_eq!(symmetric_difference(&a, &b), symmetric_difference(&b, &a));
    }

    #[test]
    fn subset_superset_duality(a in any_set(), b in any_set()) {
        prop_assert_eq!(is_subset(&a, &b), is_superset(&b, &a));
        prop_assert_eq!(is_subset(&a, &b), difference(&a, &b).is_empty());
    }

    #[test]
    fn equality_agrees_with_value_equality(a in any_set(), b in any_set()) {
        prop_assert_eq!(equal(&a, &b), a == b);
        prop_assert_eq!(not_equal(&a, &b), a != b);
        prop_assert_eq!(equal(&a, &b), is_subset(&a, &b) && is_superset(&a, &b));
    }

    #[test]
    fn cardinality_consistency(a in any_set(), b in any_set()) {
        prop_assert_eq!(
            cardinality(&union(&a, &b)) + cardinality(&intersection(&a, &b)),
            cardinality(&a) + cardinality(&b)
        );
        prop_assert_eq!(
            cardinality(&difference(&a, &b)) + cardinality(&intersection(&a, &b)),
            cardinality(&a)
        );
    }

    #[test]
    fn operations_match_membership(a in any_set(), b in any_set(), n in -60i32..60) {
        let (in_a, in_b) = (a.contains(n), b.contains(n));
        prop_assert_eq!(union(&a, &b).contains(n), in_a || in_b);
        prop_assert_eq!(intersection(&a, &b).contains(n), in_a && in_b);
        prop_assert_eq!(symmetric_difference(&a, &b).contains(n), in_a != in_b);
        prop_assert_eq!(difference(&a, &b).contains(n), in_a && !in_b);
    }

    #[test]
    fn results_stay_canonical(a in any_set(), b in any_set()) {
        prop_assert!(is_strictly_ascending(&union(&a, &b)));
        prop_assert!(is_strictly_ascending(&intersection(&a, &b)));
        prop_assert!(is_strictly_ascending(&symmetric_difference(&a, &b)));
        prop_assert!(is_strictly_ascending(&difference(&a, &b)));
    }

    #[test]
    fn parse_never_panics(input in "[{}0-9, a-]{0,16}") {
        let _ = parse_text(&input);
    }
}

#[test]
fn scenarios() {
    let s = parse_text("{3,1,2,1}").unwrap();
    assert_eq!(s.as_slice(), &[1, 2, 3]);
    assert_eq!(to_text(&s), "{1,2,3}");

    let empty = parse_text("{}").unwrap();
    assert!(empty.is_empty());
    assert_eq!(to_text(&empty), "{}");

    let a = parse_text("{1,2,3}").unwrap();
    let b = parse_text("{2,3,4}").unwrap();
    assert_eq!(to_text(&union(&a, &b)), "{1,2,3,4}");
    assert_eq!(to_text(&intersection(&a, &b)), "{2,3}");
    assert_eq!(to_text(&difference(&a, &b)), "{1}");
    assert_eq!(to_text(&symmetric_difference(&a, &b)), "{1,4}");
}
