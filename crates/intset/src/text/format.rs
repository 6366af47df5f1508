//! Renders a set in its textual form.

use std::fmt::Write;

use crate::model::CanonicalSet;

/// Formats `set` as `{e0,e1,...}` in ascending order, or `{}` when empty.
///
/// Negative elements are written with a leading `-`, which the text grammar
/// does not accept: `parse_text(&to_text(s)) == s` holds only when every
/// element of `s` is non-negative. Use the binary layout for other sets.
pub fn to_text(set: &CanonicalSet) -> String {
    // Sign, ten digits and a separator cover any i32.
    let mut out = String::with_capacity(2 + set.len() * 12);
    out.push('{');
    for (i, value) in set.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", value);
    }
    out.push('}');
    out
}
