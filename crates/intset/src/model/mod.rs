//! Data model for intsets.
//!
//! - [`CanonicalSet`]: the ascending, duplicate-free value type
//! - [`canonicalize`]: the sort + deduplicate transform that produces it

pub mod canonical;
pub mod set;

pub use canonical::canonicalize;
pub use set::CanonicalSet;
