//! Filter module
//!
//! A closed set of filter names and the typed mapping that holds the current
//! selections. Filter values are opaque strings chosen by the host; the
//! pager never validates membership against the legal values a dropdown
//! would offer.

mod types;

pub use types::{FilterName, FilterSet};

#[cfg(test)]
mod tests;
