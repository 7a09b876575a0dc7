//! Boundary types between the pager and the list-fetch collaborator

use crate::filter::FilterSet;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Cursor
// ============================================================================

/// An opaque next-page token issued by the list-fetch service
///
/// The pager never decodes or orders cursors; it only stores them and hands
/// them back. Equality exists so history round-trips can be asserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for query parameters and request bodies
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the token is the empty string
    ///
    /// Some services report "no more pages" as `""` rather than omitting the
    /// field; an empty cursor never counts as a next page.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

// ============================================================================
// Page Request
// ============================================================================

/// What the list-fetch service consumes for one page fetch
///
/// `cursor` of `None` requests the first page under the current filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Where the page begins; `None` for the first page
    pub cursor: Option<Cursor>,

    /// Number of records to request
    pub page_size: u32,

    /// Active filter selections
    pub filters: FilterSet,
}

// ============================================================================
// Page Meta
// ============================================================================

/// Pagination metadata from the most recent fetch response
///
/// Carries the server-reported token for the page after the one just
/// fetched. [`Pager::can_advance`](crate::pager::Pager::can_advance) is
/// derived from this, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Token for the next page, if the server reported one
    #[serde(default)]
    pub next_cursor: Option<Cursor>,
}

impl PageMeta {
    /// Metadata reporting no further pages
    pub fn none() -> Self {
        Self::default()
    }

    /// Metadata reporting a next page at `cursor`
    pub fn with_next(cursor: Cursor) -> Self {
        Self {
            next_cursor: Some(cursor),
        }
    }

    /// Check whether a further page exists
    ///
    /// An absent or empty token both mean "last page".
    pub fn has_next(&self) -> bool {
        self.next_cursor.as_ref().is_some_and(|c| !c.is_empty())
    }
}
