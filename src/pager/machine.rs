//! The pagination state machine

use super::types::{Cursor, PageMeta, PageRequest};
use crate::error::{Error, Result};
use crate::filter::{FilterName, FilterSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Pagination state for one list view
///
/// Holds the current cursor, the history of cursors visited (for backward
/// navigation), the active filters, and the page-size preference. Every
/// mutation is a synchronous, atomic transition; the host serializes calls
/// and must not report a fetch into a pager whose cursor has since changed.
///
/// Invariants:
/// - the history length equals the number of forward steps not yet undone
/// - any filter mutation (and [`refresh`](Self::refresh)) clears the history
///   and returns to the first page, because the result set identity changed
/// - [`set_page_size`](Self::set_page_size) never touches the history: a new
///   page length re-batches the same result set from the current position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    /// Number of records requested per fetch
    page_size: u32,

    /// The page-size preference supplied by the settings store at creation;
    /// `refresh` restores it
    default_page_size: u32,

    /// Token for the page currently shown; `None` on the first page
    current: Option<Cursor>,

    /// Cursors visited, most recent last
    history: Vec<Option<Cursor>>,

    /// Active filter selections
    filters: FilterSet,
}

impl Pager {
    /// Create a pager at the first page with no filters
    ///
    /// `default_page_size` comes from the host's settings store and is
    /// trusted as-is; only user-driven changes via
    /// [`set_page_size`](Self::set_page_size) are validated.
    pub fn new(default_page_size: u32) -> Self {
        Self {
            page_size: default_page_size,
            default_page_size,
            current: None,
            history: Vec::new(),
            filters: FilterSet::new(),
        }
    }

    /// Create a pager with initial filter selections
    pub fn with_filters(default_page_size: u32, filters: FilterSet) -> Self {
        Self {
            filters,
            ..Self::new(default_page_size)
        }
    }

    /// Recreate a pager from externally mirrored state (e.g. a URL)
    ///
    /// The restored position carries no history: the server provides no
    /// backward cursor, so a deep link cannot retreat past where it landed.
    /// Rejects a zero `page_size` because mirrored values are user-editable.
    pub fn restore(
        default_page_size: u32,
        page_size: u32,
        cursor: Option<Cursor>,
        filters: FilterSet,
    ) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::invalid_page_size(page_size));
        }
        Ok(Self {
            page_size,
            default_page_size,
            current: cursor,
            history: Vec::new(),
            filters,
        })
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Move forward to the page identified by `candidate`
    ///
    /// Call after a fetch from the current position succeeded and its
    /// response reported `candidate` as the next-page token. The cursor
    /// left behind is pushed onto the history so [`retreat`](Self::retreat)
    /// can restore it. Gate the call on [`can_advance`](Self::can_advance);
    /// the operation itself does not re-validate.
    pub fn advance(&mut self, candidate: Cursor) {
        self.history.push(self.current.take());
        debug!(cursor = %candidate, depth = self.history.len(), "pager advance");
        self.current = Some(candidate);
    }

    /// Move one page backward
    ///
    /// Exactly reverses the most recent [`advance`](Self::advance) not yet
    /// undone. With an empty history this is a caller error: the state is
    /// left untouched and [`Error::EmptyHistory`] is returned.
    pub fn retreat(&mut self) -> Result<()> {
        match self.history.pop() {
            Some(previous) => {
                debug!(depth = self.history.len(), "pager retreat");
                self.current = previous;
                Ok(())
            }
            None => {
                warn!("pager retreat with empty history");
                Err(Error::EmptyHistory)
            }
        }
    }

    /// Forget all navigation history and return to the first page
    fn reset_position(&mut self) {
        self.history.clear();
        self.current = None;
    }

    // ========================================================================
    // Filters and Page Size
    // ========================================================================

    /// Change one filter selection; `None` clears it
    ///
    /// The result set identity changes, so accumulated cursor history is
    /// invalid: position resets to the first page. Other filters keep their
    /// selections.
    pub fn set_filter(&mut self, name: FilterName, value: Option<String>) {
        debug!(filter = %name, value = value.as_deref(), "pager filter change");
        self.filters.set(name, value);
        self.reset_position();
    }

    /// Change the requested page size
    ///
    /// Rejects zero with [`Error::InvalidPageSize`]. Position and history
    /// are preserved: a new page length only re-batches the same result set
    /// from the current cursor forward.
    pub fn set_page_size(&mut self, size: u32) -> Result<()> {
        if size == 0 {
            warn!("pager rejected page size 0");
            return Err(Error::invalid_page_size(size));
        }
        debug!(page_size = size, "pager page size change");
        self.page_size = size;
        Ok(())
    }

    /// Return to the first page, clearing the status filter and restoring
    /// the default page size
    ///
    /// Structural scoping filters (triggered-by, namespace) keep their
    /// selections; only the transient status filter is cleared.
    pub fn refresh(&mut self) {
        debug!("pager refresh");
        self.reset_position();
        self.filters.clear(FilterName::Status);
        self.page_size = self.default_page_size;
    }

    // ========================================================================
    // Derived State
    // ========================================================================

    /// Check whether a forward step is available, given the metadata of the
    /// most recent fetch response
    pub fn can_advance(&self, meta: &PageMeta) -> bool {
        meta.has_next()
    }

    /// Check whether a backward step is available
    pub fn can_retreat(&self) -> bool {
        !self.history.is_empty()
    }

    /// What the list-fetch service should be asked for next
    pub fn request(&self) -> PageRequest {
        PageRequest {
            cursor: self.current.clone(),
            page_size: self.page_size,
            filters: self.filters.clone(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Token for the page currently shown; `None` on the first page
    pub fn current(&self) -> Option<&Cursor> {
        self.current.as_ref()
    }

    /// Number of forward steps not yet undone
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Current page size
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The default page size captured at creation
    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    /// Current filter selections
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }
}
