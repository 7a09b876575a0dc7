//! Settings-store seam
//!
//! The host owns the persisted page-size preference. The pager only needs
//! the default at creation time, and writing a changed preference back is
//! the host's job, so the seam is read-only.

use crate::pager::Pager;

/// Source of the persisted page-size preference
pub trait SettingsStore {
    /// The user's preferred page size
    fn default_page_size(&self) -> u32;

    /// Create a pager seeded from this store
    fn new_pager(&self) -> Pager {
        Pager::new(self.default_page_size())
    }
}

/// A fixed in-memory settings store, for hosts without persistence and for
/// tests
#[derive(Debug, Clone, Copy)]
pub struct InMemorySettings {
    page_size: u32,
}

impl InMemorySettings {
    /// Create a store answering with `page_size`
    pub fn new(page_size: u32) -> Self {
        Self { page_size }
    }
}

impl Default for InMemorySettings {
    /// A conventional list-view default of 25 records per page
    fn default() -> Self {
        Self { page_size: 25 }
    }
}

impl SettingsStore for InMemorySettings {
    fn default_page_size(&self) -> u32 {
        self.page_size
    }
}
