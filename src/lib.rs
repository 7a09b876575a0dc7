//! # cursor-pager
//!
//! A client-side pagination state machine for browsing server-paginated,
//! filterable lists when the API only hands out forward-moving opaque
//! cursors (no "go back", no "go to page N").
//!
//! ## Features
//!
//! - **Forward/backward navigation**: remembers visited cursors so a pure
//!   forward-only API still supports a "previous page" button
//! - **Typed filters**: a closed set of filter names instead of stringly-typed
//!   controller properties
//! - **History invalidation**: filter changes reset accumulated cursor
//!   history, page-size changes deliberately do not
//! - **Query-string mirroring**: encode/restore pager state as query
//!   parameters so list position survives navigation
//!
//! ## Quick Start
//!
//! ```rust
//! use cursor_pager::{Cursor, FilterName, PageMeta, Pager};
//!
//! let mut pager = Pager::new(25);
//!
//! // The host fetched a page with pager.request() and the server reported
//! // a token for the next page.
//! let meta = PageMeta::with_next(Cursor::new("tok-1"));
//! assert!(pager.can_advance(&meta));
//! pager.advance(Cursor::new("tok-1"));
//!
//! // One page back.
//! assert!(pager.can_retreat());
//! pager.retreat().unwrap();
//!
//! // Filtering drops the navigation history.
//! pager.set_filter(FilterName::Status, Some("failed".to_string()));
//! assert!(!pager.can_retreat());
//! ```
//!
//! ## What this crate is not
//!
//! The pager performs no I/O. Fetching records, rendering, sourcing filter
//! option lists, and persisting the page-size preference are the host's
//! responsibility; the pager only tracks position, history, filters, and
//! page size between those calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_self)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Typed filter names and the filter mapping
pub mod filter;

/// The pagination state machine and fetch boundary types
pub mod pager;

/// Query-string mirroring of pager state
pub mod query;

/// Settings-store seam for the default page size
pub mod settings;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use filter::{FilterName, FilterSet};
pub use pager::{Cursor, PageMeta, PageRequest, Pager};
pub use settings::{InMemorySettings, SettingsStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
