//! Pager module
//!
//! The cursor-based pagination state machine. The server only hands out
//! forward-moving opaque tokens, so backward navigation is implemented
//! client-side: every forward step remembers the cursor it left behind and
//! a backward step restores it.
//!
//! # Overview
//!
//! The host drives a fetch/apply loop: build a [`PageRequest`] from the
//! pager, fetch the page, then report the server's next-page token back via
//! [`Pager::advance`] when the user moves forward. The pager itself never
//! performs I/O and has no loading or error state.

mod machine;
mod types;

pub use machine::Pager;
pub use types::{Cursor, PageMeta, PageRequest};
