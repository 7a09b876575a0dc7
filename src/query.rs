//! Query-string mirroring of pager state
//!
//! The host is expected to mirror the current cursor, page size, and each
//! filter onto addressable query parameters so list position survives
//! navigation. This module does the encoding both ways; the actual URL
//! binding stays with the host.
//!
//! Parameter names match what the list views expose: `next_token`,
//! `page_size`, `status`, `triggered_by`, `namespace`.

use crate::error::{Error, Result};
use crate::filter::{FilterName, FilterSet};
use crate::pager::{Cursor, Pager};
use std::collections::HashMap;

/// Query parameter carrying the current cursor
pub const PARAM_NEXT_TOKEN: &str = "next_token";

/// Query parameter carrying the page size
pub const PARAM_PAGE_SIZE: &str = "page_size";

/// Encode pager state as query parameters
///
/// `next_token` is omitted on the first page; unfiltered filters are
/// omitted entirely. `page_size` is always present.
pub fn to_query_params(pager: &Pager) -> HashMap<String, String> {
    let mut params = pager.filters().to_query_params();
    params.insert(PARAM_PAGE_SIZE.to_string(), pager.page_size().to_string());
    if let Some(cursor) = pager.current() {
        params.insert(PARAM_NEXT_TOKEN.to_string(), cursor.as_str().to_string());
    }
    params
}

/// Restore a pager from query parameters
///
/// Absent keys fall back to defaults: first page, no filters,
/// `default_page_size`. A malformed or zero `page_size` is rejected; the
/// restored position has no retreat history (see [`Pager::restore`]).
pub fn from_query_params(
    params: &HashMap<String, String>,
    default_page_size: u32,
) -> Result<Pager> {
    let page_size = match params.get(PARAM_PAGE_SIZE) {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|e| Error::query_param(PARAM_PAGE_SIZE, e.to_string()))?,
        None => default_page_size,
    };

    let cursor = params
        .get(PARAM_NEXT_TOKEN)
        .filter(|raw| !raw.is_empty())
        .map(|raw| Cursor::new(raw.clone()));

    let mut filters = FilterSet::new();
    for name in FilterName::ALL {
        if let Some(value) = params.get(name.as_str()) {
            filters.set(name, Some(value.clone()));
        }
    }

    Pager::restore(default_page_size, page_size, cursor, filters)
}
