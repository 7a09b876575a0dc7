//! Filter names and the filter mapping

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Filter Names
// ============================================================================

/// The closed set of filters a list view can apply
///
/// Keys a [`FilterSet`] entry and names the query parameter the host mirrors
/// the selection onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterName {
    /// Record status (e.g. pending, complete, failed)
    Status,
    /// What caused the record to exist (e.g. a job registration, a node drain)
    TriggeredBy,
    /// Namespace scoping the list
    Namespace,
}

impl FilterName {
    /// All filter names, in query-parameter order
    pub const ALL: [Self; 3] = [Self::Status, Self::TriggeredBy, Self::Namespace];

    /// The query parameter name for this filter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::TriggeredBy => "triggered_by",
            Self::Namespace => "namespace",
        }
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "status" => Ok(Self::Status),
            "triggered_by" => Ok(Self::TriggeredBy),
            "namespace" => Ok(Self::Namespace),
            other => Err(Error::unknown_filter(other)),
        }
    }
}

// ============================================================================
// Filter Set
// ============================================================================

/// The current filter selections for a list view
///
/// Absence of an entry means "unfiltered" (the dropdown's "All" choice).
/// Values are opaque: the fetch service interprets them, the pager only
/// carries them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default)]
    selections: HashMap<FilterName, String>,
}

impl FilterSet {
    /// Create an empty filter set (everything unfiltered)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current selection for a filter, if any
    pub fn get(&self, name: FilterName) -> Option<&str> {
        self.selections.get(&name).map(String::as_str)
    }

    /// Set or clear one filter selection
    ///
    /// `None` clears the entry back to "unfiltered". Other filters are
    /// untouched.
    pub fn set(&mut self, name: FilterName, value: Option<String>) {
        match value {
            Some(value) => {
                self.selections.insert(name, value);
            }
            None => {
                self.selections.remove(&name);
            }
        }
    }

    /// Clear one filter selection
    pub fn clear(&mut self, name: FilterName) {
        self.selections.remove(&name);
    }

    /// Check whether a filter has a selection
    pub fn is_set(&self, name: FilterName) -> bool {
        self.selections.contains_key(&name)
    }

    /// Check whether any filter has a selection
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Number of active selections
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Active selections as query parameters, keyed by parameter name
    pub fn to_query_params(&self) -> HashMap<String, String> {
        self.selections
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), value.clone()))
            .collect()
    }
}
