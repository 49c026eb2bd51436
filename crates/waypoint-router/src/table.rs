//! Route table and entries
//!
//! The table is built once, sorted most specific first and never mutated;
//! it is safe to share freely for concurrent read-only lookup.

use serde::{Deserialize, Serialize};

use waypoint_template::RouteTemplate;

use crate::precedence::Precedence;

/// Opaque handler identity declared by the host
pub type HandlerId = String;

/// One routable (handler, template) pair with its computed precedence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Owning handler
    pub handler: HandlerId,

    /// Parsed template
    pub template: RouteTemplate,

    /// Parameters declared by sibling overloads of the same handler but
    /// absent from this template; the matcher supplies them as absent or
    /// defaulted so every overload presents the same parameter surface
    pub unused_params: Vec<String>,

    /// Computed specificity
    pub precedence: Precedence,
}

impl RouteEntry {
    /// Original template text, for diagnostics
    pub fn text(&self) -> &str {
        &self.template.text
    }
}

/// Immutable route table, ordered most specific first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub(crate) fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// Entries in match order
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Iterate entries in match order
    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no handler declared any template
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
