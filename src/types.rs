//! Common types used throughout pagy-nav
//!
//! Shared by the link builder, the renderers and the protocol codec.

use crate::template::PAGE_PLACEHOLDER;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Page References
// ============================================================================

/// A page a link can point to: a concrete number or the client-side placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRef {
    /// A concrete page number
    Page(u64),
    /// The placeholder token, expanded later by the client
    Placeholder,
}

impl PageRef {
    /// The concrete page number, if any
    pub fn number(self) -> Option<u64> {
        match self {
            Self::Page(n) => Some(n),
            Self::Placeholder => None,
        }
    }
}

impl From<u64> for PageRef {
    fn from(page: u64) -> Self {
        Self::Page(page)
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Placeholder => f.write_str(PAGE_PLACEHOLDER),
        }
    }
}

// ============================================================================
// Link Relation
// ============================================================================

/// Relation of a link to the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// The page right before the current one
    Prev,
    /// The page right after the current one
    Next,
}

impl Relation {
    /// The `rel` attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
