//! Plugin-contributed top menu payload types.
//!
//! Plugins declare candidate menu groups; the view-model merges them into
//! the header navigation by title match. Item URLs may still contain
//! unresolved template placeholders (e.g. a project-name slot) — those
//! items only make sense on a project page and are filtered out before the
//! global merge.

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// A plugin-declared candidate menu group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopMenuEntry {
    /// Group name; doubles as the merge key against existing sections.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub items: Vec<TopMenuItem>,
}

/// One raw link inside a top menu group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopMenuItem {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: String,

    /// Server-suggested link target. The view-model discards this and
    /// re-derives it from the URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl TopMenuEntry {
    /// Decode a JSON array of top menu entries.
    pub fn list_from_json(raw: &str) -> Result<Vec<Self>, PayloadError> {
        serde_json::from_str(raw).map_err(|e| PayloadError::malformed("top menu", e))
    }
}
