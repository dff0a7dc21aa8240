//! Header navigation menu.
//!
//! Builds the single ordered list of menu sections the header renders,
//! combining built-in sections, the signed-in user's custom links, the
//! administration links, and plugin-contributed top menus.

pub mod docs;
pub mod merge;
pub mod registry;

use serde::{Deserialize, Serialize};
use url::Url;

pub use docs::{DocEntry, documentation_entries, resolve_doc_links};
pub use merge::merge;
pub use registry::collect_top_menus;

/// Link target marking a menu entry that opens outside the UI.
pub const EXTERNAL_TARGET: &str = "_blank";

/// Title of the section holding the signed-in user's custom links.
pub const USER_SECTION_TITLE: &str = "Your";

/// Title of the always-present administration section.
pub const ADMIN_SECTION_TITLE: &str = "Browse";

/// A single rendered navigation link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub name: String,
    pub url: String,
    /// External-link target, derived from the URL rather than trusted from
    /// upstream payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// A titled, ordered group of navigation links. The title is the merge key
/// for plugin-contributed top menus (exact, case-sensitive match).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    pub links: Vec<MenuLink>,
}

impl MenuLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            target: None,
        }
    }

    /// Build a link from an upstream-provided name and URL.
    ///
    /// A leading `#` (hash-route form) is stripped, and any target the
    /// upstream payload suggested is discarded: a link opens externally
    /// exactly when its URL is scheme-qualified.
    pub fn normalized(name: impl Into<String>, url: &str) -> Self {
        let url = url.strip_prefix('#').unwrap_or(url);
        let target = Url::parse(url)
            .is_ok()
            .then(|| EXTERNAL_TARGET.to_string());
        Self {
            name: name.into(),
            url: url.to_string(),
            target,
        }
    }
}

impl MenuSection {
    pub fn new(title: impl Into<String>, links: Vec<MenuLink>) -> Self {
        Self {
            title: title.into(),
            links,
        }
    }
}

/// The built-in sections shown to every visitor.
pub fn default_sections() -> Vec<MenuSection> {
    vec![MenuSection::new(
        "Changes",
        vec![
            MenuLink::new("Open", "/q/status:open"),
            MenuLink::new("Merged", "/q/status:merged"),
            MenuLink::new("Abandoned", "/q/status:abandoned"),
        ],
    )]
}
