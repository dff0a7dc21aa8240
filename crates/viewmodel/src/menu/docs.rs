//! Documentation link resolution.

use serde::{Deserialize, Serialize};

use super::{EXTERNAL_TARGET, MenuLink};

/// A raw documentation page reference: a display name and a path relative
/// to the documentation base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl DocEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The documentation pages linked from the header by default.
pub fn documentation_entries() -> Vec<DocEntry> {
    vec![
        DocEntry::new("Table of Contents", "/index.html"),
        DocEntry::new("Searching", "/user-search.html"),
        DocEntry::new("Uploading", "/user-upload.html"),
        DocEntry::new("Access Control", "/access-control.html"),
        DocEntry::new("REST APIs", "/rest-api.html"),
        DocEntry::new("Project Owner Guide", "/intro-project-owner.html"),
    ]
}

/// Resolve documentation entries against the configured base URL.
///
/// Returns an empty list when no base URL is configured (the docs are
/// simply not hosted) or there are no entries. Otherwise every entry is
/// kept, in order, joined to the base with exactly one separating slash and
/// marked to open externally.
pub fn resolve_doc_links(base_url: Option<&str>, entries: &[DocEntry]) -> Vec<MenuLink> {
    let Some(base) = base_url.filter(|b| !b.is_empty()) else {
        return Vec::new();
    };
    let base = base.strip_suffix('/').unwrap_or(base);

    entries
        .iter()
        .map(|entry| {
            let path = entry.url.strip_prefix('/').unwrap_or(&entry.url);
            MenuLink {
                name: entry.name.clone(),
                url: format!("{base}/{path}"),
                target: Some(EXTERNAL_TARGET.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn toc() -> Vec<DocEntry> {
        vec![DocEntry::new("Table of Contents", "/index.html")]
    }

    #[test]
    fn missing_base_or_entries_resolve_to_nothing() {
        assert!(resolve_doc_links(None, &toc()).is_empty());
        assert!(resolve_doc_links(Some(""), &toc()).is_empty());
        assert!(resolve_doc_links(Some("base"), &[]).is_empty());
    }

    #[test]
    fn entries_resolve_against_base() {
        let links = resolve_doc_links(Some("base"), &toc());
        assert_eq!(
            links,
            vec![MenuLink {
                name: "Table of Contents".to_string(),
                url: "base/index.html".to_string(),
                target: Some(EXTERNAL_TARGET.to_string()),
            }]
        );
    }

    #[test]
    fn single_trailing_slash_is_normalized() {
        assert_eq!(
            resolve_doc_links(Some("base/"), &toc()),
            resolve_doc_links(Some("base"), &toc()),
        );
    }

    #[test]
    fn entry_without_leading_slash_still_joins_once() {
        let links = resolve_doc_links(Some("base/"), &[DocEntry::new("X", "index.html")]);
        assert_eq!(links[0].url, "base/index.html");
    }

    #[test]
    fn order_is_preserved_and_nothing_dropped() {
        let links = resolve_doc_links(Some("https://docs.example.com"), &documentation_entries());
        assert_eq!(links.len(), documentation_entries().len());
        assert_eq!(links[0].name, "Table of Contents");
        assert_eq!(links[4].url, "https://docs.example.com/rest-api.html");
        assert!(links.iter().all(|l| l.target.as_deref() == Some("_blank")));
    }
}
