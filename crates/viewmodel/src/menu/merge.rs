//! Ordered merge of navigation sources into header sections.

use critique_api_types::menu::TopMenuEntry;

use super::{ADMIN_SECTION_TITLE, MenuLink, MenuSection, USER_SECTION_TITLE};

/// Combine the four navigation sources into one ordered section list.
///
/// Section order is fixed: `default_links` as given, then a
/// [`USER_SECTION_TITLE`] section when `user_links` is non-empty, then
/// always an [`ADMIN_SECTION_TITLE`] section seeded with `admin_links`
/// (present even with zero admin entries — it is the stable merge anchor
/// for plugin menus). Each top menu entry then merges into the first
/// section whose title equals its name, or is appended as a new section.
///
/// Top menu items whose URL still contains an unresolved template
/// placeholder are dropped: they are only meaningful with page context
/// (e.g. a project name) the global header does not have.
///
/// Pure and total: identical inputs always produce identical output, and
/// no input combination fails. Sections left without links are kept —
/// whether to render an empty section is the rendering layer's call.
pub fn merge(
    default_links: &[MenuSection],
    user_links: &[MenuLink],
    admin_links: &[MenuLink],
    top_menus: &[TopMenuEntry],
) -> Vec<MenuSection> {
    let mut sections: Vec<MenuSection> = default_links.to_vec();

    if !user_links.is_empty() {
        sections.push(MenuSection::new(USER_SECTION_TITLE, user_links.to_vec()));
    }
    sections.push(MenuSection::new(ADMIN_SECTION_TITLE, admin_links.to_vec()));

    for entry in top_menus {
        let items: Vec<MenuLink> = entry
            .items
            .iter()
            .filter(|item| !has_placeholder(&item.url))
            .map(|item| MenuLink::normalized(item.name.clone(), &item.url))
            .collect();

        match sections.iter_mut().find(|s| s.title == entry.name) {
            Some(section) => section.links.extend(items),
            None => sections.push(MenuSection::new(entry.name.clone(), items)),
        }
    }

    sections
}

/// Whether a URL still carries an unresolved `${...}` substitution token.
fn has_placeholder(url: &str) -> bool {
    url.contains("${")
}
