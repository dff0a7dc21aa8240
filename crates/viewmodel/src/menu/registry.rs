//! Top menu collection from plugin payloads.
//!
//! Each installed plugin may contribute a JSON array of top menu entries.
//! A plugin whose payload does not parse is skipped with a warning — one
//! broken plugin never takes the header down.

use critique_api_types::menu::TopMenuEntry;
use tracing::{debug, warn};

/// Collect top menu entries from per-plugin JSON payloads.
///
/// Entries keep payload order, and payloads keep plugin order, so the
/// merge downstream sees a stable input sequence.
pub fn collect_top_menus(payloads: &[(String, String)]) -> Vec<TopMenuEntry> {
    let mut entries = Vec::new();

    for (plugin, raw) in payloads {
        match TopMenuEntry::list_from_json(raw) {
            Ok(mut parsed) => entries.append(&mut parsed),
            Err(e) => {
                warn!(
                    plugin = %plugin,
                    error = %e,
                    "failed to parse top menu payload"
                );
            }
        }
    }

    debug!(entries = entries.len(), "collected plugin top menus");
    entries
}
