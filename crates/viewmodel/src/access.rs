//! Access rule view state.
//!
//! Project access payloads key rules by group id in a JSON object; the
//! editor renders them as a list, so the map is flattened into a
//! deterministic id-sorted array.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What a matching rule does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionAction {
    #[default]
    Allow,
    Deny,
    Block,
    Interactive,
    Batch,
}

/// One access rule, keyed upstream by group id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRule {
    #[serde(default)]
    pub action: PermissionAction,
    #[serde(default)]
    pub force: bool,
}

/// An access rule paired with the group id it was keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionEntry {
    pub id: String,
    pub rule: AccessRule,
}

/// Flatten a rule map into an id-sorted entry list.
pub fn to_sorted_permissions(rules: &HashMap<String, AccessRule>) -> Vec<PermissionEntry> {
    let mut entries: Vec<PermissionEntry> = rules
        .iter()
        .map(|(id, rule)| PermissionEntry {
            id: id.clone(),
            rule: rule.clone(),
        })
        .collect();
    entries.sort_by(|a, b| a.id.cmp(&b.id));
    entries
}
