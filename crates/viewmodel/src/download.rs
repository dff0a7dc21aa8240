//! Download dialog view state.
//!
//! What the download dialog offers for a revision: the fetch schemes both
//! the server and the revision support, the copyable command list per
//! scheme, archive links, and whether the raw patch file link applies.

use critique_api_types::change::{Change, Revision};
use critique_api_types::config::DownloadConfig;

/// One copyable fetch command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCommand {
    pub title: String,
    pub command: String,
}

/// The fetch schemes to offer for a revision, name-ordered.
///
/// A scheme must both be present in the revision's fetch info and enabled
/// in the server's download configuration.
pub fn schemes(config: &DownloadConfig, revision: &Revision) -> Vec<String> {
    revision
        .fetch
        .keys()
        .filter(|scheme| config.schemes.contains_key(*scheme))
        .cloned()
        .collect()
}

/// The command list for one scheme, title-ordered. Empty when the revision
/// does not offer the scheme.
pub fn commands(revision: &Revision, scheme: &str) -> Vec<DownloadCommand> {
    revision
        .fetch
        .get(scheme)
        .map(|fetch| {
            fetch
                .commands
                .iter()
                .map(|(title, command)| DownloadCommand {
                    title: title.clone(),
                    command: command.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// REST path for downloading one revision as an archive.
pub fn archive_link(project: &str, number: u64, patch: u64, format: &str) -> String {
    format!(
        "/changes/{}~{number}/revisions/{patch}/archive?format={format}",
        urlencoding::encode(project)
    )
}

/// Whether the patch-file download should be hidden for this patch set.
///
/// An initial commit has no parent to diff against, so there is no patch
/// file to offer.
pub fn hide_patch_file(change: &Change, patch: u64) -> bool {
    match change.revision_by_patch(patch) {
        Some(revision) => revision
            .commit
            .as_ref()
            .is_none_or(|commit| commit.parents.is_empty()),
        None => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use critique_api_types::config::ServerConfig;

    use super::*;

    fn fixture_change() -> Change {
        Change::from_json(
            r#"{
                "project": "test-project",
                "_number": 5,
                "current_revision": "34685798",
                "revisions": {
                    "34685798": {
                        "_number": 1,
                        "commit": {"parents": []},
                        "fetch": {
                            "repo": {
                                "commands": {"repo": "repo download test-project 5/1"}
                            },
                            "ssh": {
                                "commands": {
                                    "Checkout": "git fetch ssh://host:29418/test-project refs/changes/05/5/1 && git checkout FETCH_HEAD",
                                    "Cherry Pick": "git fetch ssh://host:29418/test-project refs/changes/05/5/1 && git cherry-pick FETCH_HEAD",
                                    "Format Patch": "git fetch ssh://host:29418/test-project refs/changes/05/5/1 && git format-patch -1 --stdout FETCH_HEAD",
                                    "Pull": "git pull ssh://host:29418/test-project refs/changes/05/5/1"
                                }
                            },
                            "rsync": {
                                "commands": {"Sync": "rsync host::test-project"}
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    fn fixture_config() -> DownloadConfig {
        ServerConfig::from_json(
            r#"{"download": {
                "schemes": {"anonymous http": {}, "http": {}, "repo": {}, "ssh": {}},
                "archives": ["tgz", "tar", "tbz2", "txz"]
            }}"#,
        )
        .unwrap()
        .download
    }

    #[test]
    fn schemes_intersect_server_and_revision() {
        let change = fixture_change();
        let revision = change.revision_by_patch(1).unwrap();
        // "rsync" is not server-enabled; "http" is not offered by the
        // revision. Neither appears.
        assert_eq!(schemes(&fixture_config(), revision), ["repo", "ssh"]);
    }

    #[test]
    fn commands_are_title_ordered() {
        let change = fixture_change();
        let revision = change.revision_by_patch(1).unwrap();

        let titles: Vec<_> = commands(revision, "ssh")
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, ["Checkout", "Cherry Pick", "Format Patch", "Pull"]);

        assert!(commands(revision, "http").is_empty());
    }

    #[test]
    fn archive_link_encodes_the_project_segment() {
        assert_eq!(
            archive_link("test/project", 123, 2, "tgz"),
            "/changes/test%2Fproject~123/revisions/2/archive?format=tgz"
        );
    }

    #[test]
    fn patch_file_hidden_only_for_parentless_commits() {
        let parentless = Change::from_json(
            r#"{"revisions": {"r1": {"_number": 1, "commit": {"parents": []}}}}"#,
        )
        .unwrap();
        assert!(hide_patch_file(&parentless, 1));

        let with_parent = Change::from_json(
            r#"{"revisions": {"r1": {"_number": 1, "commit": {"parents": [{"commit": "p1"}]}}}}"#,
        )
        .unwrap();
        assert!(!hide_patch_file(&with_parent, 1));

        // Unknown patch set: nothing to hide.
        assert!(!hide_patch_file(&with_parent, 2));
    }
}
