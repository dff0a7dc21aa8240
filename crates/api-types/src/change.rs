//! Change payload types.
//!
//! A change is the unit of review: an owner, reviewer buckets, votable
//! labels, and one revision per uploaded patch set. The maps that feed
//! ordered view-state (labels, fetch schemes, commands) are `BTreeMap` so
//! projections iterate deterministically regardless of payload field order.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::error::PayloadError;

/// Reviewer bucket within a change's `reviewers` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewerState {
    /// Has been asked to review.
    #[serde(rename = "REVIEWER")]
    Reviewer,
    /// Kept informed but not asked to vote.
    #[serde(rename = "CC")]
    Cc,
    /// Was a reviewer, since removed.
    #[serde(rename = "REMOVED")]
    Removed,
}

/// A change detail payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Change {
    /// Project the change belongs to.
    #[serde(default)]
    pub project: String,

    /// Server-assigned change number.
    #[serde(rename = "_number", default)]
    pub number: u64,

    /// The change owner.
    #[serde(default)]
    pub owner: Account,

    /// Reviewers grouped by state.
    #[serde(default)]
    pub reviewers: HashMap<ReviewerState, Vec<Account>>,

    /// Reviewers the requesting user is allowed to remove.
    #[serde(default)]
    pub removable_reviewers: Vec<Account>,

    /// Review labels keyed by label name.
    #[serde(default)]
    pub labels: BTreeMap<String, LabelInfo>,

    /// Vote values the requesting user may apply, keyed by label name.
    /// Values are formatted scores ("-1", " 0", "+2").
    #[serde(default)]
    pub permitted_labels: BTreeMap<String, Vec<String>>,

    /// Commit id of the current revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_revision: Option<String>,

    /// All revisions keyed by commit id.
    #[serde(default)]
    pub revisions: HashMap<String, Revision>,
}

impl Change {
    /// Decode a change detail payload.
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(raw).map_err(|e| PayloadError::malformed("change", e))
    }

    /// Reviewers in the given bucket, empty when the bucket is absent.
    pub fn reviewers_in(&self, state: ReviewerState) -> &[Account] {
        self.reviewers.get(&state).map_or(&[], Vec::as_slice)
    }

    /// The revision with the given patch set number.
    pub fn revision_by_patch(&self, patch: u64) -> Option<&Revision> {
        self.revisions.values().find(|rev| rev.number == patch)
    }
}

/// Aggregate information about one review label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelInfo {
    /// Per-account approval detail. Absent on responses fetched without
    /// detailed label options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<ApprovalInfo>>,
}

/// One account's standing on a label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApprovalInfo {
    #[serde(rename = "_account_id", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,

    /// The vote currently applied, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,

    /// The range of votes this account is allowed to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permitted_voting_range: Option<VotingRange>,
}

/// Closed vote range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingRange {
    #[serde(default)]
    pub min: i32,
    #[serde(default)]
    pub max: i32,
}

/// One uploaded patch set of a change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Revision {
    /// Patch set number.
    #[serde(rename = "_number", default)]
    pub number: u64,

    /// The revision's commit, when included in the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<Commit>,

    /// Fetch instructions keyed by scheme name (e.g. "ssh", "http").
    #[serde(default)]
    pub fetch: BTreeMap<String, FetchInfo>,

    /// Uploader-provided patch set description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Commit metadata for a revision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub parents: Vec<CommitParent>,
}

/// Reference to a parent commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitParent {
    #[serde(default)]
    pub commit: String,
}

/// How to fetch a revision over one scheme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,

    /// Ready-to-copy commands keyed by display title, title-ordered.
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
}
