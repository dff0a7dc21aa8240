//! Reviewer list view state.
//!
//! Projects a change's reviewer buckets into the list the change page
//! renders: owner excluded, duplicates collapsed, long lists truncated
//! behind a "show all" affordance, and per-reviewer tooltips describing
//! which labels they can still vote on.

use std::collections::HashSet;

use critique_api_types::account::Account;
use critique_api_types::change::{ApprovalInfo, Change, LabelInfo, ReviewerState};

/// How many reviewers are shown before the list collapses.
pub const MAX_REVIEWERS_DISPLAYED: usize = 6;

/// Which reviewer buckets a particular list renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewerFilter {
    /// Show only the REVIEWER bucket.
    pub reviewers_only: bool,
    /// Show only the CC bucket.
    pub ccs_only: bool,
}

/// The reviewers a list should consider, in render order.
///
/// Concatenates the REVIEWER and CC buckets (subject to the filter),
/// dropping the change owner and any account already seen under an earlier
/// bucket. The REMOVED bucket never renders.
pub fn visible_reviewers(change: &Change, filter: ReviewerFilter) -> Vec<Account> {
    let mut seen = HashSet::new();
    if let Some(key) = change.owner.key() {
        seen.insert(key);
    }

    let mut out = Vec::new();
    for state in [ReviewerState::Reviewer, ReviewerState::Cc] {
        let included = match state {
            ReviewerState::Reviewer => !filter.ccs_only,
            ReviewerState::Cc => !filter.reviewers_only,
            ReviewerState::Removed => false,
        };
        if !included {
            continue;
        }
        for account in change.reviewers_in(state) {
            match account.key() {
                Some(key) => {
                    if seen.insert(key) {
                        out.push(account.clone());
                    }
                }
                // Nothing to de-duplicate on; keep the entry visible.
                None => out.push(account.clone()),
            }
        }
    }
    out
}

/// Truncate a reviewer list for display.
///
/// Returns the reviewers to show and how many stay hidden. Lists at most
/// two over the cap are shown whole — hiding one chip behind a "show all"
/// button would cost more space than it saves.
pub fn displayed_reviewers(reviewers: &[Account], max: usize) -> (&[Account], usize) {
    if reviewers.len() > max + 2 {
        (&reviewers[..max], reviewers.len() - max)
    } else {
        (reviewers, 0)
    }
}

/// Whether the requesting user may remove this reviewer from the change.
pub fn is_removable(change: &Change, account: &Account) -> bool {
    let Some(key) = account.key() else {
        return false;
    };
    change
        .removable_reviewers
        .iter()
        .any(|r| r.key().as_ref() == Some(&key))
}

/// Tooltip text describing which labels a reviewer can vote on.
///
/// For each label the account appears on, emits `"Label: +N"` when the
/// account can vote the label's highest permitted score, otherwise just the
/// label name. Labels are name-ordered; an account on no labels yields an
/// empty string.
pub fn voteable_text(account: &Account, change: &Change) -> String {
    let mut parts = Vec::new();
    for (label, info) in &change.labels {
        let Some(score) = permitted_score(account, info) else {
            continue;
        };
        if score < 0 {
            continue;
        }
        if score > 0 && max_permitted_score(change, label) == Some(score) {
            parts.push(format!("{label}: +{score}"));
        } else {
            parts.push(label.clone());
        }
    }
    parts.join(", ")
}

/// The highest vote this account may apply to a label, or `None` when the
/// account does not appear on the label at all.
fn permitted_score(account: &Account, info: &LabelInfo) -> Option<i32> {
    let approval = info
        .all
        .as_ref()?
        .iter()
        .rfind(|a| a.account_id.is_some() && a.account_id == account.account_id)?;
    approval_cap(approval)
}

fn approval_cap(approval: &ApprovalInfo) -> Option<i32> {
    if let Some(range) = &approval.permitted_voting_range {
        return Some(range.max);
    }
    // A recorded vote value without a range still means the account can
    // vote on the label, capped at zero.
    approval.value.map(|_| 0)
}

/// The label's highest score the requesting user could grant, parsed from
/// the formatted `permitted_labels` values.
fn max_permitted_score(change: &Change, label: &str) -> Option<i32> {
    change
        .permitted_labels
        .get(label)?
        .iter()
        .filter_map(|v| v.trim().parse::<i32>().ok())
        .max()
}
