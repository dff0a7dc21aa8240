//! Account payload types.

use serde::{Deserialize, Serialize};

/// A user account as embedded in change and reviewer payloads.
///
/// Accounts are not always fully materialized on the wire: a reviewer added
/// by email address before registering has no numeric id, and detail-less
/// responses may carry the id alone. Every field is therefore optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Numeric account id.
    #[serde(rename = "_account_id", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Registered email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Identity key for an account: the numeric id when present, otherwise the
/// email address. Used for reviewer de-duplication and removal matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountKey {
    Id(u64),
    Email(String),
}

impl Account {
    /// The account's identity key, or `None` for an account that carries
    /// neither an id nor an email.
    pub fn key(&self) -> Option<AccountKey> {
        if let Some(id) = self.account_id {
            return Some(AccountKey::Id(id));
        }
        self.email.clone().map(AccountKey::Email)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn key_prefers_numeric_id() {
        let account = Account {
            account_id: Some(7),
            name: Some("Pinky Penguin".to_string()),
            email: Some("pinky@example.com".to_string()),
        };
        assert_eq!(account.key(), Some(AccountKey::Id(7)));
    }

    #[test]
    fn key_falls_back_to_email() {
        let account = Account {
            email: Some("test@e.mail".to_string()),
            ..Account::default()
        };
        assert_eq!(
            account.key(),
            Some(AccountKey::Email("test@e.mail".to_string()))
        );
    }

    #[test]
    fn key_absent_without_id_or_email() {
        assert_eq!(Account::default().key(), None);
    }

    #[test]
    fn deserializes_wire_field_names() {
        let account: Account =
            serde_json::from_str(r#"{"_account_id": 2, "name": "Bojack Horseman"}"#).unwrap();
        assert_eq!(account.account_id, Some(2));
        assert_eq!(account.name.as_deref(), Some("Bojack Horseman"));
        assert_eq!(account.email, None);
    }
}
