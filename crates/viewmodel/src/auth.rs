//! Registration link derivation.

use critique_api_types::config::AuthConfig;

/// Default label for the registration link.
pub const DEFAULT_REGISTER_TEXT: &str = "Sign up";

/// A sign-up link for the header of an anonymous session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAction {
    pub url: String,
    pub text: String,
}

/// The registration action to offer, if any.
///
/// Only auth schemes where accounts are created outside the server (LDAP
/// variants, custom extensions) get a registration link; for everything
/// else a configured `register_url` is ignored.
pub fn register_action(auth: &AuthConfig) -> Option<RegisterAction> {
    if !auth.auth_type.supports_registration() {
        return None;
    }
    let url = auth.register_url.clone().filter(|u| !u.is_empty())?;
    let text = auth
        .register_text
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_REGISTER_TEXT.to_string());
    Some(RegisterAction { url, text })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use critique_api_types::config::AuthType;

    use super::*;

    fn ldap_auth() -> AuthConfig {
        AuthConfig {
            auth_type: AuthType::Ldap,
            register_url: Some("https://review.example.com/register".to_string()),
            register_text: None,
        }
    }

    #[test]
    fn ldap_gets_default_sign_up_text() {
        let action = register_action(&ldap_auth());
        assert_eq!(
            action,
            Some(RegisterAction {
                url: "https://review.example.com/register".to_string(),
                text: "Sign up".to_string(),
            })
        );
    }

    #[test]
    fn custom_text_wins_over_default() {
        let auth = AuthConfig {
            register_text: Some("Create account".to_string()),
            ..ldap_auth()
        };
        assert_eq!(
            register_action(&auth).map(|a| a.text),
            Some("Create account".to_string())
        );
    }

    #[test]
    fn register_url_ignored_for_wrong_auth_type() {
        let auth = AuthConfig {
            auth_type: AuthType::OpenId,
            ..ldap_auth()
        };
        assert_eq!(register_action(&auth), None);
    }

    #[test]
    fn no_url_no_action() {
        let auth = AuthConfig {
            register_url: None,
            ..ldap_auth()
        };
        assert_eq!(register_action(&auth), None);
    }
}
