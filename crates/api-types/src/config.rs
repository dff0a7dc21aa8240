//! Server configuration payload types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// The server configuration payload, fetched once at UI startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub download: DownloadConfig,

    /// Base URL the documentation is served from, when hosted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,

    /// Where the "report a bug" footer link points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_bug_url: Option<String>,
}

impl ServerConfig {
    /// Decode a server configuration payload.
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(raw).map_err(|e| PayloadError::malformed("server config", e))
    }
}

/// Authentication section of the server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub auth_type: AuthType,

    /// Where a new user can create an account, for auth schemes that
    /// support self-service registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_url: Option<String>,

    /// Custom label for the registration link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_text: Option<String>,
}

/// The authentication scheme the server is configured with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthType {
    #[default]
    #[serde(rename = "OPENID")]
    OpenId,
    #[serde(rename = "OPENID_SSO")]
    OpenIdSso,
    #[serde(rename = "OAUTH")]
    OAuth,
    #[serde(rename = "HTTP")]
    Http,
    #[serde(rename = "HTTP_LDAP")]
    HttpLdap,
    #[serde(rename = "LDAP")]
    Ldap,
    #[serde(rename = "LDAP_BIND")]
    LdapBind,
    #[serde(rename = "CUSTOM_EXTENSION")]
    CustomExtension,
    #[serde(rename = "DEVELOPMENT_BECOME_ANY_ACCOUNT")]
    DevelopmentBecomeAnyAccount,
}

impl AuthType {
    /// Whether accounts are created outside the server, so a registration
    /// link is meaningful.
    pub fn supports_registration(self) -> bool {
        matches!(self, Self::Ldap | Self::LdapBind | Self::CustomExtension)
    }
}

/// Download section of the server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Enabled download schemes keyed by name ("ssh", "http", "repo", ...).
    #[serde(default)]
    pub schemes: BTreeMap<String, DownloadSchemeInfo>,

    /// Archive formats offered for download ("tgz", "tar", ...).
    #[serde(default)]
    pub archives: Vec<String>,
}

/// Per-scheme download capabilities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadSchemeInfo {
    #[serde(default)]
    pub is_auth_required: bool,
    #[serde(default)]
    pub is_auth_supported: bool,
}
