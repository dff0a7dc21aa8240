//! Payload decode errors.

use thiserror::Error;

/// Error decoding a raw REST payload into its typed model.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed {kind} payload")]
    Malformed {
        /// Which payload failed to decode (e.g. "change", "server config").
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PayloadError {
    pub(crate) fn malformed(kind: &'static str, source: serde_json::Error) -> Self {
        Self::Malformed { kind, source }
    }
}
