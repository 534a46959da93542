//! Gateway, credential, and backend configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Endpoint used when no override is configured.
pub const DEFAULT_MANTA_URL: &str = "https://us-east.manta.joyent.com";

/// Which [`DirectoryStore`](crate::traits::DirectoryStore) backs the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Remote Manta service over HTTP.
    #[default]
    Manta,
    /// Local filesystem emulating Manta directory semantics.
    Local,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manta => write!(f, "manta"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Gateway settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Endpoint override (`host[:port]` or `scheme://host[:port]`).
    /// When absent, [`DEFAULT_MANTA_URL`] is used.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Backend implementation.
    #[serde(default)]
    pub backend: BackendKind,
}

/// Server-side credentials.
///
/// The access key is the remote account name. The secret key is the
/// fingerprint of the account's SSH key, sent as the signature key id;
/// the private key itself is read from `key_path`.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Access key (remote account name).
    #[serde(default)]
    pub access_key: String,
    /// Secret key (SSH key fingerprint).
    #[serde(default)]
    pub secret_key: String,
    /// PEM private key matching the fingerprint. Empty means
    /// `$HOME/.ssh/id_rsa`.
    #[serde(default)]
    pub key_path: String,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .field("key_path", &self.key_path)
            .finish()
    }
}

/// Local filesystem store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStoreConfig {
    /// Directory that plays the role of the remote account root.
    #[serde(default = "default_local_root")]
    pub root_path: String,
}

impl Default for LocalStoreConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
        }
    }
}

fn default_local_root() -> String {
    "./data/manta".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_secret() {
        let creds = CredentialsConfig {
            access_key: "acct".into(),
            secret_key: "hunter2".into(),
            key_path: String::new(),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("acct"));
        assert!(!rendered.contains("hunter2"));
    }
}
