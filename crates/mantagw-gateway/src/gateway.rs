//! Gateway construction and lifecycle.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use mantagw_core::config::AppConfig;
use mantagw_core::config::gateway::{BackendKind, CredentialsConfig, DEFAULT_MANTA_URL};
use mantagw_core::config::transport::TransportConfig;
use mantagw_core::error::AppError;
use mantagw_core::result::AppResult;
use mantagw_core::traits::directory::DirectoryStore;
use mantagw_core::traits::gateway::GatewayLayer;
use mantagw_core::types::StorageInfo;
use mantagw_storage::transport::build_http_client;
use mantagw_storage::{LocalDirectoryStore, MantaClient, MantaClientConfig, RsaSigner};

use crate::endpoint::{endpoint_url, parse_gateway_endpoint};

/// Object-storage gateway backed by a directory store.
///
/// Buckets are top-level directories under `/stor`; objects are files
/// beneath them. The store handle is shared and never mutated.
#[derive(Debug, Clone)]
pub struct StorageGateway {
    pub(crate) client: Arc<dyn DirectoryStore>,
}

impl StorageGateway {
    /// Create a gateway over an existing store.
    pub fn new(client: Arc<dyn DirectoryStore>) -> Self {
        Self { client }
    }

    /// Connect to a remote Manta service.
    ///
    /// `host` overrides the default endpoint. The access key names the
    /// account, and the secret key is the fingerprint of the SSH key at
    /// `credentials.key_path` that signs every request.
    pub fn connect(
        host: Option<&str>,
        credentials: &CredentialsConfig,
        transport: &TransportConfig,
    ) -> AppResult<Self> {
        let manta_url = match host {
            Some(host) if !host.is_empty() => {
                let (host, secure) = parse_gateway_endpoint(host)?;
                endpoint_url(&host, secure)
            }
            _ => DEFAULT_MANTA_URL.to_string(),
        };

        if credentials.access_key.is_empty() {
            return Err(AppError::authentication("Access key (account name) is empty"));
        }
        if credentials.secret_key.is_empty() {
            return Err(AppError::authentication(
                "Secret key (SSH key fingerprint) is empty",
            ));
        }

        let signer = RsaSigner::from_file(&credentials.secret_key, &key_path(credentials)?)?;
        let config = MantaClientConfig {
            manta_url,
            account_name: credentials.access_key.clone(),
            signers: vec![Arc::new(signer)],
        };
        let client = MantaClient::new(config, build_http_client(transport)?)?;

        Ok(Self::new(Arc::new(client)))
    }

    /// Build a gateway for the backend selected in `config`.
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let gateway = match config.gateway.backend {
            BackendKind::Manta => Self::connect(
                config.gateway.endpoint.as_deref(),
                &config.credentials,
                &config.transport,
            )?,
            BackendKind::Local => {
                let store = LocalDirectoryStore::new(&config.local.root_path).await?;
                Self::new(Arc::new(store))
            }
        };

        info!(
            backend = gateway.client.provider_type(),
            "Storage gateway ready"
        );
        Ok(gateway)
    }

    /// Type name of the backing store.
    pub fn provider_type(&self) -> &str {
        self.client.provider_type()
    }
}

/// Private key location, defaulting to `$HOME/.ssh/id_rsa`.
fn key_path(credentials: &CredentialsConfig) -> AppResult<PathBuf> {
    if !credentials.key_path.is_empty() {
        return Ok(PathBuf::from(&credentials.key_path));
    }
    let home = std::env::var_os("HOME").ok_or_else(|| {
        AppError::configuration("credentials.key_path is not set and HOME is undefined")
    })?;
    Ok(PathBuf::from(home).join(".ssh").join("id_rsa"))
}

#[async_trait]
impl GatewayLayer for StorageGateway {
    async fn shutdown(&self) -> AppResult<()> {
        Ok(())
    }

    async fn storage_info(&self) -> StorageInfo {
        StorageInfo::default()
    }
}

#[cfg(test)]
mod tests {
    use mantagw_core::error::ErrorKind;

    use super::*;

    const TEST_KEY: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../mantagw-storage/testdata/test_key.pem"
    );

    fn credentials() -> CredentialsConfig {
        CredentialsConfig {
            access_key: "acct".into(),
            secret_key: "SHA256:TEkZLGqD/Ba916/WbkPhkgYQulZds/gBnGLgB4BA9UA".into(),
            key_path: TEST_KEY.into(),
        }
    }

    #[test]
    fn test_connect_default_endpoint() {
        let gateway = StorageGateway::connect(None, &credentials(), &TransportConfig::default())
            .unwrap();
        assert_eq!(gateway.provider_type(), "manta");
    }

    #[test]
    fn test_connect_with_override() {
        let gateway = StorageGateway::connect(
            Some("http://localhost:8080"),
            &credentials(),
            &TransportConfig::default(),
        )
        .unwrap();
        assert_eq!(gateway.provider_type(), "manta");
    }

    #[test]
    fn test_connect_rejects_bad_endpoint() {
        let err = StorageGateway::connect(
            Some("gopher://localhost"),
            &credentials(),
            &TransportConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_connect_requires_credentials() {
        let err = StorageGateway::connect(
            None,
            &CredentialsConfig::default(),
            &TransportConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_connect_reports_missing_key_file() {
        let mut creds = credentials();
        creds.key_path = "/nonexistent/id_rsa".into();
        let err = StorageGateway::connect(None, &creds, &TransportConfig::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_key_path_defaults_to_home_ssh_key() {
        let mut creds = credentials();
        assert_eq!(key_path(&creds).unwrap(), PathBuf::from(TEST_KEY));

        creds.key_path.clear();
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(
                key_path(&creds).unwrap(),
                PathBuf::from(home).join(".ssh/id_rsa")
            );
        }
    }

    #[tokio::test]
    async fn test_from_config_local() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.gateway.backend = BackendKind::Local;
        config.local.root_path = dir.path().to_string_lossy().to_string();

        let gateway = StorageGateway::from_config(&config).await.unwrap();
        assert_eq!(gateway.provider_type(), "local");
        assert!(gateway.shutdown().await.is_ok());
        assert_eq!(gateway.storage_info().await, StorageInfo::default());
    }
}
