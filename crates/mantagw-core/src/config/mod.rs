//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file overlaid with `MANTAGW__*` environment variables.
//! Each sub-module represents a logical configuration section.

pub mod gateway;
pub mod logging;
pub mod transport;

use serde::{Deserialize, Serialize};

use self::gateway::{CredentialsConfig, GatewayConfig, LocalStoreConfig};
use self::logging::LoggingConfig;
use self::transport::TransportConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "MANTAGW";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gateway endpoint and backend selection.
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Server-side credentials used to build the request signer.
    #[serde(default)]
    pub credentials: CredentialsConfig,
    /// HTTP transport tuning for the remote client.
    #[serde(default)]
    pub transport: TransportConfig,
    /// Local filesystem store settings.
    #[serde(default)]
    pub local: LocalStoreConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables such as
    /// `MANTAGW__CREDENTIALS__ACCESS_KEY` override file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::gateway::BackendKind;
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load("does/not/exist/mantagw").unwrap();
        assert_eq!(config.gateway.backend, BackendKind::Manta);
        assert!(config.gateway.endpoint.is_none());
        assert_eq!(config.transport.connect_timeout_seconds, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[gateway]
endpoint = "http://127.0.0.1:8080"
backend = "local"

[credentials]
access_key = "acct"
secret_key = "s3cr3t"

[local]
root_path = "/tmp/manta"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.gateway.endpoint.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(config.gateway.backend, BackendKind::Local);
        assert_eq!(config.credentials.access_key, "acct");
        assert_eq!(config.local.root_path, "/tmp/manta");
    }
}
