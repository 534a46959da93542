//! HTTP transport for the Manta client.

use std::time::Duration;

use mantagw_core::config::transport::TransportConfig;
use mantagw_core::error::{AppError, ErrorKind};
use mantagw_core::result::AppResult;

/// Build the pooled HTTP client used for every remote request.
///
/// Responses are never transparently decompressed: object bodies are
/// handed to callers byte for byte.
pub fn build_http_client(config: &TransportConfig) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .tcp_keepalive(Duration::from_secs(config.tcp_keepalive_seconds))
        .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_seconds))
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .user_agent(concat!("mantagw/", env!("CARGO_PKG_VERSION")));

    if let Some(secs) = config.request_timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build().map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_defaults() {
        assert!(build_http_client(&TransportConfig::default()).is_ok());
    }

    #[test]
    fn test_builds_with_request_timeout() {
        let config = TransportConfig {
            request_timeout_seconds: Some(5),
            ..TransportConfig::default()
        };
        assert!(build_http_client(&config).is_ok());
    }
}
