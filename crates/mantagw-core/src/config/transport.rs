//! HTTP transport configuration for the remote client.

use serde::{Deserialize, Serialize};

/// Connection tuning applied to the remote HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// TCP keep-alive interval in seconds.
    #[serde(default = "default_keepalive")]
    pub tcp_keepalive_seconds: u64,
    /// How long an idle pooled connection is kept, in seconds.
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout_seconds: u64,
    /// Maximum idle connections kept per host.
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle_per_host: usize,
    /// Whole-request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_connect_timeout(),
            tcp_keepalive_seconds: default_keepalive(),
            pool_idle_timeout_seconds: default_pool_idle_timeout(),
            pool_max_idle_per_host: default_pool_max_idle(),
            request_timeout_seconds: None,
        }
    }
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_keepalive() -> u64 {
    30
}

fn default_pool_idle_timeout() -> u64 {
    90
}

fn default_pool_max_idle() -> usize {
    100
}
