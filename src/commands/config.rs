//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use mantagw_core::config::AppConfig;
use mantagw_core::config::gateway::{BackendKind, DEFAULT_MANTA_URL};
use mantagw_core::error::AppError;
use mantagw_gateway::endpoint::{endpoint_url, parse_gateway_endpoint};

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved configuration with secrets masked
    Show,
    /// Check that the configuration can drive the selected backend
    Validate,
}

pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let masked = masked(config);
            match format {
                OutputFormat::Json => output::print_json(&masked),
                OutputFormat::Table => println!("{masked:#?}"),
            }
        }
        ConfigCommand::Validate => match validate(config) {
            Ok(endpoint) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv("Backend", &config.gateway.backend.to_string());
                output::print_kv("Endpoint", &endpoint);
                output::print_kv("Account", &config.credentials.access_key);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}

/// Copy of `config` safe to print.
fn masked(config: &AppConfig) -> AppConfig {
    let mut masked = config.clone();
    if !masked.credentials.secret_key.is_empty() {
        masked.credentials.secret_key = "****".to_string();
    }
    masked
}

/// Validate the settings the selected backend needs and return the
/// endpoint it will use.
fn validate(config: &AppConfig) -> Result<String, AppError> {
    match config.gateway.backend {
        BackendKind::Local => Ok(config.local.root_path.clone()),
        BackendKind::Manta => {
            if config.credentials.access_key.is_empty() {
                return Err(AppError::configuration("credentials.access_key is not set"));
            }
            if config.credentials.secret_key.is_empty() {
                return Err(AppError::configuration("credentials.secret_key is not set"));
            }
            match config.gateway.endpoint.as_deref() {
                Some(endpoint) if !endpoint.is_empty() => {
                    let (host, secure) = parse_gateway_endpoint(endpoint)?;
                    Ok(endpoint_url(&host, secure))
                }
                _ => Ok(DEFAULT_MANTA_URL.to_string()),
            }
        }
    }
}
