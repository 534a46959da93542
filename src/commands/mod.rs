//! CLI command definitions and dispatch.

pub mod bucket;
pub mod config;
pub mod object;

use clap::{Parser, Subcommand};

use mantagw_core::config::AppConfig;
use mantagw_core::error::AppError;
use mantagw_core::traits::gateway::GatewayLayer;
use mantagw_gateway::StorageGateway;

use crate::output::OutputFormat;

/// mantagw: object-storage operations over a Manta directory store
#[derive(Debug, Parser)]
#[command(name = "mantagw", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a bucket
    Mb(bucket::MakeBucketArgs),
    /// Remove an empty bucket
    Rb(bucket::RemoveBucketArgs),
    /// List buckets, or objects in a bucket
    Ls(object::ListArgs),
    /// Show bucket or object metadata
    Stat(object::StatArgs),
    /// Upload a file as an object
    Put(object::PutArgs),
    /// Download an object
    Get(object::GetArgs),
    /// Copy an object
    Cp(object::CopyArgs),
    /// Remove an object
    Rm(object::RemoveArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, &self.config, config, self.format);
        }

        let gateway = StorageGateway::from_config(config).await?;
        let result = match &self.command {
            Commands::Mb(args) => bucket::make(&gateway, args).await,
            Commands::Rb(args) => bucket::remove(&gateway, args).await,
            Commands::Ls(args) => object::list(&gateway, args, self.format).await,
            Commands::Stat(args) => object::stat(&gateway, args, self.format).await,
            Commands::Put(args) => object::put(&gateway, args).await,
            Commands::Get(args) => object::get(&gateway, args).await,
            Commands::Cp(args) => object::copy(&gateway, args).await,
            Commands::Rm(args) => object::remove(&gateway, args).await,
            Commands::Config(_) => Ok(()),
        };

        gateway.shutdown().await?;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_with_range() {
        let cli = Cli::try_parse_from([
            "mantagw", "get", "photos", "cat.jpg", "--offset", "10", "--length", "20",
        ])
        .unwrap();
        match cli.command {
            Commands::Get(args) => {
                assert_eq!(args.bucket, "photos");
                assert_eq!(args.object, "cat.jpg");
                assert_eq!(args.offset, 10);
                assert_eq!(args.length, 20);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["mantagw", "-c", "alt.toml", "-f", "json", "ls"]).unwrap();
        assert_eq!(cli.config, "alt.toml");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Ls(ref args) if args.bucket.is_none()));
    }

    #[test]
    fn test_put_requires_file() {
        assert!(Cli::try_parse_from(["mantagw", "put", "b", "o"]).is_err());
    }
}
