//! Bucket commands.

use clap::Args;

use mantagw_core::error::AppError;
use mantagw_core::traits::gateway::BucketOperations;
use mantagw_gateway::StorageGateway;

use crate::output;

/// Arguments for `mb`
#[derive(Debug, Args)]
pub struct MakeBucketArgs {
    /// Bucket name
    pub bucket: String,
    /// Region hint, accepted for compatibility
    #[arg(short, long, default_value = "")]
    pub location: String,
}

/// Arguments for `rb`
#[derive(Debug, Args)]
pub struct RemoveBucketArgs {
    /// Bucket name
    pub bucket: String,
}

pub async fn make(gateway: &StorageGateway, args: &MakeBucketArgs) -> Result<(), AppError> {
    gateway
        .make_bucket_with_location(&args.bucket, &args.location)
        .await?;
    output::print_success(&format!("Bucket '{}' created", args.bucket));
    Ok(())
}

pub async fn remove(gateway: &StorageGateway, args: &RemoveBucketArgs) -> Result<(), AppError> {
    gateway.delete_bucket(&args.bucket).await?;
    output::print_success(&format!("Bucket '{}' removed", args.bucket));
    Ok(())
}
