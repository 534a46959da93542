//! Bucket policies are accepted and discarded.

use async_trait::async_trait;
use tracing::warn;

use mantagw_core::result::AppResult;
use mantagw_core::traits::gateway::PolicyOperations;
use mantagw_core::types::BucketAccessPolicy;

use crate::gateway::StorageGateway;

#[async_trait]
impl PolicyOperations for StorageGateway {
    async fn set_bucket_policies(&self, bucket: &str, policy: &BucketAccessPolicy) -> AppResult<()> {
        warn!(
            bucket,
            statements = policy.statements.len(),
            "Bucket policies are not persisted"
        );
        Ok(())
    }

    async fn get_bucket_policies(&self, _bucket: &str) -> AppResult<BucketAccessPolicy> {
        Ok(BucketAccessPolicy::default())
    }

    async fn delete_bucket_policies(&self, _bucket: &str) -> AppResult<()> {
        Ok(())
    }
}
