//! Buckets map to top-level directories under `/stor`.

use async_trait::async_trait;
use tracing::info;

use mantagw_core::path::{ROOT_STORE, store_path};
use mantagw_core::result::AppResult;
use mantagw_core::traits::gateway::BucketOperations;
use mantagw_core::types::BucketInfo;

use crate::gateway::StorageGateway;

#[async_trait]
impl BucketOperations for StorageGateway {
    async fn make_bucket_with_location(&self, bucket: &str, location: &str) -> AppResult<()> {
        info!(bucket, location, "MakeBucketWithLocation");
        self.client.put_directory(&store_path(&[bucket])).await
    }

    /// Creation time is the directory's last-modified time, read through
    /// an object fetch of the bucket path.
    async fn get_bucket_info(&self, bucket: &str) -> AppResult<BucketInfo> {
        let remote = self.client.get_object(&store_path(&[bucket])).await?;
        Ok(BucketInfo {
            name: bucket.to_string(),
            created: remote.last_modified,
        })
    }

    async fn list_buckets(&self) -> AppResult<Vec<BucketInfo>> {
        let entries = self.client.list_directory(ROOT_STORE).await?;
        Ok(entries
            .into_iter()
            .filter(|entry| entry.is_directory())
            .map(|entry| BucketInfo {
                name: entry.name,
                created: Some(entry.modified_time),
            })
            .collect())
    }

    async fn delete_bucket(&self, bucket: &str) -> AppResult<()> {
        self.client.delete_directory(&store_path(&[bucket])).await
    }
}
