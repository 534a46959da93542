//! Object-layer capability traits.
//!
//! The object-storage surface is split by concern so callers can depend
//! on the narrowest set they need. [`GatewayLayer`] combines them all.

use std::fmt::Debug;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::result::AppResult;
use crate::types::{
    BucketAccessPolicy, BucketInfo, CompletePart, HealObjectResult, ListMultipartsInfo,
    ListObjectsInfo, ListObjectsV2Info, ListPartsInfo, ObjectInfo, ObjectMetadata, PartInfo,
    StorageInfo,
};

/// Sink that receives object bytes.
pub type ObjectWriter<'a> = dyn AsyncWrite + Unpin + Send + 'a;

/// Source of object bytes to upload.
pub type ObjectReader<'a> = dyn AsyncRead + Unpin + Send + 'a;

/// Bucket-level operations.
#[async_trait]
pub trait BucketOperations: Send + Sync + Debug {
    /// Create a bucket. `location` is accepted for interface compatibility.
    async fn make_bucket_with_location(&self, bucket: &str, location: &str) -> AppResult<()>;

    /// Fetch bucket metadata.
    async fn get_bucket_info(&self, bucket: &str) -> AppResult<BucketInfo>;

    /// List all buckets.
    async fn list_buckets(&self) -> AppResult<Vec<BucketInfo>>;

    /// Delete a bucket.
    async fn delete_bucket(&self, bucket: &str) -> AppResult<()>;
}

/// Object-level operations.
#[async_trait]
#[allow(clippy::too_many_arguments)]
pub trait ObjectOperations: Send + Sync + Debug {
    /// List objects and prefixes under `prefix` (V1 listing).
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        marker: &str,
        delimiter: &str,
        max_keys: usize,
    ) -> AppResult<ListObjectsInfo>;

    /// List objects and prefixes under `prefix` (V2 listing).
    async fn list_objects_v2(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: &str,
        fetch_owner: bool,
        delimiter: &str,
        max_keys: usize,
    ) -> AppResult<ListObjectsV2Info>;

    /// Stream object bytes into `writer`.
    ///
    /// `start_offset` and `length` describe the requested range.
    async fn get_object(
        &self,
        bucket: &str,
        object: &str,
        start_offset: i64,
        length: i64,
        writer: &mut ObjectWriter<'_>,
    ) -> AppResult<()>;

    /// Fetch object metadata.
    async fn get_object_info(&self, bucket: &str, object: &str) -> AppResult<ObjectInfo>;

    /// Store an object of `size` bytes read from `data`.
    async fn put_object(
        &self,
        bucket: &str,
        object: &str,
        size: i64,
        data: &mut ObjectReader<'_>,
        metadata: &ObjectMetadata,
        sha256sum: &str,
    ) -> AppResult<ObjectInfo>;

    /// Copy an object between buckets.
    async fn copy_object(
        &self,
        src_bucket: &str,
        src_object: &str,
        dst_bucket: &str,
        dst_object: &str,
        metadata: &ObjectMetadata,
    ) -> AppResult<ObjectInfo>;

    /// Delete an object.
    async fn delete_object(&self, bucket: &str, object: &str) -> AppResult<()>;
}

/// Unauthenticated variants of the read paths and of object upload.
#[async_trait]
#[allow(clippy::too_many_arguments)]
pub trait AnonymousOperations: Send + Sync + Debug {
    /// Fetch bucket metadata without credentials.
    async fn anon_get_bucket_info(&self, bucket: &str) -> AppResult<BucketInfo>;

    /// Store an object without credentials.
    async fn anon_put_object(
        &self,
        bucket: &str,
        object: &str,
        size: i64,
        data: &mut ObjectReader<'_>,
        metadata: &ObjectMetadata,
        sha256sum: &str,
    ) -> AppResult<ObjectInfo>;

    /// Stream object bytes into `writer` without credentials.
    async fn anon_get_object(
        &self,
        bucket: &str,
        object: &str,
        start_offset: i64,
        length: i64,
        writer: &mut ObjectWriter<'_>,
    ) -> AppResult<()>;

    /// Fetch object metadata without credentials.
    async fn anon_get_object_info(&self, bucket: &str, object: &str) -> AppResult<ObjectInfo>;

    /// V1 listing without credentials.
    async fn anon_list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        marker: &str,
        delimiter: &str,
        max_keys: usize,
    ) -> AppResult<ListObjectsInfo>;

    /// V2 listing without credentials.
    async fn anon_list_objects_v2(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: &str,
        fetch_owner: bool,
        delimiter: &str,
        max_keys: usize,
    ) -> AppResult<ListObjectsV2Info>;
}

/// Bucket access policy operations.
#[async_trait]
pub trait PolicyOperations: Send + Sync + Debug {
    /// Attach an access policy to `bucket`.
    async fn set_bucket_policies(&self, bucket: &str, policy: &BucketAccessPolicy) -> AppResult<()>;

    /// Read the access policy attached to `bucket`.
    async fn get_bucket_policies(&self, bucket: &str) -> AppResult<BucketAccessPolicy>;

    /// Remove any access policy from `bucket`.
    async fn delete_bucket_policies(&self, bucket: &str) -> AppResult<()>;
}

/// Healing and repair operations.
#[async_trait]
#[allow(clippy::too_many_arguments)]
pub trait HealOperations: Send + Sync + Debug {
    /// Repair a damaged bucket.
    async fn heal_bucket(&self, bucket: &str) -> AppResult<()>;

    /// List buckets that need repair.
    async fn list_buckets_heal(&self) -> AppResult<Vec<BucketInfo>>;

    /// Repair a damaged object.
    async fn heal_object(&self, bucket: &str, object: &str) -> AppResult<HealObjectResult>;

    /// List objects under `prefix` that need repair.
    async fn list_objects_heal(
        &self,
        bucket: &str,
        prefix: &str,
        marker: &str,
        delimiter: &str,
        max_keys: usize,
    ) -> AppResult<ListObjectsInfo>;

    /// List multipart uploads that need repair.
    async fn list_uploads_heal(
        &self,
        bucket: &str,
        prefix: &str,
        marker: &str,
        upload_id_marker: &str,
        delimiter: &str,
        max_uploads: usize,
    ) -> AppResult<ListMultipartsInfo>;
}

/// Multipart upload lifecycle.
#[async_trait]
#[allow(clippy::too_many_arguments)]
pub trait MultipartOperations: Send + Sync + Debug {
    /// List in-progress uploads in `bucket` under `prefix`.
    async fn list_multipart_uploads(
        &self,
        bucket: &str,
        prefix: &str,
        key_marker: &str,
        upload_id_marker: &str,
        delimiter: &str,
        max_uploads: usize,
    ) -> AppResult<ListMultipartsInfo>;

    /// Start an upload and return its identifier.
    async fn new_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        metadata: &ObjectMetadata,
    ) -> AppResult<String>;

    /// Upload part `part_id`, reading `size` bytes from `data`.
    async fn put_object_part(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        part_id: usize,
        size: i64,
        data: &mut ObjectReader<'_>,
        md5_hex: &str,
        sha256sum: &str,
    ) -> AppResult<PartInfo>;

    /// List the parts uploaded so far, starting after `part_number_marker`.
    async fn list_object_parts(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        part_number_marker: usize,
        max_parts: usize,
    ) -> AppResult<ListPartsInfo>;

    /// Abandon an upload and discard its parts.
    async fn abort_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
    ) -> AppResult<()>;

    /// Assemble `uploaded_parts` into the final object.
    async fn complete_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        upload_id: &str,
        uploaded_parts: &[CompletePart],
    ) -> AppResult<ObjectInfo>;

    /// Upload a part by copying the `start_offset`/`length` range of an
    /// existing object.
    async fn copy_object_part(
        &self,
        src_bucket: &str,
        src_object: &str,
        dst_bucket: &str,
        dst_object: &str,
        upload_id: &str,
        part_id: usize,
        start_offset: i64,
        length: i64,
    ) -> AppResult<PartInfo>;
}

/// The full object-layer surface a gateway backend must provide.
#[async_trait]
pub trait GatewayLayer:
    BucketOperations
    + ObjectOperations
    + AnonymousOperations
    + PolicyOperations
    + HealOperations
    + MultipartOperations
    + Debug
{
    /// Release backend resources before the process exits.
    async fn shutdown(&self) -> AppResult<()>;

    /// Report backend capacity.
    async fn storage_info(&self) -> StorageInfo;
}
