//! Capabilities the directory store cannot provide.
//!
//! Healing and part copies fail with `NOT_IMPLEMENTED`. The remaining
//! multipart calls succeed with empty results so clients that probe for
//! multipart support keep working; nothing is ever uploaded. No call in
//! this module touches the store.

use async_trait::async_trait;
use tracing::warn;

use mantagw_core::error::AppError;
use mantagw_core::result::AppResult;
use mantagw_core::traits::gateway::{HealOperations, MultipartOperations, ObjectReader};
use mantagw_core::types::{
    BucketInfo, CompletePart, HealObjectResult, ListMultipartsInfo, ListObjectsInfo,
    ListPartsInfo, ObjectInfo, ObjectMetadata, PartInfo,
};

use crate::gateway::StorageGateway;

#[async_trait]
impl HealOperations for StorageGateway {
    async fn heal_bucket(&self, _bucket: &str) -> AppResult<()> {
        Err(AppError::not_implemented("HealBucket"))
    }

    async fn list_buckets_heal(&self) -> AppResult<Vec<BucketInfo>> {
        Err(AppError::not_implemented("ListBucketsHeal"))
    }

    async fn heal_object(&self, _bucket: &str, _object: &str) -> AppResult<HealObjectResult> {
        Err(AppError::not_implemented("HealObject"))
    }

    async fn list_objects_heal(
        &self,
        _bucket: &str,
        _prefix: &str,
        _marker: &str,
        _delimiter: &str,
        _max_keys: usize,
    ) -> AppResult<ListObjectsInfo> {
        Err(AppError::not_implemented("ListObjectsHeal"))
    }

    async fn list_uploads_heal(
        &self,
        _bucket: &str,
        _prefix: &str,
        _marker: &str,
        _upload_id_marker: &str,
        _delimiter: &str,
        _max_uploads: usize,
    ) -> AppResult<ListMultipartsInfo> {
        Err(AppError::not_implemented("ListUploadsHeal"))
    }
}

#[async_trait]
impl MultipartOperations for StorageGateway {
    async fn list_multipart_uploads(
        &self,
        _bucket: &str,
        _prefix: &str,
        _key_marker: &str,
        _upload_id_marker: &str,
        _delimiter: &str,
        _max_uploads: usize,
    ) -> AppResult<ListMultipartsInfo> {
        Ok(ListMultipartsInfo::default())
    }

    async fn new_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        _metadata: &ObjectMetadata,
    ) -> AppResult<String> {
        warn!(bucket, object, "Multipart uploads are not supported; returning an empty upload id");
        Ok(String::new())
    }

    async fn put_object_part(
        &self,
        _bucket: &str,
        _object: &str,
        _upload_id: &str,
        _part_id: usize,
        _size: i64,
        _data: &mut ObjectReader<'_>,
        _md5_hex: &str,
        _sha256sum: &str,
    ) -> AppResult<PartInfo> {
        Ok(PartInfo::default())
    }

    async fn list_object_parts(
        &self,
        _bucket: &str,
        _object: &str,
        _upload_id: &str,
        _part_number_marker: usize,
        _max_parts: usize,
    ) -> AppResult<ListPartsInfo> {
        Ok(ListPartsInfo::default())
    }

    async fn abort_multipart_upload(
        &self,
        _bucket: &str,
        _object: &str,
        _upload_id: &str,
    ) -> AppResult<()> {
        Ok(())
    }

    async fn complete_multipart_upload(
        &self,
        bucket: &str,
        object: &str,
        _upload_id: &str,
        uploaded_parts: &[CompletePart],
    ) -> AppResult<ObjectInfo> {
        warn!(
            bucket,
            object,
            parts = uploaded_parts.len(),
            "Multipart completion is a no-op"
        );
        Ok(ObjectInfo::default())
    }

    async fn copy_object_part(
        &self,
        _src_bucket: &str,
        _src_object: &str,
        _dst_bucket: &str,
        _dst_object: &str,
        _upload_id: &str,
        _part_id: usize,
        _start_offset: i64,
        _length: i64,
    ) -> AppResult<PartInfo> {
        Err(AppError::not_implemented("CopyObjectPart"))
    }
}
