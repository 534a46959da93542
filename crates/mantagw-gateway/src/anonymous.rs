//! Anonymous access. Reads succeed with empty results; uploads are refused.

use async_trait::async_trait;

use mantagw_core::error::AppError;
use mantagw_core::result::AppResult;
use mantagw_core::traits::gateway::{AnonymousOperations, ObjectReader, ObjectWriter};
use mantagw_core::types::{BucketInfo, ListObjectsInfo, ListObjectsV2Info, ObjectInfo, ObjectMetadata};

use crate::gateway::StorageGateway;

#[async_trait]
impl AnonymousOperations for StorageGateway {
    async fn anon_get_bucket_info(&self, _bucket: &str) -> AppResult<BucketInfo> {
        Ok(BucketInfo::default())
    }

    async fn anon_put_object(
        &self,
        _bucket: &str,
        _object: &str,
        _size: i64,
        _data: &mut ObjectReader<'_>,
        _metadata: &ObjectMetadata,
        _sha256sum: &str,
    ) -> AppResult<ObjectInfo> {
        Err(AppError::not_implemented("Anonymous PutObject"))
    }

    async fn anon_get_object(
        &self,
        _bucket: &str,
        _object: &str,
        _start_offset: i64,
        _length: i64,
        _writer: &mut ObjectWriter<'_>,
    ) -> AppResult<()> {
        Ok(())
    }

    async fn anon_get_object_info(&self, _bucket: &str, _object: &str) -> AppResult<ObjectInfo> {
        Ok(ObjectInfo::default())
    }

    async fn anon_list_objects(
        &self,
        _bucket: &str,
        _prefix: &str,
        _marker: &str,
        _delimiter: &str,
        _max_keys: usize,
    ) -> AppResult<ListObjectsInfo> {
        Ok(ListObjectsInfo::default())
    }

    async fn anon_list_objects_v2(
        &self,
        _bucket: &str,
        _prefix: &str,
        _continuation_token: &str,
        _fetch_owner: bool,
        _delimiter: &str,
        _max_keys: usize,
    ) -> AppResult<ListObjectsV2Info> {
        Ok(ListObjectsV2Info::default())
    }
}
