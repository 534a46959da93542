//! Objects map to files beneath a bucket directory.

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::AsyncReadExt;
use tokio_util::io::StreamReader;
use tracing::{info, warn};

use mantagw_core::error::{AppError, ErrorKind};
use mantagw_core::path::{join, store_path};
use mantagw_core::result::AppResult;
use mantagw_core::traits::directory::PutObjectRequest;
use mantagw_core::traits::gateway::{ObjectOperations, ObjectReader, ObjectWriter};
use mantagw_core::types::{ListObjectsInfo, ListObjectsV2Info, ObjectInfo, ObjectMetadata};

use crate::gateway::StorageGateway;

/// Metadata key holding the object's content type.
const CONTENT_TYPE_KEY: &str = "content-type";

#[async_trait]
impl ObjectOperations for StorageGateway {
    /// Lists one directory level. Sub-directories become `"<name>/"`
    /// prefixes and every object is resolved through
    /// [`get_object_info`](ObjectOperations::get_object_info); the first
    /// failure aborts the listing. Paging arguments are not applied.
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        _marker: &str,
        _delimiter: &str,
        _max_keys: usize,
    ) -> AppResult<ListObjectsInfo> {
        let entries = self
            .client
            .list_directory(&store_path(&[bucket, prefix]))
            .await?;
        let parent = join(&[bucket, prefix]);

        let mut result = ListObjectsInfo::default();
        for entry in entries {
            if entry.is_directory() {
                result.prefixes.push(format!("{}/", entry.name));
                continue;
            }

            let info = self.get_object_info(&parent, &entry.name).await?;
            result.objects.push(ObjectInfo {
                bucket: bucket.to_string(),
                name: entry.name,
                mod_time: info.mod_time,
                size: info.size,
                etag: info.etag,
                content_type: info.content_type,
                content_encoding: info.content_encoding,
                ..ObjectInfo::default()
            });
        }

        Ok(result)
    }

    async fn list_objects_v2(
        &self,
        bucket: &str,
        prefix: &str,
        _continuation_token: &str,
        _fetch_owner: bool,
        _delimiter: &str,
        _max_keys: usize,
    ) -> AppResult<ListObjectsV2Info> {
        warn!(bucket, prefix, "ListObjectsV2 is not supported; returning an empty listing");
        Ok(ListObjectsV2Info::default())
    }

    /// Copies the whole object into `writer`. The requested range is
    /// ignored.
    async fn get_object(
        &self,
        bucket: &str,
        object: &str,
        _start_offset: i64,
        _length: i64,
        writer: &mut ObjectWriter<'_>,
    ) -> AppResult<()> {
        let remote = self
            .client
            .get_object(&store_path(&[bucket, object]))
            .await?;

        let mut body = StreamReader::new(remote.body);
        let copied = tokio::io::copy(&mut body, writer).await;
        drop(body);

        copied.map(|_| ()).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to copy {bucket}/{object} to writer"),
                e,
            )
        })
    }

    async fn get_object_info(&self, bucket: &str, object: &str) -> AppResult<ObjectInfo> {
        let remote = self
            .client
            .get_object(&store_path(&[bucket, object]))
            .await?;

        Ok(ObjectInfo {
            bucket: bucket.to_string(),
            name: object.to_string(),
            content_type: remote.content_type,
            size: remote.content_length,
            mod_time: remote.last_modified,
            ..ObjectInfo::default()
        })
    }

    /// Buffers `data` fully before writing. A negative `size` means the
    /// length is unknown and the buffered length is sent instead.
    async fn put_object(
        &self,
        bucket: &str,
        object: &str,
        size: i64,
        data: &mut ObjectReader<'_>,
        metadata: &ObjectMetadata,
        _sha256sum: &str,
    ) -> AppResult<ObjectInfo> {
        let mut buf = Vec::new();
        data.read_to_end(&mut buf).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read upload for {bucket}/{object}"),
                e,
            )
        })?;

        let content_length = u64::try_from(size).unwrap_or(buf.len() as u64);
        self.client
            .put_object(PutObjectRequest {
                path: store_path(&[bucket, object]),
                content_length,
                content_type: metadata.get(CONTENT_TYPE_KEY).cloned(),
                body: Bytes::from(buf),
            })
            .await?;

        Ok(ObjectInfo::default())
    }

    async fn copy_object(
        &self,
        src_bucket: &str,
        src_object: &str,
        dst_bucket: &str,
        dst_object: &str,
        metadata: &ObjectMetadata,
    ) -> AppResult<ObjectInfo> {
        info!(
            source = %join(&[src_bucket, src_object]),
            destination = %join(&[dst_bucket, dst_object]),
            ?metadata,
            "CopyObject is a no-op"
        );
        Ok(ObjectInfo::default())
    }

    async fn delete_object(&self, bucket: &str, object: &str) -> AppResult<()> {
        self.client
            .delete_object(&store_path(&[bucket, object]))
            .await
    }
}
