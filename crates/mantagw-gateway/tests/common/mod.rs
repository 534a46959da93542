//! Shared fixtures for gateway integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use mantagw_core::error::AppError;
use mantagw_core::result::AppResult;
use mantagw_core::traits::directory::{
    DirectoryEntry, DirectoryStore, PutObjectRequest, RemoteObject,
};
use mantagw_gateway::StorageGateway;
use mantagw_storage::LocalDirectoryStore;

/// Directory store that records every call before delegating to a local
/// store.
#[derive(Debug)]
pub struct RecordingStore {
    inner: LocalDirectoryStore,
    calls: Mutex<Vec<String>>,
    fail_object_fetch: AtomicBool,
}

impl RecordingStore {
    /// Calls made so far, as `"<operation> <path>"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Make every subsequent `get_object` fail.
    pub fn fail_object_fetch(&self) {
        self.fail_object_fetch.store(true, Ordering::SeqCst);
    }

    fn record(&self, op: &str, path: &str) {
        self.calls.lock().unwrap().push(format!("{op} {path}"));
    }
}

#[async_trait]
impl DirectoryStore for RecordingStore {
    fn provider_type(&self) -> &str {
        "recording"
    }

    async fn put_directory(&self, path: &str) -> AppResult<()> {
        self.record("put_directory", path);
        self.inner.put_directory(path).await
    }

    async fn list_directory(&self, path: &str) -> AppResult<Vec<DirectoryEntry>> {
        self.record("list_directory", path);
        self.inner.list_directory(path).await
    }

    async fn delete_directory(&self, path: &str) -> AppResult<()> {
        self.record("delete_directory", path);
        self.inner.delete_directory(path).await
    }

    async fn get_object(&self, path: &str) -> AppResult<RemoteObject> {
        self.record("get_object", path);
        if self.fail_object_fetch.load(Ordering::SeqCst) {
            return Err(AppError::service_unavailable(format!("fetch of {path} refused")));
        }
        self.inner.get_object(path).await
    }

    async fn put_object(&self, request: PutObjectRequest) -> AppResult<()> {
        self.record("put_object", &request.path);
        self.inner.put_object(request).await
    }

    async fn delete_object(&self, path: &str) -> AppResult<()> {
        self.record("delete_object", path);
        self.inner.delete_object(path).await
    }
}

/// A gateway over a fresh recording store in a temporary directory.
pub struct TestGateway {
    pub gateway: StorageGateway,
    pub store: Arc<RecordingStore>,
    _dir: tempfile::TempDir,
}

pub async fn gateway() -> TestGateway {
    let dir = tempfile::tempdir().unwrap();
    let inner = LocalDirectoryStore::new(dir.path().to_str().unwrap())
        .await
        .unwrap();
    let store = Arc::new(RecordingStore {
        inner,
        calls: Mutex::new(Vec::new()),
        fail_object_fetch: AtomicBool::new(false),
    });
    let gateway = StorageGateway::new(store.clone());

    TestGateway {
        gateway,
        store,
        _dir: dir,
    }
}
