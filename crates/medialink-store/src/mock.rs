//! Recording mock for the remote store contract.
//!
//! Used by coordinator tests to assert call counts and ordering without
//! network I/O. Results are scripted per operation; each scripted result is
//! consumed once, in order.

use async_trait::async_trait;
use medialink_core::AssetMetadata;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::traits::{
    DestroyOptions, DestroyResponse, LookupOptions, RemoteStore, StoreError, StoreResult,
    UploadOptions,
};

/// One recorded call against the mock store, in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Upload {
        path: PathBuf,
        options: UploadOptions,
    },
    Destroy {
        public_id: String,
        options: DestroyOptions,
    },
    Lookup {
        remote_id: String,
        options: LookupOptions,
    },
}

/// Remote store mock that records every call and replays scripted results.
#[derive(Clone, Default)]
pub struct MockRemoteStore {
    calls: Arc<Mutex<Vec<StoreCall>>>,
    upload_results: Arc<Mutex<VecDeque<StoreResult<AssetMetadata>>>>,
    destroy_results: Arc<Mutex<VecDeque<StoreResult<DestroyResponse>>>>,
    lookup_results: Arc<Mutex<VecDeque<StoreResult<AssetMetadata>>>>,
}

impl MockRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_upload(&self, result: StoreResult<AssetMetadata>) {
        self.upload_results.lock().unwrap().push_back(result);
    }

    pub fn script_destroy(&self, result: StoreResult<DestroyResponse>) {
        self.destroy_results.lock().unwrap().push_back(result);
    }

    pub fn script_lookup(&self, result: StoreResult<AssetMetadata>) {
        self.lookup_results.lock().unwrap().push_back(result);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn destroy_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::Destroy { .. }))
            .count()
    }

    pub fn upload_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::Upload { .. }))
            .count()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RemoteStore for MockRemoteStore {
    async fn upload(
        &self,
        local_path: &Path,
        options: &UploadOptions,
    ) -> StoreResult<AssetMetadata> {
        self.record(StoreCall::Upload {
            path: local_path.to_path_buf(),
            options: options.clone(),
        });
        self.upload_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(StoreError::Transport("unscripted upload".to_string())))
    }

    async fn destroy(
        &self,
        public_id: &str,
        options: &DestroyOptions,
    ) -> StoreResult<DestroyResponse> {
        self.record(StoreCall::Destroy {
            public_id: public_id.to_string(),
            options: options.clone(),
        });
        // Destroy defaults to success so most scenarios only script the
        // operation under test.
        self.destroy_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(DestroyResponse {
                    result: "ok".to_string(),
                })
            })
    }

    async fn lookup(
        &self,
        remote_id: &str,
        options: &LookupOptions,
    ) -> StoreResult<AssetMetadata> {
        self.record(StoreCall::Lookup {
            remote_id: remote_id.to_string(),
            options: options.clone(),
        });
        self.lookup_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(StoreError::Transport("unscripted lookup".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medialink_core::ResourceType;

    #[tokio::test]
    async fn records_calls_in_order_and_replays_scripts() {
        let mock = MockRemoteStore::new();
        mock.script_lookup(Err(StoreError::NotFound("abc".to_string())));

        let destroy = mock
            .destroy(
                "old",
                &DestroyOptions {
                    resource_type: ResourceType::Image,
                },
            )
            .await
            .unwrap();
        assert!(destroy.is_ok());

        let lookup = mock
            .lookup(
                "abc",
                &LookupOptions {
                    resource_type: ResourceType::Image,
                },
            )
            .await;
        assert!(matches!(lookup, Err(StoreError::NotFound(_))));

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], StoreCall::Destroy { .. }));
        assert!(matches!(calls[1], StoreCall::Lookup { .. }));
    }
}
