//! Remote store abstraction trait
//!
//! This module defines the `RemoteStore` trait the lifecycle coordinator
//! talks to. Implementations are interchangeable: the HTTP client in this
//! crate, or the recording mock for tests.

use async_trait::async_trait;
use medialink_core::models::{AssetMetadata, ResourceType};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Remote store operation errors. Each variant carries the remote payload
/// so the request-level caller decides user-facing messaging; nothing is
/// swallowed here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Upload rejected by remote store: {message}")]
    Upload { status: Option<u16>, message: String },

    #[error("Destroy rejected by remote store: {message}")]
    Destroy { status: Option<u16>, message: String },

    #[error("Lookup rejected by remote store: {message}")]
    Lookup { status: Option<u16>, message: String },

    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for remote store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Options for one upload call, resolved fresh per request from field
/// configuration and runtime context.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOptions {
    pub tags: Vec<String>,
    /// Target folder; present only when folder-organization is enabled.
    pub folder: Option<String>,
    /// Desired public identifier; `None` lets the service generate one.
    pub public_id: Option<String>,
    /// Preserve the original filename as the base of the public id.
    pub use_filename: bool,
    /// Only transmitted when `use_filename` is set; `Some(false)` disables
    /// the service's uniqueness suffix.
    pub unique_filename: Option<bool>,
    pub resource_type: ResourceType,
}

impl Default for UploadOptions {
    fn default() -> Self {
        UploadOptions {
            tags: Vec::new(),
            folder: None,
            public_id: None,
            use_filename: false,
            unique_filename: None,
            resource_type: ResourceType::Auto,
        }
    }
}

/// Options for one destroy call.
#[derive(Debug, Clone, PartialEq)]
pub struct DestroyOptions {
    pub resource_type: ResourceType,
}

/// Options for one metadata lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOptions {
    pub resource_type: ResourceType,
}

/// Remote acknowledgement of a destroy call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DestroyResponse {
    pub result: String,
}

impl DestroyResponse {
    pub fn is_ok(&self) -> bool {
        self.result == "ok"
    }
}

/// Remote asset store contract.
///
/// The coordinator depends on exactly these three asynchronous operations;
/// all other behavior of the hosting service is out of scope.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Upload a local file, returning the stored asset's metadata.
    async fn upload(&self, local_path: &Path, options: &UploadOptions)
        -> StoreResult<AssetMetadata>;

    /// Destroy an asset by public id, freeing the identifier.
    async fn destroy(
        &self,
        public_id: &str,
        options: &DestroyOptions,
    ) -> StoreResult<DestroyResponse>;

    /// Look up metadata for an existing asset by its remote id.
    async fn lookup(&self, remote_id: &str, options: &LookupOptions)
        -> StoreResult<AssetMetadata>;
}
