//! Medialink Store Library
//!
//! This crate defines the remote asset store contract the lifecycle
//! coordinator depends on: upload, destroy, and metadata lookup. It ships
//! one HTTP client implementation and a recording mock for tests.
//!
//! Delivery-URL building is not part of the contract; it is the pure
//! transform engine in `medialink-core`.

pub mod http;
pub mod mock;
pub mod traits;

// Re-export commonly used types
pub use http::HttpRemoteStore;
pub use mock::{MockRemoteStore, StoreCall};
pub use traits::{
    DestroyOptions, DestroyResponse, LookupOptions, RemoteStore, StoreError, StoreResult,
    UploadOptions,
};
