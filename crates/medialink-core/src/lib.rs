//! Medialink Core Library
//!
//! This crate provides the asset record model, the delivery-URL transform
//! engine, and the store configuration shared across all medialink crates.

pub mod config;
pub mod delivery_url;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::AssetStoreConfig;
pub use delivery_url::{delivery_url, sized_url, thumbnail_url, CropMode, Gravity, TransformSpec};
pub use error::ConfigError;
pub use models::{AssetMetadata, AssetRecord, ResourceType};
