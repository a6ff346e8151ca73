pub mod asset;

pub use asset::{AssetMetadata, AssetRecord, ResourceType};
