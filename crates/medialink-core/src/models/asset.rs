//! Asset record model.
//!
//! An `AssetRecord` is the persisted representation of one remote media
//! asset. It is either the empty sentinel (no asset attached) or a complete
//! record built from remote metadata; partial records are unrepresentable
//! through the public constructors.

use serde::{Deserialize, Serialize};

/// Remote resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Image,
    Video,
    Raw,
    /// Broadest match; used as the upload hint and the lookup fallback.
    Auto,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
            ResourceType::Auto => "auto",
        }
    }

    pub fn parse(s: &str) -> Option<ResourceType> {
        match s {
            "image" => Some(ResourceType::Image),
            "video" => Some(ResourceType::Video),
            "raw" => Some(ResourceType::Raw),
            "auto" => Some(ResourceType::Auto),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata returned by the remote store for one asset.
///
/// This is the store-owned slice of an `AssetRecord`: everything except the
/// locally derived `thumbnail_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub public_id: String,
    pub version: i64,
    #[serde(default)]
    pub signature: String,
    pub format: String,
    pub resource_type: ResourceType,
    pub url: String,
    pub secure_url: String,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
}

/// The persisted representation of one remote media asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub public_id: String,
    pub version: i64,
    pub signature: String,
    pub format: String,
    pub resource_type: ResourceType,
    pub url: String,
    pub secure_url: String,
    pub width: i32,
    pub height: i32,
    pub thumbnail_url: String,
}

impl AssetRecord {
    /// The empty sentinel: no asset attached.
    pub fn empty() -> Self {
        AssetRecord {
            public_id: String::new(),
            version: 0,
            signature: String::new(),
            format: String::new(),
            resource_type: ResourceType::Image,
            url: String::new(),
            secure_url: String::new(),
            width: 0,
            height: 0,
            thumbnail_url: String::new(),
        }
    }

    /// Build a full record from remote metadata plus the derived thumbnail.
    pub fn from_metadata(meta: AssetMetadata, thumbnail_url: String) -> Self {
        AssetRecord {
            public_id: meta.public_id,
            version: meta.version,
            signature: meta.signature,
            format: meta.format,
            resource_type: meta.resource_type,
            url: meta.url,
            secure_url: meta.secure_url,
            width: meta.width,
            height: meta.height,
            thumbnail_url,
        }
    }

    /// Whether an asset is attached.
    pub fn exists(&self) -> bool {
        !self.public_id.is_empty()
    }
}

impl Default for AssetRecord {
    fn default() -> Self {
        AssetRecord::empty()
    }
}
