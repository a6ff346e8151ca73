//! Owning-entity abstraction.
//!
//! The field core does not know the surrounding persistence layer; it reads
//! and writes a flat key/value document through the field's path set. The
//! asset record is always written whole — all ten sub-fields in one call —
//! never field-by-field.

use medialink_core::{AssetRecord, ResourceType};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A flat document owned by the surrounding record framework.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    id: Uuid,
    values: Map<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Document {
            id: Uuid::new_v4(),
            values: Map::new(),
        }
    }

    pub fn with_id(id: Uuid) -> Self {
        Document {
            id,
            values: Map::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String value at `key`, empty when missing or not a string.
    pub fn get_str(&self, key: &str) -> &str {
        self.values.get(key).and_then(Value::as_str).unwrap_or("")
    }

    pub fn get_i64(&self, key: &str) -> i64 {
        self.values.get(key).and_then(Value::as_i64).unwrap_or(0)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }
}

/// Replace all ten record sub-fields of `paths` in one call.
pub fn write_asset_record(
    doc: &mut Document,
    paths: &crate::paths::FieldPaths,
    record: &AssetRecord,
) {
    doc.set(&paths.public_id, Value::from(record.public_id.clone()));
    doc.set(&paths.version, Value::from(record.version));
    doc.set(&paths.signature, Value::from(record.signature.clone()));
    doc.set(&paths.format, Value::from(record.format.clone()));
    doc.set(
        &paths.resource_type,
        Value::from(record.resource_type.as_str()),
    );
    doc.set(&paths.url, Value::from(record.url.clone()));
    doc.set(&paths.secure_url, Value::from(record.secure_url.clone()));
    doc.set(&paths.width, Value::from(record.width));
    doc.set(&paths.height, Value::from(record.height));
    doc.set(
        &paths.thumbnail_url,
        Value::from(record.thumbnail_url.clone()),
    );
}

/// Reconstruct the typed record through the path set. Missing keys read as
/// the sentinel values, so a fresh document yields the empty sentinel.
pub fn read_asset_record(doc: &Document, paths: &crate::paths::FieldPaths) -> AssetRecord {
    AssetRecord {
        public_id: doc.get_str(&paths.public_id).to_string(),
        version: doc.get_i64(&paths.version),
        signature: doc.get_str(&paths.signature).to_string(),
        format: doc.get_str(&paths.format).to_string(),
        resource_type: ResourceType::parse(doc.get_str(&paths.resource_type))
            .unwrap_or(ResourceType::Image),
        url: doc.get_str(&paths.url).to_string(),
        secure_url: doc.get_str(&paths.secure_url).to_string(),
        width: doc.get_i64(&paths.width) as i32,
        height: doc.get_i64(&paths.height) as i32,
        thumbnail_url: doc.get_str(&paths.thumbnail_url).to_string(),
    }
}
