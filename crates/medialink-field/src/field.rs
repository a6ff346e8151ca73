//! The media field type and its capability contracts.
//!
//! `Formattable` and `SchemaBound` are explicit capability traits: each
//! field type implements them independently rather than borrowing methods
//! from a shared base type.

use medialink_core::{delivery_url, AssetRecord, AssetStoreConfig, TransformSpec};
use std::sync::Arc;

use crate::coordinator::LifecycleCoordinator;
use crate::document::{read_asset_record, Document};
use crate::error::FieldError;
use crate::interpreter::{interpret, Submission};
use crate::options::{folder, FieldConfig};
use crate::paths::FieldPaths;

/// A field type with a canonical display value.
pub trait Formattable {
    fn format(&self, doc: &Document) -> String;
}

/// A field type bound to a storage key and its derived path set.
pub trait SchemaBound {
    fn storage_key(&self) -> &str;
    fn paths(&self) -> &FieldPaths;
}

/// One remote media attachment field bound to a store account.
pub struct MediaField {
    store_config: Arc<AssetStoreConfig>,
    field: FieldConfig,
}

impl MediaField {
    pub fn new(store_config: Arc<AssetStoreConfig>, field: FieldConfig) -> Self {
        MediaField {
            store_config,
            field,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.field
    }

    /// Whether an asset is attached in this document.
    pub fn exists(&self, doc: &Document) -> bool {
        read_asset_record(doc, self.field.paths()).exists()
    }

    /// The current record, whole.
    pub fn record(&self, doc: &Document) -> AssetRecord {
        read_asset_record(doc, self.field.paths())
    }

    /// The remote folder for this field; `None` unless folder-organization
    /// is enabled.
    pub fn folder(&self) -> Option<String> {
        folder(&self.store_config, &self.field)
    }

    /// Delivery URL for the attached asset under a transform spec.
    pub fn url(&self, doc: &Document, spec: &TransformSpec) -> String {
        delivery_url::delivery_url(&self.store_config, &self.record(doc), spec)
    }

    /// Whether the attachment changed between two document states.
    pub fn is_modified(&self, doc: &Document, previous: &Document) -> bool {
        doc.get_str(&self.field.paths().url) != previous.get_str(&self.field.paths().url)
    }

    /// Handle one form submission: interpret it into a pending action and
    /// apply it through the coordinator.
    pub async fn handle_submission(
        &self,
        coordinator: &LifecycleCoordinator,
        doc: &mut Document,
        submission: Submission,
    ) -> Result<AssetRecord, FieldError> {
        let action = interpret(&self.store_config, &self.field, doc, submission);
        coordinator.apply_action(&self.field, doc, action).await
    }
}

impl Formattable for MediaField {
    /// The canonical display value is the stored delivery URL.
    fn format(&self, doc: &Document) -> String {
        doc.get_str(&self.field.paths().url).to_string()
    }
}

impl SchemaBound for MediaField {
    fn storage_key(&self) -> &str {
        &self.field.field_path
    }

    fn paths(&self) -> &FieldPaths {
        self.field.paths()
    }
}
