//! Lifecycle coordinator.
//!
//! Applies one pending action against the remote store and writes the
//! resulting asset record into the owning document. Each invocation runs to
//! completion; the delete-then-upload sequence inside a replacement is a
//! strict two-step pipeline: the delete is fully settled before the upload
//! begins, so the public identifier is free when the replacement arrives.
//!
//! Remote errors are never retried automatically, with one exception: a
//! failed selection lookup is retried once against the broadest resource
//! type before surfacing.

use medialink_core::{delivery_url, AssetMetadata, AssetRecord, AssetStoreConfig, ResourceType};
use medialink_store::{DestroyOptions, LookupOptions, RemoteStore, StoreError};
use std::sync::Arc;

use crate::document::{read_asset_record, write_asset_record, Document};
use crate::error::FieldError;
use crate::interpreter::PendingAction;
use crate::options::FieldConfig;

pub struct LifecycleCoordinator {
    config: AssetStoreConfig,
    store: Arc<dyn RemoteStore>,
}

impl LifecycleCoordinator {
    /// Configuration and store are supplied explicitly at construction; the
    /// coordinator reads no ambient state.
    pub fn new(config: AssetStoreConfig, store: Arc<dyn RemoteStore>) -> Self {
        LifecycleCoordinator { config, store }
    }

    /// Apply one pending action. Exactly one mutation of the record per
    /// accepted request; every mutation replaces the whole record.
    pub async fn apply_action(
        &self,
        field: &FieldConfig,
        doc: &mut Document,
        action: PendingAction,
    ) -> Result<AssetRecord, FieldError> {
        match action {
            PendingAction::None => Ok(read_asset_record(doc, field.paths())),

            PendingAction::ResetToEmpty => {
                let empty = AssetRecord::empty();
                write_asset_record(doc, field.paths(), &empty);
                Ok(empty)
            }

            PendingAction::DeleteExisting => {
                let current = read_asset_record(doc, field.paths());
                if current.exists() {
                    self.destroy_and_clear(field, doc, &current).await?;
                } else {
                    // Nothing remote to free; deleting an empty field is
                    // idempotent.
                    write_asset_record(doc, field.paths(), &AssetRecord::empty());
                }
                Ok(AssetRecord::empty())
            }

            PendingAction::SelectExisting(remote_id) => {
                let meta = self.lookup_with_fallback(field, &remote_id).await?;
                let record = self.complete_record(meta);
                write_asset_record(doc, field.paths(), &record);
                Ok(record)
            }

            PendingAction::UploadNew(file, options) => {
                let current = read_asset_record(doc, field.paths());
                let cleaned_up = field.auto_cleanup && current.exists();
                if cleaned_up {
                    tracing::debug!(
                        public_id = %current.public_id,
                        "freeing existing asset before replacement upload"
                    );
                    // Settle the delete fully before uploading: the store
                    // treats identifiers as unique, and uploading while the
                    // old asset still exists would collide.
                    self.destroy_and_clear(field, doc, &current).await?;
                }

                match self.store.upload(&file.path, &options).await {
                    Ok(meta) => {
                        let record = self.complete_record(meta);
                        write_asset_record(doc, field.paths(), &record);
                        Ok(record)
                    }
                    Err(err) => {
                        if cleaned_up {
                            // The old asset is already gone and the new one
                            // never arrived; the record stays empty.
                            tracing::warn!(
                                public_id = %current.public_id,
                                error = %err,
                                "replacement upload failed after delete; record left empty"
                            );
                        }
                        Err(err.into())
                    }
                }
            }
        }
    }

    /// Destroy the current remote asset and, only once the store confirms,
    /// clear the record. A failed destroy leaves the record untouched.
    async fn destroy_and_clear(
        &self,
        field: &FieldConfig,
        doc: &mut Document,
        current: &AssetRecord,
    ) -> Result<(), FieldError> {
        let options = DestroyOptions {
            resource_type: current.resource_type,
        };
        let response = self.store.destroy(&current.public_id, &options).await?;
        if !response.is_ok() {
            return Err(StoreError::Destroy {
                status: None,
                message: response.result,
            }
            .into());
        }
        write_asset_record(doc, field.paths(), &AssetRecord::empty());
        Ok(())
    }

    /// Look up the selected asset, narrowly first, then once more against
    /// the broadest resource type before surfacing the error.
    async fn lookup_with_fallback(
        &self,
        field: &FieldConfig,
        remote_id: &str,
    ) -> Result<AssetMetadata, FieldError> {
        let narrow = match field.resource_type_hint {
            ResourceType::Auto => ResourceType::Image,
            other => other,
        };
        let options = LookupOptions {
            resource_type: narrow,
        };
        match self.store.lookup(remote_id, &options).await {
            Ok(meta) => Ok(meta),
            Err(err) => {
                tracing::debug!(
                    remote_id = %remote_id,
                    error = %err,
                    "lookup failed, retrying with broadened resource type"
                );
                let broad = LookupOptions {
                    resource_type: ResourceType::Auto,
                };
                Ok(self.store.lookup(remote_id, &broad).await?)
            }
        }
    }

    /// Complete a record from remote metadata: the thumbnail URL is derived
    /// and cached at write time.
    fn complete_record(&self, meta: AssetMetadata) -> AssetRecord {
        let mut record = AssetRecord::from_metadata(meta, String::new());
        record.thumbnail_url = delivery_url::thumbnail_url(&self.config, &record);
        record
    }
}
