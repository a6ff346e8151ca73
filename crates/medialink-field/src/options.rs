//! Field declaration and per-request upload option resolution.
//!
//! A `FieldConfig` is validated once at declaration time; upload options are
//! rebuilt fresh for every accepted request from the field configuration
//! plus runtime context (document id, environment).

use medialink_core::{AssetStoreConfig, ConfigError, ResourceType};
use medialink_store::UploadOptions;

use crate::document::Document;
use crate::interpreter::FileUpload;
use crate::paths::FieldPaths;

/// Where the uploaded asset's public identifier comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PublicIdSource {
    /// Let the service generate one.
    #[default]
    Generated,
    /// Derive from the uploaded file's original filename (extension
    /// stripped).
    Filename,
    /// Read from another document value at this key.
    Document(String),
}

/// Declaration-time options for one media field.
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    /// Remote folder override; ignored unless folder-organization is
    /// enabled on the store.
    pub folder: Option<String>,
    /// Delete the old asset from the remote store when replaced, rather
    /// than orphaning it.
    pub auto_cleanup: bool,
    pub public_id_source: PublicIdSource,
    /// Preserve the original filename as the base of the public id.
    pub use_filename: bool,
    /// Disable the service's uniqueness suffix. Only valid together with
    /// `use_filename`.
    pub no_unique_filename: bool,
    /// Resource-type hint sent with uploads. `Auto` lets the service sniff.
    pub resource_type_hint: Option<ResourceType>,
}

/// One validated field declaration: storage key, path set, and behavior
/// flags.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub list_key: String,
    pub field_path: String,
    pub folder: Option<String>,
    pub auto_cleanup: bool,
    pub public_id_source: PublicIdSource,
    pub use_filename: bool,
    pub no_unique_filename: bool,
    pub resource_type_hint: ResourceType,
    paths: FieldPaths,
}

impl FieldConfig {
    /// Validate and bind one field declaration. Fails fast at setup when
    /// the store credentials are missing or the option combination is
    /// invalid; request-time code never re-checks these.
    pub fn new(
        store: &AssetStoreConfig,
        list_key: &str,
        field_path: &str,
        options: FieldOptions,
    ) -> Result<Self, ConfigError> {
        store.validate()?;
        if field_path.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "media field on list '{}' requires a non-empty path",
                list_key
            )));
        }
        if options.no_unique_filename && !options.use_filename {
            return Err(ConfigError::Invalid(format!(
                "media field '{}.{}': no_unique_filename requires use_filename",
                list_key, field_path
            )));
        }
        if let PublicIdSource::Document(ref key) = options.public_id_source {
            if key.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "media field '{}.{}': public id source key must not be empty",
                    list_key, field_path
                )));
            }
        }
        Ok(FieldConfig {
            list_key: list_key.to_string(),
            field_path: field_path.to_string(),
            folder: options.folder,
            auto_cleanup: options.auto_cleanup,
            public_id_source: options.public_id_source,
            use_filename: options.use_filename,
            no_unique_filename: options.no_unique_filename,
            resource_type_hint: options.resource_type_hint.unwrap_or(ResourceType::Auto),
            paths: FieldPaths::new(field_path),
        })
    }

    pub fn paths(&self) -> &FieldPaths {
        &self.paths
    }
}

/// The remote folder for this field, or `None` when folder-organization is
/// disabled: the field's declared override, else `prefix/list/path`.
pub fn folder(store: &AssetStoreConfig, field: &FieldConfig) -> Option<String> {
    if !store.folders_enabled {
        return None;
    }
    if let Some(ref folder) = field.folder {
        return Some(folder.clone());
    }
    let mut parts = Vec::new();
    if let Some(ref prefix) = store.prefix {
        parts.push(prefix.as_str());
    }
    parts.push(&field.list_key);
    parts.push(&field.field_path);
    Some(parts.join("/"))
}

/// Build the upload options for one request.
pub fn resolve_upload_options(
    store: &AssetStoreConfig,
    field: &FieldConfig,
    doc: &Document,
    file: &FileUpload,
) -> UploadOptions {
    let tp = store
        .prefix
        .as_ref()
        .map(|p| format!("{}_", p))
        .unwrap_or_default();

    let mut tags = vec![
        format!("{}{}_{}", tp, field.list_key, field.field_path),
        format!("{}{}_{}_{}", tp, field.list_key, field.field_path, doc.id()),
    ];
    if let Some(ref prefix) = store.prefix {
        tags.push(prefix.clone());
    }
    if !store.is_production() {
        tags.push(format!("{}dev", tp));
    }

    let public_id = match field.public_id_source {
        PublicIdSource::Generated => None,
        PublicIdSource::Filename => filename_stem(&file.original_filename),
        PublicIdSource::Document(ref key) => {
            let value = doc.get_str(key);
            (!value.is_empty()).then(|| value.to_string())
        }
    };

    UploadOptions {
        tags,
        folder: folder(store, field),
        public_id,
        use_filename: field.use_filename,
        unique_filename: (field.use_filename && field.no_unique_filename).then_some(false),
        resource_type: field.resource_type_hint,
    }
}

/// Filename with its final extension stripped; `None` when nothing remains.
fn filename_stem(name: &str) -> Option<String> {
    let stem = match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    };
    (!stem.is_empty()).then(|| stem.to_string())
}
