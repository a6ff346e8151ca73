//! Medialink Field Library
//!
//! The remote media attachment field: a path composer binding one field
//! declaration to its document sub-keys, a request interpreter that
//! classifies a form submission into exactly one lifecycle action, and the
//! lifecycle coordinator that applies that action against the remote store
//! with delete-before-upload ordering.

pub mod coordinator;
pub mod document;
pub mod error;
pub mod field;
pub mod interpreter;
pub mod options;
pub mod paths;

// Re-export commonly used types
pub use coordinator::LifecycleCoordinator;
pub use document::{read_asset_record, write_asset_record, Document};
pub use error::FieldError;
pub use field::{Formattable, MediaField, SchemaBound};
pub use interpreter::{interpret, FileUpload, PendingAction, Submission};
pub use options::{resolve_upload_options, FieldConfig, FieldOptions, PublicIdSource};
pub use paths::FieldPaths;
