//! Request interpreter.
//!
//! Classifies one already-decoded form submission into exactly one pending
//! lifecycle action. Unknown or malformed action tokens are treated as
//! absent, never as an error: permissive input at the boundary.

use medialink_core::AssetStoreConfig;
use medialink_store::UploadOptions;
use std::path::PathBuf;

use crate::document::Document;
use crate::options::{resolve_upload_options, FieldConfig};

/// A decoded file reference from the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub path: PathBuf,
    pub original_filename: String,
    pub size: u64,
}

/// The three optional values of one form submission, keyed by the field's
/// path set and decoded by the (out of scope) transport layer.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    /// Action token: `"delete"`, `"reset"`, or anything else (ignored).
    pub action: Option<String>,
    /// Selected remote asset id.
    pub select: Option<String>,
    pub file: Option<FileUpload>,
}

/// Transient, per-request lifecycle action. Derived from a single request,
/// applied exactly once, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    None,
    ResetToEmpty,
    DeleteExisting,
    SelectExisting(String),
    UploadNew(FileUpload, UploadOptions),
}

/// Classify a submission into one pending action, in priority order:
/// recognized action token (without competing payload), then selection,
/// then non-empty file upload, then nothing.
pub fn interpret(
    store: &AssetStoreConfig,
    field: &FieldConfig,
    doc: &Document,
    submission: Submission,
) -> PendingAction {
    let select = submission.select.filter(|s| !s.is_empty());
    let file = submission.file.filter(|f| f.size > 0);

    if select.is_none() && file.is_none() {
        // Tokens are matched exactly and case-sensitively; anything else
        // falls through.
        match submission.action.as_deref() {
            Some("delete") => return PendingAction::DeleteExisting,
            Some("reset") => return PendingAction::ResetToEmpty,
            _ => {}
        }
    }

    if let Some(remote_id) = select {
        return PendingAction::SelectExisting(remote_id);
    }

    if let Some(file) = file {
        let options = resolve_upload_options(store, field, doc, &file);
        return PendingAction::UploadNew(file, options);
    }

    PendingAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FieldOptions;

    fn store() -> AssetStoreConfig {
        AssetStoreConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            api_base_url: "https://api.medialink.example".to_string(),
            delivery_host: "res.medialink.example".to_string(),
            secure: false,
            progressive: true,
            auto_format: true,
            folders_enabled: false,
            prefix: None,
            environment: "development".to_string(),
        }
    }

    fn field(store: &AssetStoreConfig) -> FieldConfig {
        FieldConfig::new(store, "posts", "image", FieldOptions::default()).unwrap()
    }

    fn file(size: u64) -> FileUpload {
        FileUpload {
            path: PathBuf::from("/tmp/photo.jpg"),
            original_filename: "photo.jpg".to_string(),
            size,
        }
    }

    fn run(submission: Submission) -> PendingAction {
        let store = store();
        let field = field(&store);
        interpret(&store, &field, &Document::new(), submission)
    }

    #[test]
    fn delete_and_reset_tokens_are_exact_and_exclusive() {
        assert_eq!(
            run(Submission {
                action: Some("delete".to_string()),
                ..Default::default()
            }),
            PendingAction::DeleteExisting
        );
        assert_eq!(
            run(Submission {
                action: Some("reset".to_string()),
                ..Default::default()
            }),
            PendingAction::ResetToEmpty
        );
    }

    #[test]
    fn unknown_tokens_fall_through() {
        assert_eq!(
            run(Submission {
                action: Some("Delete".to_string()),
                ..Default::default()
            }),
            PendingAction::None
        );
        assert_eq!(
            run(Submission {
                action: Some("remove".to_string()),
                ..Default::default()
            }),
            PendingAction::None
        );
        // Malformed token with a live select payload: the select wins.
        assert_eq!(
            run(Submission {
                action: Some("explode".to_string()),
                select: Some("abc123".to_string()),
                ..Default::default()
            }),
            PendingAction::SelectExisting("abc123".to_string())
        );
    }

    #[test]
    fn action_token_yields_to_competing_payload() {
        // A recognized token only applies when no file/select is present.
        assert_eq!(
            run(Submission {
                action: Some("delete".to_string()),
                select: Some("abc123".to_string()),
                ..Default::default()
            }),
            PendingAction::SelectExisting("abc123".to_string())
        );
    }

    #[test]
    fn selection_wins_over_upload() {
        let action = run(Submission {
            select: Some("abc123".to_string()),
            file: Some(file(1024)),
            ..Default::default()
        });
        assert_eq!(action, PendingAction::SelectExisting("abc123".to_string()));
    }

    #[test]
    fn empty_select_is_absent() {
        assert_eq!(
            run(Submission {
                select: Some(String::new()),
                ..Default::default()
            }),
            PendingAction::None
        );
    }

    #[test]
    fn file_upload_produces_resolved_options() {
        let action = run(Submission {
            file: Some(file(1024)),
            ..Default::default()
        });
        match action {
            PendingAction::UploadNew(upload, options) => {
                assert_eq!(upload.original_filename, "photo.jpg");
                assert_eq!(options.tags[0], "posts_image");
            }
            other => panic!("expected UploadNew, got {:?}", other),
        }
    }

    #[test]
    fn zero_byte_file_is_treated_as_absent() {
        assert_eq!(
            run(Submission {
                file: Some(file(0)),
                ..Default::default()
            }),
            PendingAction::None
        );
    }

    #[test]
    fn empty_submission_is_none() {
        assert_eq!(run(Submission::default()), PendingAction::None);
    }
}
