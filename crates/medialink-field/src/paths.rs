//! Path composition for one field declaration.
//!
//! Every sub-path derives from (storage key, sub-field name): record
//! sub-fields as `{key}.{sub}`, virtual reads as `{key}.{virtual}`, and
//! form-transport fields as `{key}_{form}`. The owning field's storage key
//! prefixes every path, so two field declarations on the same entity never
//! collide.

/// Immutable path set for one field declaration. Built once, pure,
/// deterministic, no failure modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPaths {
    // record sub-fields
    pub public_id: String,
    pub version: String,
    pub signature: String,
    pub format: String,
    pub resource_type: String,
    pub url: String,
    pub secure_url: String,
    pub width: String,
    pub height: String,
    pub thumbnail_url: String,
    // virtuals
    pub exists: String,
    pub folder: String,
    // form transport
    pub upload: String,
    pub action: String,
    pub select: String,
}

impl FieldPaths {
    pub fn new(storage_key: &str) -> Self {
        let sub = |name: &str| format!("{}.{}", storage_key, name);
        let form = |name: &str| format!("{}_{}", storage_key, name);
        FieldPaths {
            public_id: sub("public_id"),
            version: sub("version"),
            signature: sub("signature"),
            format: sub("format"),
            resource_type: sub("resource_type"),
            url: sub("url"),
            secure_url: sub("secure_url"),
            width: sub("width"),
            height: sub("height"),
            thumbnail_url: sub("thumbnail_url"),
            exists: sub("exists"),
            folder: sub("folder"),
            upload: form("upload"),
            action: form("action"),
            select: form("select"),
        }
    }

    /// The ten persisted record sub-paths, in record field order.
    pub fn record_paths(&self) -> [&str; 10] {
        [
            &self.public_id,
            &self.version,
            &self.signature,
            &self.format,
            &self.resource_type,
            &self.url,
            &self.secure_url,
            &self.width,
            &self.height,
            &self.thumbnail_url,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_prefixed_by_storage_key() {
        let paths = FieldPaths::new("avatar");
        assert_eq!(paths.public_id, "avatar.public_id");
        assert_eq!(paths.thumbnail_url, "avatar.thumbnail_url");
        assert_eq!(paths.exists, "avatar.exists");
        assert_eq!(paths.folder, "avatar.folder");
        assert_eq!(paths.upload, "avatar_upload");
        assert_eq!(paths.action, "avatar_action");
        assert_eq!(paths.select, "avatar_select");
    }

    #[test]
    fn two_declarations_never_collide() {
        let a = FieldPaths::new("avatar");
        let b = FieldPaths::new("banner");
        for (pa, pb) in a.record_paths().iter().zip(b.record_paths().iter()) {
            assert_ne!(pa, pb);
        }
        assert_ne!(a.upload, b.upload);
        assert_ne!(a.action, b.action);
        assert_ne!(a.select, b.select);
    }

    #[test]
    fn composition_is_deterministic() {
        assert_eq!(FieldPaths::new("avatar"), FieldPaths::new("avatar"));
    }
}
