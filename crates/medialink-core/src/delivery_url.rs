//! Delivery-URL transform engine.
//!
//! Builds display/delivery URLs from an asset record plus a transformation
//! spec. Pure functions with no side effects: the lifecycle coordinator and
//! the UI both consume this module, but it depends on neither.
//!
//! URL shape:
//! `{scheme}://{host}/{cloud_name}/{resource_type}/upload[/{directives}]/v{version}/{public_id}.{format}`
//!
//! The numeric version segment is always embedded so caches invalidate when
//! an asset is replaced under the same public id.

use crate::config::AssetStoreConfig;
use crate::models::{AssetRecord, ResourceType};

/// Crop mode applied by a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropMode {
    Scale,
    Fill,
    LimitFill,
    Fit,
    Limit,
    Pad,
    LimitPad,
    Crop,
    Thumb,
}

impl CropMode {
    pub fn token(&self) -> &'static str {
        match self {
            CropMode::Scale => "scale",
            CropMode::Fill => "fill",
            CropMode::LimitFill => "lfill",
            CropMode::Fit => "fit",
            CropMode::Limit => "limit",
            CropMode::Pad => "pad",
            CropMode::LimitPad => "lpad",
            CropMode::Crop => "crop",
            CropMode::Thumb => "thumb",
        }
    }

    /// Gravity the sizing presets apply when the caller sets none.
    ///
    /// Modes that pick a focal region default to face-aware gravity; modes
    /// that preserve the whole frame have no default.
    pub fn default_gravity(&self) -> Option<Gravity> {
        match self {
            CropMode::Fill | CropMode::LimitFill | CropMode::Crop | CropMode::Thumb => {
                Some(Gravity::Faces)
            }
            _ => None,
        }
    }
}

/// Focal gravity for cropping transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    Face,
    Faces,
}

impl Gravity {
    pub fn token(&self) -> &'static str {
        match self {
            Gravity::Face => "face",
            Gravity::Faces => "faces",
        }
    }
}

/// Transformation spec for a derived delivery URL.
///
/// # Example
///
/// ```rust
/// use medialink_core::delivery_url::{CropMode, TransformSpec};
///
/// let spec = TransformSpec::new()
///     .crop(CropMode::Fill)
///     .dimensions(500, 300)
///     .fetch_format("webp");
/// assert_eq!(spec.directives(), "c_fill,f_webp,g_faces,h_300,w_500");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformSpec {
    crop: Option<CropMode>,
    width: Option<u32>,
    height: Option<u32>,
    gravity: Option<Gravity>,
    fetch_format: Option<String>,
    progressive: Option<bool>,
    secure: Option<bool>,
}

impl TransformSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the crop mode. Applies the mode's default gravity unless a
    /// gravity was already chosen.
    pub fn crop(mut self, mode: CropMode) -> Self {
        self.crop = Some(mode);
        if self.gravity.is_none() {
            self.gravity = mode.default_gravity();
        }
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = Some(gravity);
        self
    }

    /// Output-format hint (`f_*` directive), e.g. `"auto"` or `"webp"`.
    pub fn fetch_format(mut self, format: &str) -> Self {
        self.fetch_format = Some(format.to_string());
        self
    }

    pub fn progressive(mut self, enable: bool) -> Self {
        self.progressive = Some(enable);
        self
    }

    pub fn secure(mut self, enable: bool) -> Self {
        self.secure = Some(enable);
        self
    }

    /// Emit the directive string, tokens in fixed order: crop, format,
    /// flags, gravity, height, width. Unset dimensions are omitted, never
    /// defaulted to 0 (a 0 dimension would invalidate the URL).
    pub fn directives(&self) -> String {
        let mut parts = Vec::new();
        if let Some(mode) = self.crop {
            parts.push(format!("c_{}", mode.token()));
        }
        if let Some(ref format) = self.fetch_format {
            parts.push(format!("f_{}", format));
        }
        if self.progressive == Some(true) {
            parts.push("fl_progressive".to_string());
        }
        if let Some(gravity) = self.gravity {
            parts.push(format!("g_{}", gravity.token()));
        }
        if let Some(height) = self.height {
            parts.push(format!("h_{}", height));
        }
        if let Some(width) = self.width {
            parts.push(format!("w_{}", width));
        }
        parts.join(",")
    }

    /// Apply the store's defaults for anything left unset.
    fn with_store_defaults(&self, config: &AssetStoreConfig) -> TransformSpec {
        let mut spec = self.clone();
        if spec.fetch_format.is_none() && config.auto_format {
            spec.fetch_format = Some("auto".to_string());
        }
        if spec.progressive.is_none() && config.progressive {
            spec.progressive = Some(true);
        }
        if spec.secure.is_none() {
            spec.secure = Some(config.secure);
        }
        spec
    }
}

/// Build the delivery URL for an asset. Returns `""` for the empty sentinel.
pub fn delivery_url(config: &AssetStoreConfig, asset: &AssetRecord, spec: &TransformSpec) -> String {
    url_with_format(config, asset, spec, &asset.format)
}

/// Named sizing presets: one parameterized body, each preset fixes a crop
/// mode (and its default gravity). Missing dimensions are omitted from the
/// directive string.
pub fn sized_url(
    config: &AssetStoreConfig,
    asset: &AssetRecord,
    mode: CropMode,
    width: Option<u32>,
    height: Option<u32>,
) -> String {
    let mut spec = TransformSpec::new().crop(mode);
    if let Some(width) = width {
        spec = spec.width(width);
    }
    if let Some(height) = height {
        spec = spec.height(height);
    }
    delivery_url(config, asset, &spec)
}

pub fn scale(c: &AssetStoreConfig, a: &AssetRecord, w: Option<u32>, h: Option<u32>) -> String {
    sized_url(c, a, CropMode::Scale, w, h)
}

pub fn fill(c: &AssetStoreConfig, a: &AssetRecord, w: Option<u32>, h: Option<u32>) -> String {
    sized_url(c, a, CropMode::Fill, w, h)
}

pub fn limit_fill(c: &AssetStoreConfig, a: &AssetRecord, w: Option<u32>, h: Option<u32>) -> String {
    sized_url(c, a, CropMode::LimitFill, w, h)
}

pub fn fit(c: &AssetStoreConfig, a: &AssetRecord, w: Option<u32>, h: Option<u32>) -> String {
    sized_url(c, a, CropMode::Fit, w, h)
}

pub fn limit(c: &AssetStoreConfig, a: &AssetRecord, w: Option<u32>, h: Option<u32>) -> String {
    sized_url(c, a, CropMode::Limit, w, h)
}

pub fn pad(c: &AssetStoreConfig, a: &AssetRecord, w: Option<u32>, h: Option<u32>) -> String {
    sized_url(c, a, CropMode::Pad, w, h)
}

pub fn limit_pad(c: &AssetStoreConfig, a: &AssetRecord, w: Option<u32>, h: Option<u32>) -> String {
    sized_url(c, a, CropMode::LimitPad, w, h)
}

pub fn crop(c: &AssetStoreConfig, a: &AssetRecord, w: Option<u32>, h: Option<u32>) -> String {
    sized_url(c, a, CropMode::Crop, w, h)
}

pub fn thumbnail(c: &AssetStoreConfig, a: &AssetRecord, w: Option<u32>, h: Option<u32>) -> String {
    sized_url(c, a, CropMode::Thumb, w, h)
}

/// Fixed square face-cropped 90x90 thumbnail, cached on the record at write
/// time. Video assets get a still-frame thumbnail: the format segment is
/// forced to `jpg`, never the video's own codec.
pub fn thumbnail_url(config: &AssetStoreConfig, asset: &AssetRecord) -> String {
    let spec = TransformSpec::new()
        .crop(CropMode::Thumb)
        .gravity(Gravity::Face)
        .dimensions(90, 90);
    let format = if asset.resource_type == ResourceType::Video {
        "jpg"
    } else {
        asset.format.as_str()
    };
    url_with_format(config, asset, &spec, format)
}

fn url_with_format(
    config: &AssetStoreConfig,
    asset: &AssetRecord,
    spec: &TransformSpec,
    format: &str,
) -> String {
    if !asset.exists() {
        return String::new();
    }

    let spec = spec.with_store_defaults(config);
    let scheme = if spec.secure == Some(true) {
        "https"
    } else {
        "http"
    };

    let mut url = format!(
        "{}://{}/{}/{}/upload",
        scheme,
        config.delivery_host,
        config.cloud_name,
        asset.resource_type.as_str()
    );
    let directives = spec.directives();
    if !directives.is_empty() {
        url.push('/');
        url.push_str(&directives);
    }
    url.push_str(&format!("/v{}/{}", asset.version, asset.public_id));
    if !format.is_empty() {
        url.push('.');
        url.push_str(format);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetMetadata;

    fn config() -> AssetStoreConfig {
        AssetStoreConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            api_base_url: "https://api.medialink.example".to_string(),
            delivery_host: "res.medialink.example".to_string(),
            secure: false,
            progressive: false,
            auto_format: false,
            folders_enabled: false,
            prefix: None,
            environment: "development".to_string(),
        }
    }

    fn image_asset() -> AssetRecord {
        AssetRecord::from_metadata(
            AssetMetadata {
                public_id: "portrait".to_string(),
                version: 42,
                signature: "sig".to_string(),
                format: "jpg".to_string(),
                resource_type: ResourceType::Image,
                url: String::new(),
                secure_url: String::new(),
                width: 1200,
                height: 800,
            },
            String::new(),
        )
    }

    fn video_asset() -> AssetRecord {
        AssetRecord::from_metadata(
            AssetMetadata {
                public_id: "clip".to_string(),
                version: 7,
                signature: "sig".to_string(),
                format: "mp4".to_string(),
                resource_type: ResourceType::Video,
                url: String::new(),
                secure_url: String::new(),
                width: 1920,
                height: 1080,
            },
            String::new(),
        )
    }

    #[test]
    fn empty_sentinel_yields_empty_url() {
        let sentinel = AssetRecord::empty();
        assert_eq!(delivery_url(&config(), &sentinel, &TransformSpec::new()), "");
        assert_eq!(
            delivery_url(
                &config(),
                &sentinel,
                &TransformSpec::new().crop(CropMode::Fill).dimensions(10, 10)
            ),
            ""
        );
        assert_eq!(thumbnail_url(&config(), &sentinel), "");
    }

    #[test]
    fn plain_url_embeds_version_and_format() {
        let url = delivery_url(&config(), &image_asset(), &TransformSpec::new());
        assert_eq!(
            url,
            "http://res.medialink.example/demo/image/upload/v42/portrait.jpg"
        );
    }

    #[test]
    fn version_changes_invalidate_url() {
        let mut asset = image_asset();
        let before = delivery_url(&config(), &asset, &TransformSpec::new());
        asset.version = 43;
        let after = delivery_url(&config(), &asset, &TransformSpec::new());
        assert_ne!(before, after);
        assert!(after.contains("/v43/"));
    }

    #[test]
    fn directives_are_ordered_and_comma_joined() {
        let spec = TransformSpec::new()
            .crop(CropMode::Fill)
            .dimensions(500, 300);
        let url = delivery_url(&config(), &image_asset(), &spec);
        assert_eq!(
            url,
            "http://res.medialink.example/demo/image/upload/c_fill,g_faces,h_300,w_500/v42/portrait.jpg"
        );
    }

    #[test]
    fn store_defaults_apply_when_transform_is_silent() {
        let mut cfg = config();
        cfg.secure = true;
        cfg.progressive = true;
        cfg.auto_format = true;
        let url = delivery_url(&cfg, &image_asset(), &TransformSpec::new());
        assert!(url.starts_with("https://"));
        assert!(url.contains("f_auto"));
        assert!(url.contains("fl_progressive"));

        // Explicit transform values win over store defaults.
        let url = delivery_url(
            &cfg,
            &image_asset(),
            &TransformSpec::new()
                .secure(false)
                .progressive(false)
                .fetch_format("webp"),
        );
        assert!(url.starts_with("http://"));
        assert!(!url.contains("fl_progressive"));
        assert!(url.contains("f_webp"));
        assert!(!url.contains("f_auto"));
    }

    #[test]
    fn sizing_presets_share_one_body() {
        let asset = image_asset();
        let cfg = config();
        assert!(scale(&cfg, &asset, Some(100), Some(50)).contains("c_scale,h_50,w_100"));
        assert!(fill(&cfg, &asset, Some(100), Some(50)).contains("c_fill,g_faces,h_50,w_100"));
        assert!(limit_fill(&cfg, &asset, Some(100), None).contains("c_lfill,g_faces,w_100"));
        assert!(fit(&cfg, &asset, Some(100), None).contains("c_fit,w_100"));
        assert!(limit(&cfg, &asset, None, Some(50)).contains("c_limit,h_50"));
        assert!(pad(&cfg, &asset, Some(100), Some(50)).contains("c_pad,h_50,w_100"));
        assert!(limit_pad(&cfg, &asset, Some(100), Some(50)).contains("c_lpad,h_50,w_100"));
        assert!(crop(&cfg, &asset, Some(100), Some(50)).contains("c_crop,g_faces,h_50,w_100"));
        assert!(thumbnail(&cfg, &asset, Some(100), Some(50)).contains("c_thumb,g_faces,h_50,w_100"));
    }

    #[test]
    fn missing_dimensions_are_omitted_not_zeroed() {
        let url = scale(&config(), &image_asset(), None, None);
        assert!(url.contains("/c_scale/"));
        assert!(!url.contains("w_0"));
        assert!(!url.contains("h_0"));
    }

    #[test]
    fn thumbnail_is_square_face_cropped() {
        let url = thumbnail_url(&config(), &image_asset());
        assert_eq!(
            url,
            "http://res.medialink.example/demo/image/upload/c_thumb,g_face,h_90,w_90/v42/portrait.jpg"
        );
    }

    #[test]
    fn video_thumbnail_is_a_still_frame() {
        let url = thumbnail_url(&config(), &video_asset());
        assert!(url.ends_with(".jpg"));
        assert!(!url.contains("mp4"));
        assert!(url.contains("/video/upload/c_thumb,g_face,h_90,w_90/"));
    }
}
