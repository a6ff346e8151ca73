//! Store configuration.
//!
//! `AssetStoreConfig` is built once at setup and passed explicitly to the
//! path composer, URL engine, and lifecycle coordinator. No component reads
//! ambient global state.

use std::env;

use crate::error::ConfigError;

const DEFAULT_DELIVERY_HOST: &str = "res.medialink.example";
const DEFAULT_API_BASE_URL: &str = "https://api.medialink.example";

/// Configuration for one remote asset store account.
#[derive(Clone, Debug)]
pub struct AssetStoreConfig {
    /// Account namespace embedded in every delivery URL.
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Base URL for upload/destroy/lookup API calls.
    pub api_base_url: String,
    /// Host serving derived delivery URLs (scheme is chosen per request).
    pub delivery_host: String,
    /// Default delivery URLs to https.
    pub secure: bool,
    /// Default progressive encoding (`fl_progressive`) on delivery URLs.
    pub progressive: bool,
    /// Default format negotiation (`f_auto`) on delivery URLs.
    pub auto_format: bool,
    /// Group uploads under a computed remote folder path.
    pub folders_enabled: bool,
    /// Account-wide prefix applied to folders and tags.
    pub prefix: Option<String>,
    pub environment: String,
}

impl AssetStoreConfig {
    /// Build configuration from `MEDIALINK_*` environment variables.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = AssetStoreConfig {
            cloud_name: env::var("MEDIALINK_CLOUD_NAME").unwrap_or_default(),
            api_key: env::var("MEDIALINK_API_KEY").unwrap_or_default(),
            api_secret: env::var("MEDIALINK_API_SECRET").unwrap_or_default(),
            api_base_url: env::var("MEDIALINK_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            delivery_host: env::var("MEDIALINK_DELIVERY_HOST")
                .unwrap_or_else(|_| DEFAULT_DELIVERY_HOST.to_string()),
            secure: env_flag("MEDIALINK_SECURE", false),
            progressive: env_flag("MEDIALINK_PROGRESSIVE", true),
            auto_format: env_flag("MEDIALINK_AUTO_FORMAT", true),
            folders_enabled: env_flag("MEDIALINK_FOLDERS", false),
            prefix: env::var("MEDIALINK_PREFIX").ok().filter(|p| !p.is_empty()),
            environment: env::var("MEDIALINK_ENV").unwrap_or_else(|_| "development".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate that the store credentials are present.
    ///
    /// Field declarations call this at setup so a missing account fails fast
    /// instead of surfacing on the first upload.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cloud_name.is_empty() {
            return Err(ConfigError::Missing("cloud_name"));
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::Missing("api_key"));
        }
        if self.api_secret.is_empty() {
            return Err(ConfigError::Missing("api_secret"));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(v) => matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AssetStoreConfig {
        AssetStoreConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            delivery_host: DEFAULT_DELIVERY_HOST.to_string(),
            secure: false,
            progressive: true,
            auto_format: true,
            folders_enabled: false,
            prefix: None,
            environment: "development".to_string(),
        }
    }

    #[test]
    fn validate_accepts_complete_credentials() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_cloud_name() {
        let mut config = base_config();
        config.cloud_name = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing("cloud_name"))
        ));
    }

    #[test]
    fn validate_rejects_missing_secret() {
        let mut config = base_config();
        config.api_secret = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing("api_secret"))
        ));
    }

    #[test]
    fn is_production_matches_both_spellings() {
        let mut config = base_config();
        assert!(!config.is_production());
        config.environment = "Production".to_string();
        assert!(config.is_production());
        config.environment = "prod".to_string();
        assert!(config.is_production());
    }
}
