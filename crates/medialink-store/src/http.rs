//! HTTP client implementation of the remote store contract.
//!
//! Talks to a Cloudinary-style REST API: multipart upload and destroy under
//! `/v1_1/{cloud_name}/{resource_type}/...`, metadata lookup under the admin
//! resources endpoint. All calls authenticate with the account's api
//! key/secret via basic auth.

use async_trait::async_trait;
use medialink_core::{AssetMetadata, AssetStoreConfig, ConfigError};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

use crate::traits::{
    DestroyOptions, DestroyResponse, LookupOptions, RemoteStore, StoreError, StoreResult,
    UploadOptions,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Remote store backed by an HTTP API.
#[derive(Clone)]
pub struct HttpRemoteStore {
    config: AssetStoreConfig,
    client: Client,
}

impl HttpRemoteStore {
    pub fn new(config: AssetStoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to create HTTP client: {}", e)))?;
        Ok(HttpRemoteStore { config, client })
    }

    fn upload_endpoint(&self, resource_type: &str, action: &str) -> String {
        format!(
            "{}/v1_1/{}/{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name,
            resource_type,
            action
        )
    }

    fn resource_endpoint(&self, resource_type: &str, remote_id: &str) -> String {
        format!(
            "{}/v1_1/{}/resources/{}/upload/{}",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name,
            resource_type,
            remote_id
        )
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn upload(
        &self,
        local_path: &Path,
        options: &UploadOptions,
    ) -> StoreResult<AssetMetadata> {
        let data = fs::read(local_path).await?;
        let filename = local_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let mut form = Form::new().part("file", Part::bytes(data).file_name(filename));
        if !options.tags.is_empty() {
            form = form.text("tags", options.tags.join(","));
        }
        if let Some(ref folder) = options.folder {
            form = form.text("folder", folder.clone());
        }
        if let Some(ref public_id) = options.public_id {
            form = form.text("public_id", public_id.clone());
        }
        if options.use_filename {
            form = form.text("use_filename", "true");
            if let Some(unique) = options.unique_filename {
                form = form.text("unique_filename", if unique { "true" } else { "false" });
            }
        }

        let url = self.upload_endpoint(options.resource_type.as_str(), "upload");
        tracing::debug!(url = %url, "uploading asset to remote store");
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .multipart(form)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Upload {
                status: Some(status.as_u16()),
                message,
            });
        }

        response
            .json::<AssetMetadata>()
            .await
            .map_err(|e| StoreError::Transport(format!("invalid upload response: {}", e)))
    }

    async fn destroy(
        &self,
        public_id: &str,
        options: &DestroyOptions,
    ) -> StoreResult<DestroyResponse> {
        let url = self.upload_endpoint(options.resource_type.as_str(), "destroy");
        tracing::debug!(url = %url, public_id = %public_id, "destroying remote asset");
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .form(&[("public_id", public_id)])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Destroy {
                status: Some(status.as_u16()),
                message,
            });
        }

        response
            .json::<DestroyResponse>()
            .await
            .map_err(|e| StoreError::Transport(format!("invalid destroy response: {}", e)))
    }

    async fn lookup(
        &self,
        remote_id: &str,
        options: &LookupOptions,
    ) -> StoreResult<AssetMetadata> {
        let url = self.resource_endpoint(options.resource_type.as_str(), remote_id);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(StoreError::NotFound(remote_id.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Lookup {
                status: Some(status.as_u16()),
                message,
            });
        }

        response
            .json::<AssetMetadata>()
            .await
            .map_err(|e| StoreError::Transport(format!("invalid lookup response: {}", e)))
    }
}
