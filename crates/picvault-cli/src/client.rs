//! HTTP client for a picvault instance.

use anyhow::{Context, Result};
use base64::Engine;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

pub struct ApiClient {
    client: Client,
    base_url: String,
    post_token: String,
}

impl ApiClient {
    pub fn new(base_url: String, post_token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            post_token,
        })
    }

    /// Public URL the image is served from after upload.
    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/i/{}", self.base_url, filename)
    }

    /// Upload local bytes, base64-encoded in the request body.
    pub async fn upload_bytes(&self, filename: &str, data: &[u8]) -> Result<()> {
        let body = json!({
            "token": self.post_token,
            "image": base64::engine::general_purpose::STANDARD.encode(data),
        });
        self.post_upload(filename, body).await
    }

    /// Ask the server to fetch the image from a URL itself.
    pub async fn upload_from_url(&self, filename: &str, source_url: &str) -> Result<()> {
        let body = json!({
            "token": self.post_token,
            "url": source_url,
        });
        self.post_upload(filename, body).await
    }

    async fn post_upload(&self, filename: &str, body: serde_json::Value) -> Result<()> {
        let url = format!("{}/u/{}", self.base_url, filename);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("upload of '{}' failed with status {}: {}", filename, status, body);
        }

        tracing::debug!(filename = %filename, "Upload accepted");
        Ok(())
    }
}
