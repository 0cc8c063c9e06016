//! Configuration module
//!
//! One `Config` is built from the environment at process start, validated,
//! and passed by reference (`Arc`) into the handlers and the storage
//! collaborator. Nothing reads the environment after startup.

use std::env;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_PRESIGN_EXPIRY_SECS: u64 = 600;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_UPLOAD_MB: usize = 25;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Bucket holding the original images.
    pub s3_bucket: String,
    pub s3_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, Spaces, ...).
    pub s3_endpoint: Option<String>,
    /// Shared secret gating the upload endpoint.
    pub post_token: String,
    /// Lifetime of presigned GET URLs handed to the upstream fetch.
    pub presign_expiry_secs: u64,
    /// Bound on the single upstream fetch per request.
    pub upstream_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            s3_bucket: env::var("S3_BUCKET")
                .map_err(|_| anyhow::anyhow!("S3_BUCKET must be set"))?,
            s3_region: env::var("S3_REGION").ok().or_else(|| env::var("AWS_REGION").ok()),
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            post_token: env::var("POST_TOKEN")
                .map_err(|_| anyhow::anyhow!("POST_TOKEN must be set to gate uploads"))?,
            presign_expiry_secs: env::var("PRESIGN_EXPIRY_SECS")
                .unwrap_or_else(|_| DEFAULT_PRESIGN_EXPIRY_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_PRESIGN_EXPIRY_SECS),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            max_upload_bytes: env::var("MAX_UPLOAD_MB")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_MB.to_string())
                .parse::<usize>()
                .unwrap_or(DEFAULT_MAX_UPLOAD_MB)
                * 1024
                * 1024,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.s3_bucket.trim().is_empty() {
            return Err(anyhow::anyhow!("S3_BUCKET must not be empty"));
        }
        if self.post_token.trim().is_empty() {
            return Err(anyhow::anyhow!("POST_TOKEN must not be empty"));
        }
        if self.s3_region.is_none() && self.s3_endpoint.is_none() {
            return Err(anyhow::anyhow!(
                "S3_REGION (or AWS_REGION) or S3_ENDPOINT must be set"
            ));
        }
        if self.presign_expiry_secs == 0 {
            return Err(anyhow::anyhow!("PRESIGN_EXPIRY_SECS must be positive"));
        }
        Ok(())
    }
}
