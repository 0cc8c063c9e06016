//! Upload handler (`POST /u/{key}`).
//!
//! Accepts either base64-encoded bytes or a source URL to fetch, gated by a
//! shared-secret token. Bytes are stored verbatim; no transform or
//! re-encoding happens at upload time.

use crate::error::HttpAppError;
use crate::handlers::split_key;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use base64::Engine;
use bytes::Bytes;
use picvault_core::AppError;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use subtle::ConstantTimeEq;

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub token: String,
    /// Base64-encoded image bytes, optionally with a data-URI prefix.
    pub image: Option<String>,
    /// Source URL to fetch the image from instead.
    pub url: Option<String>,
}

pub async fn upload_image(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<UploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let (_, extension) = split_key(&key)?;

    if body.token.is_empty() {
        return Err(AppError::BadRequest("missing token".to_string()).into());
    }
    if !token_matches(&body.token, &state.config.post_token) {
        return Err(AppError::Unauthorized("token mismatch".to_string()).into());
    }

    let data = match (&body.image, &body.url) {
        (Some(image), _) => decode_image_payload(image)?,
        (None, Some(url)) => fetch_source_url(&state, url).await?,
        (None, None) => {
            return Err(
                AppError::BadRequest("body param 'image' or 'url' must be set".to_string()).into(),
            )
        }
    };

    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::BadRequest(format!(
            "image exceeds maximum size of {} bytes",
            state.config.max_upload_bytes
        ))
        .into());
    }

    let content_type = format!("image/{}", extension.to_ascii_lowercase());
    state
        .storage
        .put(&key, data, &content_type)
        .await
        .map_err(AppError::from)?;

    tracing::info!(key = %key, content_type = %content_type, "Stored uploaded image");

    Ok((StatusCode::CREATED, Json(json!({"status": "created"}))))
}

/// Constant-time token comparison. Length differences short-circuit inside
/// `ct_eq`, which is acceptable for a shared-secret token.
fn token_matches(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Decode a base64 payload, tolerating a `data:image/...;base64,` prefix by
/// dropping everything up to the first comma.
fn decode_image_payload(image: &str) -> Result<Bytes, AppError> {
    let encoded = match image.split_once(',') {
        Some((_, rest)) => rest,
        None => image,
    };
    let data = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| AppError::BadRequest(format!("image is not valid base64: {}", e)))?;
    Ok(Bytes::from(data))
}

/// Fetch upload bytes from a caller-supplied URL. Any failure is the
/// caller's problem, so everything maps to 400.
async fn fetch_source_url(state: &AppState, url: &str) -> Result<Bytes, HttpAppError> {
    let response = state
        .http
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::BadRequest(format!("fetching {} failed: {}", url, e)))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::BadRequest(format!(
            "fetching {} returned status {}: {}",
            url, status, body
        ))
        .into());
    }

    let data = response
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("reading {} failed: {}", url, e)))?;

    Ok(data)
}
