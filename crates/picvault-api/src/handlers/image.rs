//! Image fetch and transform handler (`GET /i/{key}`).
//!
//! The handler never talks to the bucket directly: it asks storage for a
//! presigned URL, fetches the object over HTTP exactly once, and hands the
//! bytes to the transform pipeline on a blocking worker.

use crate::error::HttpAppError;
use crate::handlers::split_key;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::Response,
};
use picvault_core::AppError;
use picvault_processing::{self as processing, Quality, TransformRequest};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Derived responses never change for a given key + parameters, so CDNs may
/// hold them for a year. Browsers still revalidate.
const CACHE_CONTROL: &str = "s-maxage=31536000, public";

/// Raw query parameters. Everything arrives as strings; parsing and
/// defaulting happen in [`parse_transform`] so bad values produce 400s
/// instead of axum rejections.
#[derive(Debug, Default, Deserialize)]
pub struct ImageQuery {
    pub w: Option<String>,
    pub h: Option<String>,
    pub bw: Option<String>,
    pub q: Option<String>,
}

pub async fn fetch_image(
    Path(key): Path<String>,
    Query(query): Query<ImageQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, HttpAppError> {
    let (_, extension) = split_key(&key)?;
    let extension = extension.to_ascii_lowercase();
    let request = parse_transform(&query)?;

    let url = state
        .storage
        .presigned_get_url(&key, Duration::from_secs(state.config.presign_expiry_secs))
        .await
        .map_err(AppError::from)?;

    let data = fetch_upstream(&state, &url).await?;

    tracing::debug!(key = %key, bytes = data.len(), "Fetched object from upstream");

    let encoded = tokio::task::spawn_blocking(move || {
        processing::process(&data, &extension, &request)
    })
    .await
    .map_err(|e| AppError::Internal(format!("transform task failed: {}", e)))??;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, encoded.media_type)
        .header(header::CACHE_CONTROL, CACHE_CONTROL)
        .body(axum::body::Body::from(encoded.bytes))
        .map_err(|e| AppError::Internal(format!("response build failed: {}", e)))?;

    Ok(response)
}

/// Fetch the object through its presigned URL. A 404 from the bucket becomes
/// our own 404; any other non-200 status is echoed back with its body.
async fn fetch_upstream(state: &AppState, url: &str) -> Result<bytes::Bytes, HttpAppError> {
    let response = state.http.get(url).send().await.map_err(|e| {
        let status = if e.is_timeout() { 504 } else { 502 };
        AppError::Upstream {
            status,
            body: e.to_string(),
        }
    })?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(AppError::UpstreamNotFound.into());
    }
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream {
            status: status.as_u16(),
            body,
        }
        .into());
    }

    let data = response.bytes().await.map_err(|e| AppError::Upstream {
        status: 502,
        body: e.to_string(),
    })?;

    Ok(data)
}

/// Turn the raw query strings into a validated [`TransformRequest`].
///
/// `w` and `h` must be positive integers when present. `bw` is truthy when
/// present with any non-empty value. `q` falls back to its default on any
/// out-of-range or unparseable value rather than failing the request.
pub fn parse_transform(query: &ImageQuery) -> Result<TransformRequest, AppError> {
    let width = parse_dimension("w", query.w.as_deref())?;
    let height = parse_dimension("h", query.h.as_deref())?;
    let grayscale = query.bw.as_deref().is_some_and(|v| !v.is_empty());
    let quality = Quality::resolve(query.q.as_deref());

    Ok(TransformRequest {
        width,
        height,
        grayscale,
        quality,
    })
}

fn parse_dimension(name: &str, value: Option<&str>) -> Result<Option<u32>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let parsed: u32 = raw.parse().map_err(|_| {
                AppError::InvalidParameter(format!("{} must be a positive integer", name))
            })?;
            if parsed == 0 {
                return Err(AppError::InvalidParameter(format!(
                    "{} must be a positive integer",
                    name
                )));
            }
            Ok(Some(parsed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_identity_transform() {
        let request = parse_transform(&ImageQuery::default()).unwrap();
        assert_eq!(request.width, None);
        assert_eq!(request.height, None);
        assert!(!request.grayscale);
        assert_eq!(request.quality.value(), 75);
    }

    #[test]
    fn dimensions_parse_as_positive_integers() {
        let query = ImageQuery {
            w: Some("200".to_string()),
            h: Some("100".to_string()),
            ..Default::default()
        };
        let request = parse_transform(&query).unwrap();
        assert_eq!(request.width, Some(200));
        assert_eq!(request.height, Some(100));
    }

    #[test]
    fn non_numeric_dimension_is_rejected() {
        let query = ImageQuery {
            w: Some("wide".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            parse_transform(&query),
            Err(AppError::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let query = ImageQuery {
            h: Some("0".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            parse_transform(&query),
            Err(AppError::InvalidParameter(_))
        ));
    }

    #[test]
    fn bw_is_truthy_when_non_empty() {
        let query = ImageQuery {
            bw: Some("1".to_string()),
            ..Default::default()
        };
        assert!(parse_transform(&query).unwrap().grayscale);

        let query = ImageQuery {
            bw: Some(String::new()),
            ..Default::default()
        };
        assert!(!parse_transform(&query).unwrap().grayscale);
    }

    #[test]
    fn bad_quality_falls_back_to_default() {
        let query = ImageQuery {
            q: Some("300".to_string()),
            ..Default::default()
        };
        assert_eq!(parse_transform(&query).unwrap().quality.value(), 75);
    }
}
