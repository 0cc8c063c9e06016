//! Error types module
//!
//! All request-scoped failures are unified under the `AppError` enum. Errors
//! carry enough structure for the HTTP layer to pick a status code and a
//! client-facing body without string matching.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors like bad query parameters
    Debug,
    /// Recoverable issues like upstream failures
    Warn,
    /// Unexpected faults
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Corrupt, truncated, or unsupported input bytes.
    #[error("decode error: {0}")]
    Decode(String),

    /// A query parameter could not be parsed as required.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Upstream storage responded 404 for the requested object.
    #[error("image not found")]
    UpstreamNotFound,

    /// Upstream storage responded with any other non-200 status.
    #[error("upstream returned status {status}")]
    Upstream { status: u16, body: String },

    /// The pixel buffer could not be serialized by the chosen encoder.
    /// Should be unreachable after decode/convert; treated as a server fault.
    #[error("encode error: {0}")]
    Encode(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::Decode(_) => 422,
            AppError::InvalidParameter(_) => 400,
            AppError::UpstreamNotFound => 404,
            // Pass the upstream status through verbatim; anything that is not
            // a valid error status collapses to 502.
            AppError::Upstream { status, .. } => {
                if *status >= 400 && *status <= 599 {
                    *status
                } else {
                    502
                }
            }
            AppError::Encode(_) => 500,
            AppError::Storage(_) => 500,
            AppError::Unauthorized(_) => 403,
            AppError::BadRequest(_) => 400,
            AppError::Internal(_) => 500,
        }
    }

    /// Log level for this error.
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidParameter(_) | AppError::BadRequest(_) | AppError::Decode(_) => {
                LogLevel::Debug
            }
            AppError::UpstreamNotFound | AppError::Upstream { .. } | AppError::Unauthorized(_) => {
                LogLevel::Warn
            }
            AppError::Encode(_) | AppError::Storage(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }

    /// Short machine-readable error type, used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Decode(_) => "decode",
            AppError::InvalidParameter(_) => "invalid_parameter",
            AppError::UpstreamNotFound => "upstream_not_found",
            AppError::Upstream { .. } => "upstream_error",
            AppError::Encode(_) => "encode",
            AppError::Storage(_) => "storage",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::BadRequest(_) => "bad_request",
            AppError::Internal(_) => "internal",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("JSON parsing error: {}", err))
    }
}
