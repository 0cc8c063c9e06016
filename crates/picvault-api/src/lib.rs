//! The picvault HTTP server.
//!
//! Routes: `GET /` (info), `GET /i/{key}` (fetch + transform), and
//! `POST /u/{key}` (token-gated upload). The fetch path is the request
//! orchestrator described in the crate docs of `picvault-processing`.

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;

pub use state::AppState;

/// Initialize tracing for the server binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
