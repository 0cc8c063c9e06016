//! Picvault CLI — uploads images to a picvault instance.

pub mod client;
pub mod seen_index;

/// Derive the stored filename from an upload target (local path or URL).
///
/// For URLs the last path segment is used, with any query string dropped.
pub fn derive_filename(target: &str) -> anyhow::Result<String> {
    let name = if is_url(target) {
        let without_query = target.split(['?', '#']).next().unwrap_or(target);
        without_query.rsplit('/').next().unwrap_or("").to_string()
    } else {
        std::path::Path::new(target)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    };

    if name.is_empty() {
        anyhow::bail!("cannot derive a filename from '{}'; pass --target-filename", target);
    }
    Ok(name)
}

/// Whether the upload target is fetched by the server rather than read
/// from the local filesystem.
pub fn is_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
