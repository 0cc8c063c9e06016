//! Picvault CLI — upload an image and print its serving URL.
//!
//! Set PICVAULT_URL and POST_TOKEN (or pass -u / -t). The target is either a
//! local file or an http(s) URL the server fetches itself.

use anyhow::{Context, Result};
use clap::Parser;
use picvault_cli::client::ApiClient;
use picvault_cli::seen_index::SeenIndex;
use picvault_cli::{derive_filename, init_tracing, is_url};

#[derive(Parser)]
#[command(name = "picvault", about = "Upload images to a picvault instance")]
struct Cli {
    /// Local file path or http(s) URL of the image to upload
    target: String,

    /// Base URL of the picvault instance
    #[arg(short = 'u', long = "url", env = "PICVAULT_URL")]
    url: String,

    /// Shared upload token
    #[arg(short = 't', long = "post-token", env = "POST_TOKEN", hide_env_values = true)]
    post_token: String,

    /// Store under this filename instead of one derived from the target
    #[arg(short = 'f', long = "target-filename")]
    target_filename: Option<String>,

    /// Upload even if this filename was uploaded before
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filename = match cli.target_filename {
        Some(name) => name,
        None => derive_filename(&cli.target)?,
    };

    let client = ApiClient::new(cli.url, cli.post_token)?;
    let index = SeenIndex::from_env()?;

    if !cli.force && index.contains(&filename) {
        tracing::debug!(filename = %filename, "Already uploaded, skipping");
        println!("{}", client.image_url(&filename));
        return Ok(());
    }

    if is_url(&cli.target) {
        client.upload_from_url(&filename, &cli.target).await?;
    } else {
        let data = std::fs::read(&cli.target)
            .with_context(|| format!("reading {}", cli.target))?;
        client.upload_bytes(&filename, &data).await?;
    }

    index.mark(&filename)?;
    println!("{}", client.image_url(&filename));

    Ok(())
}
