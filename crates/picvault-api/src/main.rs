use picvault_api::{init_tracing, AppState};
use picvault_core::Config;
use picvault_storage::{S3Storage, Storage};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_tracing();

    let config = Config::from_env()?;

    let storage: Arc<dyn Storage> = Arc::new(S3Storage::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
    )?);

    let state = Arc::new(AppState::new(config, storage)?);
    let router = picvault_api::setup::routes::build_router(state.clone());

    picvault_api::setup::server::start_server(&state.config, router).await?;

    Ok(())
}
