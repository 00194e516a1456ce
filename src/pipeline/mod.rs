//! Stage orchestration: Loader → Deriver → Fetcher → Assembler, run once
//! per invocation. Each stage fully overwrites its output file.

pub mod fetcher;

use crate::config::PipelineConfig;
use crate::dataset::{assembler, cleaner};
use crate::jikan::{CatalogProvider, JikanClient};
use crate::shared::errors::AppResult;
use log::info;

/// Run the whole retrieval-and-cleaning pipeline against the live catalog.
pub async fn run(config: &PipelineConfig) -> AppResult<()> {
    cleaner::clean_watch_lists(config)?;
    cleaner::clean_anime_catalog(config)?;
    cleaner::clean_users(config)?;

    let client = JikanClient::new()?;
    fetch_and_assemble(config, &client).await?;

    info!("Pipeline run complete");
    Ok(())
}

/// Fetch the seasonal dataset through `provider` and persist the assembled
/// table. Split out from [`run`] so tests can substitute the provider.
pub async fn fetch_and_assemble(
    config: &PipelineConfig,
    provider: &dyn CatalogProvider,
) -> AppResult<()> {
    let candidates = fetcher::fetch_seasonal(config, provider).await?;
    let records = assembler::assemble(candidates);
    assembler::write_seasonal_csv(&records, &config.seasonal_output_path())
}
