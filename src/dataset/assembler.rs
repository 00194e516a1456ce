//! Final assembly of the seasonal anime table fetched from the catalog API.

use crate::dataset::records::{SeasonalAnimeRecord, SEASONAL_COLUMNS};
use crate::shared::errors::{AppError, AppResult};
use log::info;
use std::path::Path;

/// Collapse the per-title fetch results into the final table: candidates
/// with a missing field (`None`) and titles without any studio credit are
/// dropped as data-quality filters, everything else is kept in fetch order.
pub fn assemble(candidates: Vec<Option<SeasonalAnimeRecord>>) -> Vec<SeasonalAnimeRecord> {
    let total = candidates.len();
    let mut incomplete = 0usize;
    let mut without_studio = 0usize;

    let records: Vec<SeasonalAnimeRecord> = candidates
        .into_iter()
        .filter_map(|candidate| match candidate {
            None => {
                incomplete += 1;
                None
            }
            Some(record) if record.studio_names.is_empty() => {
                without_studio += 1;
                None
            }
            Some(record) => Some(record),
        })
        .collect();

    info!(
        "Assembled seasonal table: {} rows kept of {} fetched ({} incomplete, {} without studio)",
        records.len(),
        total,
        incomplete,
        without_studio
    );
    records
}

/// Write the assembled table to `path`, replacing any prior file in full.
/// The header row is written even when every row was filtered out.
pub fn write_seasonal_csv(records: &[SeasonalAnimeRecord], path: &Path) -> AppResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))?;
    writer.write_record(SEASONAL_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
