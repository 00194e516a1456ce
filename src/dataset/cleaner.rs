//! The bulk-file cleaning operations: column projection plus the derived
//! user fields (age, gender allow-list).

use crate::config::PipelineConfig;
use crate::dataset::records::{
    ANIME_COLUMNS, RETAINED_GENDERS, USER_COLUMNS, WATCH_LIST_COLUMNS,
};
use crate::dataset::table::ProjectedTable;
use crate::shared::errors::{AppError, AppResult};
use log::info;

/// Project the per-user watch-list export and write the cleaned copy.
pub fn clean_watch_lists(config: &PipelineConfig) -> AppResult<()> {
    let table = ProjectedTable::load(&config.raw_watch_lists_path(), &WATCH_LIST_COLUMNS)?;
    info!("Cleaned watch lists: {} rows retained", table.len());
    table.write_csv(&config.cleaned_watch_lists_path())
}

/// Project the anime catalog export and write the cleaned copy.
pub fn clean_anime_catalog(config: &PipelineConfig) -> AppResult<()> {
    let table = ProjectedTable::load(&config.raw_anime_path(), &ANIME_COLUMNS)?;
    info!("Cleaned anime catalog: {} rows retained", table.len());
    table.write_csv(&config.cleaned_anime_path())
}

/// Project the user-profile export, derive `age`, keep only the retained
/// gender categories, and write the cleaned copy.
pub fn clean_users(config: &PipelineConfig) -> AppResult<()> {
    let mut table = ProjectedTable::load(&config.raw_users_path(), &USER_COLUMNS)?;
    derive_age(&mut table, config.reference_year)?;
    filter_gender(&mut table)?;
    info!("Cleaned users: {} rows retained", table.len());
    table.write_csv(&config.cleaned_users_path())
}

/// Append an `age` column computed as `reference_year` minus the leading
/// year segment of the hyphen-delimited `birth_date`. The split is purely
/// positional; a segment that does not parse as a number is fatal.
pub fn derive_age(table: &mut ProjectedTable, reference_year: i32) -> AppResult<()> {
    let birth_index = table
        .column_index("birth_date")
        .ok_or_else(|| AppError::SchemaError("table has no 'birth_date' column".to_string()))?;

    let ages = table
        .rows()
        .iter()
        .map(|row| {
            let birth_date = row.get(birth_index).unwrap_or_default();
            let year: i32 = birth_date
                .split('-')
                .next()
                .unwrap_or_default()
                .trim()
                .parse()
                .map_err(|_| {
                    AppError::InvalidInput(format!("unparsable birth date '{}'", birth_date))
                })?;
            Ok((reference_year - year).to_string())
        })
        .collect::<AppResult<Vec<_>>>()?;

    table.append_column("age", ages)
}

/// Keep only rows whose gender is one of the retained categories. Anything
/// else (other categories, blanks) is dropped silently; narrowing to the two
/// populous categories is a deliberate scope decision of the analysis.
pub fn filter_gender(table: &mut ProjectedTable) -> AppResult<()> {
    let gender_index = table
        .column_index("gender")
        .ok_or_else(|| AppError::SchemaError("table has no 'gender' column".to_string()))?;

    table.retain(|row| {
        row.get(gender_index)
            .map(|gender| RETAINED_GENDERS.contains(&gender))
            .unwrap_or(false)
    });
    Ok(())
}
