//! Pure extraction from catalog detail records into seasonal rows.

use super::dto::{JikanAnimeData, JikanEntity};
use crate::dataset::records::SeasonalAnimeRecord;

/// Flatten nested name entities into a ", "-joined string. The result is
/// semantically a set with zero or more entries.
pub fn join_names(entities: &[JikanEntity]) -> String {
    entities
        .iter()
        .map(|entity| entity.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a human-readable duration ("1 hr 30 min", "24 min per ep") into
/// total minutes. The token before each recognized unit label is its
/// magnitude; a missing or unparsable magnitude contributes zero. A string
/// with no recognizable unit yields zero, by policy not error.
pub fn parse_duration_minutes(duration: &str) -> u32 {
    let tokens: Vec<&str> = duration.split_whitespace().collect();
    let magnitude_before = |unit: &str| -> u32 {
        tokens
            .iter()
            .position(|token| *token == unit)
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| tokens[index].parse().ok())
            .unwrap_or(0)
    };
    magnitude_before("hr") * 60 + magnitude_before("min")
}

/// Combine a season-listing entry with its detail record into a seasonal
/// row candidate. `None` means some required scalar was absent; the caller
/// drops such candidates during assembly.
pub fn to_seasonal_record(
    listing: &JikanAnimeData,
    detail: &JikanAnimeData,
) -> Option<SeasonalAnimeRecord> {
    Some(SeasonalAnimeRecord {
        anime_id: listing.mal_id,
        title: listing.title.clone(),
        anime_type: listing.anime_type.clone()?,
        episode_count: listing.episodes?,
        duration_minutes: detail
            .duration
            .as_deref()
            .map(parse_duration_minutes)
            .unwrap_or(0),
        source_material: listing.source.clone()?,
        genre_names: join_names(&listing.genres),
        studio_names: join_names(&detail.studios),
        score: listing.score?,
        favorite_count: detail.favorites?,
        member_count: listing.members?,
    })
}
