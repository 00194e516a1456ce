//! Typed views of the cleaned dataset artifacts.
//!
//! Field names follow the project vocabulary; `#[serde(rename)]` keeps the
//! CSV headers identical to the upstream MyAnimeList exports so downstream
//! notebooks keep working against the same column names.

use serde::{Deserialize, Serialize};

/// Columns retained from the raw anime catalog export.
pub const ANIME_COLUMNS: [&str; 17] = [
    "anime_id",
    "title",
    "image_url",
    "type",
    "episodes",
    "duration_min",
    "score",
    "scored_by",
    "rank",
    "popularity",
    "members",
    "favorites",
    "related",
    "studio",
    "genre",
    "aired_from_year",
    "source",
];

/// Columns retained from the raw user-profile export.
pub const USER_COLUMNS: [&str; 13] = [
    "username",
    "user_id",
    "user_watching",
    "user_completed",
    "user_onhold",
    "user_dropped",
    "user_plantowatch",
    "user_days_spent_watching",
    "gender",
    "location",
    "birth_date",
    "stats_mean_score",
    "stats_episodes",
];

/// Columns retained from the raw per-user watch-list export.
pub const WATCH_LIST_COLUMNS: [&str; 5] = [
    "username",
    "anime_id",
    "my_score",
    "my_status",
    "my_watched_episodes",
];

/// Output columns of the seasonal (API-sourced) anime table, in order.
pub const SEASONAL_COLUMNS: [&str; 11] = [
    "anime_id",
    "title",
    "type",
    "episodes",
    "duration_min",
    "source",
    "genre",
    "studio",
    "score",
    "favorites",
    "members",
];

/// Gender categories retained by the user cleaning step.
pub const RETAINED_GENDERS: [&str; 2] = ["Male", "Female"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedAnimeRecord {
    pub anime_id: i64,
    pub title: String,
    pub image_url: String,
    #[serde(rename = "type")]
    pub anime_type: String,
    #[serde(rename = "episodes")]
    pub episode_count: f64,
    #[serde(rename = "duration_min")]
    pub duration_minutes: f64,
    pub score: f64,
    #[serde(rename = "scored_by")]
    pub scored_by_count: f64,
    pub rank: f64,
    pub popularity: i64,
    #[serde(rename = "members")]
    pub member_count: i64,
    #[serde(rename = "favorites")]
    pub favorite_count: i64,
    #[serde(rename = "related")]
    pub related_ids: String,
    /// ", "-joined studio names, zero or more entries
    #[serde(rename = "studio")]
    pub studio_names: String,
    /// ", "-joined genre names, zero or more entries
    #[serde(rename = "genre")]
    pub genre_names: String,
    #[serde(rename = "aired_from_year")]
    pub year_aired: f64,
    #[serde(rename = "source")]
    pub source_material: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedUserRecord {
    pub username: String,
    pub user_id: i64,
    #[serde(rename = "user_watching")]
    pub watching_count: i64,
    #[serde(rename = "user_completed")]
    pub completed_count: i64,
    #[serde(rename = "user_onhold")]
    pub onhold_count: i64,
    #[serde(rename = "user_dropped")]
    pub dropped_count: i64,
    #[serde(rename = "user_plantowatch")]
    pub plan_to_watch_count: i64,
    #[serde(rename = "user_days_spent_watching")]
    pub days_spent_watching: f64,
    pub gender: String,
    pub location: String,
    pub birth_date: String,
    #[serde(rename = "stats_mean_score")]
    pub mean_score: f64,
    #[serde(rename = "stats_episodes")]
    pub episodes_watched: i64,
    /// reference year minus the year segment of `birth_date`
    #[serde(rename = "age")]
    pub derived_age: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedWatchListEntry {
    pub username: String,
    pub anime_id: i64,
    #[serde(rename = "my_score")]
    pub user_score: i32,
    #[serde(rename = "my_status")]
    pub watch_status: i32,
    #[serde(rename = "my_watched_episodes")]
    pub watched_episode_count: i64,
}

/// One row of the seasonal (API-sourced) anime table. Field order matches
/// the output CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalAnimeRecord {
    pub anime_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub anime_type: String,
    #[serde(rename = "episodes")]
    pub episode_count: i32,
    #[serde(rename = "duration_min")]
    pub duration_minutes: u32,
    #[serde(rename = "source")]
    pub source_material: String,
    #[serde(rename = "genre")]
    pub genre_names: String,
    #[serde(rename = "studio")]
    pub studio_names: String,
    pub score: f64,
    #[serde(rename = "favorites")]
    pub favorite_count: i64,
    #[serde(rename = "members")]
    pub member_count: i64,
}
