use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnimeResponse {
    pub data: JikanAnimeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnimeListResponse {
    pub data: Vec<JikanAnimeData>,
    pub pagination: Option<JikanPagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanPagination {
    pub last_visible_page: i32,
    pub has_next_page: bool,
}

/// Per-title payload; only the fields the pipeline extracts are modeled,
/// everything else in the response is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnimeData {
    pub mal_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub source: Option<String>,
    pub episodes: Option<i32>,
    pub duration: Option<String>,
    pub score: Option<f64>,
    pub members: Option<i64>,
    pub favorites: Option<i64>,
    #[serde(default)]
    pub studios: Vec<JikanEntity>,
    #[serde(default)]
    pub genres: Vec<JikanEntity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanEntity {
    pub mal_id: i64,
    pub name: String,
}
