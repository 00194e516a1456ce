use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

use super::dto::{JikanAnimeData, JikanAnimeListResponse, JikanAnimeResponse};

/// One of the four quarterly release windows used as the unit of seasonal
/// catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Fetch order of the pipeline.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote catalog interface the fetcher works against. The production
/// implementation is [`JikanClient`]; tests substitute a stub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Full title list for one season. Errors here are fatal to the run.
    async fn season_listing(&self, year: i32, season: Season) -> AppResult<Vec<JikanAnimeData>>;

    /// Detail record for a single title. The caller retries failures.
    async fn anime_detail(&self, id: i64) -> AppResult<JikanAnimeData>;
}

pub struct JikanClient {
    client: Client,
    base_url: String,
}

impl JikanClient {
    pub fn new() -> AppResult<Self> {
        Self::with_base_url("https://api.jikan.moe/v4".to_string())
    }

    pub fn with_base_url(base_url: String) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("anidata/0.1")
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, base_url })
    }

    fn check_status(response: reqwest::Response, context: &str) -> AppResult<reqwest::Response> {
        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(format!(
                "Jikan rate limit exceeded during {}",
                context
            ))),
            StatusCode::NOT_FOUND => Err(AppError::NotFound(format!(
                "Jikan resource not found during {}",
                context
            ))),
            status if status.is_server_error() => Err(AppError::ExternalServiceError(format!(
                "Jikan unavailable ({}) during {}",
                status, context
            ))),
            status => Err(AppError::ApiError(format!(
                "Unexpected status {} from Jikan during {}",
                status, context
            ))),
        }
    }

    async fn season_page(
        &self,
        year: i32,
        season: Season,
        page: i32,
    ) -> AppResult<JikanAnimeListResponse> {
        let url = format!("{}/seasons/{}/{}", self.base_url, year, season);
        let context = format!("season listing {} {} page {}", year, season, page);
        let response = self
            .client
            .get(&url)
            .query(&[("page", page.to_string())])
            .send()
            .await?;
        let response = Self::check_status(response, &context)?;
        response
            .json::<JikanAnimeListResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))
    }
}

#[async_trait]
impl CatalogProvider for JikanClient {
    async fn season_listing(&self, year: i32, season: Season) -> AppResult<Vec<JikanAnimeData>> {
        let mut titles = Vec::new();
        let mut page = 1;
        loop {
            let response = self.season_page(year, season, page).await?;
            titles.extend(response.data);
            match response.pagination {
                Some(pagination) if pagination.has_next_page => page += 1,
                _ => break,
            }
        }
        debug!("Season listing {} {}: {} titles", year, season, titles.len());
        Ok(titles)
    }

    async fn anime_detail(&self, id: i64) -> AppResult<JikanAnimeData> {
        let url = format!("{}/anime/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response, &format!("detail fetch for id {}", id))?;
        let jikan_response = response
            .json::<JikanAnimeResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;
        Ok(jikan_response.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasons_are_ordered_spring_first() {
        let names: Vec<&str> = Season::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["spring", "summer", "fall", "winter"]);
    }

    #[test]
    fn season_display_matches_api_path_segment() {
        assert_eq!(format!("{}", Season::Fall), "fall");
    }
}
