//! The seasonal catalog fetch loop: per season, list titles, then fetch
//! each title's detail record under the configured retry policy, paced by
//! the fixed-interval gate.

use crate::config::PipelineConfig;
use crate::dataset::records::SeasonalAnimeRecord;
use crate::jikan::{mapper, CatalogProvider, Season};
use crate::shared::errors::AppResult;
use crate::shared::RateLimiter;
use log::info;

/// Fetch all four seasons of the configured year. Season-listing failures
/// abort the run; per-title detail failures are governed by the retry
/// policy. Returns one candidate per title in fetch order; `None` marks a
/// title whose record was missing a required field.
pub async fn fetch_seasonal(
    config: &PipelineConfig,
    provider: &dyn CatalogProvider,
) -> AppResult<Vec<Option<SeasonalAnimeRecord>>> {
    let pacing = RateLimiter::with_interval(config.pacing_interval);
    let mut candidates = Vec::new();

    for season in Season::ALL {
        let listing = provider
            .season_listing(config.seasonal_year, season)
            .await?;
        info!(
            "Retrieving all {} {} anime ({} titles)",
            config.seasonal_year,
            season,
            listing.len()
        );

        for entry in listing {
            let id = entry.mal_id;
            pacing.wait().await;
            let detail = config
                .detail_retry
                .run(&format!("detail fetch for '{}'", entry.title), || {
                    provider.anime_detail(id)
                })
                .await?;
            candidates.push(mapper::to_seasonal_record(&entry, &detail));
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jikan::client::MockCatalogProvider;
    use crate::jikan::dto::{JikanAnimeData, JikanEntity};
    use crate::jikan::RetryPolicy;
    use crate::shared::errors::AppError;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn anime(mal_id: i64, studio: &str) -> JikanAnimeData {
        JikanAnimeData {
            mal_id,
            title: format!("Title {}", mal_id),
            anime_type: Some("TV".to_string()),
            source: Some("Manga".to_string()),
            episodes: Some(12),
            duration: Some("24 min per ep".to_string()),
            score: Some(7.0),
            members: Some(1_000),
            favorites: Some(50),
            studios: vec![JikanEntity {
                mal_id: 1,
                name: studio.to_string(),
            }],
            genres: vec![],
        }
    }

    fn test_config() -> PipelineConfig {
        PipelineConfig::default()
    }

    #[tokio::test(start_paused = true)]
    async fn fetches_every_season_and_title() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_season_listing().returning(|_, season| {
            Ok(match season {
                Season::Spring => vec![anime(1, "Bones"), anime(2, "MAPPA")],
                Season::Summer => vec![anime(3, "Madhouse")],
                _ => vec![],
            })
        });
        provider
            .expect_anime_detail()
            .times(3)
            .returning(|id| Ok(anime(id, "Bones")));

        let candidates = fetch_seasonal(&test_config(), &provider).await.unwrap();
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.is_some()));
    }

    #[tokio::test(start_paused = true)]
    async fn detail_failures_are_retried_until_success() {
        let failures = Arc::new(AtomicU32::new(0));
        let counter = failures.clone();

        let mut provider = MockCatalogProvider::new();
        provider.expect_season_listing().returning(|_, season| {
            Ok(match season {
                Season::Winter => vec![anime(7, "Bones")],
                _ => vec![],
            })
        });
        provider.expect_anime_detail().returning(move |id| {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(AppError::ExternalServiceError("transient".to_string()))
            } else {
                Ok(anime(id, "Bones"))
            }
        });

        let candidates = fetch_seasonal(&test_config(), &provider).await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(failures.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn bounded_retry_escalates_the_detail_error() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_season_listing().returning(|_, season| {
            Ok(match season {
                Season::Spring => vec![anime(9, "Bones")],
                _ => vec![],
            })
        });
        provider
            .expect_anime_detail()
            .times(2)
            .returning(|_| Err(AppError::NotFound("gone".to_string())));

        let mut config = test_config();
        config.detail_retry = RetryPolicy::bounded(2);
        let result = fetch_seasonal(&config, &provider).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn season_listing_failure_is_fatal() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_season_listing()
            .times(1)
            .returning(|_, _| Err(AppError::ExternalServiceError("down".to_string())));
        provider.expect_anime_detail().never();

        let result = fetch_seasonal(&test_config(), &provider).await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn titles_missing_scalars_become_none_candidates() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_season_listing().returning(|_, season| {
            Ok(match season {
                Season::Spring => {
                    let mut incomplete = anime(4, "Bones");
                    incomplete.score = None;
                    vec![incomplete, anime(5, "MAPPA")]
                }
                _ => vec![],
            })
        });
        provider
            .expect_anime_detail()
            .returning(|id| Ok(anime(id, "Bones")));

        let candidates = fetch_seasonal(&test_config(), &provider).await.unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].is_none());
        assert!(candidates[1].is_some());
    }
}
