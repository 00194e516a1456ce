use crate::jikan::RetryPolicy;
use log::warn;
use std::path::PathBuf;
use std::time::Duration;

/// Paths and tunables for one pipeline run. Defaults reproduce the
/// historical behavior exactly; the environment can override the data
/// directory and bound the otherwise-unbounded detail-fetch retry.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Root of the dataset tree; raw inputs live under `original_data/`
    pub data_dir: PathBuf,
    /// Year subtracted from birth years to derive user age
    pub reference_year: i32,
    /// Year whose four seasons are fetched from the catalog API
    pub seasonal_year: i32,
    /// Retry policy for per-title detail fetches
    pub detail_retry: RetryPolicy,
    /// Minimum spacing between detail fetches
    pub pacing_interval: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            reference_year: 2020,
            seasonal_year: 2019,
            detail_retry: RetryPolicy::default(),
            pacing_interval: Duration::from_secs(4),
        }
    }
}

impl PipelineConfig {
    /// Build the default configuration with environment overrides applied:
    /// `ANIDATA_DATA_DIR` relocates the dataset tree and
    /// `ANIDATA_MAX_FETCH_ATTEMPTS` bounds the detail-fetch retry.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("ANIDATA_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(raw) = std::env::var("ANIDATA_MAX_FETCH_ATTEMPTS") {
            match raw.parse::<u32>() {
                Ok(attempts) if attempts > 0 => {
                    config.detail_retry = RetryPolicy::bounded(attempts);
                }
                _ => warn!(
                    "Ignoring invalid ANIDATA_MAX_FETCH_ATTEMPTS value '{}'",
                    raw
                ),
            }
        }

        config
    }

    pub fn raw_anime_path(&self) -> PathBuf {
        self.data_dir.join("original_data/anime_azathoth.csv")
    }

    pub fn raw_users_path(&self) -> PathBuf {
        self.data_dir.join("original_data/users_azathoth.csv")
    }

    pub fn raw_watch_lists_path(&self) -> PathBuf {
        self.data_dir
            .join("original_data/users_animelists_azathoth.csv")
    }

    pub fn cleaned_anime_path(&self) -> PathBuf {
        self.data_dir.join("animelist_cleaned.csv")
    }

    pub fn cleaned_users_path(&self) -> PathBuf {
        self.data_dir.join("userlist_cleaned.csv")
    }

    pub fn cleaned_watch_lists_path(&self) -> PathBuf {
        self.data_dir.join("user_animelists_cleaned.csv")
    }

    pub fn seasonal_output_path(&self) -> PathBuf {
        self.data_dir.join("animelist_2019.csv")
    }
}
