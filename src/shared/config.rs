//! Application configuration. Year bounds, loading delay, RNG seed.

use crate::domain::DomainError;
use serde::Deserialize;

/// Earliest year accepted from the numeric form fields.
pub const DEFAULT_MIN_YEAR: i32 = 1900;
/// Latest year accepted from the numeric form fields.
pub const DEFAULT_MAX_YEAR: i32 = 2100;
/// Simulated calculation delay before the result card is shown.
pub const DEFAULT_LOADING_DELAY_MS: u64 = 2000;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// Lower bound for years typed into the form. Read from CONCEPTION_MIN_YEAR.
    #[serde(default)]
    pub min_year: Option<i32>,

    /// Upper bound for years typed into the form. Read from CONCEPTION_MAX_YEAR.
    #[serde(default)]
    pub max_year: Option<i32>,

    /// Spinner duration in ms before showing a result (0 disables). Read from CONCEPTION_LOADING_DELAY_MS.
    #[serde(default)]
    pub loading_delay_ms: Option<u64>,

    /// Fixed RNG seed for reproducible estimates. Read from CONCEPTION_SEED.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Print the welcome banner on startup. Read from CONCEPTION_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,
}

impl AppConfig {
    /// Environment (`CONCEPTION_*`) plus the optional file named by `CONCEPTION_CONFIG`.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("CONCEPTION_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("CONCEPTION").try_parsing(true));
        Self::from_config(c.build()?)
    }

    pub fn from_config(c: config::Config) -> Result<Self, config::ConfigError> {
        c.try_deserialize()
    }

    /// Reject settings that would make every typed year invalid.
    pub fn validate(&self) -> Result<(), DomainError> {
        let (min, max) = self.year_range();
        if min > max {
            return Err(DomainError::Config(format!(
                "min_year ({}) is greater than max_year ({})",
                min, max
            )));
        }
        Ok(())
    }

    pub fn min_year_or_default(&self) -> i32 {
        self.min_year.unwrap_or(DEFAULT_MIN_YEAR)
    }

    pub fn max_year_or_default(&self) -> i32 {
        self.max_year.unwrap_or(DEFAULT_MAX_YEAR)
    }

    /// Inclusive `(min, max)` year bounds for the form.
    pub fn year_range(&self) -> (i32, i32) {
        (self.min_year_or_default(), self.max_year_or_default())
    }

    pub fn loading_delay_ms_or_default(&self) -> u64 {
        self.loading_delay_ms.unwrap_or(DEFAULT_LOADING_DELAY_MS)
    }

    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.year_range(), (1900, 2100));
        assert_eq!(cfg.loading_delay_ms_or_default(), 2000);
        assert!(cfg.show_banner_or_default());
        assert!(cfg.seed.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_overrides_deserialize() {
        let c = config::Config::builder()
            .set_override("min_year", 1950)
            .unwrap()
            .set_override("seed", 7)
            .unwrap()
            .set_override("loading_delay_ms", 0)
            .unwrap()
            .set_override("show_banner", false)
            .unwrap()
            .build()
            .unwrap();
        let cfg = AppConfig::from_config(c).unwrap();
        assert_eq!(cfg.year_range(), (1950, 2100));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.loading_delay_ms_or_default(), 0);
        assert!(!cfg.show_banner_or_default());
    }

    #[test]
    fn test_inverted_year_range_rejected() {
        let cfg = AppConfig {
            min_year: Some(2100),
            max_year: Some(1900),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(DomainError::Config(_))));
    }
}
