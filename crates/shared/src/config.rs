//! Application configuration management.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Generator run configuration.
    #[serde(default)]
    pub generator: GeneratorRunConfig,
}

/// Configuration for one generator run.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorRunConfig {
    /// First day of the generated range (inclusive).
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    /// Last day of the generated range (inclusive).
    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,
    /// Seed for the random streams. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Output path for the JSON dataset. `None` writes to stdout.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for GeneratorRunConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            end_date: default_end_date(),
            seed: None,
            output: None,
        }
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).expect("static date is valid")
}

fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 10).expect("static date is valid")
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SPENDCAST").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_matches_dashboard_window() {
        let run = GeneratorRunConfig::default();
        assert_eq!(run.start_date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(run.end_date, NaiveDate::from_ymd_opt(2024, 9, 10).unwrap());
        assert!(run.seed.is_none());
        assert!(run.output.is_none());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [generator]
                start_date = "2023-05-01"
                end_date = "2023-05-31"
                seed = 42
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let app: AppConfig = config.try_deserialize().unwrap();
        assert_eq!(
            app.generator.start_date,
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
        );
        assert_eq!(app.generator.seed, Some(42));
    }
}
