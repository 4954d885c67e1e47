use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{EducationConfig, ExperienceConfig, SkillConfig, TitleEntry};
use crate::core::titles::DEFAULT_RESOLVE_THRESHOLD;
use crate::error::MatchError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Thresholds and weights for the three matchers
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub education: EducationConfig,
    #[serde(default)]
    pub skills: SkillConfig,
    #[serde(default)]
    pub experience: ExperienceConfig,
}

/// Reference titles used by the title resolver
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub titles: Vec<TitleEntry>,
    #[serde(default = "default_resolve_threshold")]
    pub resolve_threshold: f64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            titles: Vec::new(),
            resolve_threshold: default_resolve_threshold(),
        }
    }
}

fn default_resolve_threshold() -> f64 { DEFAULT_RESOLVE_THRESHOLD }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RESUME_MATCH)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RESUME_MATCH__MATCHING__SKILLS__THRESHOLD -> matching.skills.threshold
            .add_source(
                Environment::with_prefix("RESUME_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RESUME_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Reject thresholds outside [0, 100] and negative weights
    pub fn validate(&self) -> Result<(), MatchError> {
        let thresholds = [
            ("matching.education.degree_threshold", self.matching.education.degree_threshold),
            ("matching.education.major_threshold", self.matching.education.major_threshold),
            ("matching.skills.threshold", self.matching.skills.threshold),
            ("catalog.resolve_threshold", self.catalog.resolve_threshold),
        ];
        for (name, value) in thresholds {
            if !(0.0..=100.0).contains(&value) {
                return Err(MatchError::InvalidConfig(format!(
                    "{} must be within [0, 100], got {}",
                    name, value
                )));
            }
        }

        let title = &self.matching.experience.title_weights;
        let factor = &self.matching.experience.factor_weights;
        let weights = [
            ("title_weights.token_sort", title.token_sort),
            ("title_weights.token_set", title.token_set),
            ("title_weights.partial", title.partial),
            ("factor_weights.title", factor.title),
            ("factor_weights.years", factor.years),
            ("factor_weights.skills", factor.skills),
            ("factor_weights.level", factor.level),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "matching.experience.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let settings = Settings::default();
        assert_eq!(settings.matching.education.degree_threshold, 90.0);
        assert_eq!(settings.matching.education.major_threshold, 80.0);
        assert_eq!(settings.matching.skills.threshold, 85.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_default_weights() {
        let experience = ExperienceConfig::default();
        assert_eq!(experience.title_weights.token_sort, 0.7);
        assert_eq!(experience.title_weights.token_set, 0.8);
        assert_eq!(experience.title_weights.partial, 0.9);
        assert_eq!(experience.factor_weights.title, 0.4);
        assert_eq!(experience.factor_weights.years, 0.3);
        assert_eq!(experience.factor_weights.skills, 0.2);
        assert_eq!(experience.factor_weights.level, 0.1);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [matching.skills]
            threshold = 70

            [matching.experience.factor_weights]
            title = 0.5

            [[catalog.titles]]
            title = "Data Engineer"
            aliases = ["ETL Developer"]
            field = "data"
            "#,
        )
        .unwrap();

        assert_eq!(settings.matching.skills.threshold, 70.0);
        assert_eq!(settings.matching.education.degree_threshold, 90.0);
        assert_eq!(settings.matching.experience.factor_weights.title, 0.5);
        assert_eq!(settings.matching.experience.factor_weights.years, 0.3);
        assert_eq!(settings.catalog.titles.len(), 1);
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let mut settings = Settings::default();
        settings.matching.skills.threshold = 120.0;
        assert!(matches!(settings.validate(), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut settings = Settings::default();
        settings.matching.experience.factor_weights.level = -0.1;
        assert!(settings.validate().is_err());
    }
}
