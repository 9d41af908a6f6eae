#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

pub const DEFAULT_COURSES_PATH: &str = "data/courses.csv";
pub const DEFAULT_SCORES_PATH: &str = "data/scores.csv";

/// Effective settings after merging the TOML file and command line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub courses_path: String,
    pub scores_path: String,
    pub seed: Option<u64>,
    pub output_format: OutputFormat,
    pub output_path: Option<String>,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            courses_path: DEFAULT_COURSES_PATH.to_string(),
            scores_path: DEFAULT_SCORES_PATH.to_string(),
            seed: None,
            output_format: OutputFormat::default(),
            output_path: None,
            json_logs: false,
        }
    }
}

impl From<&TomlConfig> for Settings {
    fn from(config: &TomlConfig) -> Self {
        Self {
            courses_path: config.store.courses_path.clone(),
            scores_path: config.store.scores_path.clone(),
            seed: config.seed(),
            output_format: config.output_format().unwrap_or_default(),
            output_path: config.output_path().map(str::to_string),
            json_logs: config.json_logs(),
        }
    }
}

impl ConfigProvider for Settings {
    fn courses_path(&self) -> &str {
        &self.courses_path
    }

    fn scores_path(&self) -> &str {
        &self.scores_path
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("courses_path", &self.courses_path)?;
        validation::validate_path("scores_path", &self.scores_path)?;
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_toml() {
        let config = TomlConfig::from_toml_str(
            "[store]\ncourses_path = \"c.csv\"\nscores_path = \"s.csv\"\n[ranking]\nseed = 9\n",
        )
        .unwrap();
        let settings = Settings::from(&config);

        assert_eq!(settings.courses_path(), "c.csv");
        assert_eq!(settings.scores_path(), "s.csv");
        assert_eq!(settings.seed(), Some(9));
        assert_eq!(settings.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }
}
