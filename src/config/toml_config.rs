use crate::core::report::OutputFormat;
use crate::utils::error::{RankingError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: StoreConfig,
    pub ranking: Option<RankingConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub courses_path: String,
    pub scores_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| RankingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn seed(&self) -> Option<u64> {
        self.ranking.as_ref().and_then(|r| r.seed)
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("store.courses_path", &self.store.courses_path)?;
        crate::utils::validation::validate_path("store.scores_path", &self.store.scores_path)?;
        if let Some(path) = self.output_path() {
            crate::utils::validation::validate_path("output.path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[store]
courses_path = "data/courses.csv"
scores_path = "data/scores.csv"

[ranking]
seed = 42

[output]
format = "csv"
path = "out/ranking.csv"

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.store.courses_path, "data/courses.csv");
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.output_format(), Some(OutputFormat::Csv));
        assert_eq!(config.output_path(), Some("out/ranking.csv"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optional_sections_default() {
        let toml_content = r#"
[store]
courses_path = "courses.csv"
scores_path = "scores.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.seed(), None);
        assert_eq!(config.output_format(), None);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GOLF_RANKING_TEST_DATA_DIR", "/srv/golf");

        let toml_content = r#"
[store]
courses_path = "${GOLF_RANKING_TEST_DATA_DIR}/courses.csv"
scores_path = "${GOLF_RANKING_TEST_UNSET_VAR}/scores.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.store.courses_path, "/srv/golf/courses.csv");
        assert_eq!(config.store.scores_path, "${GOLF_RANKING_TEST_UNSET_VAR}/scores.csv");

        std::env::remove_var("GOLF_RANKING_TEST_DATA_DIR");
    }

    #[test]
    fn test_invalid_values() {
        let toml_content = r#"
[store]
courses_path = ""
scores_path = "scores.csv"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let bad_format = r#"
[store]
courses_path = "courses.csv"
scores_path = "scores.csv"

[output]
format = "xml"
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(bad_format),
            Err(RankingError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[store]\ncourses_path = \"c.csv\"\nscores_path = \"s.csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.store.scores_path, "s.csv");
    }
}
