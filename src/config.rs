// ABOUTME: Configuration consumed by the core: rate-limit ceilings, log filter,
// ABOUTME: and artifact directories. Loaded from TOML with sensible defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_NOTES_DIR: &str = "outputs/notes";
const DEFAULT_REPORTS_DIR: &str = "outputs/reports";
const DEFAULT_SEARCH_TOOL: &str = "tavily_search";
const DEFAULT_SEARCH_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// `tracing` env-filter directive, e.g. `"info"` or `"quill=debug"`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_notes_dir")]
    pub notes_dir: PathBuf,

    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,

    /// Maximum calls per invocation, by tool name. Absent tools are unlimited.
    #[serde(default = "default_rate_limits")]
    pub rate_limits: HashMap<String, u32>,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
fn default_notes_dir() -> PathBuf {
    PathBuf::from(DEFAULT_NOTES_DIR)
}
fn default_reports_dir() -> PathBuf {
    PathBuf::from(DEFAULT_REPORTS_DIR)
}
fn default_rate_limits() -> HashMap<String, u32> {
    HashMap::from([(DEFAULT_SEARCH_TOOL.to_string(), DEFAULT_SEARCH_LIMIT)])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            notes_dir: default_notes_dir(),
            reports_dir: default_reports_dir(),
            rate_limits: default_rate_limits(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Place notes and reports under `root` (`<root>/notes`, `<root>/reports`).
    pub fn with_output_root(mut self, root: impl AsRef<Path>) -> Self {
        self.notes_dir = root.as_ref().join("notes");
        self.reports_dir = root.as_ref().join("reports");
        self
    }

    /// Set or replace one tool's ceiling.
    pub fn with_rate_limit(mut self, tool_name: impl Into<String>, limit: u32) -> Self {
        self.rate_limits.insert(tool_name.into(), limit);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((tool, _)) = self.rate_limits.iter().find(|(_, limit)| **limit == 0) {
            return Err(ConfigError::Invalid(format!(
                "rate limit for '{}' must be positive",
                tool
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty".into()));
        }
        crate::telemetry::parse_filter(&self.log_filter)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.notes_dir, PathBuf::from("outputs/notes"));
        assert_eq!(config.reports_dir, PathBuf::from("outputs/reports"));
        assert_eq!(config.rate_limits.get("tavily_search"), Some(&10));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full_document() {
        let config = Config::from_toml_str(
            r#"
            log_filter = "quill=debug"
            notes_dir = "/tmp/n"
            reports_dir = "/tmp/r"

            [rate_limits]
            tavily_search = 3
            save_note = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.log_filter, "quill=debug");
        assert_eq!(config.notes_dir, PathBuf::from("/tmp/n"));
        assert_eq!(config.rate_limits.len(), 2);
        assert_eq!(config.rate_limits["save_note"], 20);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = Config::from_toml_str("[rate_limits]\nsearch = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("search"));
    }

    #[test]
    fn test_negative_limit_is_parse_error() {
        let err = Config::from_toml_str("[rate_limits]\nsearch = -1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bad_log_filter_rejected() {
        let err = Config::from_toml_str("log_filter = \"quill=loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml_str("model = \"x\"\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_output_root("/data")
            .with_rate_limit("fetch", 2);
        assert_eq!(config.notes_dir, PathBuf::from("/data/notes"));
        assert_eq!(config.reports_dir, PathBuf::from("/data/reports"));
        assert_eq!(config.rate_limits["fetch"], 2);
    }
}
