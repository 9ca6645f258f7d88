use crate::Result;
use crate::pagination::PageSize;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Items per page. Kept signed so a bad value reaches validation instead of failing to parse.
    #[serde(default = "default_page_size")]
    pub page_size: i64,

    #[serde(default)]
    pub launcher: LauncherConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            launcher: LauncherConfig::default(),
            catalog: CatalogConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

fn default_page_size() -> i64 {
    6
}

impl Config {
    /// Load config from file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Validated page size.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPageSize`] when the configured value is below 1.
    pub fn page_size(&self) -> Result<PageSize> {
        PageSize::new(self.page_size)
    }
}

/// How activated commands are run
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherConfig {
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Terminal emulator for `Terminal=true` entries, invoked as `<terminal> -e <exec>`
    #[serde(default)]
    pub terminal: Option<String>,
}

fn default_shell() -> String {
    "sh".to_string()
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            terminal: None,
        }
    }
}

/// Where applications are discovered
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Scanned before the XDG application directories
    #[serde(default)]
    pub extra_dirs: Vec<PathBuf>,

    #[serde(default)]
    pub show_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorConfig {
    #[serde(default = "default_close_on_launch")]
    pub close_on_launch: bool,
}

fn default_close_on_launch() -> bool {
    true
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            close_on_launch: default_close_on_launch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.launcher.shell, "sh");
        assert!(config.launcher.terminal.is_none());
        assert!(config.catalog.extra_dirs.is_empty());
        assert!(!config.catalog.show_hidden);
        assert!(config.behavior.close_on_launch);
    }

    #[test]
    fn test_config_load_nonexistent_returns_default() {
        let path = std::path::Path::new("/nonexistent/path/config.json");
        let config = Config::load(path).unwrap();
        assert_eq!(config.page_size, 6);
    }

    #[test]
    fn test_config_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"pageSize": 9, "launcher": {{"terminal": "foot"}}}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.page_size, 9);
        assert_eq!(config.launcher.terminal.as_deref(), Some("foot"));
        assert_eq!(config.launcher.shell, "sh");
    }

    #[test]
    fn test_config_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{invalid json}}").unwrap();

        let result = Config::load(file.path());
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_page_size_validation() {
        let config: Config = serde_json::from_str(r#"{"pageSize": 0}"#).unwrap();
        assert!(matches!(config.page_size(), Err(Error::InvalidPageSize(0))));

        let config: Config = serde_json::from_str(r#"{"pageSize": -4}"#).unwrap();
        assert!(matches!(config.page_size(), Err(Error::InvalidPageSize(-4))));

        let config: Config = serde_json::from_str(r#"{"pageSize": 3}"#).unwrap();
        assert_eq!(config.page_size().unwrap().get(), 3);
    }

    #[test]
    fn test_config_empty_json() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.page_size, 6);
        assert!(config.behavior.close_on_launch);
    }

    #[test]
    fn test_behavior_deserialize() {
        let json = r#"{"behavior": {"closeOnLaunch": false}, "catalog": {"showHidden": true}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(!config.behavior.close_on_launch);
        assert!(config.catalog.show_hidden);
    }
}
