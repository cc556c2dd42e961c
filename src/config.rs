//! Configuration for bookshelf.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (BOOKSHELF_API_BASE, BOOKSHELF_COVERS_BASE, BOOKSHELF_CATEGORY)
//! 2. Config file (.bookshelf/config.yaml in the current directory or a parent,
//!    else <user config dir>/bookshelf/config.yaml)
//! 3. Defaults (Open Library, category "science")

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::covers::DEFAULT_COVERS_BASE;
use crate::importer::{DEFAULT_API_BASE, DEFAULT_CATEGORY};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const ENV_API_BASE: &str = "BOOKSHELF_API_BASE";
pub const ENV_COVERS_BASE: &str = "BOOKSHELF_COVERS_BASE";
pub const ENV_CATEGORY: &str = "BOOKSHELF_CATEGORY";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Subjects API host
    pub base_url: Option<String>,
    /// Covers service host
    pub covers_base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Category imported at session start
    pub default_category: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base: String,
    pub covers_base: String,
    pub default_category: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            covers_base: DEFAULT_COVERS_BASE.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Layer a parsed config file over the defaults
    fn apply_file(mut self, file: ConfigFile, path: PathBuf) -> Self {
        if let Some(base) = file.api.base_url {
            self.api_base = base;
        }
        if let Some(covers) = file.api.covers_base_url {
            self.covers_base = covers;
        }
        if let Some(category) = file.catalog.default_category {
            self.default_category = category;
        }
        self.config_file = Some(path);
        self
    }

    /// Layer environment overrides; `lookup` stands in for `std::env::var`
    fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base) = non_blank(ENV_API_BASE) {
            self.api_base = base;
        }
        if let Some(covers) = non_blank(ENV_COVERS_BASE) {
            self.covers_base = covers;
        }
        if let Some(category) = non_blank(ENV_CATEGORY) {
            self.default_category = category;
        }
        self
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".bookshelf").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Project config first, then the per-user one
fn find_config_file() -> Option<PathBuf> {
    let project = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_file_from(&cwd));

    project.or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("bookshelf").join("config.yaml"))
            .filter(|path| path.exists())
    })
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let mut config = ResolvedConfig::default();

    if let Some(path) = find_config_file() {
        let file = load_config_file(&path)?;
        config = config.apply_file(file, path);
    }

    Ok(config.apply_env(|key| std::env::var(key).ok()))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let config_dir = dir.join(".bookshelf");
        std::fs::create_dir_all(&config_dir).unwrap();

        let config_path = config_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_defaults() {
        let config = ResolvedConfig::default();
        assert_eq!(config.api_base, "https://openlibrary.org");
        assert_eq!(config.covers_base, "https://covers.openlibrary.org");
        assert_eq!(config.default_category, "science");
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
version: "1"
api:
  base_url: http://localhost:9000
catalog:
  default_category: fantasy
"#,
        );

        let file = load_config_file(&path).unwrap();
        assert_eq!(file.version, "1");
        assert_eq!(file.api.base_url.as_deref(), Some("http://localhost:9000"));
        assert!(file.api.covers_base_url.is_none());

        let config = ResolvedConfig::default().apply_file(file, path.clone());
        assert_eq!(config.api_base, "http://localhost:9000");
        assert_eq!(config.covers_base, DEFAULT_COVERS_BASE);
        assert_eq!(config.default_category, "fantasy");
        assert_eq!(config.config_file, Some(path));
    }

    #[test]
    fn test_config_file_found_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "version: \"1\"");

        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_file_from(&nested), Some(path));
    }

    #[test]
    fn test_env_overrides_file() {
        let env: HashMap<&str, &str> = [
            (ENV_CATEGORY, "romance"),
            (ENV_API_BASE, "  "),
        ]
        .into_iter()
        .collect();

        let config = ResolvedConfig {
            default_category: "fantasy".to_string(),
            ..Default::default()
        }
        .apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.default_category, "romance");
        // Blank values are ignored
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_malformed_config_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "api: [not, a, map]");

        assert!(load_config_file(&path).is_err());
    }
}
