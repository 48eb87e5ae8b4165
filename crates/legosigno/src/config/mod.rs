use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{LegosignoError, Result};

/// Environment variable selecting the storage directory
pub const STORAGE_DIR_ENV: &str = "LEGOSIGNO_CONF";

/// Optional tunables file inside the storage directory
pub const CONFIG_FILENAME: &str = "config.toml";

/// Main configuration structure for Legosigno
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Storage directory and retention limits
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the store file and the visited folders log.
    /// Never read from the tunables file, which lives inside it.
    #[serde(skip, default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Visited folders kept after every ranking pass
    #[serde(default = "default_max_visited_folders")]
    pub max_visited_folders: usize,
    /// Top visited folders exposed for listing and index resolution
    #[serde(default = "default_listed_visits")]
    pub listed_visits: usize,
    /// Log size in bytes that forces a compaction from the prompt hook
    #[serde(default = "default_log_threshold_bytes")]
    pub log_threshold_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            max_visited_folders: default_max_visited_folders(),
            listed_visits: default_listed_visits(),
            log_threshold_bytes: default_log_threshold_bytes(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".legosigno"))
        .unwrap_or_else(|| PathBuf::from(".legosigno"))
}

fn default_max_visited_folders() -> usize {
    50
}

fn default_listed_visits() -> usize {
    10
}

fn default_log_threshold_bytes() -> u64 {
    10 * 1024 * 1024
}

impl Config {
    /// Default tunables rooted at the given storage directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageConfig {
                data_dir: data_dir.into(),
                ..Default::default()
            },
        }
    }

    /// Resolve the storage directory and read the optional tunables file.
    ///
    /// Precedence for the directory: explicit override, then
    /// `LEGOSIGNO_CONF`, then `~/.legosigno`.
    pub fn load(data_dir_override: Option<PathBuf>) -> Result<Self> {
        let env_dir = std::env::var(STORAGE_DIR_ENV).ok();
        let data_dir = resolve_data_dir(data_dir_override, env_dir);
        Self::load_from_dir(data_dir)
    }

    /// Build the configuration for a known storage directory
    pub fn load_from_dir(data_dir: PathBuf) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILENAME);

        let mut config = if path.exists() {
            tracing::info!("Loading config from: {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|e| {
                LegosignoError::Config(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            toml::from_str::<Config>(&content)
                .map_err(|e| LegosignoError::Config(format!("Failed to parse config: {e}")))?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        config.storage.data_dir = data_dir;
        Ok(config)
    }

    pub fn data_dir(&self) -> &Path {
        &self.storage.data_dir
    }
}

/// Pick the storage directory from an explicit override or the environment
pub fn resolve_data_dir(data_dir_override: Option<PathBuf>, env_dir: Option<String>) -> PathBuf {
    data_dir_override
        .or_else(|| env_dir.filter(|d| !d.is_empty()).map(PathBuf::from))
        .unwrap_or_else(default_data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.storage.max_visited_folders, 50);
        assert_eq!(config.storage.listed_visits, 10);
        assert_eq!(config.storage.log_threshold_bytes, 10 * 1024 * 1024);
        assert!(config.storage.data_dir.ends_with(".legosigno"));
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
[storage]
max_visited_folders = 20
listed_visits = 5
log_threshold_bytes = 4096
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to parse TOML");

        assert_eq!(config.storage.max_visited_folders, 20);
        assert_eq!(config.storage.listed_visits, 5);
        assert_eq!(config.storage.log_threshold_bytes, 4096);
    }

    #[test]
    fn test_toml_partial_deserialization() {
        let toml_str = r#"
[storage]
listed_visits = 3
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to parse partial TOML");

        assert_eq!(config.storage.listed_visits, 3);
        assert_eq!(config.storage.max_visited_folders, 50);
        assert_eq!(config.storage.log_threshold_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_data_dir_is_not_read_from_toml() {
        let toml_str = r#"
[storage]
data_dir = "/somewhere/else"
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to parse TOML");
        assert_ne!(config.storage.data_dir, PathBuf::from("/somewhere/else"));
    }

    #[test]
    fn test_resolve_data_dir_precedence() {
        let dir = resolve_data_dir(
            Some(PathBuf::from("/override")),
            Some("/from/env".to_string()),
        );
        assert_eq!(dir, PathBuf::from("/override"));

        let dir = resolve_data_dir(None, Some("/from/env".to_string()));
        assert_eq!(dir, PathBuf::from("/from/env"));

        let dir = resolve_data_dir(None, Some(String::new()));
        assert!(dir.ends_with(".legosigno"));

        let dir = resolve_data_dir(None, None);
        assert!(dir.ends_with(".legosigno"));
    }

    #[test]
    fn test_load_from_dir_reads_tunables_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[storage]\nmax_visited_folders = 7\n",
        )
        .unwrap();

        let config = Config::load_from_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(config.storage.max_visited_folders, 7);
        assert_eq!(config.data_dir(), dir.path());
    }

    #[test]
    fn test_load_from_dir_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "[storage\n").unwrap();

        let err = Config::load_from_dir(dir.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, LegosignoError::Config(_)));
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("not-created-yet");

        let config = Config::load_from_dir(data_dir.clone()).unwrap();
        assert_eq!(config.data_dir(), data_dir.as_path());
        assert_eq!(config.storage.listed_visits, 10);
    }
}
