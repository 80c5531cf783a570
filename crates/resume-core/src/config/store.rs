//! Config file persistence.
//!
//! Reads and writes the single JSON config file. A missing file loads as the
//! default config; parse errors and IO errors other than not-found propagate.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::types::ResumeConfig;
use crate::errors::ConfigError;

/// Path of the config file: `<config_dir>/resume/config.json`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?;
    Ok(base.join("resume").join("config.json"))
}

/// Load the config from the well-known path.
pub fn load_config() -> Result<ResumeConfig, ConfigError> {
    load_config_from(&config_path()?)
}

/// Save the config to the well-known path, creating the directory if needed.
pub fn save_config(config: &ResumeConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<ResumeConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ResumeConfig::default());
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

pub fn save_config_to(config: &ResumeConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Pretty-printed with a trailing newline so the file is hand-editable.
    let mut content = serde_json::to_string_pretty(config).map_err(|e| {
        ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;
    content.push('\n');
    fs::write(path, content)?;

    info!(
        event = "core.config.saved",
        path = %path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = load_config_from(&path).unwrap();
        assert_eq!(config, ResumeConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = ResumeConfig {
            ssh_host: Some("dev@vm".to_string()),
            ssh_agent_forwarding: true,
        };
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_saved_file_ends_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        save_config_to(&ResumeConfig::default(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { .. })
        ));
    }
}
