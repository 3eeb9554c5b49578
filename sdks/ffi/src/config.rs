//! Bridge configuration.
//!
//! Options are read from `config.json` in the bridge home directory
//! (`$SYMBRIDGE_HOME`, or the current directory). A missing file means
//! defaults; a broken one is reported and ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use symbridge_shared::{BridgeError, BridgeResult};
use tracing::warn;

const CONFIG_FILE_JSON: &str = "config.json";

pub const HOME_ENV: &str = "SYMBRIDGE_HOME";
pub const LOG_ENV: &str = "SYMBRIDGE_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeOptions {
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_ansi: bool,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_ansi: false,
        }
    }
}

impl BridgeOptions {
    /// Options from the home directory, with `SYMBRIDGE_LOG` overriding the
    /// configured level.
    pub fn from_env() -> Self {
        let mut options = load_config(&home_dir());
        if let Ok(level) = std::env::var(LOG_ENV)
            && !level.trim().is_empty()
        {
            options.log_level = level;
        }
        options
    }
}

pub fn home_dir() -> PathBuf {
    std::env::var_os(HOME_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load options from `<home_dir>/config.json`.
pub fn load_config(home_dir: &Path) -> BridgeOptions {
    let config_path = home_dir.join(CONFIG_FILE_JSON);
    if !config_path.exists() {
        return BridgeOptions::default();
    }

    match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}", e);
            BridgeOptions::default()
        }
    }
}

fn read_config(config_path: &Path) -> BridgeResult<BridgeOptions> {
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        BridgeError::Config(format!("Failed to read config file {}: {}", config_path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        BridgeError::Config(format!("Failed to parse config file {}: {}", config_path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.json"),
            r#"{"log_level": "symbridge_ffi=trace", "log_ansi": true}"#,
        )
        .unwrap();

        let options = load_config(temp_dir.path());
        assert_eq!(options.log_level, "symbridge_ffi=trace");
        assert!(options.log_ansi);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.json"), r#"{"log_ansi": true}"#).unwrap();

        let options = load_config(temp_dir.path());
        assert_eq!(options.log_level, "info");
        assert!(options.log_ansi);
    }

    #[test]
    fn test_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(load_config(temp_dir.path()), BridgeOptions::default());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"log_ansi": "yes"}"#).unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, BridgeError::Config(ref msg) if msg.contains("config.json")));
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.json"), "{ not json").unwrap();
        assert_eq!(load_config(temp_dir.path()), BridgeOptions::default());
    }
}
