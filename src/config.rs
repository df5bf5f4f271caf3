use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Default log filter when neither the config file nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// File name of the CLI configuration inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CliConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    /// Write logs to this file instead of stderr
    pub file: Option<PathBuf>,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
            json: false,
        }
    }
}

impl CliConfig {
    /// Read a configuration file. Missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load from `explicit` if given, otherwise from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Returns the path to the data directory for questionpy.
/// Uses $XDG_DATA_HOME/questionpy if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/questionpy,
/// or ./questionpy if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default configuration file.
pub fn config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("questionpy")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn cli_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<CliConfig>(json!({
            "output": {
                "format": "json"
            }
        }))
        .unwrap();

        assert_eq!(result.output.format, OutputFormat::Json);
        assert_eq!(result.log, LogConfig::default());
    }

    #[test]
    fn cli_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<CliConfig>(json!({
            "output": { "format": "plain" },
            "log": {
                "level": "questionpy_common=debug",
                "file": "/tmp/qpy.log",
                "json": true
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            CliConfig {
                output: OutputConfig {
                    format: OutputFormat::Plain
                },
                log: LogConfig {
                    level: "questionpy_common=debug".to_string(),
                    file: Some(PathBuf::from("/tmp/qpy.log")),
                    json: true,
                },
            }
        );
    }

    #[test]
    fn cli_config_rejects_unknown_output_format() {
        let result = serde_json::from_value::<CliConfig>(json!({
            "output": { "format": "yaml" }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn from_file_reads_json_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"log": {{"level": "debug"}}}}"#).unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();

        assert_eq!(config.log.level, "debug");
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn load_fails_for_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        assert!(CliConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/questionpy"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/questionpy"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./questionpy"));
    }
}
