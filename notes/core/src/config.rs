//! Client Configuration
//!
//! The only setting is the analysis service's base URL.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. CLI arguments (applied by the caller through [`ConfigOverrides`])
//! 2. `NOTES_API_BASE` environment variable
//! 3. TOML configuration file
//! 4. Default value (`http://127.0.0.1:8000`)
//!
//! # XDG Base Directory Compliance
//!
//! The configuration file lives at `$XDG_CONFIG_HOME/notes/client.toml`
//! (typically `~/.config/notes/client.toml`).
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "https://notes.example.com"
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding the base URL
pub const API_BASE_ENV: &str = "NOTES_API_BASE";

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// API section of the TOML configuration
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiToml {
    /// Base URL of the analysis service
    pub base_url: Option<String>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClientToml {
    /// API configuration section
    pub api: ApiToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the analysis service
    pub base_url: String,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of the base URL
    source: ConfigSource,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl ClientConfig {
    /// Where the base URL came from
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Apply CLI overrides, then re-validate
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the overridden URL is not
    /// an absolute http(s) URL.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(ref url) = overrides.base_url {
            self.base_url.clone_from(url);
            self.source = ConfigSource::Cli;
        }
        validate_base_url(&self.base_url)
    }
}

/// Values supplied on the command line
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Base URL from `--api-base`
    pub base_url: Option<String>,
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/notes/client.toml` or
/// `~/.config/notes/client.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("notes").join("client.toml"))
}

/// Load configuration from the default file and the environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if
/// the resulting base URL is invalid. A missing config file is not an error.
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path and the environment
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the
/// resulting base URL is invalid.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<ClientConfig, ConfigError> {
    let env_url = std::env::var(API_BASE_ENV).ok();
    load_config_with_env(path, env_url)
}

fn load_config_with_env(
    path: Option<PathBuf>,
    env_url: Option<String>,
) -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: ClientToml = toml::from_str(&toml_content)?;
            if let Some(url) = toml_config.api.base_url {
                config.base_url = url;
                config.source = ConfigSource::File;
            }
            config.config_file_path = Some(config_path.clone());

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
        config.base_url = url;
        config.source = ConfigSource::Env;
    }

    validate_base_url(&config.base_url)?;
    tracing::debug!(base_url = %config.base_url, source = %config.source, "Resolved API base");
    Ok(config)
}

/// Check that `url` is an absolute http(s) URL
fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| ConfigError::ValidationError(format!("base_url {url:?}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::ValidationError(format!(
            "base_url {url:?}: unsupported scheme {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_config_with_env(None, None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = PathBuf::from("/nonexistent/notes/client.toml");
        let config = load_config_with_env(Some(path), None).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_file_sets_base_url() {
        let file = write_config("[api]\nbase_url = \"https://notes.example.com\"\n");
        let config = load_config_with_env(Some(file.path().to_path_buf()), None).unwrap();
        assert_eq!(config.base_url, "https://notes.example.com");
        assert_eq!(config.source(), ConfigSource::File);
        assert_eq!(config.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_empty_file_keeps_default() {
        let file = write_config("");
        let config = load_config_with_env(Some(file.path().to_path_buf()), None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("[api]\nbase_url = \"https://file.example.com\"\n");
        let config = load_config_with_env(
            Some(file.path().to_path_buf()),
            Some("http://10.0.0.2:9000".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = load_config_with_env(None, Some("  ".to_string())).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_cli_overrides_everything() {
        let mut config =
            load_config_with_env(None, Some("http://env.example.com".to_string())).unwrap();
        config
            .apply_overrides(&ConfigOverrides {
                base_url: Some("http://cli.example.com".to_string()),
            })
            .unwrap();
        assert_eq!(config.base_url, "http://cli.example.com");
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let file = write_config("[api\nbase_url = ");
        let err = load_config_with_env(Some(file.path().to_path_buf()), None).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        for url in ["not a url", "/relative/path", "ftp://example.com"] {
            let err = load_config_with_env(None, Some(url.to_string())).unwrap_err();
            assert!(
                matches!(err, ConfigError::ValidationError(_)),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConfigSource::Cli.to_string(), "CLI");
        assert_eq!(ConfigSource::File.to_string(), "config file");
    }
}
