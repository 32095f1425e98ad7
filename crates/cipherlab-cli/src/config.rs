//! Configuration file loading for the CLI
//!
//! An explicit `--config` path wins. Otherwise the first existing file among
//! `cipherlab/config.toml` in the working directory and `config.toml` in the
//! platform config directory is used, and defaults apply when neither exists.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use cipherlab::{CipherlabError, config::AppConfig};

const LOCAL_CONFIG: &str = "cipherlab/config.toml";
const CONFIG_FILE: &str = "config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for CipherlabError {
    fn from(err: ConfigError) -> Self {
        CipherlabError::Config(err.to_string())
    }
}

/// Where a configuration file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    Explicit,
    Local,
    System,
}

/// Loads the configuration for this run.
///
/// # Errors
///
/// Returns [`CipherlabError::Config`] if an explicit path does not exist, or
/// if the chosen file does not parse or fails validation.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CipherlabError> {
    if let Some(path) = explicit_path {
        return load_config_file(path.as_ref(), ConfigSource::Explicit);
    }

    match discover() {
        Some((path, source)) => load_config_file(&path, source),
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

/// The first existing file among the implicit locations.
fn discover() -> Option<(PathBuf, ConfigSource)> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Some((local, ConfigSource::Local));
    }

    let Some(dirs) = ProjectDirs::from("com", "cipherlab", "cipherlab") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };

    let system = dirs.config_dir().join(CONFIG_FILE);
    if system.exists() {
        Some((system, ConfigSource::System))
    } else {
        debug!(path = system.display().to_string(); "System configuration file not found");
        None
    }
}

fn load_config_file(path: &Path, source: ConfigSource) -> Result<AppConfig, CipherlabError> {
    info!(path = path.display().to_string(), source:?; "Loading configuration");

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config = parse(&content)?;
    Ok(config)
}

/// Parses and validates TOML configuration text.
fn parse(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;

    if config.pipeline().max_layers() == 0 {
        return Err(ConfigError::Validation(
            "pipeline.max_layers must be at least 1".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, CipherlabError::Config(_)));
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_parse_valid_config() {
        let config = parse("[pipeline]\nmax_layers = 2\n[keygen]\nseed = 9\n").unwrap();
        assert_eq!(config.pipeline().max_layers(), 2);
        assert_eq!(config.keygen().seed(), Some(9));
    }

    #[test]
    fn test_parse_rejects_zero_layers() {
        let err = parse("[pipeline]\nmax_layers = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_config_error_message() {
        let err: CipherlabError = ConfigError::Parse("bad".to_string()).into();
        assert_eq!(
            err.to_string(),
            "configuration error: Failed to parse TOML configuration: bad"
        );
    }
}
