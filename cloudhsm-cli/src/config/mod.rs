//! Configuration module for the CLI.
//!
//! Merges the optional TOML file with command-line flags and environment
//! variables (flags/env win) into a [`ClientConfig`].

pub mod file;

use crate::config::file::FileConfig;
use cloudhsm_sdk::config::{ClientConfig, Zone};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "./cloudhsm.toml";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error(transparent)]
    Client(#[from] cloudhsm_sdk::config::ConfigError),
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub zone: Option<String>,
    pub api_root: Option<String>,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    overrides: Overrides,
}

impl ConfigLoader {
    /// `config_path` is the explicit `--config` value, if any.
    pub fn new(config_path: Option<PathBuf>, overrides: Overrides) -> Self {
        Self {
            config_path,
            overrides,
        }
    }

    /// Read the file (if any) and resolve the client configuration.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(&self) -> Result<ClientConfig, ConfigError> {
        let file_config = match &self.config_path {
            Some(path) => read_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                read_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => {
                tracing::debug!("No config file, using defaults");
                FileConfig::default()
            }
        };
        resolve(file_config, &self.overrides)
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Configuration loaded from {:?}", path);
    Ok(toml::from_str(&content)?)
}

/// Apply precedence: override api root > override zone > file api root >
/// file zone > default zone.
fn resolve(file: FileConfig, overrides: &Overrides) -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::new();

    let (api_root, zone) = if overrides.api_root.is_some() || overrides.zone.is_some() {
        (overrides.api_root.clone(), overrides.zone.clone())
    } else {
        (file.api.api_root, file.api.zone)
    };

    if let Some(api_root) = api_root {
        config = config.with_api_root(&api_root)?;
    } else if let Some(zone) = zone {
        config = config.with_zone(zone.parse::<Zone>()?);
    }

    if let Some(secs) = file.api.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let access_token = overrides
        .access_token
        .clone()
        .or(file.credentials.access_token);
    let access_token_secret = overrides
        .access_token_secret
        .clone()
        .or(file.credentials.access_token_secret);
    match (access_token, access_token_secret) {
        (Some(token), Some(secret)) => config = config.with_api_keys(token, secret),
        (None, None) => tracing::warn!("No access token configured, requests will be anonymous"),
        _ => tracing::warn!("Access token and secret must both be set, ignoring credentials"),
    }

    Ok(config)
}
