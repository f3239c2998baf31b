//! Optional TOML configuration.
//!
//! Looked up from `UDYAM_CONFIG`, then `<config dir>/udyam/udyam.toml`. A
//! missing file is not an error; every setting has a default.

use std::time::Duration;
use std::{env, fs, path::PathBuf};

use serde::Deserialize;

use udyam_lookup::LookupConfig;

#[derive(Debug, Default, Deserialize)]
pub struct UdyamConfig {
    pub lookup: Option<LookupSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupSection {
    /// Override the postal pincode endpoint (no trailing PIN segment).
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl UdyamConfig {
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = env::var("UDYAM_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("udyam").join("udyam.toml"))
    }

    /// Load configuration, defaulting when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Resolve the lookup section against its defaults.
    #[must_use]
    pub fn lookup_config(&self) -> LookupConfig {
        let defaults = LookupConfig::default();
        let section = self.lookup.as_ref();
        LookupConfig {
            endpoint: section
                .and_then(|s| s.endpoint.clone())
                .unwrap_or(defaults.endpoint),
            timeout: section
                .and_then(|s| s.timeout_seconds)
                .map_or(defaults.timeout, Duration::from_secs),
        }
    }
}
