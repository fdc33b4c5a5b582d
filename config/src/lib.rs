//! Configuration for Nucleus, read from `~/.nucleus/config.toml`.
//!
//! ```toml
//! [meditation]
//! strict_specs = true
//! log_violations = false
//! ```
//!
//! Every key is optional. Absent keys resolve to the defaults of
//! [`MeditationSettings`].

use std::path::{Path, PathBuf};

use nucleus_types::{MeditationSettings, Strictness, ViolationLogging};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    meditation: Option<RawMeditation>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMeditation {
    strict_specs: Option<bool>,
    log_violations: Option<bool>,
}

/// Loaded configuration, resolved into settings types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NucleusConfig {
    meditation: MeditationSettings,
}

impl NucleusConfig {
    /// Read the user config. Returns `None` when the file is absent or broken;
    /// failures are logged, never fatal.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to load config at {:?}: {}", path, err);
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(Self::resolve(raw))
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub const fn settings(&self) -> MeditationSettings {
        self.meditation
    }

    fn resolve(raw: RawConfig) -> Self {
        let meditation = raw.meditation.unwrap_or_default();
        let strictness = meditation
            .strict_specs
            .map(Strictness::from_flag)
            .unwrap_or_default();
        let logging = match meditation.log_violations {
            Some(false) => ViolationLogging::Silent,
            Some(true) | None => ViolationLogging::Debug,
        };
        Self {
            meditation: MeditationSettings::new(strictness, logging),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".nucleus").join("config.toml"))
}
