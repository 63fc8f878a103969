//! Walk mode configuration, validation, and error types.
//!
//! [`WalkConfig`] is read from TOML or built in code.
//! [`validate()`](WalkConfig::validate) checks structural invariants before
//! a session is started from it.

use std::fs;
use std::path::{Path, PathBuf};

use quietude_core::{AttrKey, CoreError, GridDims, Severity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while loading or validating a [`WalkConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config {path}: {source}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid TOML for [`WalkConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Grid dimensions are zero, too large, or overflow the layer size.
    #[error("grid: {0}")]
    Dims(CoreError),
    /// Tables could not hold every attribute key.
    #[error("table_capacity {configured} is below the {required} attribute keys")]
    TableCapacityTooSmall {
        /// The configured capacity.
        configured: usize,
        /// Number of attribute keys.
        required: usize,
    },
}

impl ConfigError {
    /// Tier of this error. A bad configuration is always reported.
    pub fn severity(&self) -> Severity {
        Severity::Reported
    }
}

// ── WalkConfig ─────────────────────────────────────────────────────

/// Settings for a walk session.
///
/// ```
/// use quietude_walk::WalkConfig;
///
/// let config = WalkConfig::from_toml_str(
///     r#"
///     size_y = 8
///     size_x = 16
///     save_path = "meadow.qwlk"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.dims().unwrap().layer_size(), 128);
/// assert_eq!(config.table_capacity, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkConfig {
    /// Rows per layer. Default: 32.
    pub size_y: u32,
    /// Columns per layer. Default: 64.
    pub size_x: u32,
    /// Capacity of attribute tables created by the session. Default: the
    /// number of attribute keys.
    pub table_capacity: usize,
    /// Where [`WalkSession::save_configured`](crate::WalkSession::save_configured)
    /// writes the area. Default: none.
    pub save_path: Option<PathBuf>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            size_y: 32,
            size_x: 64,
            table_capacity: AttrKey::COUNT,
            save_path: None,
        }
    }
}

impl WalkConfig {
    /// Parse and validate a configuration from TOML text. Missing fields
    /// take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "walk config loaded");
        Ok(config)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dims()?;
        if self.table_capacity < AttrKey::COUNT {
            return Err(ConfigError::TableCapacityTooSmall {
                configured: self.table_capacity,
                required: AttrKey::COUNT,
            });
        }
        Ok(())
    }

    /// The configured grid dimensions.
    pub fn dims(&self) -> Result<GridDims, ConfigError> {
        GridDims::new(self.size_y, self.size_x).map_err(ConfigError::Dims)
    }
}
