use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::errors::PathError;

/// Environment variable naming a TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "LEDGER_PATH_CONFIG";

/// Decoder strictness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Check that the purpose and coin type words are hardened 44 and 501
    #[serde(default = "DecodeConfig::default_verify_prefix")]
    pub verify_prefix: bool,

    /// Reject account/change words whose hardened bit is clear
    #[serde(default = "DecodeConfig::default_require_hardened")]
    pub require_hardened: bool,
}

impl DecodeConfig {
    fn default_verify_prefix() -> bool {
        true
    }

    fn default_require_hardened() -> bool {
        true
    }

    /// Trust the buffer: only the count byte and length are checked.
    pub fn lenient() -> Self {
        Self {
            verify_prefix: false,
            require_hardened: false,
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            verify_prefix: Self::default_verify_prefix(),
            require_hardened: Self::default_require_hardened(),
        }
    }
}

/// String rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Render paths as `m/44'/501'/...`
    #[serde(default)]
    pub master_prefix: bool,
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default)]
    pub decode: DecodeConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl PathConfig {
    /// Parse configuration from TOML text. Missing tables and keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, PathError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PathError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading path config");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from the file named by `LEDGER_PATH_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self, PathError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
            _ => Ok(Self::default()),
        }
    }
}
