//! User-level configuration in `~/.mdp/config.json`
//!
//! The file is shared with other mdp tooling, so only `defaults.format` is
//! read here and every other key is ignored whatever its shape.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::error::{MdpError, Result};
use crate::format::OutputFormat;

/// Directory under the home directory holding user settings
pub const USER_SETTINGS_DIR: &str = ".mdp";

/// User settings file name
pub const USER_CONFIG_FILE: &str = "config.json";

/// Fallback choices for commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GlobalDefaults {
    #[serde(default, deserialize_with = "lenient_format")]
    pub format: Option<OutputFormat>,
}

/// Global configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, deserialize_with = "lenient_defaults")]
    pub defaults: GlobalDefaults,
}

/// Unknown format names and non-string values mean "no preference"
fn lenient_format<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<Option<OutputFormat>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(value.as_str().and_then(|s| s.parse().ok()))
}

fn lenient_defaults<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<GlobalDefaults, D::Error> {
    let value = Value::deserialize(d)?;
    if !value.is_object() {
        return Ok(GlobalDefaults::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl GlobalConfig {
    /// Path of the global config file, if a home directory is known
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(USER_SETTINGS_DIR).join(USER_CONFIG_FILE))
    }

    /// Load the global config; a missing file is not an error
    pub fn load() -> Result<Option<Self>> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. Only malformed JSON is an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!(path = %path.display(), "no global config");
            return Ok(None);
        }

        let raw = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| {
            MdpError::config(format!(
                "Invalid JSON in global config ({}): {}",
                path.display(),
                e
            ))
        })?;

        let config = serde_json::from_value(value).unwrap_or_else(|e| {
            debug!(path = %path.display(), error = %e, "ignoring global config shape");
            GlobalConfig::default()
        });
        Ok(Some(config))
    }

    /// The user's preferred output format, if any
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.defaults.format
    }
}
