//! Session configuration via `phonerecall.toml`
//!
//! A default `phonerecall.toml` is created in the data directory on first
//! open. To change settings, edit the file and reopen the session.

use phonerecall_core::{Error, Result};
use phonerecall_phone::CountryCode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "phonerecall.toml";

/// Prefix shared by every storage key.
pub const DEFAULT_NAMESPACE: &str = "memory-phonenumbers";

/// Suffix of the key holding the contact collection.
const CONTACTS_SUFFIX: &str = "contacts";
/// Suffix of the key holding the preferred country.
const COUNTRY_SUFFIX: &str = "country";

/// Configuration loaded from `phonerecall.toml`.
///
/// # Example
///
/// ```toml
/// namespace = "memory-phonenumbers"
/// default_country = "US"
/// # data_dir = "/var/lib/phonerecall"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallConfig {
    /// Prefix for storage keys: `<namespace>-contacts`, `<namespace>-country`.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Country used when neither a stored preference nor the locale gives one.
    #[serde(default = "default_country")]
    pub default_country: String,
    /// Directory for value files; `None` keeps everything in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_country() -> String {
    phonerecall_phone::FALLBACK_COUNTRY.to_string()
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            default_country: default_country(),
            data_dir: None,
        }
    }
}

impl RecallConfig {
    /// Config rooted at `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// Parse `default_country` into a `CountryCode`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCountry` if the code is not supported.
    pub fn fallback_country(&self) -> Result<CountryCode> {
        CountryCode::parse(&self.default_country)
            .map_err(|_| Error::InvalidCountry(self.default_country.clone()))
    }

    /// Storage key for the contact collection
    pub fn contacts_key(&self) -> String {
        format!("{}-{}", self.namespace, CONTACTS_SUFFIX)
    }

    /// Storage key for the preferred country
    pub fn country_key(&self) -> String {
        format!("{}-{}", self.namespace, COUNTRY_SUFFIX)
    }

    /// Check every field eagerly.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for a malformed namespace and
    /// `Error::InvalidCountry` for an unsupported default country.
    pub fn validate(&self) -> Result<()> {
        let namespace_ok = !self.namespace.is_empty()
            && !self.namespace.starts_with('.')
            && self
                .namespace
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'));
        if !namespace_ok {
            return Err(Error::config(format!(
                "Invalid namespace '{}'. Use letters, digits, '-', '_' or '.'.",
                self.namespace
            )));
        }
        self.fallback_country()?;
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# phonerecall configuration
#
# Prefix for storage keys. Contacts live under "<namespace>-contacts",
# the preferred country under "<namespace>-country".
namespace = "memory-phonenumbers"

# Country used when no preference is stored and the locale (LC_ALL, LANG)
# does not name a supported region.
default_country = "US"

# Directory holding the value files. Defaults to the directory containing
# this file when opened with RecallSession::open_dir.
# data_dir = "/var/lib/phonerecall"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: RecallConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
