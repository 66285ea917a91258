//! Configuration parsing and validation.
//!
//! Handles quickfilter.toml parsing with version validation and unknown key
//! warnings. A config file is only read when one is named with `-C` or
//! `QUICKFILTER_CONFIG`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    filter: FlexibleFilter,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

#[derive(Default, Deserialize)]
struct FlexibleFilter {
    #[serde(flatten)]
    known: FilterConfig,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Filter defaults.
    pub filter: FilterConfig,
}

/// Defaults for the filter flags. Command-line flags can only turn these on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FilterConfig {
    /// Echo non-matching lines.
    #[serde(default)]
    pub invert: bool,

    /// Validate patterns and line lengths.
    #[serde(default)]
    pub strict: bool,

    /// Report line counts on stderr.
    #[serde(default)]
    pub verbose: bool,
}

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "filter"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade quickfilter to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in unknown_keys(&flexible) {
        warn_unknown_key(path, &key);
    }

    Ok(Config {
        version,
        filter: flexible.filter.known,
    })
}

/// Dotted names of keys the config format does not define.
fn unknown_keys(config: &FlexibleConfig) -> Vec<String> {
    let top = config
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned();
    let filter = config
        .filter
        .unknown
        .keys()
        .map(|key| format!("filter.{}", key));
    top.chain(filter).collect()
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "quickfilter: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
