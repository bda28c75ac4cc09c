//! # Configuration Loader
//!
//! Reads resource configurations (attribute names, snake_case) from JSON or
//! YAML files, from every matching file below a directory, or from stdin.
//!
//! YAML files may hold several `---` separated documents; each document is
//! one configuration.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::constants::CONFIG_FILE_EXTENSIONS;
use crate::error::ProviderError;

/// Path that selects stdin
pub const STDIN_PATH: &str = "-";

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Format from the file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(ConfigFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Some(ConfigFormat::Yaml)
            }
            _ => None,
        }
    }

    /// Guess the format of unnamed input (stdin)
    #[must_use]
    pub fn sniff(content: &str) -> Self {
        match content.trim_start().chars().next() {
            Some('{' | '[') => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// One configuration and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub source: PathBuf,
    /// Document position within the source, starting at 0
    pub document: usize,
    pub config: Value,
}

/// Load configurations from a file, a directory or stdin (`-`)
///
/// Directory entries are visited in file name order; files with other
/// extensions are skipped.
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed, or if a file path
/// has an unsupported extension.
pub fn load_configs(path: &Path) -> Result<Vec<LoadedConfig>, ProviderError> {
    if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| ProviderError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        return parse_configs(path, &content, ConfigFormat::sniff(&content));
    }

    if path.is_dir() {
        return load_directory(path);
    }

    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ProviderError::UnsupportedFormat(path.to_path_buf()))?;
    load_file(path, format)
}

fn load_directory(dir: &Path) -> Result<Vec<LoadedConfig>, ProviderError> {
    let mut configs = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ProviderError::Io {
                path,
                source: e.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(format) = ConfigFormat::from_path(path) else {
            debug!("Skipping {} (not one of {:?})", path.display(), CONFIG_FILE_EXTENSIONS);
            continue;
        };
        configs.extend(load_file(path, format)?);
    }
    if configs.is_empty() {
        warn!("No configuration files found in {}", dir.display());
    }
    Ok(configs)
}

fn load_file(path: &Path, format: ConfigFormat) -> Result<Vec<LoadedConfig>, ProviderError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProviderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_configs(path, &content, format)
}

/// Parse configurations from already loaded content
///
/// Empty YAML documents are skipped.
///
/// # Errors
///
/// Returns a JSON or YAML error naming `source` when parsing fails.
pub fn parse_configs(
    source: &Path,
    content: &str,
    format: ConfigFormat,
) -> Result<Vec<LoadedConfig>, ProviderError> {
    let values = match format {
        ConfigFormat::Json => {
            let value: Value =
                serde_json::from_str(content).map_err(|source_err| ProviderError::Json {
                    path: source.to_path_buf(),
                    source: source_err,
                })?;
            vec![value]
        }
        ConfigFormat::Yaml => {
            let mut values = Vec::new();
            for document in serde_yaml::Deserializer::from_str(content) {
                let value = Value::deserialize(document).map_err(|source_err| {
                    ProviderError::Yaml {
                        path: source.to_path_buf(),
                        source: source_err,
                    }
                })?;
                if !value.is_null() {
                    values.push(value);
                }
            }
            values
        }
    };

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(document, config)| LoadedConfig {
            source: source.to_path_buf(),
            document,
            config,
        })
        .collect())
}
