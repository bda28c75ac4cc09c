//! # Errors
//!
//! Error type for the library helpers around the provider: configuration
//! loading and rendering outside of the lifecycle calls, which report
//! problems as [`Diagnostics`] instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::diagnostics::Diagnostics;

/// Errors raised while loading configuration or rendering manifests
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse JSON from {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse YAML from {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Unsupported configuration file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),
    #[error("{resource_type} returned {} error(s):\n{diagnostics}", diagnostics.errors().count())]
    Diagnostics {
        resource_type: String,
        diagnostics: Diagnostics,
    },
    #[error("Operation completed without producing state")]
    MissingState,
}

impl ProviderError {
    /// Diagnostics carried by the error, if it came from a provider operation
    #[must_use]
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            ProviderError::Diagnostics { diagnostics, .. } => Some(diagnostics),
            _ => None,
        }
    }

    /// True when the error describes invalid user configuration rather than
    /// an I/O or environment problem
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ProviderError::Json { .. }
                | ProviderError::Yaml { .. }
                | ProviderError::Diagnostics { .. }
        )
    }
}
