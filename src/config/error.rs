//! Errors returned by configuration loading, saving and registry operations

use std::path::PathBuf;

use gardenctl_matcher::MatchError;

use crate::paths::PathError;

/// Errors that can occur when loading, saving or mutating the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to open file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read configuration: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to decode as YAML: {0}")]
    Decode(#[source] serde_yaml::Error),

    #[error("failed to resolve ~ in kubeconfig path of garden {garden:?}: {source}")]
    PathResolution {
        garden: String,
        #[source]
        source: PathError,
    },

    #[error("failed to encode as YAML: {0}")]
    Encode(#[source] serde_yaml::Error),

    #[error("failed to create file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write configuration: {0}")]
    Write(#[source] std::io::Error),

    #[error("could not add garden: garden with name {0:?} already exists in config")]
    DuplicateName(String),

    #[error("garden with name or alias {0:?} is not defined in gardenctl configuration")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Match(#[from] MatchError),
}
