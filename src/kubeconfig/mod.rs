//! Kubeconfig inspection
//!
//! gardenctl only needs to know which context a Garden's kubeconfig points
//! at. Clusters, users and credentials are left to kubectl.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur when reading a kubeconfig
#[derive(Debug, thiserror::Error)]
pub enum KubeconfigError {
    #[error("failed to load kubeconfig file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse kubeconfig file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("no current context found for kubeconfig {}", .0.display())]
    NoCurrentContext(PathBuf),
}

/// The subset of a kubeconfig gardenctl reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Kubeconfig {
    #[serde(default)]
    pub current_context: String,
}

impl Kubeconfig {
    pub fn load(path: &Path) -> Result<Self, KubeconfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| KubeconfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty kubeconfig is valid for kubectl and has no context
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|source| KubeconfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn current_context(&self) -> Option<&str> {
        Some(self.current_context.as_str()).filter(|c| !c.is_empty())
    }
}

/// Pick the context to use for the kubeconfig at `path`.
///
/// A non-empty `requested` context wins without looking at the file's
/// contents beyond parsing it; otherwise the file's `current-context` is used.
pub fn resolve_context(path: &Path, requested: Option<&str>) -> Result<String, KubeconfigError> {
    let kubeconfig = Kubeconfig::load(path)?;

    if let Some(context) = requested.filter(|c| !c.is_empty()) {
        return Ok(context.to_string());
    }

    kubeconfig
        .current_context()
        .map(str::to_string)
        .ok_or_else(|| KubeconfigError::NoCurrentContext(path.to_path_buf()))
}
