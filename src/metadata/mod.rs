//! Cluster metadata
//!
//! A Garden cluster can publish gardenctl settings (identity, aliases,
//! global match patterns) in a ConfigMap. This module reads such a
//! ConfigMap from a local YAML file and exposes its `data` section as a
//! plain string mapping.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur when reading cluster metadata
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("failed to read cluster configuration {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse cluster configuration {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct ConfigMap {
    #[serde(default)]
    data: BTreeMap<String, String>,
}

/// Parse the `data` section of a ConfigMap document
pub fn parse_metadata(content: &str) -> Result<BTreeMap<String, String>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let config_map: ConfigMap = serde_yaml::from_str(content)?;
    Ok(config_map.data)
}

/// Read cluster metadata from a ConfigMap file
pub fn load_metadata(path: &Path) -> Result<BTreeMap<String, String>, MetadataError> {
    let content = std::fs::read_to_string(path).map_err(|source| MetadataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_metadata(&content).map_err(|source| MetadataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
