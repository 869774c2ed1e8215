//! Configuration persistence
//!
//! The document is always read and written whole. Saving truncates the
//! destination and rewrites it; there is no locking, so concurrent writers
//! race and the last save wins.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use super::{Config, ConfigError};
use crate::paths::{self, PathError};

/// Decode a configuration from a byte stream.
///
/// An empty stream yields an empty configuration. After decoding, a leading
/// `~` in every garden's kubeconfig path is expanded.
pub fn load<R: Read>(source: R) -> Result<Config, ConfigError> {
    load_with(source, paths::expand_home)
}

pub(crate) fn load_with<R, F>(mut source: R, expand: F) -> Result<Config, ConfigError>
where
    R: Read,
    F: Fn(&str) -> Result<String, PathError>,
{
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes).map_err(ConfigError::Read)?;

    if bytes.is_empty() {
        return Ok(Config::default());
    }

    let mut config: Config = serde_yaml::from_slice(&bytes).map_err(ConfigError::Decode)?;

    for garden in &mut config.gardens {
        garden.kubeconfig = expand(&garden.kubeconfig).map_err(|source| ConfigError::PathResolution {
            garden: garden.name.clone(),
            source,
        })?;
    }

    Ok(config)
}

/// Load the configuration file at `path`.
///
/// A file that does not exist is treated like an empty one.
pub fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "config file not found, starting empty");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Open {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = load(file)?;
    tracing::debug!(
        path = %path.display(),
        gardens = config.gardens.len(),
        patterns = config.match_patterns.len(),
        "loaded config"
    );
    Ok(config)
}

/// Encode `config` as YAML into `sink`.
pub fn save<W: Write>(mut sink: W, config: &Config) -> Result<(), ConfigError> {
    let yaml = serde_yaml::to_string(config).map_err(ConfigError::Encode)?;
    sink.write_all(yaml.as_bytes()).map_err(ConfigError::Write)?;
    sink.flush().map_err(ConfigError::Write)
}

/// Truncate and rewrite the configuration file at `path`.
///
/// Missing parent directories are created. The file is readable and
/// writable by its owner only.
pub fn save_to_file(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let create_err = |source| ConfigError::Create {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(create_err)?;
    }

    let file = open_owner_only(path).map_err(create_err)?;
    save(file, config)?;

    tracing::debug!(path = %path.display(), gardens = config.gardens.len(), "saved config");
    Ok(())
}

#[cfg(unix)]
fn open_owner_only(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;

    // mode() only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_owner_only(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path)
}
