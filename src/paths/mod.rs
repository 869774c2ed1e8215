//! Filesystem path helpers
//!
//! Resolves the `~` home-directory shorthand in user-supplied paths and
//! locates the default gardenctl configuration file.

use std::path::{Path, PathBuf};

/// Environment variable overriding the gardenctl home directory.
pub const GCTL_HOME_ENV: &str = "GCTL_HOME";

/// Directory under the user's home holding gardenctl state.
pub const DEFAULT_HOME_DIR: &str = ".garden";

/// File name of the gardenctl configuration.
pub const CONFIG_FILE_NAME: &str = "gardenctl-v2.yaml";

/// Errors that can occur when resolving paths
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("cannot expand user-specific home dir in {0:?}")]
    UserHome(String),

    #[error("home directory could not be determined")]
    NoHome,
}

/// Expand a leading `~` to the current user's home directory.
///
/// Paths without the shorthand are returned unchanged. `~user/...` forms are
/// rejected.
pub fn expand_home(path: &str) -> Result<String, PathError> {
    expand_home_with(path, dirs::home_dir().as_deref())
}

pub(crate) fn expand_home_with(path: &str, home: Option<&Path>) -> Result<String, PathError> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(path.to_string());
    };

    // shellexpand leaves these untouched instead of failing
    if !rest.is_empty() && !rest.starts_with('/') {
        return Err(PathError::UserHome(path.to_string()));
    }
    let home = home.ok_or(PathError::NoHome)?;

    let expanded = shellexpand::tilde_with_context(path, || Some(home.to_string_lossy().into_owned()));
    Ok(expanded.into_owned())
}

/// Default configuration file location.
///
/// `$GCTL_HOME/gardenctl-v2.yaml` when the variable is set and non-empty,
/// otherwise `~/.garden/gardenctl-v2.yaml`.
pub fn default_config_path() -> Result<PathBuf, PathError> {
    let gctl_home = std::env::var(GCTL_HOME_ENV).ok();
    default_config_path_with(gctl_home.as_deref(), dirs::home_dir().as_deref())
}

fn default_config_path_with(gctl_home: Option<&str>, home: Option<&Path>) -> Result<PathBuf, PathError> {
    if let Some(dir) = gctl_home.filter(|d| !d.is_empty()) {
        let dir = expand_home_with(dir, home)?;
        return Ok(PathBuf::from(dir).join(CONFIG_FILE_NAME));
    }

    let home = home.ok_or(PathError::NoHome)?;
    Ok(home.join(DEFAULT_HOME_DIR).join(CONFIG_FILE_NAME))
}
