use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the star catalog.
pub const CATALOG_FILENAME: &str = "stars.csv";

/// Environment variable overriding the star catalog location.
pub const DATA_ENV_VAR: &str = "GALAXY_FORGE_DATA";

/// Resolve the default catalog location using platform-specific project directories.
pub fn default_data_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "galaxy-forge", "galaxy-forge")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(CATALOG_FILENAME))
}

/// Resolve the star catalog to load and make sure it exists.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `GALAXY_FORGE_DATA` environment variable.
/// 3. Platform-specific project data directory (`stars.csv`).
///
/// A directory in steps 1 or 2 is taken to contain `stars.csv`.
pub fn resolve_data_path(target: Option<&Path>) -> Result<PathBuf> {
    let candidate = match target {
        Some(explicit) => catalog_path(explicit),
        None => match env::var_os(DATA_ENV_VAR) {
            Some(env_path) => catalog_path(Path::new(&env_path)),
            None => default_data_path()?,
        },
    };

    if !candidate.is_file() {
        return Err(Error::DataFileNotFound { path: candidate });
    }
    debug!(path = %candidate.display(), "resolved star catalog");
    Ok(candidate)
}

fn catalog_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CATALOG_FILENAME)
    } else {
        path.to_path_buf()
    }
}
