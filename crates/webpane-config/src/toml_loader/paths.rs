//! Where `config.toml` lives.

use std::path::{Path, PathBuf};

use tracing::info;
use webpane_common::ConfigError;

use super::template::default_config_toml;

const APP_DIR: &str = "webpane";
const FILE_NAME: &str = "config.toml";

/// `<base>/webpane/config.toml`.
pub(crate) fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(FILE_NAME)
}

/// The per-user config file, under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or_else(|| ConfigError::ParseError("no per-user config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", at.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_error("cannot create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("cannot write", path, e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
