//! Webpane configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use webpane_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("home page: {}", config.navigation.home_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::WebpaneConfig;

use std::path::Path;

use webpane_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a default `config.toml` if none exists and validates the result.
pub fn load_config() -> Result<WebpaneConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (e.g. a `--config` override).
pub fn load_config_from(path: &Path) -> Result<WebpaneConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
