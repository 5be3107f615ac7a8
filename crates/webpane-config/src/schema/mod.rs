//! Configuration schema types for Webpane.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod navigation;
mod system;
mod toolbar;
mod window;

pub use navigation::*;
pub use system::*;
pub use toolbar::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Webpane.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WebpaneConfig {
    pub toolbar: ToolbarConfig,
    pub navigation: NavigationConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
