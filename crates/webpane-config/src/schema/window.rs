//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings for the demo app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown until the page reports one.
    pub title: String,
    /// Initial width in logical pixels (valid range: 200-7680).
    pub width: u32,
    /// Initial height in logical pixels (valid range: 200-4320).
    pub height: u32,
    /// Open the renderer's devtools (always on in debug builds).
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Webpane".into(),
            width: 1024,
            height: 768,
            devtools: cfg!(debug_assertions),
        }
    }
}
