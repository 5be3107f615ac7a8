use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangle in host view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}

/// Layout class of the presenting device.
///
/// `Compact` is phone-like: chrome goes in a bottom toolbar.
/// `Regular` is tablet/desktop-like: chrome goes in the navigation bar's
/// trailing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    #[default]
    Compact,
    Regular,
}

impl DeviceClass {
    /// Pick a class from a viewport width. Anything narrower than 600
    /// logical pixels counts as compact.
    pub fn from_width(width: f64) -> Self {
        if width < 600.0 {
            Self::Compact
        } else {
            Self::Regular
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Regular => write!(f, "regular"),
        }
    }
}
