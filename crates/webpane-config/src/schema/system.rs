//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The matching `tracing` filter directive for the webpane crates.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Debug => "webpane=debug",
            Self::Info => "webpane=info",
            Self::Warning => "webpane=warn",
            Self::Error => "webpane=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_uppercase() {
        let cfg: LoggingConfig = toml::from_str("level = \"WARNING\"").unwrap();
        assert_eq!(cfg.level, LogLevel::Warning);
    }

    #[test]
    fn directives_target_webpane() {
        assert_eq!(LogLevel::Debug.directive(), "webpane=debug");
        assert_eq!(LogLevel::Error.directive(), "webpane=error");
    }
}
