//! Navigation and external-handoff configuration.

use serde::{Deserialize, Serialize};
use webpane_common::routes::{owned, DEFAULT_EXTERNAL_HOSTS, DEFAULT_EXTERNAL_SCHEMES};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Page opened when no URL is given on the command line.
    pub home_url: String,
    /// URL schemes opened outside the screen when the platform can handle them.
    pub external_schemes: Vec<String>,
    /// Hosts opened outside the screen when the platform can handle them.
    pub external_hosts: Vec<String>,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            home_url: "https://example.com".into(),
            external_schemes: owned(DEFAULT_EXTERNAL_SCHEMES),
            external_hosts: owned(DEFAULT_EXTERNAL_HOSTS),
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_shared_route_lists() {
        let config = NavigationConfig::default();
        assert_eq!(config.external_schemes, DEFAULT_EXTERNAL_SCHEMES);
        assert_eq!(config.external_hosts, DEFAULT_EXTERNAL_HOSTS);
    }
}
