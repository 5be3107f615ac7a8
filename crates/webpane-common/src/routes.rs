//! Default external hand-off routes.

/// Schemes handed to other applications by default.
pub const DEFAULT_EXTERNAL_SCHEMES: &[&str] = &["tel", "telprompt", "sms", "mailto"];

/// Hosts handed to other applications by default.
pub const DEFAULT_EXTERNAL_HOSTS: &[&str] = &["itunes.apple.com"];

/// Owned copies of a route list, ready for config structs or matchers.
pub fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
