//! Validation for the `[navigation]` section.

use crate::schema::WebpaneConfig;

pub(crate) fn validate_navigation(errors: &mut Vec<String>, config: &WebpaneConfig) {
    let nav = &config.navigation;

    if let Err(e) = url::Url::parse(&nav.home_url) {
        errors.push(format!("navigation.home_url '{}' is not a valid URL: {e}", nav.home_url));
    }

    for scheme in &nav.external_schemes {
        let valid = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid {
            errors.push(format!("navigation.external_schemes: invalid scheme '{scheme}'"));
        }
    }

    for host in &nav.external_hosts {
        if host.trim().is_empty() || host.contains('/') {
            errors.push(format!("navigation.external_hosts: invalid host '{host}'"));
        }
    }

    if let Some(ua) = &nav.user_agent {
        if ua.trim().is_empty() {
            errors.push("navigation.user_agent must not be blank".into());
        }
    }
}
