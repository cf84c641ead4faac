//! Configuration validation.
//!
//! Collects every problem before reporting, so one bad field does not
//! hide the rest.

use gantry_common::ConfigError;
use gantry_policy::OriginAllowlist;

use crate::schema::GantryConfig;

pub fn validate(config: &GantryConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let policy = &config.policy;

    if policy.blank_url.is_empty() {
        errors.push("policy.blank_url must not be empty".to_string());
    }

    for (i, prefix) in policy.intercept_prefixes.iter().enumerate() {
        if prefix.is_empty() {
            errors.push(format!("policy.intercept_prefixes[{i}] is empty"));
        }
    }

    for (i, marker) in policy.wrap_markers.iter().enumerate() {
        if marker.is_empty() {
            errors.push(format!("policy.wrap_markers[{i}] is empty"));
        } else if marker.contains(':') {
            errors.push(format!(
                "policy.wrap_markers[{i}] = '{marker}' must be a bare scheme without ':'"
            ));
        }
    }

    if let Err(e) = OriginAllowlist::compile(&policy.origin_allowlist) {
        errors.push(e.to_string());
    }

    if let Some(final_url) = &policy.final_url {
        if !final_url.starts_with("http://") && !final_url.starts_with("https://") {
            errors.push(format!(
                "policy.final_url = '{final_url}' must be an http(s) URL"
            ));
        }
    }

    for (scheme, package) in &policy.payment_fallbacks {
        if scheme.is_empty() || scheme.contains(':') {
            errors.push(format!(
                "policy.payment_fallbacks key '{scheme}' must be a bare scheme"
            ));
        }
        if package.is_empty() {
            errors.push(format!(
                "policy.payment_fallbacks['{scheme}'] has an empty package id"
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
