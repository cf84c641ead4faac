//! Configuration schema.
//!
//! Every field has a default so partial configs work out of the box.

use std::collections::BTreeMap;

use gantry_common::ConfigError;
use gantry_policy::{OriginAllowlist, PaymentFallbackTable, PolicyConfig, PolicyMode, BLANK_URL};
use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GantryConfig {
    pub policy: PolicySection,
    pub webview: WebViewSection,
}

/// Navigation-interception policy settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySection {
    pub mode: PolicyMode,
    /// The view's "no navigation" sentinel.
    pub blank_url: String,
    /// URL prefixes always handed to the native launch path.
    pub intercept_prefixes: Vec<String>,
    /// Origin patterns permitted to navigate in-view (prefix-allowlist
    /// mode only). Regular expressions over `scheme://authority`.
    pub origin_allowlist: Vec<String>,
    /// Marker schemes that wrap an inner https URL.
    pub wrap_markers: Vec<String>,
    /// URL whose arrival signals navigation completion to the host.
    pub final_url: Option<String>,
    /// Whether the built-in payment-scheme table is active.
    pub builtin_payment_table: bool,
    /// Extra scheme → store package entries, merged over the built-ins.
    pub payment_fallbacks: BTreeMap<String, String>,
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            mode: PolicyMode::default(),
            blank_url: BLANK_URL.to_string(),
            intercept_prefixes: Vec::new(),
            origin_allowlist: Vec::new(),
            wrap_markers: Vec::new(),
            final_url: None,
            builtin_payment_table: true,
            payment_fallbacks: BTreeMap::new(),
        }
    }
}

impl PolicySection {
    /// Compile into the engine's runtime form. Pattern compilation is the
    /// only fallible step.
    pub fn compile(&self) -> Result<PolicyConfig, ConfigError> {
        let allowlist = OriginAllowlist::compile(&self.origin_allowlist)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        let mut payment_fallbacks = if self.builtin_payment_table {
            PaymentFallbackTable::builtin()
        } else {
            PaymentFallbackTable::empty()
        };
        for (scheme, package) in &self.payment_fallbacks {
            payment_fallbacks.insert(scheme, package.clone());
        }

        Ok(PolicyConfig {
            mode: self.mode,
            blank_url: self.blank_url.clone(),
            intercept_prefixes: self.intercept_prefixes.clone(),
            allowlist,
            wrap_markers: self.wrap_markers.clone(),
            payment_fallbacks,
        })
    }
}

/// Webview settings plumbing, consumed by the adapter crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSection {
    pub user_agent: Option<String>,
    pub devtools: bool,
    pub transparent: bool,
    pub clipboard: bool,
    pub autoplay: bool,
    /// Permit the view to navigate to `file://` URLs.
    pub allow_file_access_from_file_urls: bool,
}

impl Default for WebViewSection {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            transparent: false,
            clipboard: true,
            autoplay: true,
            allow_file_access_from_file_urls: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = GantryConfig::default();
        assert_eq!(config.policy.mode, PolicyMode::SchemeBased);
        assert_eq!(config.policy.blank_url, "about:blank");
        assert!(config.policy.builtin_payment_table);
        assert!(!config.webview.allow_file_access_from_file_urls);
    }

    #[test]
    fn compile_merges_payment_entries_over_builtins() {
        let mut section = PolicySection::default();
        section
            .payment_fallbacks
            .insert("nicepay".to_string(), "com.nicepay.app".to_string());
        let compiled = section.compile().unwrap();
        assert_eq!(
            compiled.payment_fallbacks.lookup("ispmobile"),
            Some("kvp.jjy.MispAndroid320")
        );
        assert_eq!(
            compiled.payment_fallbacks.lookup("nicepay"),
            Some("com.nicepay.app")
        );
    }

    #[test]
    fn compile_without_builtin_table() {
        let section = PolicySection {
            builtin_payment_table: false,
            ..Default::default()
        };
        let compiled = section.compile().unwrap();
        assert!(compiled.payment_fallbacks.is_empty());
    }

    #[test]
    fn compile_rejects_bad_allowlist_pattern() {
        let section = PolicySection {
            origin_allowlist: vec!["https://(unclosed".to_string()],
            ..Default::default()
        };
        let err = section.compile().unwrap_err();
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn section_round_trips_through_toml() {
        let config = GantryConfig {
            policy: PolicySection {
                mode: PolicyMode::PrefixAllowlist,
                intercept_prefixes: vec!["https://play.google.com/".to_string()],
                origin_allowlist: vec!["https://example\\.com".to_string()],
                final_url: Some("https://example.com/done".to_string()),
                ..Default::default()
            },
            webview: WebViewSection::default(),
        };
        let toml = toml::to_string(&config).unwrap();
        let back: GantryConfig = toml::from_str(&toml).unwrap();
        assert_eq!(back, config);
    }
}
