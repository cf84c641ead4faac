//! Gantry configuration system.
//!
//! TOML-based configuration for the navigation policy and the webview
//! adapter. All sections use sensible defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gantry_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! let policy = config.policy.compile().expect("invalid policy config");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GantryConfig, PolicySection, WebViewSection, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{create_default_config, default_config_path, load_from_path};

use gantry_common::ConfigError;

/// Load config from the platform default path, validated.
///
/// Creates a default config file if none exists.
pub fn load_config() -> Result<GantryConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GantryConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = GantryConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"policy\""));
        assert!(json.contains("\"webview\""));
        assert!(json.contains("\"blank_url\""));
        assert!(json.contains("\"payment_fallbacks\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = GantryConfig::default();
        let json = config_to_json(&config);
        let parsed: GantryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn default_policy_section_compiles() {
        let config = GantryConfig::default();
        let policy = config.policy.compile().unwrap();
        assert_eq!(policy.blank_url, "about:blank");
        assert!(policy.allowlist.is_empty());
    }
}
