//! TOML config file loading and creation.

use std::path::Path;

use gantry_common::ConfigError;
use tracing::{info, warn};

use crate::schema::GantryConfig;
use crate::validation;

/// Load config from a specific TOML file path.
///
/// Deserializes with serde defaults for any missing fields. After loading,
/// the config is validated; if validation fails, a warning is logged and
/// the default config is returned.
pub fn load_from_path(path: &Path) -> Result<GantryConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: GantryConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(GantryConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, creates a default config file and returns
/// defaults.
pub fn load_default() -> Result<GantryConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(GantryConfig::default());
    }

    load_from_path(&path)
}

/// Platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("gantry").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Default TOML config content with comments.
fn default_config_toml() -> String {
    r##"# Gantry configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[policy]
# mode = "scheme-based"        # scheme-based, prefix-allowlist
# blank_url = "about:blank"
# URL prefixes always handed to the OS launch path, even for web URLs:
# intercept_prefixes = ["https://play.google.com/store/"]
# Origin patterns (regex over scheme://authority), prefix-allowlist mode only:
# origin_allowlist = ["https://([\\w-]+\\.)*example\\.com"]
# Payment-SDK marker schemes wrapping an inner https URL:
# wrap_markers = ["paywrap"]
# Completion sentinel -- arrival emits a NavigationCompleted event:
# final_url = "https://example.com/checkout/done"
# builtin_payment_table = true

[policy.payment_fallbacks]
# Extra scheme -> store package entries, merged over the built-ins:
# nicepay = "com.nicepay.app"

[webview]
# user_agent = "Gantry/0.1"
# devtools = false
# transparent = false
# clipboard = true
# autoplay = true
# allow_file_access_from_file_urls = false
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_policy::PolicyMode;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let result = load_from_path(Path::new("/tmp/nonexistent_gantry_config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
[policy]
mode = "prefix-allowlist"
origin_allowlist = ["https://example\\.com"]

[webview]
user_agent = "Gantry/0.1"
"##,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.policy.mode, PolicyMode::PrefixAllowlist);
        assert_eq!(config.policy.origin_allowlist.len(), 1);
        assert_eq!(config.webview.user_agent.as_deref(), Some("Gantry/0.1"));
        // Defaults preserved
        assert_eq!(config.policy.blank_url, "about:blank");
        assert!(config.policy.builtin_payment_table);
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_config_with_invalid_values_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[policy]
blank_url = ""
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.policy.blank_url, "about:blank");
    }

    #[test]
    fn create_and_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gantry").join("config.toml");

        create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = load_from_path(&path).unwrap();
        assert_eq!(config, GantryConfig::default());
    }

    #[test]
    fn default_config_toml_is_valid() {
        let content = default_config_toml();
        let config: GantryConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.policy.mode, PolicyMode::SchemeBased);
    }

    #[test]
    fn default_config_path_is_reasonable() {
        if let Ok(path) = default_config_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains("gantry"));
            assert!(path_str.ends_with("config.toml"));
        }
    }
}
