use gantry_config::{GantryConfig, WebViewSection};

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
    /// Permit navigating to `file://` URLs.
    pub allow_file_access_from_file_urls: bool,
    /// URL whose arrival signals navigation completion to the host.
    pub final_url: Option<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some("Gantry/0.1".to_string()),
            clipboard: true,
            autoplay: true,
            allow_file_access_from_file_urls: false,
            final_url: None,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    /// Settings plumbing from a loaded config file. The completion
    /// sentinel lives in the policy section but is consumed here.
    pub fn from_config(config: &GantryConfig) -> Self {
        let mut result = Self::from(&config.webview);
        result.final_url = config.policy.final_url.clone();
        result
    }
}

impl From<&WebViewSection> for WebViewConfig {
    fn from(section: &WebViewSection) -> Self {
        Self {
            user_agent: section.user_agent.clone(),
            devtools: section.devtools,
            transparent: section.transparent,
            clipboard: section.clipboard,
            autoplay: section.autoplay,
            allow_file_access_from_file_urls: section.allow_file_access_from_file_urls,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_file_access_off() {
        let config = WebViewConfig::default();
        assert!(!config.allow_file_access_from_file_urls);
        assert!(config.final_url.is_none());
        assert_eq!(config.user_agent.as_deref(), Some("Gantry/0.1"));
    }

    #[test]
    fn with_url_sets_only_url() {
        let config = WebViewConfig::with_url("https://example.com");
        assert_eq!(config.url.as_deref(), Some("https://example.com"));
        assert!(config.html.is_none());
    }

    #[test]
    fn from_config_carries_settings_and_final_url() {
        let mut file = GantryConfig::default();
        file.webview.user_agent = Some("Gantry/0.1".to_string());
        file.webview.allow_file_access_from_file_urls = true;
        file.webview.transparent = true;
        file.policy.final_url = Some("https://example.com/done".to_string());

        let config = WebViewConfig::from_config(&file);
        assert_eq!(config.user_agent.as_deref(), Some("Gantry/0.1"));
        assert!(config.allow_file_access_from_file_urls);
        assert!(config.transparent);
        assert_eq!(config.final_url.as_deref(), Some("https://example.com/done"));
        assert!(config.url.is_none());
        assert!(config.html.is_none());
    }

    #[test]
    fn section_without_user_agent_sets_none() {
        let section = WebViewSection::default();
        let config = WebViewConfig::from(&section);
        assert!(config.user_agent.is_none());
    }
}
