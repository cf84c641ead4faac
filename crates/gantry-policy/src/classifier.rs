//! Outbound URL classification.

/// Marker URL a webview reports when it has nothing to load.
pub const BLANK_URL: &str = "about:blank";

/// Category of an outbound navigation URL.
///
/// Only [`UrlClass::Custom`] proceeds to scheme resolution; the other
/// classes are settled without touching the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlClass {
    /// The view's "no navigation" sentinel.
    Blank,
    /// A `javascript:` URL. Stays in the page context.
    JavaScript,
    /// `http://` or `https://`.
    Web,
    /// Any other scheme (`intent://`, `zxing://`, `ispmobile://`, ...).
    Custom,
}

/// Classify a URL by prefix. Pure; no allocation.
pub fn classify(url: &str, blank_url: &str) -> UrlClass {
    if url == blank_url {
        UrlClass::Blank
    } else if url.starts_with("http://") || url.starts_with("https://") {
        UrlClass::Web
    } else if url.starts_with("javascript:") {
        UrlClass::JavaScript
    } else {
        UrlClass::Custom
    }
}
