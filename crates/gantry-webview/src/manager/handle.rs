use gantry_common::ViewId;
use wry::WebView;

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, evaluate JS, resize, etc.).
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// The view this WebView belongs to.
    pub(super) view_id: ViewId,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    /// Current title.
    pub(super) current_title: String,
}

impl WebViewHandle {
    /// Get the view ID.
    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Get the current title.
    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Load raw HTML content.
    pub fn load_html(&mut self, html: &str) -> Result<(), wry::Error> {
        self.current_url = "about:blank".to_string();
        self.webview.load_html(html)
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Inject a raw script string into the page. One-way channel; the
    /// page cannot reply through this call.
    pub fn send_to_bridge(&self, script: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(script)
    }

    /// Send a typed bridge message to the page handler.
    pub fn send_bridge_message(
        &self,
        kind: &str,
        payload: &serde_json::Value,
    ) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the WebView.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Focus the WebView.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Update the tracked title.
    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}
