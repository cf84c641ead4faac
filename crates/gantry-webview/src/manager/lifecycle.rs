use std::sync::Arc;

use gantry_common::ViewId;
use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::BRIDGE_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: ViewId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        // Start building the WebView
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(false);

        // Initialization script for the JS bridge
        builder = builder.with_initialization_script(BRIDGE_INIT_SCRIPT);

        // User agent
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // Bridge handler: page -> Rust
        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view_id);

        // Page load handler
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view_id);

        // Title change handler
        builder = Self::attach_title_handler(builder, Arc::clone(&events), view_id);

        // Navigation handler drives the decision engine
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&self.policy),
            Arc::clone(&self.gateway),
            Arc::clone(&events),
            view_id,
            config.final_url.clone(),
            config.allow_file_access_from_file_urls,
        );

        // Set initial content
        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        // Build as child WebView
        let webview = builder.build_as_child(window)?;

        debug!(%view_id, url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            view_id,
            current_url: initial_url,
            current_title: String::new(),
        })
    }
}
