use std::sync::{Arc, Mutex};

use gantry_common::ViewId;
use gantry_policy::{ActivityGateway, NavigationPolicy};
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::navigation::handle_navigation;

use super::WebViewManager;

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the bridge body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    %view_id,
                    body_len = body.len(),
                    "bridge message rejected: invalid JSON"
                );
                return;
            }

            debug!(%view_id, body_len = body.len(), "bridge message from page");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::BridgeMessage { view_id, body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%view_id, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad {
                    view_id,
                    state,
                    url,
                });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(%view_id, title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::TitleChanged { view_id, title });
            }
        })
    }

    /// Attach the navigation handler that feeds every outbound navigation
    /// through the decision engine. Returning `false` from the wry callback
    /// cancels the view's own load.
    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        policy: Arc<NavigationPolicy>,
        gateway: Arc<dyn ActivityGateway + Send + Sync>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: ViewId,
        final_url: Option<String>,
        allow_file_access: bool,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            // file:// is gated by an explicit opt-in, before the engine runs
            if !allow_file_access && url.starts_with("file://") {
                warn!(%view_id, url = %url, "navigation blocked: file access disabled");
                return false;
            }

            let intercepted = handle_navigation(
                &policy,
                gateway.as_ref(),
                &events,
                view_id,
                final_url.as_deref(),
                &url,
            );
            !intercepted
        })
    }
}
