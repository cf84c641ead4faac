//! Glue between the wry navigation callback and the decision engine.
//!
//! The callback fires while the WebView is still being built, so nothing
//! here touches a webview handle directly: redirected loads are queued as
//! [`WebViewEvent::LoadRequested`] and serviced by the host loop (or
//! [`crate::manager::WebViewRegistry::pump`]).

use std::sync::Mutex;

use gantry_common::ViewId;
use gantry_policy::{ActivityGateway, NavigationPolicy, UrlSink};
use tracing::debug;

use crate::events::WebViewEvent;

/// Sink that defers view loads through the event queue.
struct QueueSink<'a> {
    events: &'a Mutex<Vec<WebViewEvent>>,
    view_id: ViewId,
}

impl UrlSink for QueueSink<'_> {
    fn load_url(&mut self, url: &str) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(WebViewEvent::LoadRequested {
                view_id: self.view_id,
                url: url.to_string(),
            });
        }
    }
}

/// Run one outbound navigation through the decision engine.
///
/// Returns `true` when the view must not perform its own load (the
/// engine already acted). When a non-intercepted navigation's URL equals
/// `final_url`, a [`WebViewEvent::NavigationCompleted`] event is queued
/// for the host.
pub fn handle_navigation(
    policy: &NavigationPolicy,
    gateway: &dyn ActivityGateway,
    events: &Mutex<Vec<WebViewEvent>>,
    view_id: ViewId,
    final_url: Option<&str>,
    url: &str,
) -> bool {
    let mut sink = QueueSink { events, view_id };
    let outcome = policy.handle(url, gateway, &mut sink);
    debug!(%view_id, url = %url, ?outcome, "navigation decided");

    if let Ok(mut evts) = events.lock() {
        evts.push(WebViewEvent::NavigationDecided {
            view_id,
            url: url.to_string(),
            outcome,
        });
        if !outcome.overrides_load() && final_url == Some(url) {
            evts.push(WebViewEvent::NavigationCompleted {
                view_id,
                url: url.to_string(),
            });
        }
    }

    outcome.overrides_load()
}
