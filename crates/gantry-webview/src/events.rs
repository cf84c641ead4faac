//! WebView event types.

use gantry_common::ViewId;
use gantry_policy::DispatchOutcome;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance, drained by the host loop.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        view_id: ViewId,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { view_id: ViewId, title: String },
    /// A message arrived from the page over the bridge.
    BridgeMessage { view_id: ViewId, body: String },
    /// The decision engine settled an outbound navigation.
    NavigationDecided {
        view_id: ViewId,
        url: String,
        outcome: DispatchOutcome,
    },
    /// A non-intercepted navigation reached the configured final URL.
    NavigationCompleted { view_id: ViewId, url: String },
    /// The engine wants this URL loaded into the view (fallback or
    /// unwrapped payment URL). Serviced by `WebViewRegistry::pump`.
    LoadRequested { view_id: ViewId, url: String },
    /// WebView was closed / destroyed.
    Closed { view_id: ViewId },
}
