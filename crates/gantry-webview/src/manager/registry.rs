use std::collections::HashMap;

use gantry_common::ViewId;
use tracing::{debug, warn};
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// A registry that maps view IDs to WebView handles.
/// This is a higher-level convenience over `WebViewManager` for
/// managing the full lifecycle.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<ViewId, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a WebView for a view and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        view_id: ViewId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(view_id, window, bounds, config)?;
        self.handles.insert(view_id, handle);
        Ok(())
    }

    /// Get a handle to a WebView by view ID.
    pub fn get(&self, view_id: ViewId) -> Option<&WebViewHandle> {
        self.handles.get(&view_id)
    }

    /// Get a mutable handle to a WebView by view ID.
    pub fn get_mut(&mut self, view_id: ViewId) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(&view_id)
    }

    /// Destroy a WebView by view ID.
    pub fn destroy(&mut self, view_id: ViewId) -> bool {
        if self.handles.remove(&view_id).is_some() {
            debug!(%view_id, "WebView destroyed");
            if let Ok(mut evts) = self.manager.events.lock() {
                evts.push(WebViewEvent::Closed { view_id });
            }
            true
        } else {
            false
        }
    }

    /// Get all active view IDs with WebViews.
    pub fn active_views(&self) -> Vec<ViewId> {
        self.handles.keys().copied().collect()
    }

    /// Drain all pending events from all WebViews.
    ///
    /// Deferred view loads (`LoadRequested`) are serviced here, since the
    /// navigation callback fires before the handle exists; serviced events
    /// are consumed, everything else is returned to the caller.
    pub fn pump(&mut self) -> Vec<WebViewEvent> {
        let drained = self.manager.drain_events();
        let mut remaining = Vec::with_capacity(drained.len());

        for event in drained {
            match event {
                WebViewEvent::LoadRequested { view_id, ref url } => {
                    match self.handles.get_mut(&view_id) {
                        Some(handle) => {
                            if let Err(e) = handle.load_url(url) {
                                warn!(%view_id, url = %url, error = %e, "deferred load failed");
                            }
                        }
                        None => {
                            warn!(%view_id, url = %url, "deferred load for unknown view");
                        }
                    }
                }
                other => remaining.push(other),
            }
        }

        remaining
    }

    /// Drain all pending events without servicing deferred loads.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all active WebViews. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        let view_ids = self.active_views();
        for view_id in view_ids {
            self.destroy(view_id);
        }
    }

    /// How many WebViews are active.
    pub fn count(&self) -> usize {
        self.handles.len()
    }
}
