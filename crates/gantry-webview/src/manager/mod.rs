//! WebView lifecycle management.
//!
//! `WebViewManager` creates, tracks, and destroys `wry::WebView`
//! instances, one per hosted view. Every instance shares the same
//! navigation policy and activity gateway, set at construction.

use std::sync::{Arc, Mutex};

use gantry_policy::{ActivityGateway, NavigationPolicy, NoopGateway};

use crate::events::WebViewEvent;

mod handle;
mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Manages all WebView instances for the host shell.
pub struct WebViewManager {
    /// Event sink, drained by the host loop.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    pub(crate) policy: Arc<NavigationPolicy>,
    pub(crate) gateway: Arc<dyn ActivityGateway + Send + Sync>,
}

impl WebViewManager {
    /// Create a manager with the given policy and activity gateway.
    pub fn new(
        policy: NavigationPolicy,
        gateway: Arc<dyn ActivityGateway + Send + Sync>,
    ) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            policy: Arc::new(policy),
            gateway,
        }
    }

    /// Manager for hosts without native activity resolution.
    pub fn without_gateway(policy: NavigationPolicy) -> Self {
        Self::new(policy, Arc::new(NoopGateway))
    }

    pub fn policy(&self) -> &NavigationPolicy {
        &self.policy
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::without_gateway(NavigationPolicy::default())
    }
}
