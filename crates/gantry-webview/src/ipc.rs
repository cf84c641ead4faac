//! JS bridge protocol between Rust and the page.
//!
//! Messages flow in both directions:
//! - **Page -> Rust**: JavaScript calls `window.gantry.bridge.send(...)`,
//!   which posts through the `ipc_handler` registered on the WebView.
//! - **Rust -> Page**: Rust injects a script string via
//!   `WebViewHandle::send_to_bridge` / `evaluate_script`. The channel is
//!   one-way; there is no reply path.

use serde::{Deserialize, Serialize};

/// A typed message from the page to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    pub payload: BridgePayload,
}

/// Payload of a bridge message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BridgePayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl BridgeMessage {
    /// Parse a bridge message from a raw JSON string (from postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a simple text message.
    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: BridgePayload::Text(text.into()),
        }
    }

    /// Create a JSON message.
    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: BridgePayload::Json(value),
        }
    }
}

/// JavaScript snippet that sets up the bridge on the page side.
/// Injected as an initialization script into every WebView.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    // Gantry JS bridge
    window.gantry = window.gantry || {};
    window.gantry.bridge = {
        postMessage: function(msg) {
            window.ipc.postMessage(JSON.stringify(msg));
        },
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload || null
            }));
        },
        // Callbacks registered by page code to handle messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the page handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.gantry.bridge._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
