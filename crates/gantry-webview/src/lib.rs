//! WebView bridge between embedded web content and the host shell.
//!
//! Wraps the `wry` crate to provide:
//! - Managed WebView instances per hosted view
//! - One-way JS bridge (Rust -> page) plus page -> Rust messages
//! - Navigation interception driven by `gantry-policy`
//! - Event emission back to the host (navigation completed, bridge
//!   messages, title changes)

pub mod events;
pub mod ipc;
pub mod manager;
pub mod navigation;

pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{BridgeMessage, BridgePayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
pub use navigation::handle_navigation;
