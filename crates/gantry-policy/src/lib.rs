//! Navigation-interception decision engine for embedded webviews.
//!
//! Given an outbound URL from a hosted webview, decides whether to:
//! - let the view load it,
//! - hand it to the host OS's activity-resolution mechanism,
//! - redirect to a store listing for a missing app,
//! - load a fallback URL into the view, or
//! - drop it silently.
//!
//! The engine is pure and host-agnostic: platform calls (activity
//! resolution, activity launch, loading a URL into the view) happen behind
//! the [`ActivityGateway`] and [`UrlSink`] traits, so the whole decision
//! path is unit-testable without a running webview.

pub mod allowlist;
pub mod classifier;
pub mod config;
pub mod decide;
pub mod engine;
pub mod fallback;
pub mod gateway;
pub mod intent;
pub mod outcome;

pub use allowlist::{canonical_origin, AllowlistError, OriginAllowlist};
pub use classifier::{classify, UrlClass, BLANK_URL};
pub use config::{PolicyConfig, PolicyMode};
pub use decide::{decide, Decision};
pub use engine::NavigationPolicy;
pub use fallback::{market_url, PaymentFallbackTable};
pub use gateway::{ActivityGateway, HandlerInfo, LaunchError, LaunchRequest, NoopGateway};
pub use intent::{IntentParseError, IntentUri, FALLBACK_URL_EXTRA, INTENT_URL_PREFIX};
pub use outcome::{execute, DispatchOutcome, UrlSink};
