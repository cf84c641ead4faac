//! The pure decision function.
//!
//! `decide` maps one outbound URL to one [`Decision`]. It queries the
//! host's activity-resolution capability but performs no side effects;
//! executing the decision is the adapter's job (see [`crate::outcome`]).

use tracing::debug;

use crate::classifier::{classify, UrlClass};
use crate::config::{PolicyConfig, PolicyMode};
use crate::fallback::market_url;
use crate::gateway::{ActivityGateway, LaunchRequest};
use crate::intent::{IntentUri, INTENT_URL_PREFIX};

/// What the adapter should do with one navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Not intercepted; the view performs the load itself.
    Allow,
    /// Load this URL into the view instead of the requested one.
    LoadInView(String),
    /// Start a native activity. Always carries the stripped,
    /// ready-to-launch request.
    Launch(LaunchRequest),
    /// Open the store listing for an app that is not installed.
    StoreRedirect { package: String, url: String },
    /// Intercept and do nothing.
    Drop,
}

/// Decide what to do with an outbound URL. Pure except for the
/// `gateway.resolve` query; exactly one decision per call.
pub fn decide(url: &str, config: &PolicyConfig, gateway: &dyn ActivityGateway) -> Decision {
    match config.mode {
        PolicyMode::SchemeBased => decide_scheme_based(url, config, gateway),
        PolicyMode::PrefixAllowlist => decide_prefix_allowlist(url, config, gateway),
    }
}

fn decide_scheme_based(
    url: &str,
    config: &PolicyConfig,
    gateway: &dyn ActivityGateway,
) -> Decision {
    match classify(url, &config.blank_url) {
        UrlClass::Blank | UrlClass::JavaScript => Decision::Allow,
        UrlClass::Web => {
            if matches_intercept_prefix(url, config) {
                launch_path(url, config, gateway, false)
            } else {
                Decision::Allow
            }
        }
        UrlClass::Custom => launch_path(url, config, gateway, false),
    }
}

fn decide_prefix_allowlist(
    url: &str,
    config: &PolicyConfig,
    gateway: &dyn ActivityGateway,
) -> Decision {
    if url == config.blank_url {
        return Decision::Allow;
    }
    if matches_intercept_prefix(url, config) {
        return launch_path(url, config, gateway, true);
    }
    if config.allowlist.is_allowed(url) {
        return Decision::Allow;
    }
    launch_path(url, config, gateway, true)
}

fn matches_intercept_prefix(url: &str, config: &PolicyConfig) -> bool {
    config
        .intercept_prefixes
        .iter()
        .any(|prefix| url.starts_with(prefix.as_str()))
}

/// Common launch path: unwrap payment-SDK markers, parse intent URLs,
/// otherwise treat the URL as a bare external scheme.
fn launch_path(
    url: &str,
    config: &PolicyConfig,
    gateway: &dyn ActivityGateway,
    legacy: bool,
) -> Decision {
    if let Some(inner) = unwrap_marker(url, &config.wrap_markers) {
        return Decision::LoadInView(inner);
    }

    if url.starts_with(INTENT_URL_PREFIX) {
        return match IntentUri::parse(url) {
            Ok(intent) => dispatch_intent(&intent, config, gateway),
            Err(error) => {
                debug!(url = %url, %error, "unparseable intent url");
                if legacy {
                    // The legacy policy hands the raw URL back to the view.
                    Decision::LoadInView(url.to_string())
                } else {
                    Decision::Allow
                }
            }
        };
    }

    if legacy {
        return Decision::LoadInView(url.to_string());
    }

    dispatch_external(url, config, gateway)
}

/// Dispatch order for a parsed intent descriptor.
fn dispatch_intent(
    intent: &IntentUri,
    config: &PolicyConfig,
    gateway: &dyn ActivityGateway,
) -> Decision {
    // Resolve against the stripped request so a matching handler is one
    // the page would be allowed to launch.
    let request = LaunchRequest::from(intent).for_launch();
    if gateway.resolve(&request).is_some() {
        return Decision::Launch(request);
    }

    if let Some(fallback) = intent.fallback_url() {
        return Decision::LoadInView(fallback.to_string());
    }

    if let Some(scheme) = intent.scheme.as_deref() {
        if let Some(package) = config.payment_fallbacks.lookup(scheme) {
            return Decision::StoreRedirect {
                package: package.to_string(),
                url: market_url(package),
            };
        }
    }

    if let Some(package) = intent.package.as_deref() {
        return Decision::StoreRedirect {
            package: package.to_string(),
            url: market_url(package),
        };
    }

    Decision::Drop
}

/// A bare custom-scheme URL (`zxing://...`, `ispmobile://...`): no
/// fallback URL or package to fall back on, only the payment table.
fn dispatch_external(url: &str, config: &PolicyConfig, gateway: &dyn ActivityGateway) -> Decision {
    let request = LaunchRequest::view(url).for_launch();
    if gateway.resolve(&request).is_some() {
        return Decision::Launch(request);
    }

    if let Some(scheme) = request.scheme.as_deref() {
        if let Some(package) = config.payment_fallbacks.lookup(scheme) {
            return Decision::StoreRedirect {
                package: package.to_string(),
                url: market_url(package),
            };
        }
    }

    Decision::Drop
}

/// Strip a configured `<marker>://` prefix, exposing the wrapped URL.
fn unwrap_marker(url: &str, markers: &[String]) -> Option<String> {
    for marker in markers {
        if let Some(inner) = url
            .strip_prefix(marker.as_str())
            .and_then(|rest| rest.strip_prefix("://"))
        {
            return Some(inner.to_string());
        }
    }
    None
}
