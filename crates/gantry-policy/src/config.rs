//! Policy configuration.

use serde::{Deserialize, Serialize};

use crate::allowlist::OriginAllowlist;
use crate::classifier::BLANK_URL;
use crate::fallback::PaymentFallbackTable;

/// Which interception policy governs web URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyMode {
    /// Classify by scheme: web and javascript URLs stay in the view,
    /// custom schemes go through resolution.
    #[default]
    SchemeBased,
    /// Legacy ordering: forced-intercept prefixes first, then the origin
    /// allow-list, then the launch path for everything else. Non-intent
    /// URLs on the launch path are loaded back into the view.
    PrefixAllowlist,
}

/// Immutable per-view policy configuration. Built once, read on every
/// navigation; never mutated between requests.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    pub mode: PolicyMode,
    /// The view's "no navigation" sentinel.
    pub blank_url: String,
    /// URL prefixes always handed to the launch path, even for web URLs.
    pub intercept_prefixes: Vec<String>,
    /// Origins permitted to navigate in-view without interception.
    /// Consulted only in [`PolicyMode::PrefixAllowlist`].
    pub allowlist: OriginAllowlist,
    /// Marker schemes payment SDKs use to wrap an inner https URL.
    /// `<marker>://<inner-url>` short-circuits to loading the inner URL.
    pub wrap_markers: Vec<String>,
    pub payment_fallbacks: PaymentFallbackTable,
}

impl PolicyConfig {
    /// Scheme-based policy with the default blank sentinel and the
    /// built-in payment table.
    pub fn new() -> Self {
        Self {
            mode: PolicyMode::SchemeBased,
            blank_url: BLANK_URL.to_string(),
            intercept_prefixes: Vec::new(),
            allowlist: OriginAllowlist::default(),
            wrap_markers: Vec::new(),
            payment_fallbacks: PaymentFallbackTable::builtin(),
        }
    }
}

// A derived Default would leave blank_url empty, losing the sentinel.
impl Default for PolicyConfig {
    fn default() -> Self {
        Self::new()
    }
}
