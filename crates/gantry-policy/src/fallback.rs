//! Payment-scheme fallback table.
//!
//! Maps custom schemes used by payment SDKs to their store package ids,
//! consulted when no handler is installed and the intent carries no
//! fallback URL. A constructed value rather than a process-wide static,
//! so hosts can extend or replace it per instance.

use std::collections::BTreeMap;

/// Schemes of payment apps observed in the wild, paired with the store
/// package that installs them. Region-specific entries live here rather
/// than as special cases in the dispatch code.
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("ispmobile", "kvp.jjy.MispAndroid320"),
    ("ahnlabv3mobileplus", "com.ahnlab.v3mobileplus"),
];

/// Case-insensitive scheme → store package id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentFallbackTable {
    entries: BTreeMap<String, String>,
}

impl Default for PaymentFallbackTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PaymentFallbackTable {
    /// Table with the built-in entries.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (scheme, package) in BUILTIN_ENTRIES {
            table.insert(*scheme, *package);
        }
        table
    }

    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace an entry. Schemes are stored lowercase.
    pub fn insert(&mut self, scheme: impl AsRef<str>, package: impl Into<String>) {
        self.entries
            .insert(scheme.as_ref().to_ascii_lowercase(), package.into());
    }

    /// Store package id for a scheme, if known.
    pub fn lookup(&self, scheme: &str) -> Option<&str> {
        self.entries
            .get(&scheme.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Store-listing URL for a package id.
pub fn market_url(package: &str) -> String {
    format!("market://details?id={package}")
}
