//! Origin allow-list matching.
//!
//! Patterns are regular expressions over canonical `scheme://authority`
//! strings. A match must cover the whole canonical string; partial hits do
//! not count.

use regex::Regex;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum AllowlistError {
    #[error("invalid allowlist pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Compiled origin allow-list. Set once at configuration time, read on
/// every navigation; never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct OriginAllowlist {
    patterns: Vec<Regex>,
}

impl OriginAllowlist {
    /// Compile a set of origin patterns. Fails on the first bad pattern.
    pub fn compile<I, S>(patterns: I) -> Result<Self, AllowlistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            // Anchor so the pattern must match the full origin string.
            let anchored = format!("^(?:{pattern})$");
            let regex = Regex::new(&anchored).map_err(|source| AllowlistError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            compiled.push(regex);
        }
        Ok(Self { patterns: compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether any pattern fully matches the URL's canonical origin.
    pub fn is_allowed(&self, url: &str) -> bool {
        let origin = canonical_origin(url);
        self.patterns.iter().any(|p| p.is_match(&origin))
    }
}

/// Canonical `<scheme>://<authority>` form of a URL, with missing
/// components normalized to the empty string. Unparseable input yields
/// `"://"`, which no sane pattern matches.
pub fn canonical_origin(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let mut authority = String::new();
            if let Some(host) = parsed.host_str() {
                authority.push_str(host);
                if let Some(port) = parsed.port() {
                    authority.push(':');
                    authority.push_str(&port.to_string());
                }
            }
            format!("{}://{}", parsed.scheme(), authority)
        }
        Err(_) => "://".to_string(),
    }
}
