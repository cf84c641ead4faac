//! Structured-intent URI parsing.
//!
//! Parses `intent://<data>#Intent;key=value;...;end` URLs into an
//! [`IntentUri`] descriptor. Parsing is the only fallible step of the
//! decision path and its failure is always recovered by the caller; a
//! malformed URL just means "do not intercept".

use std::collections::BTreeMap;

/// Prefix that marks a structured-intent URL.
pub const INTENT_URL_PREFIX: &str = "intent://";

/// String-extra key carrying the web fallback URL inside an intent URI.
pub const FALLBACK_URL_EXTRA: &str = "browser_fallback_url";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentParseError {
    #[error("not an intent url")]
    NotIntentUrl,
    #[error("missing '#Intent;' declaration")]
    MissingDeclaration,
    #[error("declaration not terminated with ';end'")]
    Unterminated,
    #[error("malformed intent parameter '{0}'")]
    MalformedParameter(String),
}

/// Parsed form of an `intent://` URL. Immutable after parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentUri {
    /// Target scheme declared by `scheme=`.
    pub scheme: Option<String>,
    /// Explicit package declared by `package=`.
    pub package: Option<String>,
    /// Action declared by `action=`.
    pub action: Option<String>,
    /// Explicit component declared by `component=`. Stripped before launch.
    pub component: Option<String>,
    /// Whether the declaration carried a `SEL` selector marker.
    pub has_selector: bool,
    /// Data URI reconstructed from the declared scheme and the part
    /// between `intent:` and `#Intent;`.
    pub data: Option<String>,
    /// String extras (`S.<name>=<percent-encoded value>`), decoded.
    pub extras: BTreeMap<String, String>,
}

impl IntentUri {
    /// Parse an `intent:` URL.
    pub fn parse(url: &str) -> Result<Self, IntentParseError> {
        let rest = url
            .strip_prefix("intent:")
            .ok_or(IntentParseError::NotIntentUrl)?;
        let (body, declaration) = rest
            .split_once("#Intent;")
            .ok_or(IntentParseError::MissingDeclaration)?;
        let declaration = declaration
            .strip_suffix("end")
            .ok_or(IntentParseError::Unterminated)?;
        // After stripping "end" the remainder must be empty or end at a
        // parameter boundary ("...;myend" is not a terminator).
        if !declaration.is_empty() && !declaration.ends_with(';') {
            return Err(IntentParseError::Unterminated);
        }

        let mut parsed = Self::default();
        for segment in declaration.split(';').filter(|s| !s.is_empty()) {
            if segment == "SEL" {
                parsed.has_selector = true;
                continue;
            }
            if !segment.contains('=') {
                return Err(IntentParseError::MalformedParameter(segment.to_string()));
            }
            let Some((key, value)) = decode_parameter(segment) else {
                return Err(IntentParseError::MalformedParameter(segment.to_string()));
            };
            match key.as_str() {
                "scheme" => parsed.scheme = Some(value),
                "package" => parsed.package = Some(value),
                "action" => parsed.action = Some(value),
                "component" => parsed.component = Some(value),
                key if key.starts_with("S.") => {
                    parsed.extras.insert(key["S.".len()..].to_string(), value);
                }
                // category, launchFlags and non-string typed extras are
                // recognized syntax but not carried on the descriptor.
                _ => {}
            }
        }

        if let Some(scheme) = &parsed.scheme {
            if !body.is_empty() {
                parsed.data = Some(format!("{scheme}:{body}"));
            }
        }

        Ok(parsed)
    }

    /// The web fallback URL, if the intent carries one.
    pub fn fallback_url(&self) -> Option<&str> {
        self.extras.get(FALLBACK_URL_EXTRA).map(String::as_str)
    }
}

/// Split a `key=value` declaration segment on the first `=` and
/// percent-decode both sides. Plain percent-decoding only: `+` stays a
/// literal plus and `&` has no special meaning here, unlike form decoding.
fn decode_parameter(segment: &str) -> Option<(String, String)> {
    let (key, value) = segment.split_once('=')?;
    let key = percent_encoding::percent_decode_str(key).decode_utf8().ok()?;
    let value = percent_encoding::percent_decode_str(value).decode_utf8().ok()?;
    Some((key.into_owned(), value.into_owned()))
}
