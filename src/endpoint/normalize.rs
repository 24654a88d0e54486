//! URL normalization and validation.
//!
//! Every URL that enters an [`EndpointConfiguration`](super::EndpointConfiguration)
//! passes through [`normalize_url`]. The only per-field difference is whether
//! trailing slashes are stripped.

use url::Url;

use crate::error::{RehostError, Result};

/// Whether trailing `/` characters are removed during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingSlash {
    /// Leave the value as written (realtime channel endpoints).
    Keep,
    /// Remove every trailing `/` (roots and plain HTTP services).
    Strip,
}

/// Trim `raw`, optionally strip trailing slashes, and require an absolute URL.
///
/// Returns the normalized text rather than the parser's serialization, so
/// `https://x.tld` stays `https://x.tld` instead of gaining a `/`.
///
/// # Errors
///
/// Returns `InvalidOverride` naming `field` when the value is blank or does
/// not parse as an absolute URL.
pub fn normalize_url(field: &'static str, raw: &str, slash: TrailingSlash) -> Result<String> {
    let trimmed = raw.trim();
    let normalized = match slash {
        TrailingSlash::Keep => trimmed,
        TrailingSlash::Strip => trimmed.trim_end_matches('/'),
    };

    if normalized.is_empty() || Url::parse(normalized).is_err() {
        return Err(not_absolute(field));
    }

    Ok(normalized.to_string())
}

/// Require an already-normalized URL to use the `https` scheme.
pub fn require_https(field: &'static str, url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|_| not_absolute(field))?;
    if parsed.scheme() != "https" {
        return Err(RehostError::invalid(
            field,
            format!("{} must use https", field),
        ));
    }
    Ok(())
}

/// Join an API root and a derivation suffix.
pub fn join_suffix(root: &str, suffix: &str) -> String {
    format!("{}{}", root, suffix)
}

fn not_absolute(field: &'static str) -> RehostError {
    RehostError::invalid(field, format!("{} must be an absolute URL", field))
}
