//! Masking of credential values in displayed output.

use crate::endpoint::EndpointConfiguration;

/// Replaces credential fields with a mask before they are displayed.
///
/// Masking works on whole fields, never on rendered text, so a short secret
/// that happens to occur inside a URL leaves that URL intact.
///
/// # Example
///
/// ```
/// use rehost::secrets::SecretMasker;
///
/// let masker = SecretMasker::new();
/// assert_eq!(masker.mask_value("hunter2"), "[REDACTED]");
/// assert_eq!(masker.mask_value(""), "");
/// ```
#[derive(Debug, Clone)]
pub struct SecretMasker {
    mask: String,
}

impl Default for SecretMasker {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretMasker {
    /// Masker using `[REDACTED]`.
    pub fn new() -> Self {
        Self {
            mask: "[REDACTED]".to_string(),
        }
    }

    /// Mask a whole value for display; blank stays blank.
    pub fn mask_value(&self, value: &str) -> String {
        if value.trim().is_empty() {
            String::new()
        } else {
            self.mask.clone()
        }
    }

    /// Copy of `config` with the client secret masked.
    pub fn redact(&self, config: &EndpointConfiguration) -> EndpointConfiguration {
        let mut redacted = config.clone();
        redacted.api_client_secret = config
            .api_client_secret
            .as_deref()
            .map(|secret| self.mask_value(secret));
        redacted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_value_keeps_blank() {
        let masker = SecretMasker::new();
        assert_eq!(masker.mask_value(""), "");
        assert_eq!(masker.mask_value("  "), "");
        assert_eq!(masker.mask_value("s3cret"), "[REDACTED]");
    }

    #[test]
    fn redact_touches_only_the_secret() {
        let mut config = EndpointConfiguration::vendor();
        config.api_url = "https://x.tld".to_string();
        config.api_client_id = Some("x".to_string());
        config.api_client_secret = Some("x".to_string());

        let redacted = SecretMasker::new().redact(&config);

        assert_eq!(redacted.api_url, "https://x.tld");
        assert_eq!(redacted.api_client_id.as_deref(), Some("x"));
        assert_eq!(redacted.api_client_secret.as_deref(), Some("[REDACTED]"));
    }

    #[test]
    fn redact_without_secret_is_unchanged() {
        let config = EndpointConfiguration::vendor();
        assert_eq!(SecretMasker::new().redact(&config), config);
    }
}
