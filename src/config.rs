use crate::error::{ClientError, Result};
use std::time::Duration;
use url::Url;

/// Fixed timeout applied to every remote request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for a client, fixed at construction.
///
/// Remote mode requires both a base URL and a customer id; if either is
/// absent the client keeps sources in memory instead. Equality on the pair is
/// what drives instance reuse in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Option<Url>,
    customer_id: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: Option<&str>, customer_id: Option<&str>) -> Result<Self> {
        let base_url = base_url
            .map(|raw| {
                Url::parse(raw)
                    .map_err(|e| ClientError::Configuration(format!("invalid base URL {raw:?}: {e}")))
            })
            .transpose()?;

        Ok(Self {
            base_url,
            customer_id: customer_id.map(str::to_owned),
        })
    }

    /// A configuration with no backend at all.
    pub fn local() -> Self {
        Self {
            base_url: None,
            customer_id: None,
        }
    }

    /// Returns the base URL and customer id when both are configured.
    pub fn remote(&self) -> Option<(&Url, &str)> {
        match (&self.base_url, &self.customer_id) {
            (Some(url), Some(customer)) => Some((url, customer.as_str())),
            _ => None,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.remote().is_some()
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }
}

/// Publishable credential issued by the payment provider.
///
/// Sample configurations ship with a `#`-placeholder value; fetching sources
/// refuses to proceed until it has been replaced with a real key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishableKey(String);

impl PublishableKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn validate(&self) -> Result<()> {
        if self.0.trim().is_empty() {
            return Err(ClientError::Configuration(
                "publishable key is empty; supply your account's test key".to_string(),
            ));
        }
        if self.0.contains('#') {
            return Err(ClientError::Configuration(
                "publishable key is still the placeholder; replace it with your account's test key"
                    .to_string(),
            ));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_requires_both_fields() {
        let both = ClientConfig::new(Some("https://merchant.example"), Some("cus_1")).unwrap();
        assert!(both.is_remote());

        let url_only = ClientConfig::new(Some("https://merchant.example"), None).unwrap();
        assert!(!url_only.is_remote());

        let customer_only = ClientConfig::new(None, Some("cus_1")).unwrap();
        assert!(!customer_only.is_remote());

        assert!(!ClientConfig::local().is_remote());
    }

    #[test]
    fn test_invalid_base_url_is_a_configuration_error() {
        let result = ClientConfig::new(Some("not a url"), Some("cus_1"));
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn test_placeholder_key_fails_validation() {
        assert!(PublishableKey::new("pk_test_abc123").validate().is_ok());
        assert!(matches!(
            PublishableKey::new("pk_test_####").validate(),
            Err(ClientError::Configuration(_))
        ));
        assert!(matches!(
            PublishableKey::new("  ").validate(),
            Err(ClientError::Configuration(_))
        ));
    }
}
