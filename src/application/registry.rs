use crate::application::client::CustomerSourceClient;
use crate::config::{ClientConfig, PublishableKey};
use crate::domain::ports::GatewayBox;
use crate::error::Result;
use crate::infrastructure::http::HttpGateway;
use std::sync::Arc;

/// Hands out shared client instances, one live configuration at a time.
///
/// Owned by the application root and passed by reference to consumers.
/// Keeps the client for the most recently requested (base URL, customer id)
/// pair: asking for the same pair again returns the same instance, any other
/// pair replaces it. Not thread-safe by contract; callers serialize access.
pub struct ClientRegistry {
    publishable_key: Option<PublishableKey>,
    current: Option<Arc<CustomerSourceClient>>,
}

impl ClientRegistry {
    pub fn new(publishable_key: Option<PublishableKey>) -> Self {
        Self {
            publishable_key,
            current: None,
        }
    }

    pub fn get_or_create(
        &mut self,
        base_url: Option<&str>,
        customer_id: Option<&str>,
    ) -> Result<Arc<CustomerSourceClient>> {
        let config = ClientConfig::new(base_url, customer_id)?;

        if let Some(client) = &self.current
            && *client.config() == config
        {
            return Ok(Arc::clone(client));
        }

        let gateway: Option<GatewayBox> = match config.remote() {
            Some((url, customer)) => Some(Box::new(HttpGateway::new(url.clone(), customer)?)),
            None => None,
        };

        log::debug!(
            "creating client for base_url={:?} customer={:?}",
            config.base_url().map(|url| url.as_str()),
            config.customer_id()
        );
        let client = Arc::new(CustomerSourceClient::new(
            config,
            self.publishable_key.clone(),
            gateway,
        ));
        self.current = Some(Arc::clone(&client));
        Ok(client)
    }
}
