use crate::config::{ClientConfig, PublishableKey};
use crate::domain::ports::GatewayBox;
use crate::domain::source::{ChargeAmount, PaymentSource, SourceId, SourceToken};
use crate::error::{ClientError, Result};
use tokio::sync::RwLock;

/// In-memory view of the customer's saved sources.
///
/// Local mode mutates this directly and treats it as the sole source of
/// truth. Remote mode only ever overwrites it wholesale from the last
/// successful fetch; local mutations are never merged in.
#[derive(Debug, Default, Clone)]
struct ClientState {
    default_source: Option<PaymentSource>,
    sources: Vec<PaymentSource>,
}

/// What a [`CustomerSourceClient::fetch_sources`] call resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSources {
    pub default_source_id: Option<SourceId>,
    pub sources: Vec<PaymentSource>,
}

/// Backend adapter for the checkout flow.
///
/// With a configured gateway the merchant backend is authoritative and every
/// operation becomes a remote call; without one the client keeps sources in
/// memory so the flow stays usable against no backend at all. Each operation
/// resolves exactly once with a `Result`; state sits behind an async lock so
/// a multi-threaded embedding cannot race local-mode mutations.
pub struct CustomerSourceClient {
    config: ClientConfig,
    publishable_key: Option<PublishableKey>,
    gateway: Option<GatewayBox>,
    state: RwLock<ClientState>,
}

impl CustomerSourceClient {
    pub(crate) fn new(
        config: ClientConfig,
        publishable_key: Option<PublishableKey>,
        gateway: Option<GatewayBox>,
    ) -> Self {
        Self {
            config,
            publishable_key,
            gateway,
            state: RwLock::new(ClientState::default()),
        }
    }

    /// A client with no backend; sources live in memory only.
    pub fn local(publishable_key: Option<PublishableKey>) -> Self {
        Self::new(ClientConfig::local(), publishable_key, None)
    }

    /// A client driving the given gateway. The config should describe the
    /// same backend; the registry keeps the two consistent.
    pub fn with_gateway(
        config: ClientConfig,
        publishable_key: Option<PublishableKey>,
        gateway: GatewayBox,
    ) -> Self {
        Self::new(config, publishable_key, Some(gateway))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Charges `amount` against the given token.
    ///
    /// Without a backend there is nothing to charge; the call succeeds with
    /// no side effects. Local state is never touched either way.
    pub async fn charge(&self, token: &SourceToken, amount: ChargeAmount) -> Result<()> {
        match &self.gateway {
            Some(gateway) => gateway.charge(token.id(), amount).await,
            None => {
                log::debug!("charge of {} ignored: no backend configured", token.id());
                Ok(())
            }
        }
    }

    /// Returns the customer's default source id and saved source list.
    ///
    /// Fails closed before any network traffic when the publishable key is
    /// missing or still a placeholder. In remote mode a successful response
    /// also overwrites the cached state.
    pub async fn fetch_sources(&self) -> Result<CustomerSources> {
        match &self.publishable_key {
            Some(key) => key.validate()?,
            None => {
                return Err(ClientError::Configuration(
                    "publishable key is not configured; supply your account's test key"
                        .to_string(),
                ));
            }
        }

        match &self.gateway {
            Some(gateway) => {
                let record = gateway.fetch_sources().await?;

                let mut state = self.state.write().await;
                state.default_source = record.default_source.clone();
                state.sources = record.sources.clone();

                Ok(CustomerSources {
                    default_source_id: record.default_source.map(|card| card.id),
                    sources: record.sources,
                })
            }
            None => {
                let state = self.state.read().await;
                Ok(CustomerSources {
                    default_source_id: state.default_source.as_ref().map(|card| card.id.clone()),
                    sources: state.sources.clone(),
                })
            }
        }
    }

    /// Makes the given token's card the customer's default source.
    ///
    /// In local mode a token without a card payload leaves the default
    /// unchanged. In remote mode a success does not refresh the cached
    /// state; callers re-fetch to observe the change.
    pub async fn select_default_source(&self, token: &SourceToken) -> Result<()> {
        match &self.gateway {
            Some(gateway) => gateway.select_default_source(token.id()).await,
            None => {
                if let Some(card) = token.card() {
                    self.state.write().await.default_source = Some(card.clone());
                }
                Ok(())
            }
        }
    }

    /// Attaches the token's card to the customer's saved sources.
    ///
    /// In local mode the card is appended and becomes the default; tokens
    /// without a card payload are ignored. Remote mode behaves like
    /// [`Self::select_default_source`]: no state refresh on success.
    pub async fn attach_source(&self, token: &SourceToken) -> Result<()> {
        match &self.gateway {
            Some(gateway) => gateway.attach_source(token.id()).await,
            None => {
                if let Some(card) = token.card() {
                    let mut state = self.state.write().await;
                    state.sources.push(card.clone());
                    state.default_source = Some(card.clone());
                }
                Ok(())
            }
        }
    }

    /// Snapshot of the current default source.
    pub async fn default_source(&self) -> Option<PaymentSource> {
        self.state.read().await.default_source.clone()
    }

    /// Snapshot of the currently known sources.
    pub async fn sources(&self) -> Vec<PaymentSource> {
        self.state.read().await.sources.clone()
    }
}
