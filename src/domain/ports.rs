use super::customer::CustomerRecord;
use super::source::{ChargeAmount, SourceId};
use crate::error::Result;
use async_trait::async_trait;

/// Operations a configured merchant backend must provide.
#[async_trait]
pub trait MerchantGateway: Send + Sync {
    async fn charge(&self, source: &SourceId, amount: ChargeAmount) -> Result<()>;
    async fn fetch_sources(&self) -> Result<CustomerRecord>;
    async fn select_default_source(&self, source: &SourceId) -> Result<()>;
    async fn attach_source(&self, source: &SourceId) -> Result<()>;
}

pub type GatewayBox = Box<dyn MerchantGateway>;
