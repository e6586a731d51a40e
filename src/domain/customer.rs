use crate::domain::source::{CardBrand, FundingType, PaymentSource, SourceId};
use crate::error::{ClientError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Top-level shape of the customer payload.
///
/// `cards` is required and its absence fails the whole payload. Individual
/// entries are validated separately so one malformed card cannot poison the
/// batch.
#[derive(Debug, Deserialize)]
struct RawCustomer {
    #[serde(default)]
    selected_card: Option<Value>,
    cards: Vec<Value>,
}

/// Strict per-card schema: every field required, mistyped fields rejected.
#[derive(Debug, Deserialize)]
struct RawCard {
    id: String,
    brand: String,
    last4: String,
    exp_month: u32,
    exp_year: u32,
    funding: String,
}

impl From<RawCard> for PaymentSource {
    fn from(raw: RawCard) -> Self {
        Self {
            id: SourceId::new(raw.id),
            brand: CardBrand::from_wire(&raw.brand),
            last4: raw.last4,
            exp_month: raw.exp_month,
            exp_year: raw.exp_year,
            funding: FundingType::from_wire(&raw.funding),
        }
    }
}

/// A customer's saved sources as returned by the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerRecord {
    pub default_source: Option<PaymentSource>,
    pub sources: Vec<PaymentSource>,
}

impl CustomerRecord {
    /// Decodes the backend's customer payload.
    ///
    /// Fails only when the top-level shape is wrong. Malformed card entries
    /// are dropped from the list; a malformed `selected_card` degrades to no
    /// default.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let raw: RawCustomer = serde_json::from_slice(body)
            .map_err(|e| ClientError::Decode(format!("malformed customer payload: {e}")))?;

        let default_source = raw.selected_card.and_then(decode_card);
        let sources = raw.cards.into_iter().filter_map(decode_card).collect();

        Ok(Self {
            default_source,
            sources,
        })
    }
}

fn decode_card(value: Value) -> Option<PaymentSource> {
    match serde_json::from_value::<RawCard>(value) {
        Ok(raw) => Some(raw.into()),
        Err(e) => {
            log::debug!("dropping malformed card entry: {e}");
            None
        }
    }
}
