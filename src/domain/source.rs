use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// Opaque identifier of a tokenized payment method.
///
/// This is the only part of a token the backend ever sees; the client never
/// handles raw card numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Card networks the backend reports. Anything unrecognized maps to
/// `Unknown` rather than failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CardBrand {
    Visa,
    Mastercard,
    #[strum(to_string = "amex", serialize = "american express")]
    Amex,
    Discover,
    #[strum(to_string = "diners", serialize = "diners club")]
    Diners,
    Jcb,
    #[strum(to_string = "unionpay", serialize = "union pay")]
    UnionPay,
    Unknown,
}

impl CardBrand {
    pub fn from_wire(value: &str) -> Self {
        value.parse().unwrap_or(Self::Unknown)
    }
}

/// Funding type of a card, same mapping rule as [`CardBrand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FundingType {
    Credit,
    Debit,
    Prepaid,
    Unknown,
}

impl FundingType {
    pub fn from_wire(value: &str) -> Self {
        value.parse().unwrap_or(Self::Unknown)
    }
}

/// A saved card as reported by the backend. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentSource {
    pub id: SourceId,
    pub brand: CardBrand,
    pub last4: String,
    pub exp_month: u32,
    pub exp_year: u32,
    pub funding: FundingType,
}

/// A tokenized payment method handed over by the payment SDK.
///
/// Card extraction is only defined for the `Card` variant; local-mode
/// mutations ignore tokens that carry no card payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceToken {
    /// A token whose card payload has been resolved.
    Card(PaymentSource),
    /// Any other tokenized source (bank account, wallet, ...).
    Opaque(SourceId),
}

impl SourceToken {
    pub fn id(&self) -> &SourceId {
        match self {
            Self::Card(card) => &card.id,
            Self::Opaque(id) => id,
        }
    }

    pub fn card(&self) -> Option<&PaymentSource> {
        match self {
            Self::Card(card) => Some(card),
            Self::Opaque(_) => None,
        }
    }
}

/// A positive charge amount in minor currency units.
///
/// Ensures that charges are always for a non-zero amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChargeAmount(u64);

impl ChargeAmount {
    pub fn new(minor_units: u64) -> Result<Self> {
        if minor_units == 0 {
            return Err(ClientError::Validation(
                "charge amount must be positive".to_string(),
            ));
        }
        Ok(Self(minor_units))
    }

    pub fn minor_units(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for ChargeAmount {
    type Error = ClientError;

    fn try_from(minor_units: u64) -> Result<Self> {
        Self::new(minor_units)
    }
}
