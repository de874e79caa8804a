//! Purchase data model.
//!
//! Amounts are exact decimals so threshold comparisons never suffer from
//! binary floating-point rounding. Currency codes are carried through
//! unchanged; no conversion takes place.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PurchaseValidationError;

/// Currency applied when a purchase does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Free-form currency code, validated only for presence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Validate and construct a [`CurrencyCode`].
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseValidationError::EmptyCurrency`] when the code is
    /// empty or whitespace-only.
    pub fn new(code: impl Into<String>) -> Result<Self, PurchaseValidationError> {
        Self::from_owned(code.into())
    }

    fn from_owned(code: String) -> Result<Self, PurchaseValidationError> {
        if code.trim().is_empty() {
            return Err(PurchaseValidationError::EmptyCurrency);
        }
        Ok(Self(code))
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_owned())
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = PurchaseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A purchase made by a referred user.
///
/// [`Purchase::new`] admits negative amounts so that evaluation can reject
/// them as a business outcome. Use [`Purchase::non_negative`] to enforce the
/// constraint at construction instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PurchaseDto", into = "PurchaseDto")]
pub struct Purchase {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Purchase {
    /// Build a purchase, validating only the currency code.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseValidationError::EmptyCurrency`] for a blank code.
    pub fn new(
        amount: Decimal,
        currency: impl Into<String>,
    ) -> Result<Self, PurchaseValidationError> {
        let code = CurrencyCode::new(currency)?;
        Ok(Self::with_currency(amount, code))
    }

    /// Build a purchase from an already validated currency code.
    #[must_use]
    pub const fn with_currency(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Build a purchase in [`DEFAULT_CURRENCY`].
    #[must_use]
    pub fn usd(amount: Decimal) -> Self {
        Self::with_currency(amount, CurrencyCode::default())
    }

    /// Build a purchase, rejecting negative amounts at construction.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseValidationError::NegativeAmount`] when `amount` is
    /// below zero, or [`PurchaseValidationError::EmptyCurrency`] for a blank
    /// code.
    pub fn non_negative(
        amount: Decimal,
        currency: impl Into<String>,
    ) -> Result<Self, PurchaseValidationError> {
        if amount < Decimal::ZERO {
            return Err(PurchaseValidationError::NegativeAmount {
                amount: amount.to_string(),
            });
        }
        Self::new(amount, currency)
    }

    /// Exact purchase amount; may be negative.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Currency the amount is expressed in.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PurchaseDto {
    amount: Decimal,
    #[serde(default = "default_currency")]
    currency: String,
}

impl From<Purchase> for PurchaseDto {
    fn from(value: Purchase) -> Self {
        let Purchase { amount, currency } = value;
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl TryFrom<PurchaseDto> for Purchase {
    type Error = PurchaseValidationError;

    fn try_from(value: PurchaseDto) -> Result<Self, Self::Error> {
        Self::new(value.amount, value.currency)
    }
}
