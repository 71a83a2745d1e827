use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// Identifies one of the supported payment backends.
///
/// Doubles as the wire form in order CSV files (lowercase) and as the tag a
/// provider reports through [`crate::domain::ports::PaymentProvider::kind`].
#[derive(Debug, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Stripe,
    Braintree,
    Paypal,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Stripe => "Stripe",
            ProviderKind::Braintree => "Braintree",
            ProviderKind::Paypal => "PayPal",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The boolean-shaped result of a payment attempt.
///
/// Every built-in provider reports `Approved`; `Declined` is the modeled
/// failure signal a real backend integration would produce.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentOutcome {
    Approved,
    Declined,
}

impl PaymentOutcome {
    pub fn is_approved(&self) -> bool {
        *self == PaymentOutcome::Approved
    }
}

/// A single order request: which backend to charge and for how much.
///
/// Amounts are deliberately unvalidated. Zero and negative values are
/// accepted and forwarded to the provider as-is.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub provider: ProviderKind,
    pub amount: Decimal,
}
