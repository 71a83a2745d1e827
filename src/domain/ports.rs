use super::order::{PaymentOutcome, ProviderKind};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// A payment execution backend.
///
/// Implementations are stateless; one instance is created per order and
/// dropped once the payment settles.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// The backend variant this provider charges against.
    fn kind(&self) -> ProviderKind;

    /// Submits a charge for `amount`.
    ///
    /// A failing backend (declined charge, gateway outage) surfaces here,
    /// either as `Ok(PaymentOutcome::Declined)` or as an `Err`. Every
    /// built-in provider resolves to `Ok(PaymentOutcome::Approved)`.
    async fn process_payment(&self, amount: Decimal) -> Result<PaymentOutcome>;
}

pub type PaymentProviderBox = Box<dyn PaymentProvider>;

/// Constructs providers of one fixed backend variant.
pub trait PaymentProviderFactory: Send + Sync {
    fn create_provider(&self) -> PaymentProviderBox;
}

pub type PaymentProviderFactoryBox = Box<dyn PaymentProviderFactory>;
