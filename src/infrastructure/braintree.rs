use crate::domain::order::{PaymentOutcome, ProviderKind};
use crate::domain::ports::{PaymentProvider, PaymentProviderBox, PaymentProviderFactory};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Braintree payment backend. Trace-only stub, always approves.
#[derive(Default)]
pub struct BraintreeProvider;

impl BraintreeProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProvider for BraintreeProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Braintree
    }

    async fn process_payment(&self, amount: Decimal) -> Result<PaymentOutcome> {
        tracing::info!("Processing payment of ${} via Braintree", amount);
        Ok(PaymentOutcome::Approved)
    }
}

/// Factory hard-bound to [`BraintreeProvider`].
#[derive(Default)]
pub struct BraintreeFactory;

impl PaymentProviderFactory for BraintreeFactory {
    fn create_provider(&self) -> PaymentProviderBox {
        Box::new(BraintreeProvider::new())
    }
}
