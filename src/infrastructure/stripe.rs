use crate::domain::order::{PaymentOutcome, ProviderKind};
use crate::domain::ports::{PaymentProvider, PaymentProviderBox, PaymentProviderFactory};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Stripe payment backend.
///
/// A real integration would call the Stripe charges API here; this adapter
/// only emits the trace line and approves.
#[derive(Default)]
pub struct StripeProvider;

impl StripeProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Stripe
    }

    async fn process_payment(&self, amount: Decimal) -> Result<PaymentOutcome> {
        tracing::info!("Processing payment of ${} via Stripe", amount);
        Ok(PaymentOutcome::Approved)
    }
}

/// Factory hard-bound to [`StripeProvider`].
#[derive(Default)]
pub struct StripeFactory;

impl PaymentProviderFactory for StripeFactory {
    fn create_provider(&self) -> PaymentProviderBox {
        Box::new(StripeProvider::new())
    }
}
