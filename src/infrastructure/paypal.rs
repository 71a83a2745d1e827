use crate::domain::order::{PaymentOutcome, ProviderKind};
use crate::domain::ports::{PaymentProvider, PaymentProviderBox, PaymentProviderFactory};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// PayPal payment backend. Trace-only stub, always approves.
#[derive(Default)]
pub struct PayPalProvider;

impl PayPalProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProvider for PayPalProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Paypal
    }

    async fn process_payment(&self, amount: Decimal) -> Result<PaymentOutcome> {
        tracing::info!("Processing payment of ${} via PayPal", amount);
        Ok(PaymentOutcome::Approved)
    }
}

/// Factory hard-bound to [`PayPalProvider`].
#[derive(Default)]
pub struct PayPalFactory;

impl PaymentProviderFactory for PayPalFactory {
    fn create_provider(&self) -> PaymentProviderBox {
        Box::new(PayPalProvider::new())
    }
}
