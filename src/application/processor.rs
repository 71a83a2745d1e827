use crate::domain::ports::PaymentProviderFactoryBox;
use crate::error::Result;
use rust_decimal::Decimal;

/// The main entry point for order handling.
///
/// `OrderProcessor` holds the currently active provider factory and charges
/// each order through a provider obtained from it. The factory can be
/// replaced between orders to switch backends without touching this code.
pub struct OrderProcessor {
    factory: PaymentProviderFactoryBox,
}

impl OrderProcessor {
    /// Creates a processor backed by `factory`.
    pub fn new(factory: PaymentProviderFactoryBox) -> Self {
        Self { factory }
    }

    /// Replaces the active factory.
    ///
    /// Takes effect for the next call to [`process_order`]; the exclusive
    /// borrow guarantees no order is mid-flight during the swap.
    ///
    /// [`process_order`]: OrderProcessor::process_order
    pub fn set_provider_factory(&mut self, factory: PaymentProviderFactoryBox) {
        self.factory = factory;
    }

    /// Charges `amount` through the currently active backend.
    ///
    /// The provider is resolved synchronously before the first await, so the
    /// backend of an order is fixed at call start. The payment outcome is
    /// not inspected: no built-in provider declines, and a completion trace
    /// is emitted either way.
    pub async fn process_order(&self, amount: Decimal) -> Result<()> {
        let provider = self.factory.create_provider();
        let _outcome = provider.process_payment(amount).await?;
        tracing::info!("Payment processed successfully");
        Ok(())
    }
}
