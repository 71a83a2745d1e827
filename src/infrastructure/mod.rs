//! Backend adapters. One module per payment gateway, each pairing a
//! provider with the factory that constructs it.

pub mod braintree;
pub mod paypal;
pub mod stripe;

use crate::domain::order::ProviderKind;
use crate::domain::ports::PaymentProviderFactoryBox;

/// Maps a backend tag to its factory.
///
/// The enum dispatch complements the trait-object seam: callers that know
/// the backend set at the data level (CLI rows, config) resolve a factory
/// here, while the processor stays coupled only to the factory port.
pub fn provider_factory(kind: ProviderKind) -> PaymentProviderFactoryBox {
    match kind {
        ProviderKind::Stripe => Box::new(stripe::StripeFactory),
        ProviderKind::Braintree => Box::new(braintree::BraintreeFactory),
        ProviderKind::Paypal => Box::new(paypal::PayPalFactory),
    }
}
