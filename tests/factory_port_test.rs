use payswitch::domain::order::ProviderKind;
use payswitch::domain::ports::PaymentProviderFactoryBox;
use payswitch::infrastructure::braintree::BraintreeFactory;
use payswitch::infrastructure::paypal::PayPalFactory;
use payswitch::infrastructure::stripe::StripeFactory;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_factory_instantiation() {
    let factory: PaymentProviderFactoryBox = Box::new(StripeFactory);

    let provider = factory.create_provider();

    // Verify it works
    assert_eq!(provider.kind(), ProviderKind::Stripe);
    let outcome = provider.process_payment(dec!(1.0)).await.unwrap();
    assert!(outcome.is_approved());
}

#[tokio::test]
async fn test_factory_in_task() {
    let factory: PaymentProviderFactoryBox = Box::new(BraintreeFactory);

    let handle = tokio::spawn(async move {
        let provider = factory.create_provider();
        provider.process_payment(dec!(2.0)).await.unwrap()
    });

    let outcome = handle.await.unwrap();
    assert!(outcome.is_approved());
}

#[test]
fn test_factories_are_hard_bound_to_their_variant() {
    let cases: [(PaymentProviderFactoryBox, ProviderKind); 3] = [
        (Box::new(StripeFactory), ProviderKind::Stripe),
        (Box::new(BraintreeFactory), ProviderKind::Braintree),
        (Box::new(PayPalFactory), ProviderKind::Paypal),
    ];

    for (factory, expected) in cases {
        assert_eq!(factory.create_provider().kind(), expected);
    }
}
