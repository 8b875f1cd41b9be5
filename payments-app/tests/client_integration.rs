//! Drives the client SDK against an in-process server.

use payments_client::{ClientError, PaymentsClient};
use payments_hex::{PaymentDispatcher, inbound::HttpServer};
use payments_strategies::{RegistryConfig, build_registry};
use payments_types::{PaymentMethod, ProcessPaymentRequest};
use rust_decimal_macros::dec;
use tokio::net::TcpListener;

async fn spawn_server() -> PaymentsClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let registry = build_registry(&RegistryConfig {
        simulate_latency: false,
        ..Default::default()
    });
    let router = HttpServer::new(PaymentDispatcher::new(registry)).router();
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });

    PaymentsClient::new(format!("http://{addr}/"))
}

#[tokio::test]
async fn test_client_health_and_methods() {
    let client = spawn_server().await;

    assert!(client.health().await.unwrap());

    let methods = client.list_methods().await.unwrap();
    assert_eq!(methods.len(), PaymentMethod::ALL.len());
    assert!(
        methods
            .iter()
            .any(|m| m.payment_method == PaymentMethod::ApplePay)
    );
}

#[tokio::test]
async fn test_client_approved_payment() {
    let client = spawn_server().await;

    let mut req = ProcessPaymentRequest::new(PaymentMethod::Stripe, dec!(20.00));
    req.card_token = Some("tok_visa".into());
    let result = client.process_payment(&req).await.unwrap();

    assert!(result.success());
    assert_eq!(result.processing_fee(), Some(dec!(0.88)));
    assert!(result.transaction_id().unwrap().starts_with("pi_"));
}

#[tokio::test]
async fn test_client_declined_payment_is_not_an_error() {
    let client = spawn_server().await;

    let req = ProcessPaymentRequest::new(PaymentMethod::Cryptocurrency, dec!(1.00));
    let result = client.process_payment(&req).await.unwrap();

    assert!(!result.success());
    assert_eq!(result.message(), "Payment validation failed");
    assert_eq!(result.payment_method(), "Cryptocurrency");
}

#[tokio::test]
async fn test_client_unknown_method_is_api_error() {
    let client = spawn_server().await;

    let mut req = ProcessPaymentRequest::new(PaymentMethod::CreditCard, dec!(1.00));
    req.payment_method = "cheque".into();

    match client.process_payment(&req).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid payment method: cheque");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
