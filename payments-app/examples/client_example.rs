//! Client example demonstrating payment flows against a running server.
//!
//! Run with: cargo run -p payments-app --example client_example

use payments_client::PaymentsClient;
use payments_hex::{PaymentDispatcher, inbound::HttpServer};
use payments_strategies::{RegistryConfig, build_registry};
use payments_types::{PaymentMethod, ProcessPaymentRequest};
use rust_decimal_macros::dec;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    println!("🚀 Starting server on {addr}...");

    // No simulated latency so the demo runs instantly
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

    let client = PaymentsClient::new(format!("http://{addr}"));

    let health = client.health().await?;
    println!("✅ Server health: {health}");

    println!("\n📋 Supported methods:");
    for info in client.list_methods().await? {
        println!("   - {} ({})", info.name, info.description);
    }

    // Card payment
    let mut card = ProcessPaymentRequest::new(PaymentMethod::CreditCard, dec!(100.00));
    card.card_token = Some("tok_visa".into());
    let result = client.process_payment(&card).await?;
    println!(
        "\n✅ {} (tx={}, fee={})",
        result.message(),
        result.transaction_id().unwrap_or("-"),
        result.processing_fee().unwrap_or_default()
    );

    // Bank transfer below the minimum is declined, not an error
    let mut bank = ProcessPaymentRequest::new(PaymentMethod::BankTransfer, dec!(5.00));
    bank.account_number = Some("12345678".into());
    let result = client.process_payment(&bank).await?;
    println!("❌ Declined: {}", result.message());

    // Unknown method names are rejected before dispatch
    let mut unknown = ProcessPaymentRequest::new(PaymentMethod::CreditCard, dec!(1.00));
    unknown.payment_method = "cheque".into();
    match client.process_payment(&unknown).await {
        Err(err) => println!("❌ {err}"),
        Ok(result) => println!("⚠️  unexpected result: {}", result.message()),
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
