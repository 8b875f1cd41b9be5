//! Payments CLI
//!
//! Command-line interface for the Payment Dispatch API.

use std::collections::HashMap;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use payments_client::PaymentsClient;
use payments_types::{PaymentMethod, ProcessPaymentRequest};

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payment Dispatch API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payments API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a payment
    Pay {
        /// Payment method (e.g. CreditCard, paypal, bank-transfer)
        method: PaymentMethod,
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value = "USD")]
        currency: String,
        #[arg(long)]
        card_token: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        account_number: Option<String>,
        #[arg(long)]
        wallet_address: Option<String>,
        /// Extra metadata as key=value (repeatable)
        #[arg(long = "meta", value_parser = parse_meta)]
        metadata: Vec<(String, serde_json::Value)>,
    },
    /// List supported payment methods
    Methods,
    /// Check API health
    Health,
}

/// Parses `key=value`; the value is read as JSON when it parses, else as a string.
fn parse_meta(s: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got: {s}"))?;
    if key.is_empty() {
        return Err(format!("empty metadata key in: {s}"));
    }
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PaymentsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Methods => {
            let methods = client.list_methods().await?;
            println!("{}", serde_json::to_string_pretty(&methods)?);
        }

        Commands::Pay {
            method,
            amount,
            currency,
            card_token,
            email,
            account_number,
            wallet_address,
            metadata,
        } => {
            let mut req = ProcessPaymentRequest::new(method, amount);
            req.currency = currency;
            req.card_token = card_token;
            req.email = email;
            req.account_number = account_number;
            req.wallet_address = wallet_address;
            req.metadata = metadata.into_iter().collect::<HashMap<_, _>>();

            let result = client.process_payment(&req).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meta_reads_json_values() {
        let (key, value) = parse_meta("order=42").unwrap();
        assert_eq!(key, "order");
        assert_eq!(value, serde_json::json!(42));
    }

    #[test]
    fn test_parse_meta_falls_back_to_string() {
        let (_, value) = parse_meta("note=gift wrap").unwrap();
        assert_eq!(value, serde_json::json!("gift wrap"));
    }

    #[test]
    fn test_parse_meta_rejects_missing_separator() {
        assert!(parse_meta("order").is_err());
        assert!(parse_meta("=1").is_err());
    }

    #[test]
    fn test_pay_parses_method_case_insensitively() {
        let cli = Cli::try_parse_from([
            "payments", "pay", "bank-transfer", "--amount", "250", "--account-number", "12345678",
        ])
        .unwrap();
        match cli.command {
            Commands::Pay { method, amount, .. } => {
                assert_eq!(method, PaymentMethod::BankTransfer);
                assert_eq!(amount, Decimal::from(250));
            }
            _ => panic!("expected pay"),
        }
    }

    #[test]
    fn test_pay_rejects_unknown_method() {
        let err = Cli::try_parse_from(["payments", "pay", "cheque", "--amount", "1"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("Invalid payment method: cheque"));
    }
}
