//! # Payments Client SDK
//!
//! A typed Rust client for the Payment Dispatch API.

use payments_types::{PaymentMethodInfo, PaymentResult, ProcessPaymentRequest};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Error type for client operations.
///
/// A declined payment is not an error: it comes back as a `PaymentResult`
/// with `success == false`.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Payments API client.
pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Submits a payment and returns its result, approved or declined.
    pub async fn process_payment(
        &self,
        req: &ProcessPaymentRequest,
    ) -> Result<PaymentResult, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/payments/process", self.base_url))
            .json(req)
            .send()
            .await?;

        if resp.status() == StatusCode::UNPROCESSABLE_ENTITY {
            let body = resp.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }
        self.handle_response(resp).await
    }

    /// Lists the payment methods the server supports.
    pub async fn list_methods(&self) -> Result<Vec<PaymentMethodInfo>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/payments/methods", self.base_url))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PaymentsClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = PaymentsClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
