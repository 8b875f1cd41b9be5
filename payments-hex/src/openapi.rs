//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::{
    PaymentMethod, PaymentMethodInfo, PaymentResult, ProcessPaymentRequest,
};
use utoipa::OpenApi;

use crate::inbound::ErrorBody;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Process a payment with the named method
#[utoipa::path(
    post,
    path = "/api/payments/process",
    tag = "payments",
    request_body = ProcessPaymentRequest,
    responses(
        (status = 200, description = "Payment processed", body = PaymentResult),
        (status = 400, description = "Unknown payment method or malformed body", body = ErrorBody),
        (status = 422, description = "Payment rejected (unsupported, invalid, over limit, or failed)", body = PaymentResult)
    )
)]
async fn process_payment() {}

/// List supported payment methods
#[utoipa::path(
    get,
    path = "/api/payments/methods",
    tag = "payments",
    responses(
        (status = 200, description = "Supported payment methods", body = Vec<PaymentMethodInfo>)
    )
)]
async fn list_methods() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Dispatch API",
        version = "1.0.0",
        description = "Processes payments across cards, wallets, bank transfers and crypto through a single endpoint.\n\nEvery processed request returns a `PaymentResult`; inspect `success` and `message` to tell outcomes apart.",
        license(name = "MIT"),
    ),
    paths(
        health,
        process_payment,
        list_methods,
    ),
    components(
        schemas(
            ProcessPaymentRequest,
            PaymentResult,
            PaymentMethodInfo,
            PaymentMethod,
            ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment processing and method discovery"),
    )
)]
pub struct ApiDoc;
