//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use payments_types::{AppError, ProcessPaymentRequest, StrategyResolver};

use crate::PaymentDispatcher;

/// Application state shared across handlers.
pub struct AppState<R: StrategyResolver> {
    pub dispatcher: PaymentDispatcher<R>,
}

/// Error payload for requests rejected before dispatch.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Invalid payment method: cheque")]
    pub error: String,
    #[schema(example = 400)]
    pub code: u16,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = ErrorBody {
            error: message,
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Process a payment.
///
/// An unknown method name or malformed body is a 400. Anything the
/// dispatcher returns is passed through: 200 when the payment went
/// through, 422 otherwise, with the `PaymentResult` as the body either way.
#[tracing::instrument(
    skip(state, payload),
    fields(payment_method = tracing::field::Empty, amount = tracing::field::Empty)
)]
pub async fn process_payment<R: StrategyResolver>(
    State(state): State<Arc<AppState<R>>>,
    payload: Result<Json<ProcessPaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let span = tracing::Span::current();
    span.record("payment_method", req.payment_method.as_str());
    span.record("amount", tracing::field::display(req.amount));

    let (method, request) = req.into_parts().map_err(AppError::from)?;

    let result = state.dispatcher.dispatch(method, request).await;

    let status = if result.success() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    Ok((status, Json(result)))
}

/// List the payment methods the dispatcher can handle.
#[tracing::instrument(skip(state))]
pub async fn list_methods<R: StrategyResolver>(
    State(state): State<Arc<AppState<R>>>,
) -> impl IntoResponse {
    Json(state.dispatcher.list_supported_methods())
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Method, Request};
    use payments_strategies::{RegistryConfig, build_registry};
    use tower::ServiceExt;
    use tracing::field::{Field, Visit};
    use tracing::span::{Id, Record};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use crate::PaymentDispatcher;
    use crate::inbound::HttpServer;

    type Recorded = Arc<Mutex<Vec<(String, String)>>>;

    /// Collects every value recorded on a span after creation.
    struct RecordedFields(Recorded);

    impl<S: tracing::Subscriber> Layer<S> for RecordedFields {
        fn on_record(&self, _id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
            values.record(&mut FieldVisitor(self.0.clone()));
        }
    }

    struct FieldVisitor(Recorded);

    impl Visit for FieldVisitor {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0
                .lock()
                .unwrap()
                .push((field.name().to_string(), value.to_string()));
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0
                .lock()
                .unwrap()
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }

    #[tokio::test]
    async fn test_process_payment_span_records_method_and_amount() {
        let recorded: Recorded = Arc::default();
        let subscriber = tracing_subscriber::registry().with(RecordedFields(recorded.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let registry = build_registry(&RegistryConfig {
            simulate_latency: false,
            ..Default::default()
        });
        let app = HttpServer::new(PaymentDispatcher::new(registry)).router();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/payments/process")
            .header("Content-Type", "application/json")
            .body(Body::from(
                r#"{"payment_method":"paypal","amount":"20.00","email":"a@example.com"}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_success());

        let recorded = recorded.lock().unwrap();
        assert!(recorded.contains(&("payment_method".to_string(), "paypal".to_string())));
        assert!(recorded.contains(&("amount".to_string(), "20.00".to_string())));
    }
}
