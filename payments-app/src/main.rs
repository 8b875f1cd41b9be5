//! # Payments Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the strategy registry
//! - Create the payment dispatcher
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payments_hex::{PaymentDispatcher, inbound::HttpServer};
use payments_strategies::{RegistryConfig, build_registry};

fn init_tracer(endpoint: &str) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("payments-dispatch"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = config::Config::from_env()?;

    // OTLP export only when an endpoint is configured
    let otel = config
        .otlp_endpoint
        .as_deref()
        .map(init_tracer)
        .transpose()?;
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,payments_app=debug,payments_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    tracing::info!("Starting payments server on port {}", config.port);
    tracing::info!(
        simulate_latency = config.simulate_latency,
        jitter_ms = config.latency_jitter.as_millis() as u64,
        process_timeout_ms = ?config.process_timeout.map(|t| t.as_millis()),
        otlp = config.otlp_endpoint.is_some(),
        "loaded configuration"
    );

    let registry = build_registry(&RegistryConfig {
        simulate_latency: config.simulate_latency,
        max_jitter: config.latency_jitter,
    });
    tracing::info!(?registry, "strategy registry ready");

    let mut dispatcher = PaymentDispatcher::new(registry);
    if let Some(timeout) = config.process_timeout {
        dispatcher = dispatcher.with_process_timeout(timeout);
    }

    // Create and run the HTTP server
    let server = HttpServer::new(dispatcher);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
