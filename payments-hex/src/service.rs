//! Payment Dispatcher
//!
//! Orchestrates resolve → validate → process through the resolver port and
//! folds every failure into a `PaymentResult`. Contains NO infrastructure
//! logic - pure orchestration.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::Instrument;

use payments_types::{
    PaymentMethod, PaymentMethodInfo, PaymentRequest, PaymentResult, StrategyError,
    StrategyResolver,
};

pub const VALIDATION_FAILED: &str = "Payment validation failed";
pub const PROCESSING_FAILED: &str = "An error occurred while processing payment";
pub const PROCESSING_CANCELLED: &str = "Payment processing was cancelled";
pub const PROCESSING_TIMED_OUT: &str = "Payment processing timed out";

/// Application service that dispatches payments to their strategy.
///
/// Generic over `R: StrategyResolver` - the registry is injected at compile time.
/// The dispatcher keeps no per-call state, so one instance serves any number
/// of concurrent calls without locking.
pub struct PaymentDispatcher<R: StrategyResolver> {
    resolver: R,
    process_timeout: Option<Duration>,
}

impl<R: StrategyResolver> PaymentDispatcher<R> {
    /// Creates a dispatcher over the given resolver.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            process_timeout: None,
        }
    }

    /// Gives up on `process` after `timeout`.
    pub fn with_process_timeout(mut self, timeout: Duration) -> Self {
        self.process_timeout = Some(timeout);
        self
    }

    /// Returns a reference to the underlying resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Dispatches a payment. Never fails: every outcome is a `PaymentResult`.
    pub async fn dispatch(&self, method: PaymentMethod, request: PaymentRequest) -> PaymentResult {
        self.dispatch_until(method, request, std::future::pending())
            .await
    }

    /// Like [`dispatch`](Self::dispatch), but gives up once `cancel` completes.
    ///
    /// A signal that has already fired when validation finishes stops the
    /// payment before processing starts. A signal during processing aborts
    /// the strategy. Either way the caller gets a failed result.
    #[tracing::instrument(
        name = "dispatch",
        skip(self, request, cancel),
        fields(method = %method, amount = %request.amount, currency = %request.currency)
    )]
    pub async fn dispatch_until<C>(
        &self,
        method: PaymentMethod,
        request: PaymentRequest,
        cancel: C,
    ) -> PaymentResult
    where
        C: Future<Output = ()> + Send,
    {
        let started = Instant::now();
        tracing::info!("processing payment");

        let strategy = match self.resolver.resolve(method) {
            Ok(strategy) => strategy,
            Err(err) => {
                tracing::warn!(error = %err, "no strategy registered");
                return PaymentResult::declined(method, err.to_string());
            }
        };

        match panic::catch_unwind(AssertUnwindSafe(|| strategy.validate(&request))) {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!("payment validation failed");
                return PaymentResult::declined(method, VALIDATION_FAILED);
            }
            Err(_) => {
                tracing::error!("strategy panicked during validation");
                return PaymentResult::declined(method, PROCESSING_FAILED);
            }
        }

        tokio::pin!(cancel);

        tokio::select! {
            biased;
            _ = &mut cancel => {
                tracing::warn!("payment cancelled before processing");
                return PaymentResult::declined(method, PROCESSING_CANCELLED);
            }
            _ = std::future::ready(()) => {}
        }

        let mut task = AbortOnDrop(tokio::spawn(
            async move { strategy.process(&request).await }.in_current_span(),
        ));

        let timeout = self.process_timeout;
        let deadline = async move {
            match timeout {
                Some(timeout) => tokio::time::sleep(timeout).await,
                None => std::future::pending().await,
            }
        };

        let result = tokio::select! {
            biased;
            // A finished payment wins over a signal that arrives in the same poll.
            joined = &mut task.0 => match joined {
                Ok(Ok(result)) => result,
                Ok(Err(err)) => contain(method, &err),
                Err(err) => {
                    tracing::error!(error = %err, "payment processing task failed");
                    PaymentResult::declined(method, PROCESSING_FAILED)
                }
            },
            _ = &mut cancel => {
                tracing::warn!("payment cancelled during processing");
                PaymentResult::declined(method, PROCESSING_CANCELLED)
            }
            _ = deadline => {
                tracing::warn!(timeout_ms = ?timeout.map(|t| t.as_millis()), "payment processing timed out");
                PaymentResult::declined(method, PROCESSING_TIMED_OUT)
            }
        };

        tracing::info!(
            success = result.success(),
            transaction_id = result.transaction_id().unwrap_or_default(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "payment dispatched"
        );

        result
    }

    /// Lists the registered methods with their descriptions.
    ///
    /// Sorted by declaration order; callers should not rely on any order.
    pub fn list_supported_methods(&self) -> Vec<PaymentMethodInfo> {
        let mut methods: Vec<_> = self.resolver.supported_methods().into_iter().collect();
        methods.sort();
        methods.into_iter().map(PaymentMethodInfo::from).collect()
    }
}

fn contain(method: PaymentMethod, err: &StrategyError) -> PaymentResult {
    tracing::error!(error = %err, "payment processing failed");
    PaymentResult::declined(method, PROCESSING_FAILED)
}

/// Aborts the processing task if the dispatch future is dropped early.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
