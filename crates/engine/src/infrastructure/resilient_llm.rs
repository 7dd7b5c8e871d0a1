//! Opt-in retry around an LLM transport.
//!
//! Spawning makes one `generate` call per request. When `LLM_MAX_RETRIES` is
//! positive, `main` wraps the transport in [`ResilientLlmClient`] so that call
//! is repeated on transient failures with capped exponential backoff.

use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse};

/// Backoff schedule for [`ResilientLlmClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Extra attempts after the first one.
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    /// Fraction of each delay randomised in both directions.
    pub jitter: f64,
}

impl RetryConfig {
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            jitter: 0.2,
        }
    }

    /// Delay before retry number `retry` (1-based): `base * 2^(retry - 1)`,
    /// capped at `max_delay`, before jitter.
    fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    fn jittered(&self, delay: Duration) -> Duration {
        if self.jitter <= 0.0 {
            return delay;
        }
        let spread = rand::thread_rng().gen_range(-self.jitter..=self.jitter);
        delay.mul_f64((1.0 + spread).max(0.0))
    }
}

/// Client-side rejections that will fail the same way on every attempt.
fn is_retryable(error: &LlmError) -> bool {
    match error {
        LlmError::RequestFailed(msg) => !["400", "401", "403", "429"]
            .iter()
            .any(|status| msg.starts_with(status)),
        LlmError::Timeout(_) | LlmError::InvalidResponse(_) => true,
    }
}

/// Retrying decorator over any [`LlmPort`].
pub struct ResilientLlmClient {
    inner: Arc<dyn LlmPort>,
    config: RetryConfig,
}

impl ResilientLlmClient {
    pub fn new(inner: Arc<dyn LlmPort>, config: RetryConfig) -> Self {
        Self { inner, config }
    }
}

#[async_trait]
impl LlmPort for ResilientLlmClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let mut retry = 0;
        loop {
            let error = match self.inner.generate(request.clone()).await {
                Ok(response) => return Ok(response),
                Err(error) => error,
            };

            if !is_retryable(&error) || retry >= self.config.max_retries {
                tracing::error!(
                    attempts = retry + 1,
                    retryable = is_retryable(&error),
                    error = %error,
                    "LLM request failed"
                );
                return Err(error);
            }

            retry += 1;
            let delay = self.config.jittered(self.config.backoff(retry));
            tracing::warn!(
                retry = retry,
                max_retries = self.config.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "LLM request failed, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockLlmPort;
    use mockall::Sequence;

    fn instant(max_retries: u32) -> RetryConfig {
        RetryConfig {
            max_retries,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            jitter: 0.0,
        }
    }

    fn client(llm: MockLlmPort, config: RetryConfig) -> ResilientLlmClient {
        ResilientLlmClient::new(Arc::new(llm), config)
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let mut llm = MockLlmPort::new();
        let mut seq = Sequence::new();
        llm.expect_generate()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(LlmError::request_failed("502: bad gateway")));
        llm.expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(LlmResponse::text("{}")));

        let response = client(llm, instant(3))
            .generate(LlmRequest::new("prompt"))
            .await
            .unwrap();
        assert_eq!(response.content, "{}");
    }

    #[tokio::test]
    async fn gives_up_after_budget() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(3)
            .returning(|_| Err(LlmError::Timeout("slow".into())));

        let err = client(llm, instant(2))
            .generate(LlmRequest::new("prompt"))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn zero_retries_is_a_single_attempt() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(|_| Err(LlmError::invalid_response("garbled")));

        assert!(client(llm, instant(0))
            .generate(LlmRequest::new("prompt"))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        for status in ["400: bad request", "401: Unauthorized", "403: forbidden", "429: slow down"] {
            let mut llm = MockLlmPort::new();
            llm.expect_generate()
                .times(1)
                .returning(move |_| Err(LlmError::request_failed(status)));

            let err = client(llm, instant(3))
                .generate(LlmRequest::new("prompt"))
                .await
                .unwrap_err();
            assert_eq!(err, LlmError::RequestFailed(status.to_string()));
        }
    }

    #[test]
    fn backoff_doubles_up_to_the_cap() {
        let config = RetryConfig::with_max_retries(6);
        let secs: Vec<u64> = (1..=6).map(|n| config.backoff(n).as_secs()).collect();
        assert_eq!(secs, vec![1, 2, 4, 8, 16, 30]);
    }

    #[test]
    fn jitter_stays_within_spread() {
        let config = RetryConfig::with_max_retries(1);
        for _ in 0..100 {
            let delay = config.jittered(Duration::from_millis(1000));
            assert!((799..=1201).contains(&delay.as_millis()), "{delay:?}");
        }
    }
}
