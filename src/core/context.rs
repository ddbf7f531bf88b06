//! Per-call cancellation and deadlines.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::error::LlmError;

/// Cancellation and deadline scope for a single API call.
///
/// Cloning shares the cancellation token, so cancelling any clone cancels
/// every call made with it.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn is_cancelled(&self) -> bool {
        self.token
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fail fast if the context is already done.
    pub(crate) fn check(&self) -> Result<(), LlmError> {
        if self.is_cancelled() {
            return Err(LlmError::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(LlmError::Timeout {
                    elapsed: Duration::ZERO,
                });
            }
        }
        Ok(())
    }

    /// Drive `fut` until it completes, the token fires, or the deadline passes.
    pub(crate) async fn run<F, T>(&self, fut: F) -> Result<T, LlmError>
    where
        F: Future<Output = Result<T, LlmError>>,
    {
        let started = Instant::now();

        let bounded = async {
            match self.deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, fut).await {
                    Ok(result) => result,
                    Err(_) => Err(LlmError::Timeout {
                        elapsed: started.elapsed(),
                    }),
                },
                None => fut.await,
            }
        };

        match &self.token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(LlmError::Cancelled),
                    result = bounded => result,
                }
            }
            None => bounded.await,
        }
    }
}
