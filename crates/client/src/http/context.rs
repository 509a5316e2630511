use std::time::Duration;

use thiserror::Error;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

/// Why a request was abandoned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CancelCause {
    #[error("cancelled by the caller")]
    Cancelled,
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

/// Deadline and cancellation signal attached to requests.
///
/// The default context never fires. Cloning shares the cancellation token, so
/// cancelling the original also cancels every clone.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    token: Option<CancellationToken>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a deadline `timeout` from now. An earlier deadline already set is kept.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets the deadline. An earlier deadline already set is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The cause if the context has already fired. Cancellation wins over the deadline.
    pub fn check(&self) -> Option<CancelCause> {
        if self.token.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return Some(CancelCause::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(CancelCause::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves once the context fires. Never resolves for a context with neither
    /// a deadline nor a token.
    pub async fn done(&self) -> CancelCause {
        match (&self.token, self.deadline) {
            (Some(token), Some(deadline)) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => CancelCause::Cancelled,
                    _ = sleep_until(deadline) => CancelCause::DeadlineExceeded,
                }
            }
            (Some(token), None) => {
                token.cancelled().await;
                CancelCause::Cancelled
            }
            (None, Some(deadline)) => {
                sleep_until(deadline).await;
                CancelCause::DeadlineExceeded
            }
            (None, None) => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_never_fires() {
        assert_eq!(RequestContext::new().check(), None);
        assert_eq!(RequestContext::new().deadline(), None);
    }

    #[tokio::test]
    async fn test_cancelled_token() {
        let token = CancellationToken::new();
        let context = RequestContext::new().with_cancellation(token.clone());
        assert_eq!(context.check(), None);

        token.cancel();
        assert_eq!(context.check(), Some(CancelCause::Cancelled));
        assert_eq!(context.done().await, CancelCause::Cancelled);
    }

    #[tokio::test]
    async fn test_expired_deadline() {
        let context = RequestContext::new().with_timeout(Duration::ZERO);
        assert_eq!(context.check(), Some(CancelCause::DeadlineExceeded));
        assert_eq!(context.done().await, CancelCause::DeadlineExceeded);
    }

    #[tokio::test]
    async fn test_cancellation_wins_over_deadline() {
        let token = CancellationToken::new();
        token.cancel();
        let context = RequestContext::new()
            .with_timeout(Duration::ZERO)
            .with_cancellation(token);
        assert_eq!(context.check(), Some(CancelCause::Cancelled));
        assert_eq!(context.done().await, CancelCause::Cancelled);
    }

    #[tokio::test]
    async fn test_earliest_deadline_is_kept() {
        let now = Instant::now();
        let context = RequestContext::new()
            .with_deadline(now + Duration::from_secs(5))
            .with_deadline(now + Duration::from_secs(60));
        assert_eq!(context.deadline(), Some(now + Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn test_clones_share_the_token() {
        let token = CancellationToken::new();
        let context = RequestContext::new().with_cancellation(token.clone());
        let clone = context.clone();
        token.cancel();
        assert_eq!(clone.check(), Some(CancelCause::Cancelled));
    }
}
