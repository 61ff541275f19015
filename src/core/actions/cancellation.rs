use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// A run that was abandoned because a stop was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

/// Anything a long-running loop can poll for a stop request.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Stop flag shared by one run and every suspension point inside it.
///
/// Clones observe the same flag, so a host can keep a handle and request a
/// stop from outside the run's own control flow.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    stop_requested: Arc<AtomicBool>,
}

impl StopToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }
}

impl CancelToken for StopToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.is_stop_requested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_token_is_shared_between_clones() {
        let token = StopToken::new();
        let handle = token.clone();

        assert!(!token.is_stop_requested());

        handle.request_stop();
        handle.request_stop();

        assert!(token.is_stop_requested());
        assert!(token.is_cancelled());
        assert_eq!(token.check(), Err(Cancelled));
    }

    #[test]
    fn fresh_tokens_are_independent() {
        let first = StopToken::new();
        let second = StopToken::new();

        first.request_stop();

        assert!(!second.is_stop_requested());
    }

    #[test]
    fn cancelled_displays_message() {
        assert_eq!(Cancelled.to_string(), "operation cancelled");
    }
}
