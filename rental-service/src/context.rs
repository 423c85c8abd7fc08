//! Deadline-bound execution context
//!
//! A [`RequestContext`] carries an absolute deadline and a cancellation token.
//! Service operations derive a child context with [`RequestContext::with_timeout`]
//! before calling storage. The child is cancelled when it is dropped, so no
//! derived deadline outlives the operation that created it.

use std::fmt;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Execution scope handed to storage operations.
pub struct RequestContext {
    deadline: Option<Instant>,
    token: CancellationToken,
    _guard: Option<DropGuard>,
}

impl RequestContext {
    /// A root context with no deadline, typically one per inbound request.
    pub fn background() -> Self {
        Self {
            deadline: None,
            token: CancellationToken::new(),
            _guard: None,
        }
    }

    /// Derive a child context that expires after `timeout`, or at the parent's
    /// deadline if that comes first.
    ///
    /// Cancelling the parent cancels the child. Dropping the child cancels
    /// only the child.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(parent) if parent < candidate => parent,
            _ => candidate,
        };

        let token = self.token.child_token();
        let guard = token.clone().drop_guard();

        Self {
            deadline: Some(deadline),
            token,
            _guard: Some(guard),
        }
    }

    /// Absolute expiry, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether work under this context must stop.
    pub fn is_done(&self) -> bool {
        self.token.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("deadline", &self.deadline)
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_has_no_deadline() {
        let ctx = RequestContext::background();
        assert!(ctx.deadline().is_none());
        assert!(!ctx.is_done());
    }

    #[tokio::test]
    async fn test_child_takes_earlier_deadline() {
        let parent = RequestContext::background().with_timeout(Duration::from_millis(50));
        let child = parent.with_timeout(Duration::from_secs(60));
        assert_eq!(child.deadline(), parent.deadline());

        let tighter = parent.with_timeout(Duration::from_millis(1));
        assert!(tighter.deadline() < parent.deadline());
    }

    #[tokio::test]
    async fn test_dropping_child_cancels_only_child() {
        let parent = RequestContext::background();
        let child = parent.with_timeout(Duration::from_secs(5));
        let observer = child.token.clone();

        drop(child);

        assert!(observer.is_cancelled());
        assert!(!parent.is_done());
    }

    #[tokio::test]
    async fn test_parent_cancel_propagates() {
        let parent = RequestContext::background();
        let child = parent.with_timeout(Duration::from_secs(5));

        parent.token.cancel();

        assert!(child.is_done());
        assert!(child.token.is_cancelled());
    }

    #[tokio::test]
    async fn test_expired_deadline_is_done() {
        let ctx = RequestContext::background().with_timeout(Duration::ZERO);
        assert!(ctx.is_done());
    }
}
