//! Caller-side handle observing one write request's outcome.

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use super::{WriteError, WriteOutcome};

/// Handle paired with a [`WriteRequest`](super::WriteRequest).
///
/// The handle yields exactly one terminal [`WriteOutcome`]. Dropping it does
/// not cancel the request; call [`WriteHandle::cancel`] for that.
#[derive(Debug)]
pub struct WriteHandle {
    cancel: CancellationToken,
    result: oneshot::Receiver<WriteOutcome>,
}

impl WriteHandle {
    pub(crate) fn new(cancel: CancellationToken, result: oneshot::Receiver<WriteOutcome>) -> Self {
        Self { cancel, result }
    }

    /// Request cooperative cancellation.
    ///
    /// An in-flight packet submission is abandoned; the transport may still
    /// deliver that packet, and any late result is discarded. Cancelling an
    /// already-terminal request has no effect.
    pub fn cancel(&self) { self.cancel.cancel(); }

    /// Wait for the request's single terminal outcome.
    ///
    /// A link that shuts down before reporting maps to
    /// [`WriteError::LinkClosed`].
    pub async fn outcome(self) -> WriteOutcome {
        self.result
            .await
            .unwrap_or(WriteOutcome::Failed(WriteError::LinkClosed))
    }
}
