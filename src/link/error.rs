//! Errors surfaced by the caller-facing link handle.

use thiserror::Error;

use crate::write_request::EnqueueError;

/// Failure to hand work to the link actor.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SendError {
    /// The request was rejected before it was queued.
    #[error(transparent)]
    Enqueue(#[from] EnqueueError),
    /// The actor has shut down; no further work is accepted.
    #[error("link closed")]
    Closed,
}
