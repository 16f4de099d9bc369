//! Life-cycle of one outbound message or control payload.
//!
//! A [`WriteRequest`] owns the ordered packet batch for one message and
//! drives it onto the transport one packet at a time. The caller keeps the
//! matching [`WriteHandle`], which yields exactly one terminal outcome
//! (completed, failed, or cancelled) per request — the one-shot result
//! channel makes duplicate reporting unrepresentable.

pub mod error;
pub mod handle;
pub mod request;
pub mod state;

pub use error::{EnqueueError, WriteError};
pub use handle::WriteHandle;
pub use request::{WriteOutcome, WriteProgress, WriteRequest};
pub use state::WriteState;
