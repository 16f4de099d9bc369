//! Per-connection actor enforcing single-flight write discipline.
//!
//! The actor owns everything mutable on a logical connection: the transport
//! sink, the sequence generator, both reassembly streams, and the queue of
//! pending write requests. It reacts to four event sources in a biased
//! `tokio::select!` loop — shutdown, per-request cancellation, caller
//! commands, raw inbound packets, and submission results — and never owns a
//! thread or spins. At most one write request is in flight at a time and at
//! most one packet submission is outstanding within it, so fragments of
//! distinct messages never interleave on the wire and the sequence generator
//! needs no locking.

pub mod actor;
pub mod error;
pub mod event;
pub mod handle;
mod inbound;

pub use actor::Link;
pub use error::SendError;
pub use event::{LinkEvent, LinkEvents};
pub use handle::LinkHandle;

use crate::write_request::WriteRequest;

/// Commands sent from a [`LinkHandle`] to the actor.
#[derive(Debug)]
pub(crate) enum Command {
    /// Queue a fragmented request for transmission.
    Send(WriteRequest),
}
