//! Seam between the protocol core and the physical packet transport.
//!
//! The core consumes only two things from a transport: the negotiated
//! maximum packet size and an operation submitting one encoded packet at a
//! time. Inbound bytes travel the other way, pushed into the link via
//! [`LinkHandle::deliver_packet`](crate::link::LinkHandle::deliver_packet),
//! so transports never hold protocol state.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Failure reported by the transport for a single packet submission.
///
/// Timing out a stalled submission is the transport's responsibility; a
/// timeout surfaces here like any other submission error. The core never
/// retries — retry policy belongs to the caller.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The underlying link dropped before or during the submission.
    #[error("transport disconnected")]
    Disconnected,
    /// The transport rejected or failed the submission.
    #[error("packet submission failed: {reason}")]
    Rejected { reason: String },
}

/// One-packet-at-a-time sink onto the physical transport.
///
/// Implementations wrap a concrete link (a GATT characteristic writer, a
/// datagram socket, a test double). `submit` resolves when the transport has
/// accepted or rejected that single write; the link actor never has more
/// than one submission outstanding, so implementations may assume serial
/// calls.
#[async_trait]
pub trait PacketSink: Send + 'static {
    /// Maximum encoded packet size for the current logical connection.
    ///
    /// Queried when a write request is created; may change only between
    /// logical connections, never mid-message.
    fn max_packet_size(&self) -> usize;

    /// Submit one encoded packet for transmission.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when the transport cannot deliver the
    /// packet. The error fails the owning write request; packets already
    /// accepted are not retracted.
    async fn submit(&mut self, packet: Bytes) -> Result<(), SubmitError>;
}
