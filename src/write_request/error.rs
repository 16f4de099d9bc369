//! Errors raised while creating or driving a write request.

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::packet::EncodeError;
use crate::packetizer::PacketizeError;
use crate::transport::SubmitError;

/// Synchronous rejections reported at request creation time.
///
/// A rejected request is never partially started.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EnqueueError {
    /// The payload/packet-size combination cannot be framed.
    #[error(transparent)]
    Packetize(#[from] PacketizeError),
    /// The message would need more fragments than the configured ceiling.
    #[error("message needs {required} packets, exceeding the ceiling of {limit}")]
    MessageTooLarge {
        required: usize,
        limit: NonZeroUsize,
    },
}

/// Failure that terminated a write request after it was accepted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WriteError {
    /// The transport reported a submission error.
    #[error(transparent)]
    Submit(#[from] SubmitError),
    /// A packet could not be encoded for the negotiated packet size.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// The link shut down before the request reached a terminal state.
    #[error("link closed before the request completed")]
    LinkClosed,
}
