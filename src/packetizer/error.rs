//! Errors raised by fragmentation and reassembly.

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::packet::{Counter, HEADER_LEN, MalformedPacket};

/// Errors raised while splitting an outbound message into packets.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PacketizeError {
    /// The negotiated packet size leaves no room for payload bytes.
    #[error("max packet size {max_packet_size} leaves no payload room after the {HEADER_LEN}-byte header")]
    ZeroChunkSize { max_packet_size: usize },
}

/// Protocol-level violations detected while reassembling inbound packets.
///
/// Each variant clears the affected stream's partial state; the connection
/// itself survives and the reassembler accepts the next first-fragment
/// packet normally. The core never retries — a higher layer decides whether
/// to request retransmission or abandon the message.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FramingError {
    /// A first-fragment packet arrived while a message was still in progress.
    #[error("first packet received while reassembly was in progress")]
    UnexpectedFirstPacket,
    /// A continuation packet arrived with no message in progress.
    #[error("continuation packet received with no reassembly in progress")]
    UnexpectedContinuation,
    /// A continuation packet's counter broke the cyclic sequence. Covers both
    /// loss (a gap) and duplication (a repeat of the previous counter).
    #[error("sequence gap: expected counter {expected}, found {found}")]
    SequenceGap { expected: Counter, found: Counter },
    /// The reassembled message would exceed the configured cap.
    #[error("reassembled message of {attempted} bytes exceeds limit {limit}")]
    MessageTooLarge {
        attempted: usize,
        limit: NonZeroUsize,
    },
    /// The transport delivered bytes that do not decode as a packet.
    #[error(transparent)]
    Malformed(#[from] MalformedPacket),
}
