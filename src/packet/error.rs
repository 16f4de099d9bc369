//! Errors produced by the packet codec.

use thiserror::Error;

use super::header::HEADER_LEN;

/// Errors raised while encoding a packet for transmission.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The payload plus header would exceed the negotiated packet size.
    #[error("payload of {payload_len} bytes exceeds max packet size {max_packet_size} (header {HEADER_LEN})")]
    PayloadTooLarge {
        payload_len: usize,
        max_packet_size: usize,
    },
}

/// Errors raised while decoding raw bytes received from the transport.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MalformedPacket {
    /// Fewer bytes than the fixed header size arrived.
    #[error("packet of {len} bytes is shorter than the {HEADER_LEN}-byte header")]
    Truncated { len: usize },
    /// Reserved header bits carried an unrecognised pattern.
    #[error("reserved header bits set: {bits:#06x}")]
    ReservedBits { bits: u16 },
}
