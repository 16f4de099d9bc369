//! Bit-exact header layout shared by every packet on the wire.
//!
//! The header occupies exactly [`HEADER_LEN`] bytes:
//!
//! ```text
//! byte 0:  bit 7    kind (0 = data, 1 = control)
//!          bit 6    is_first_packet
//!          bit 5    is_last_packet
//!          bits 4-2 counter
//!          bits 1-0 reserved, zero
//! byte 1:  reserved, zero
//! ```
//!
//! Reserved bits are validated on decode; any unrecognised pattern is a
//! [`MalformedPacket`](super::MalformedPacket) error rather than a silent
//! ignore.

use super::{Counter, MalformedPacket};

/// Fixed header size in bytes.
pub const HEADER_LEN: usize = 2;

const KIND_BIT: u8 = 0b1000_0000;
const FIRST_BIT: u8 = 0b0100_0000;
const LAST_BIT: u8 = 0b0010_0000;
const COUNTER_SHIFT: u8 = 2;
const COUNTER_MASK: u8 = (Counter::SPACE - 1) << COUNTER_SHIFT;
const RESERVED_MASK: u8 = !(KIND_BIT | FIRST_BIT | LAST_BIT | COUNTER_MASK);

/// Traffic class carried by a packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacketKind {
    /// Connection setup, teardown, and error signalling.
    Control,
    /// A fragment of an application message.
    Data,
}

/// Decoded header fields for one packet.
///
/// `PacketHeader` is a plain value; it is produced either by the
/// [`Packetizer`](crate::packetizer::Packetizer) on the outbound path or by
/// [`Packet::decode`](super::Packet::decode) on the inbound path, and is
/// never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PacketHeader {
    kind: PacketKind,
    is_first: bool,
    is_last: bool,
    counter: Counter,
}

impl PacketHeader {
    /// Create a header from its fields.
    #[must_use]
    pub const fn new(kind: PacketKind, is_first: bool, is_last: bool, counter: Counter) -> Self {
        Self {
            kind,
            is_first,
            is_last,
            counter,
        }
    }

    /// Return the packet's traffic class.
    #[must_use]
    pub const fn kind(&self) -> PacketKind { self.kind }

    /// Whether this packet opens a message.
    #[must_use]
    pub const fn is_first(&self) -> bool { self.is_first }

    /// Whether this packet closes a message.
    #[must_use]
    pub const fn is_last(&self) -> bool { self.is_last }

    /// Return the cyclic sequence counter.
    #[must_use]
    pub const fn counter(&self) -> Counter { self.counter }

    /// Pack the header into its wire representation.
    #[must_use]
    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        let mut first = (self.counter.get() << COUNTER_SHIFT) & COUNTER_MASK;
        if matches!(self.kind, PacketKind::Control) {
            first |= KIND_BIT;
        }
        if self.is_first {
            first |= FIRST_BIT;
        }
        if self.is_last {
            first |= LAST_BIT;
        }
        [first, 0]
    }

    /// Unpack a header from wire bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPacket::Truncated`] when fewer than [`HEADER_LEN`]
    /// bytes are available and [`MalformedPacket::ReservedBits`] when any
    /// reserved bit is set.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MalformedPacket> {
        let (Some(&first), second) = (bytes.first(), bytes.get(1)) else {
            return Err(MalformedPacket::Truncated { len: bytes.len() });
        };
        let Some(&second) = second else {
            return Err(MalformedPacket::Truncated { len: bytes.len() });
        };

        let reserved = u16::from_be_bytes([first & RESERVED_MASK, second]);
        if reserved != 0 {
            return Err(MalformedPacket::ReservedBits { bits: reserved });
        }

        let kind = if first & KIND_BIT == 0 {
            PacketKind::Data
        } else {
            PacketKind::Control
        };
        let raw_counter = (first & COUNTER_MASK) >> COUNTER_SHIFT;
        // The mask guarantees the counter fits the cyclic space.
        let counter = Counter::new(raw_counter).unwrap_or(Counter::ZERO);

        Ok(Self {
            kind,
            is_first: first & FIRST_BIT != 0,
            is_last: first & LAST_BIT != 0,
            counter,
        })
    }
}
