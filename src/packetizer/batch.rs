//! Ordered batch of counter-less packets produced for one message.

use bytes::Bytes;

use crate::packet::{Counter, Packet, PacketHeader, PacketKind};

/// A packet awaiting its sequence counter.
///
/// The [`Packetizer`](super::Packetizer) fixes the kind, fragment flags, and
/// payload slice; the owning write request stamps the counter immediately
/// before transmission via [`PendingPacket::stamp`]. Keeping counters out of
/// fragmentation keeps the split pure and independently testable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingPacket {
    kind: PacketKind,
    is_first: bool,
    is_last: bool,
    payload: Bytes,
}

impl PendingPacket {
    pub(crate) const fn new(kind: PacketKind, is_first: bool, is_last: bool, payload: Bytes) -> Self {
        Self {
            kind,
            is_first,
            is_last,
            payload,
        }
    }

    /// Return the traffic class shared by the whole batch.
    #[must_use]
    pub const fn kind(&self) -> PacketKind { self.kind }

    /// Whether this packet opens its message.
    #[must_use]
    pub const fn is_first(&self) -> bool { self.is_first }

    /// Whether this packet closes its message.
    #[must_use]
    pub const fn is_last(&self) -> bool { self.is_last }

    /// Borrow the payload slice carried by this packet.
    #[must_use]
    pub fn payload(&self) -> &[u8] { &self.payload }

    /// Attach a sequence counter, producing the wire-ready [`Packet`].
    #[must_use]
    pub fn stamp(&self, counter: Counter) -> Packet {
        Packet::new(
            PacketHeader::new(self.kind, self.is_first, self.is_last, counter),
            self.payload.clone(),
        )
    }
}

/// The ordered fragments of a single outbound message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PacketBatch {
    packets: Vec<PendingPacket>,
}

impl PacketBatch {
    pub(crate) fn new(packets: Vec<PendingPacket>) -> Self {
        debug_assert!(!packets.is_empty(), "packet batches must not be empty");
        Self { packets }
    }

    /// Return the packets as a slice.
    #[must_use]
    pub fn packets(&self) -> &[PendingPacket] { self.packets.as_slice() }

    /// Number of packets in the batch. Batches are never empty: a zero-length
    /// message still produces exactly one packet.
    #[expect(clippy::len_without_is_empty, reason = "batches are guaranteed non-empty")]
    #[must_use]
    pub fn len(&self) -> usize { self.packets.len() }

    /// Whether the message required more than one packet.
    #[must_use]
    pub fn is_fragmented(&self) -> bool { self.len() > 1 }

    /// Consume the batch, returning all packets.
    #[must_use]
    pub fn into_packets(self) -> Vec<PendingPacket> { self.packets }
}

impl IntoIterator for PacketBatch {
    type Item = PendingPacket;
    type IntoIter = std::vec::IntoIter<PendingPacket>;

    fn into_iter(self) -> Self::IntoIter { self.packets.into_iter() }
}
