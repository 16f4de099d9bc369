//! Outbound splitter bounded by the connection's maximum packet size.

use bytes::Bytes;

use super::{PacketBatch, PacketizeError, PendingPacket};
use crate::packet::{HEADER_LEN, PacketKind};

/// Splits outbound messages into ordered, size-bounded packet batches.
///
/// The packetizer is stateless beyond the chunk size it derives from the
/// negotiated maximum packet size, which may change only between logical
/// connections, never mid-message.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use gattlink::packet::PacketKind;
/// use gattlink::packetizer::Packetizer;
///
/// let packetizer = Packetizer::new(20).expect("usable chunk size");
/// let batch = packetizer.packetize(PacketKind::Data, Bytes::from(vec![0_u8; 40]));
/// assert_eq!(batch.len(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Packetizer {
    max_packet_size: usize,
    chunk_size: usize,
}

impl Packetizer {
    /// Create a packetizer for the given maximum packet size.
    ///
    /// # Errors
    ///
    /// Returns [`PacketizeError::ZeroChunkSize`] when `max_packet_size` does
    /// not leave room for at least one payload byte after the header.
    pub const fn new(max_packet_size: usize) -> Result<Self, PacketizeError> {
        if max_packet_size <= HEADER_LEN {
            return Err(PacketizeError::ZeroChunkSize { max_packet_size });
        }
        Ok(Self {
            max_packet_size,
            chunk_size: max_packet_size - HEADER_LEN,
        })
    }

    /// Return the maximum packet size this packetizer was built for.
    #[must_use]
    pub const fn max_packet_size(&self) -> usize { self.max_packet_size }

    /// Return the payload bytes available per packet.
    #[must_use]
    pub const fn chunk_size(&self) -> usize { self.chunk_size }

    /// Split `payload` into an ordered batch of counter-less packets.
    ///
    /// The first chunk's packet is marked first, the last chunk's packet is
    /// marked last; a message that fits in one chunk carries both flags on
    /// the same packet. An empty payload still produces exactly one packet,
    /// so empty messages remain representable on the wire.
    #[must_use]
    pub fn packetize(&self, kind: PacketKind, payload: Bytes) -> PacketBatch {
        if payload.is_empty() {
            return PacketBatch::new(vec![PendingPacket::new(kind, true, true, payload)]);
        }

        let total = payload.len();
        let mut packets = Vec::with_capacity(total.div_ceil(self.chunk_size));
        let mut offset = 0;

        while offset < total {
            let end = (offset + self.chunk_size).min(total);
            packets.push(PendingPacket::new(
                kind,
                offset == 0,
                end == total,
                payload.slice(offset..end),
            ));
            offset = end;
        }

        PacketBatch::new(packets)
    }
}
