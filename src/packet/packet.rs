//! Immutable packet value pairing a header with its payload slice.

use bytes::{BufMut, Bytes, BytesMut};

use super::{EncodeError, HEADER_LEN, MalformedPacket, PacketHeader};

/// One wire-level fragment: header plus payload bytes.
///
/// A `Packet` is never mutated after construction; callers build a new value
/// to change any field. Payloads are [`Bytes`] so fragments of a shared
/// message buffer are cheap to clone.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use gattlink::packet::{Counter, Packet, PacketHeader, PacketKind};
///
/// let header = PacketHeader::new(PacketKind::Data, true, true, Counter::ZERO);
/// let packet = Packet::new(header, Bytes::from_static(b"hi"));
/// let wire = packet.encode(20).expect("fits in 20 bytes");
/// assert_eq!(Packet::decode(&wire).expect("well formed"), packet);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packet {
    header: PacketHeader,
    payload: Bytes,
}

impl Packet {
    /// Construct a packet from a header and payload.
    #[must_use]
    pub const fn new(header: PacketHeader, payload: Bytes) -> Self { Self { header, payload } }

    /// Return the packet header.
    #[must_use]
    pub const fn header(&self) -> PacketHeader { self.header }

    /// Return the packet's traffic class.
    #[must_use]
    pub const fn kind(&self) -> super::PacketKind { self.header.kind() }

    /// Borrow the payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] { &self.payload }

    /// Consume the packet, returning the owned payload.
    #[must_use]
    pub fn into_payload(self) -> Bytes { self.payload }

    /// Encode the packet for transmission.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::PayloadTooLarge`] when the encoded length would
    /// exceed `max_packet_size`.
    pub fn encode(&self, max_packet_size: usize) -> Result<Bytes, EncodeError> {
        let encoded_len = HEADER_LEN + self.payload.len();
        if encoded_len > max_packet_size {
            return Err(EncodeError::PayloadTooLarge {
                payload_len: self.payload.len(),
                max_packet_size,
            });
        }

        let mut buf = BytesMut::with_capacity(encoded_len);
        buf.put_slice(&self.header.to_bytes());
        buf.put_slice(&self.payload);
        Ok(buf.freeze())
    }

    /// Decode a packet from raw transport bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPacket`] when the buffer is shorter than the header
    /// or carries unrecognised reserved bits.
    pub fn decode(bytes: &[u8]) -> Result<Self, MalformedPacket> {
        let header = PacketHeader::from_bytes(bytes)?;
        let payload = bytes.get(HEADER_LEN..).unwrap_or_default();
        Ok(Self {
            header,
            payload: Bytes::copy_from_slice(payload),
        })
    }
}
