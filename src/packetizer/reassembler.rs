//! Inbound state machine that stitches packets back into whole messages.

use std::num::NonZeroUsize;

use bytes::{BufMut, Bytes, BytesMut};

use super::FramingError;
use crate::packet::{Counter, Packet};

#[derive(Debug)]
struct PartialMessage {
    buffer: BytesMut,
    expected_next_counter: Counter,
}

impl PartialMessage {
    fn new(packet: &Packet) -> Self {
        let mut buffer = BytesMut::with_capacity(packet.payload().len());
        buffer.put_slice(packet.payload());
        Self {
            buffer,
            expected_next_counter: packet.header().counter().wrapping_next(),
        }
    }

    fn append(&mut self, packet: &Packet) {
        self.buffer.put_slice(packet.payload());
        self.expected_next_counter = packet.header().counter().wrapping_next();
    }

    fn len(&self) -> usize { self.buffer.len() }

    fn into_message(self) -> Bytes { self.buffer.freeze() }
}

/// Per-stream reassembly state for one logical connection.
///
/// Reassembly state exists only between a first-fragment packet and its
/// matching last-fragment packet. Every [`FramingError`] discards the partial
/// message and leaves the reassembler ready for the next first-fragment
/// packet; an error never tears the connection down.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use gattlink::packet::{Counter, Packet, PacketHeader, PacketKind};
/// use gattlink::packetizer::Reassembler;
///
/// let mut reassembler = Reassembler::with_default_limit();
/// let single = Packet::new(
///     PacketHeader::new(PacketKind::Data, true, true, Counter::ZERO),
///     Bytes::from_static(b"whole"),
/// );
/// let message = reassembler
///     .on_packet(&single)
///     .expect("well-framed packet")
///     .expect("single-fragment message completes immediately");
/// assert_eq!(&message[..], b"whole");
/// ```
#[derive(Debug)]
pub struct Reassembler {
    max_message_size: NonZeroUsize,
    partial: Option<PartialMessage>,
}

impl Reassembler {
    /// Default cap on a reassembled message, in bytes.
    pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 1 << 20;

    /// Create a reassembler that caps reconstructed messages at
    /// `max_message_size` bytes.
    #[must_use]
    pub const fn new(max_message_size: NonZeroUsize) -> Self {
        Self {
            max_message_size,
            partial: None,
        }
    }

    /// Create a reassembler with [`Self::DEFAULT_MAX_MESSAGE_SIZE`].
    #[must_use]
    pub const fn with_default_limit() -> Self {
        match NonZeroUsize::new(Self::DEFAULT_MAX_MESSAGE_SIZE) {
            Some(limit) => Self::new(limit),
            None => unreachable!(),
        }
    }

    /// Whether a message is currently in progress.
    #[must_use]
    pub const fn in_progress(&self) -> bool { self.partial.is_some() }

    /// Feed one decoded packet into the stream.
    ///
    /// Returns `Ok(Some(message))` when the packet completes a message,
    /// `Ok(None)` while more fragments are required.
    ///
    /// # Errors
    ///
    /// Returns a [`FramingError`] when the packet violates the framing rules:
    /// a first packet mid-message, a continuation with no message open, a
    /// broken counter sequence, or growth beyond the configured message cap.
    /// Partial state is discarded in every error case.
    pub fn on_packet(&mut self, packet: &Packet) -> Result<Option<Bytes>, FramingError> {
        if packet.header().is_first() {
            if self.partial.take().is_some() {
                // A new message started before the previous one finished.
                return Err(FramingError::UnexpectedFirstPacket);
            }
            return self.start(packet);
        }

        let Some(mut partial) = self.partial.take() else {
            return Err(FramingError::UnexpectedContinuation);
        };

        let found = packet.header().counter();
        if found != partial.expected_next_counter {
            return Err(FramingError::SequenceGap {
                expected: partial.expected_next_counter,
                found,
            });
        }

        self.check_limit(partial.len() + packet.payload().len())?;
        partial.append(packet);

        if packet.header().is_last() {
            return Ok(Some(partial.into_message()));
        }
        self.partial = Some(partial);
        Ok(None)
    }

    fn start(&mut self, packet: &Packet) -> Result<Option<Bytes>, FramingError> {
        self.check_limit(packet.payload().len())?;
        let partial = PartialMessage::new(packet);
        if packet.header().is_last() {
            return Ok(Some(partial.into_message()));
        }
        self.partial = Some(partial);
        Ok(None)
    }

    fn check_limit(&self, attempted: usize) -> Result<(), FramingError> {
        if attempted > self.max_message_size.get() {
            return Err(FramingError::MessageTooLarge {
                attempted,
                limit: self.max_message_size,
            });
        }
        Ok(())
    }
}
