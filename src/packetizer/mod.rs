//! Fragmentation and reassembly between messages and wire packets.
//!
//! The outbound path ([`Packetizer`]) is pure: it splits a message into an
//! ordered batch of counter-less packets bounded by the connection's maximum
//! packet size, leaving counter assignment to the write request that owns the
//! batch. The inbound path ([`Reassembler`]) is stateful per logical stream
//! and re-emits whole messages, reporting framing violations instead of
//! silently resynchronising.

pub mod batch;
pub mod error;
#[expect(clippy::module_inception, reason = "outbound splitter lives beside its batch type")]
pub mod packetizer;
pub mod reassembler;

pub use batch::{PacketBatch, PendingPacket};
pub use error::{FramingError, PacketizeError};
pub use packetizer::Packetizer;
pub use reassembler::Reassembler;

#[cfg(test)]
mod tests;
