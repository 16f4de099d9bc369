//! Wire format for a single transport packet.
//!
//! Each packet carries a fixed two-byte header followed by a payload slice.
//! The header packs the packet kind, first/last fragment flags, and a small
//! cyclic counter into the first byte; the remaining bits are reserved and
//! must be zero on the wire. Encode and decode are pure functions so the
//! codec can be tested without any transport in place.

pub mod counter;
pub mod error;
pub mod header;
#[expect(clippy::module_inception, reason = "packet value lives beside its header")]
pub mod packet;

pub use counter::Counter;
pub use error::{EncodeError, MalformedPacket};
pub use header::{HEADER_LEN, PacketHeader, PacketKind};
pub use packet::Packet;

#[cfg(test)]
mod tests;
