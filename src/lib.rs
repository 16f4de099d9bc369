//! Public API for the `gattlink` library.
//!
//! `gattlink` carries arbitrary-length application messages over a link that
//! only supports small, size-bounded writes, such as a GATT characteristic
//! write over Bluetooth Low Energy. Messages are split into packets carrying
//! a two-byte header (traffic kind, first/last fragment flags, a cyclic
//! counter), submitted to the transport one at a time, and deterministically
//! reassembled on the receiving side with loss and duplication detection.
//!
//! The crate is organised bottom-up:
//!
//! - [`packet`] — the bit-exact wire format,
//! - [`sequence`] — the cyclic counter generator,
//! - [`packetizer`] — pure fragmentation and stateful reassembly,
//! - [`write_request`] — the per-message submission state machine,
//! - [`link`] — the per-connection actor tying the layers to a
//!   [`transport::PacketSink`].

pub mod config;
pub mod link;
pub mod packet;
pub mod packetizer;
pub mod sequence;
pub mod transport;
pub mod write_request;

pub use config::LinkConfig;
pub use link::{Link, LinkEvent, LinkEvents, LinkHandle, SendError};
pub use packet::{Counter, EncodeError, HEADER_LEN, MalformedPacket, Packet, PacketHeader, PacketKind};
pub use packetizer::{FramingError, PacketBatch, PacketizeError, Packetizer, PendingPacket, Reassembler};
pub use sequence::SequenceGenerator;
pub use transport::{PacketSink, SubmitError};
pub use write_request::{
    EnqueueError,
    WriteError,
    WriteHandle,
    WriteOutcome,
    WriteProgress,
    WriteRequest,
    WriteState,
};
