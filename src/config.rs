//! Resource limits and channel sizing for a logical connection.

use std::num::NonZeroUsize;

use crate::packetizer::Reassembler;

/// Settings that bound memory usage for one link.
///
/// The defaults suit small BLE-class transports; callers with larger frames
/// or messages override the relevant fields.
///
/// # Examples
///
/// ```
/// use gattlink::LinkConfig;
/// let config = LinkConfig::default();
/// assert!(config.max_packets_per_message.get() >= 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LinkConfig {
    /// Ceiling on the fragment count of a single outbound message. Requests
    /// exceeding it are rejected at creation time and never partially
    /// started.
    pub max_packets_per_message: NonZeroUsize,
    /// Hard cap on a fully reassembled inbound message.
    pub max_message_size: NonZeroUsize,
    /// Capacity of the caller-to-actor command channel.
    pub command_capacity: usize,
    /// Capacity of the transport-to-actor raw packet channel.
    pub inbound_capacity: usize,
    /// Capacity of the actor-to-caller event channel.
    pub event_capacity: usize,
}

const DEFAULT_MAX_PACKETS_PER_MESSAGE: usize = 1024;

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            max_packets_per_message: NonZeroUsize::new(DEFAULT_MAX_PACKETS_PER_MESSAGE)
                .expect("default packet ceiling is non-zero"),
            max_message_size: NonZeroUsize::new(Reassembler::DEFAULT_MAX_MESSAGE_SIZE)
                .expect("default message cap is non-zero"),
            command_capacity: 16,
            inbound_capacity: 32,
            event_capacity: 32,
        }
    }
}
