//! Routes decoded inbound packets to the per-kind reassembly streams.

use log::{debug, warn};
use tokio::sync::mpsc;

use super::LinkEvent;
use crate::packet::{Packet, PacketKind};
use crate::packetizer::{FramingError, Reassembler};

/// Inbound half of a link: one reassembly stream per traffic class.
///
/// Control and data packets share the wire but are never combined into one
/// logical message, so each kind gets its own stream state.
#[derive(Debug)]
pub(crate) struct InboundRouter {
    data: Reassembler,
    control: Reassembler,
    events: mpsc::Sender<LinkEvent>,
}

impl InboundRouter {
    pub(crate) fn new(data: Reassembler, control: Reassembler, events: mpsc::Sender<LinkEvent>) -> Self {
        Self {
            data,
            control,
            events,
        }
    }

    /// Decode one raw packet and advance the matching reassembly stream.
    ///
    /// Malformed bytes and framing violations are reported as events, never
    /// as connection teardown.
    pub(crate) async fn accept(&mut self, raw: &[u8]) {
        let packet = match Packet::decode(raw) {
            Ok(packet) => packet,
            Err(err) => {
                warn!("dropping malformed inbound packet: {err}");
                self.emit(LinkEvent::Framing(FramingError::Malformed(err))).await;
                return;
            }
        };

        let kind = packet.kind();
        let stream = match kind {
            PacketKind::Data => &mut self.data,
            PacketKind::Control => &mut self.control,
        };

        match stream.on_packet(&packet) {
            Ok(None) => {}
            Ok(Some(payload)) => {
                let event = match kind {
                    PacketKind::Data => LinkEvent::Message(payload),
                    PacketKind::Control => LinkEvent::Control(payload),
                };
                self.emit(event).await;
            }
            Err(err) => {
                warn!("framing error on {kind:?} stream: {err}");
                self.emit(LinkEvent::Framing(err)).await;
            }
        }
    }

    async fn emit(&self, event: LinkEvent) {
        if self.events.send(event).await.is_err() {
            debug!("event receiver dropped; inbound event discarded");
        }
    }
}
