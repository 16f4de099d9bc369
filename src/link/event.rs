//! Inbound events emitted to the caller.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::Stream;
use tokio::sync::mpsc;

use crate::packetizer::FramingError;

/// One inbound occurrence on the link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkEvent {
    /// A fully reassembled application message.
    Message(Bytes),
    /// A fully reassembled control payload.
    Control(Bytes),
    /// A framing violation. The affected reassembly attempt was abandoned;
    /// the connection itself survives and awaits the next first-fragment
    /// packet.
    Framing(FramingError),
}

/// Stream of [`LinkEvent`]s for one logical connection.
///
/// Ends when the link actor stops.
#[derive(Debug)]
pub struct LinkEvents {
    rx: mpsc::Receiver<LinkEvent>,
}

impl LinkEvents {
    pub(crate) fn new(rx: mpsc::Receiver<LinkEvent>) -> Self { Self { rx } }

    /// Receive the next inbound event.
    ///
    /// Returns `None` once the link actor has stopped.
    pub async fn recv(&mut self) -> Option<LinkEvent> { self.rx.recv().await }
}

impl Stream for LinkEvents {
    type Item = LinkEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
