//! Cloneable handle used by callers and the transport's receive side.

use bytes::Bytes;
use tokio::sync::mpsc;

use super::{Command, SendError};
use crate::config::LinkConfig;
use crate::write_request::{WriteHandle, WriteRequest};

/// Producer-side handle for one logical connection.
///
/// Clones share the same actor. Sends validate and fragment synchronously,
/// so an unframeable or oversized message is rejected before anything is
/// queued.
#[derive(Clone, Debug)]
pub struct LinkHandle {
    commands: mpsc::Sender<Command>,
    inbound: mpsc::Sender<Bytes>,
    max_packet_size: usize,
    config: LinkConfig,
}

impl LinkHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<Command>,
        inbound: mpsc::Sender<Bytes>,
        max_packet_size: usize,
        config: LinkConfig,
    ) -> Self {
        Self {
            commands,
            inbound,
            max_packet_size,
            config,
        }
    }

    /// Maximum encoded packet size negotiated for this connection.
    #[must_use]
    pub const fn max_packet_size(&self) -> usize { self.max_packet_size }

    /// Queue an application message for transmission.
    ///
    /// The returned [`WriteHandle`] yields exactly one terminal outcome. The
    /// request does not start until every earlier request reached a terminal
    /// state, so fragments of distinct messages never interleave.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Enqueue`] for payloads that cannot be framed and
    /// [`SendError::Closed`] once the actor has shut down.
    pub async fn send_message(&self, payload: Bytes) -> Result<WriteHandle, SendError> {
        let (request, handle) = WriteRequest::data(payload, self.max_packet_size, &self.config)?;
        self.submit(request).await?;
        Ok(handle)
    }

    /// Queue a control payload for transmission.
    ///
    /// # Errors
    ///
    /// Same conditions as [`LinkHandle::send_message`].
    pub async fn send_control(&self, payload: Bytes) -> Result<WriteHandle, SendError> {
        let (request, handle) = WriteRequest::control(payload, self.max_packet_size, &self.config)?;
        self.submit(request).await?;
        Ok(handle)
    }

    /// Deliver one raw inbound packet from the transport.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Closed`] once the actor has shut down.
    pub async fn deliver_packet(&self, raw: Bytes) -> Result<(), SendError> {
        self.inbound.send(raw).await.map_err(|_| SendError::Closed)
    }

    async fn submit(&self, request: WriteRequest) -> Result<(), SendError> {
        self.commands
            .send(Command::Send(request))
            .await
            .map_err(|_| SendError::Closed)
    }
}
