//! State machine driving one message's packets onto the transport.

use bytes::Bytes;
use log::{debug, trace};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use super::{EnqueueError, WriteError, WriteHandle, WriteState};
use crate::config::LinkConfig;
use crate::packet::PacketKind;
use crate::packetizer::{Packetizer, PendingPacket};
use crate::sequence::SequenceGenerator;
use crate::transport::SubmitError;

/// Terminal result observed by the caller, exactly once per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Every packet submission succeeded.
    Completed,
    /// The request terminated early.
    Failed(WriteError),
    /// The request was cancelled before completion.
    Cancelled,
}

/// What the link actor should do after a submission result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteProgress {
    /// More packets remain; stamp and submit the next one.
    More,
    /// The request reached a terminal state.
    Done,
}

/// One outbound message's journey through fragmentation and transmission.
///
/// The request fragments its payload eagerly at creation, then hands out one
/// encoded packet at a time via [`WriteRequest::start_packet`], advancing
/// only when the transport reports the previous submission's outcome. The
/// result is delivered through the paired [`WriteHandle`]; the one-shot
/// sender is consumed on the first terminal transition, so later events
/// (including a late submission result racing a cancellation) are discarded.
#[derive(Debug)]
pub struct WriteRequest {
    kind: PacketKind,
    packets: Vec<PendingPacket>,
    next_index: usize,
    state: WriteState,
    max_packet_size: usize,
    cancel: CancellationToken,
    result: Option<oneshot::Sender<WriteOutcome>>,
}

impl WriteRequest {
    /// Create a request carrying an application message.
    ///
    /// # Errors
    ///
    /// Returns [`EnqueueError::Packetize`] when the packet size leaves no
    /// payload room, or [`EnqueueError::MessageTooLarge`] when the fragment
    /// count exceeds [`LinkConfig::max_packets_per_message`].
    pub fn data(
        payload: Bytes,
        max_packet_size: usize,
        config: &LinkConfig,
    ) -> Result<(Self, WriteHandle), EnqueueError> {
        Self::new(PacketKind::Data, payload, max_packet_size, config)
    }

    /// Create a request carrying a control payload.
    ///
    /// # Errors
    ///
    /// Same conditions as [`WriteRequest::data`].
    pub fn control(
        payload: Bytes,
        max_packet_size: usize,
        config: &LinkConfig,
    ) -> Result<(Self, WriteHandle), EnqueueError> {
        Self::new(PacketKind::Control, payload, max_packet_size, config)
    }

    fn new(
        kind: PacketKind,
        payload: Bytes,
        max_packet_size: usize,
        config: &LinkConfig,
    ) -> Result<(Self, WriteHandle), EnqueueError> {
        let packetizer = Packetizer::new(max_packet_size)?;
        let batch = packetizer.packetize(kind, payload);
        if batch.len() > config.max_packets_per_message.get() {
            return Err(EnqueueError::MessageTooLarge {
                required: batch.len(),
                limit: config.max_packets_per_message,
            });
        }

        let cancel = CancellationToken::new();
        let (result_tx, result_rx) = oneshot::channel();
        let request = Self {
            kind,
            packets: batch.into_packets(),
            next_index: 0,
            state: WriteState::Pending,
            max_packet_size,
            cancel: cancel.clone(),
            result: Some(result_tx),
        };
        Ok((request, WriteHandle::new(cancel, result_rx)))
    }

    /// Return the request's traffic class.
    #[must_use]
    pub const fn kind(&self) -> PacketKind { self.kind }

    /// Return the current state machine position.
    #[must_use]
    pub const fn state(&self) -> WriteState { self.state }

    /// Total number of packets this request will submit.
    #[must_use]
    pub fn packet_count(&self) -> usize { self.packets.len() }

    /// Whether the paired handle requested cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool { self.cancel.is_cancelled() }

    /// Clone the cancellation token so the actor can await it without
    /// borrowing the request.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken { self.cancel.clone() }

    /// Stamp and encode the next unsent packet.
    ///
    /// The first call transitions `Pending → InFlight`. Returns `Ok(None)`
    /// once every packet has been handed out or the request is terminal.
    /// Counters are drawn from `seq` in exact transmission order, which the
    /// single-flight link actor serializes by construction.
    ///
    /// # Errors
    ///
    /// Returns the encoding failure after transitioning the request to
    /// `Failed` and delivering the outcome.
    pub fn start_packet(
        &mut self,
        seq: &mut SequenceGenerator,
    ) -> Result<Option<Bytes>, WriteError> {
        if self.state.is_terminal() {
            return Ok(None);
        }
        let Some(pending) = self.packets.get(self.next_index) else {
            return Ok(None);
        };

        match pending.stamp(seq.next()).encode(self.max_packet_size) {
            Ok(bytes) => {
                if self.state == WriteState::Pending {
                    self.state = WriteState::InFlight;
                }
                trace!(
                    "submitting packet {}/{} ({:?})",
                    self.next_index + 1,
                    self.packets.len(),
                    self.kind
                );
                Ok(Some(bytes))
            }
            Err(err) => {
                let err = WriteError::from(err);
                self.finish(WriteState::Failed, WriteOutcome::Failed(err.clone()));
                Err(err)
            }
        }
    }

    /// React to the transport's result for the packet handed out last.
    ///
    /// A success advances the send index and completes the request when the
    /// last packet was acknowledged; any error fails the whole request no
    /// matter how many packets were already accepted. Results arriving after
    /// a terminal transition (a cancellation race) are discarded.
    pub fn on_submit_result(&mut self, result: Result<(), SubmitError>) -> WriteProgress {
        if self.state != WriteState::InFlight {
            // Late result after cancellation or failure; outcome already
            // reported.
            return WriteProgress::Done;
        }

        match result {
            Ok(()) => {
                self.next_index += 1;
                if self.next_index == self.packets.len() {
                    self.finish(WriteState::Completed, WriteOutcome::Completed);
                    WriteProgress::Done
                } else {
                    WriteProgress::More
                }
            }
            Err(err) => {
                debug!(
                    "submission {}/{} failed: {err}",
                    self.next_index + 1,
                    self.packets.len()
                );
                self.finish(
                    WriteState::Failed,
                    WriteOutcome::Failed(WriteError::Submit(err)),
                );
                WriteProgress::Done
            }
        }
    }

    /// Cancel the request; a no-op once terminal.
    ///
    /// A submission already handed to the transport is not retracted, but
    /// its eventual result is discarded by [`WriteRequest::on_submit_result`].
    pub fn cancel(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.finish(WriteState::Cancelled, WriteOutcome::Cancelled);
    }

    /// Fail the request from outside the submission path (for example when
    /// the link shuts down mid-message); a no-op once terminal.
    pub fn fail(&mut self, err: WriteError) {
        if self.state.is_terminal() {
            return;
        }
        self.finish(WriteState::Failed, WriteOutcome::Failed(err));
    }

    fn finish(&mut self, state: WriteState, outcome: WriteOutcome) {
        self.state = state;
        if let Some(sender) = self.result.take() {
            // The caller may have dropped the handle; the outcome is then
            // intentionally lost.
            let _ = sender.send(outcome);
        }
    }
}
