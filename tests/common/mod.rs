//! Test doubles shared by the integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use gattlink::transport::{PacketSink, SubmitError};
use tokio::sync::{mpsc, oneshot};

/// A submission in flight on a [`ManualSink`], resolved by the test.
pub struct HeldSubmission {
    pub packet: Bytes,
    respond: oneshot::Sender<Result<(), SubmitError>>,
}

impl HeldSubmission {
    pub fn resolve(self, result: Result<(), SubmitError>) {
        self.respond
            .send(result)
            .expect("the sink is waiting for this result");
    }
}

/// Transport double whose submission results are scripted by the test.
///
/// Each `submit` parks until the test pulls the [`HeldSubmission`] off the
/// channel and resolves it, so tests control exactly when the link actor
/// observes each outcome.
pub struct ManualSink {
    max_packet_size: usize,
    submissions: mpsc::UnboundedSender<HeldSubmission>,
}

impl ManualSink {
    pub fn new(max_packet_size: usize) -> (Self, mpsc::UnboundedReceiver<HeldSubmission>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                max_packet_size,
                submissions: tx,
            },
            rx,
        )
    }
}

#[async_trait]
impl PacketSink for ManualSink {
    fn max_packet_size(&self) -> usize { self.max_packet_size }

    async fn submit(&mut self, packet: Bytes) -> Result<(), SubmitError> {
        let (respond, result) = oneshot::channel();
        self.submissions
            .send(HeldSubmission { packet, respond })
            .map_err(|_| SubmitError::Disconnected)?;
        result.await.unwrap_or(Err(SubmitError::Disconnected))
    }
}

/// Transport double that accepts every submission and records the wire bytes.
#[derive(Clone)]
pub struct RecordingSink {
    max_packet_size: usize,
    sent: Arc<Mutex<Vec<Bytes>>>,
}

impl RecordingSink {
    pub fn new(max_packet_size: usize) -> Self {
        Self {
            max_packet_size,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent(&self) -> Vec<Bytes> {
        self.sent.lock().expect("recording mutex poisoned").clone()
    }
}

#[async_trait]
impl PacketSink for RecordingSink {
    fn max_packet_size(&self) -> usize { self.max_packet_size }

    async fn submit(&mut self, packet: Bytes) -> Result<(), SubmitError> {
        self.sent
            .lock()
            .expect("recording mutex poisoned")
            .push(packet);
        Ok(())
    }
}
