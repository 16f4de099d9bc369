//! Event loop driving one logical connection.

use std::collections::VecDeque;

use bytes::Bytes;
use log::{debug, info};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::{Command, LinkEvents, LinkHandle, inbound::InboundRouter};
use crate::config::LinkConfig;
use crate::packetizer::Reassembler;
use crate::sequence::SequenceGenerator;
use crate::transport::PacketSink;
use crate::write_request::{WriteError, WriteProgress, WriteRequest};

/// What the actor should do after driving a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Shutdown,
}

/// Actor owning all mutable state of one logical connection.
///
/// Construct with [`Link::new`], then let [`Link::run`] consume the actor on
/// a task of its own. The actor stops when the shutdown token fires or when
/// every [`LinkHandle`] clone has been dropped and the queue is empty.
///
/// # Examples
///
/// ```no_run
/// use bytes::Bytes;
/// use tokio_util::sync::CancellationToken;
/// use gattlink::{Link, LinkConfig};
/// # use async_trait::async_trait;
/// # use gattlink::transport::{PacketSink, SubmitError};
/// # struct Loopback;
/// # #[async_trait]
/// # impl PacketSink for Loopback {
/// #     fn max_packet_size(&self) -> usize { 20 }
/// #     async fn submit(&mut self, _packet: Bytes) -> Result<(), SubmitError> { Ok(()) }
/// # }
///
/// # async fn demo() {
/// let shutdown = CancellationToken::new();
/// let (link, handle, _events) = Link::new(Loopback, LinkConfig::default(), shutdown);
/// tokio::spawn(link.run());
/// let write = handle.send_message(Bytes::from_static(b"hello")).await.unwrap();
/// let _outcome = write.outcome().await;
/// # }
/// ```
#[derive(Debug)]
pub struct Link<T> {
    transport: T,
    sequence: SequenceGenerator,
    router: InboundRouter,
    commands: mpsc::Receiver<Command>,
    commands_open: bool,
    inbound: mpsc::Receiver<Bytes>,
    inbound_open: bool,
    pending: VecDeque<WriteRequest>,
    shutdown: CancellationToken,
}

impl<T: PacketSink> Link<T> {
    /// Build an actor for `transport` plus its caller-facing handle and
    /// event stream.
    ///
    /// The sequence generator and both reassembly streams start fresh: the
    /// maximum packet size is sampled here and holds for the lifetime of the
    /// logical connection.
    #[must_use]
    pub fn new(
        transport: T,
        config: LinkConfig,
        shutdown: CancellationToken,
    ) -> (Self, LinkHandle, LinkEvents) {
        let (command_tx, command_rx) = mpsc::channel(config.command_capacity);
        let (inbound_tx, inbound_rx) = mpsc::channel(config.inbound_capacity);
        let (event_tx, event_rx) = mpsc::channel(config.event_capacity);

        let handle = LinkHandle::new(command_tx, inbound_tx, transport.max_packet_size(), config);
        let router = InboundRouter::new(
            Reassembler::new(config.max_message_size),
            Reassembler::new(config.max_message_size),
            event_tx,
        );
        let link = Self {
            transport,
            sequence: SequenceGenerator::new(),
            router,
            commands: command_rx,
            commands_open: true,
            inbound: inbound_rx,
            inbound_open: true,
            pending: VecDeque::new(),
            shutdown,
        };
        (link, handle, LinkEvents::new(event_rx))
    }

    /// Drive the connection until shutdown or source exhaustion.
    ///
    /// Requests queued behind an in-flight one start only after it reaches a
    /// terminal state. On shutdown, queued and in-flight requests fail with
    /// [`WriteError::LinkClosed`].
    pub async fn run(mut self) {
        loop {
            // Start the next queued request, resolving stale cancellations
            // without touching the transport.
            let active = loop {
                match self.pending.pop_front() {
                    Some(mut request) if request.is_cancelled() => request.cancel(),
                    other => break other,
                }
            };

            if let Some(request) = active {
                match self.drive(request).await {
                    Flow::Continue => continue,
                    Flow::Shutdown => break,
                }
            }

            if !self.commands_open && !self.inbound_open {
                break;
            }

            tokio::select! {
                biased;

                () = self.shutdown.cancelled() => break,
                cmd = self.commands.recv(), if self.commands_open => match cmd {
                    Some(Command::Send(request)) => self.pending.push_back(request),
                    None => self.commands_open = false,
                },
                raw = self.inbound.recv(), if self.inbound_open => match raw {
                    Some(bytes) => self.router.accept(&bytes).await,
                    None => self.inbound_open = false,
                },
                else => break,
            }
        }

        self.drain();
        info!("link actor stopped");
    }

    /// Submit one request's packets until it reaches a terminal state.
    ///
    /// Within the request at most one submission is outstanding; the next
    /// packet is stamped only after the transport reports the previous
    /// outcome. While a submission is pending the actor keeps queueing new
    /// commands and processing inbound packets.
    async fn drive(&mut self, mut request: WriteRequest) -> Flow {
        let cancel = request.cancel_token();

        loop {
            if request.is_cancelled() {
                request.cancel();
                return Flow::Continue;
            }

            let bytes = match request.start_packet(&mut self.sequence) {
                Ok(Some(bytes)) => bytes,
                // Either completed via the last submission result or failed
                // with the outcome already delivered.
                Ok(None) | Err(_) => return Flow::Continue,
            };

            let submit = self.transport.submit(bytes);
            tokio::pin!(submit);

            let result = loop {
                tokio::select! {
                    biased;

                    () = self.shutdown.cancelled() => {
                        // The in-flight write is abandoned with the link.
                        request.fail(WriteError::LinkClosed);
                        return Flow::Shutdown;
                    }
                    () = cancel.cancelled() => {
                        debug!("write request cancelled mid-flight");
                        request.cancel();
                        return Flow::Continue;
                    }
                    cmd = self.commands.recv(), if self.commands_open => match cmd {
                        Some(Command::Send(next)) => self.pending.push_back(next),
                        None => self.commands_open = false,
                    },
                    raw = self.inbound.recv(), if self.inbound_open => match raw {
                        Some(bytes) => self.router.accept(&bytes).await,
                        None => self.inbound_open = false,
                    },
                    result = &mut submit => break result,
                }
            };

            match request.on_submit_result(result) {
                WriteProgress::More => {}
                WriteProgress::Done => return Flow::Continue,
            }
        }
    }

    /// Fail whatever work remains so every handle observes an outcome.
    fn drain(&mut self) {
        for mut request in self.pending.drain(..) {
            if request.is_cancelled() {
                request.cancel();
            } else {
                request.fail(WriteError::LinkClosed);
            }
        }
    }
}
