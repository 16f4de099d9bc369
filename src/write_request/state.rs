//! Completion states of a write request.

/// State machine position of one write request.
///
/// `Pending → InFlight → {Completed | Failed | Cancelled}`; terminal states
/// are final and no transition ever leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteState {
    /// Created and fragmented, no packet submitted yet.
    Pending,
    /// At least one packet handed to the transport.
    InFlight,
    /// Every packet submission succeeded.
    Completed,
    /// A submission failed; partial delivery is never reported as success.
    Failed,
    /// Cancelled before completion.
    Cancelled,
}

impl WriteState {
    /// Whether the request has reached a final state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}
