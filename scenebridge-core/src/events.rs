//! Event types and the one-way error channel for SceneBridge

use crossbeam_channel::{Receiver, Sender, TryIter, unbounded};

/// Messages sent from the bridge back to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneBridgeEvent {
    /// A non-fatal condition the host should surface to the user.
    Error { message: String },
}

impl SceneBridgeEvent {
    pub fn message(&self) -> &str {
        match self {
            Self::Error { message } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// One-way sink for human-readable error messages.
///
/// Reporting never fails and never blocks: the operation that reports keeps
/// going and hands back a degraded result. Cloning the channel shares the same
/// underlying queue, so a host can keep one end for draining.
///
/// The queue is unbounded and only shrinks when events are taken out. Hosts
/// must drain it, either through [`ErrorChannel::poll_events`] or by moving
/// [`ErrorChannel::receiver`] to a thread that consumes it.
#[derive(Debug, Clone)]
pub struct ErrorChannel {
    sender: Sender<SceneBridgeEvent>,
    receiver: Receiver<SceneBridgeEvent>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Reports a message to the host.
    pub fn report(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        // The receiver lives in `self`, so the queue cannot be disconnected here.
        let _ = self.sender.send(SceneBridgeEvent::Error { message });
    }

    /// Drains every event reported so far.
    pub fn poll_events(&self) -> TryIter<'_, SceneBridgeEvent> {
        self.receiver.try_iter()
    }

    /// A receiver the host can move to another thread.
    pub fn receiver(&self) -> Receiver<SceneBridgeEvent> {
        self.receiver.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for ErrorChannel {
    fn default() -> Self {
        Self::new()
    }
}
