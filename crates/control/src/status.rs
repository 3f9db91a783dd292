use {
    base::format_clock,
    std::{fmt, time::SystemTime},
    tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError},
};

/// One human-readable progress or result message.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEvent {
    pub timestamp: SystemTime,
    pub message: String,
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", format_clock(self.timestamp), self.message)
    }
}

/// Ordered, best-effort stream of status events.
///
/// Publishing never blocks. A receiver that falls more than the channel
/// capacity behind silently loses the oldest events; there is no replay.
#[derive(Clone)]
pub struct StatusStream {
    sender: broadcast::Sender<StatusEvent>,
}

impl StatusStream {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn publish(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("status: {}", message);
        self.send(message);
    }

    /// Publish a failure; identical to `publish` apart from the log level.
    pub fn publish_failure(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("status: {}", message);
        self.send(message);
    }

    fn send(&self, message: String) {
        // no subscribers is fine
        let _ = self.sender.send(StatusEvent {
            timestamp: SystemTime::now(),
            message,
        });
    }

    pub fn subscribe(&self) -> StatusReceiver {
        StatusReceiver {
            receiver: self.sender.subscribe(),
        }
    }
}

pub struct StatusReceiver {
    receiver: broadcast::Receiver<StatusEvent>,
}

impl StatusReceiver {
    /// Next event, skipping over any that were lost while lagging.
    /// Returns `None` once every `StatusStream` handle is gone.
    pub async fn recv(&mut self) -> Option<StatusEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    log::debug!("status receiver lagged, {} events lost", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next event if one is already queued.
    pub fn try_recv(&mut self) -> Option<StatusEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// All queued messages, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        std::iter::from_fn(|| self.try_recv())
            .map(|event| event.message)
            .collect()
    }
}
