use {
    crate::Frame,
    image::Image,
    std::{
        sync::{
            Arc,
            atomic::{AtomicU64, Ordering},
        },
        time::SystemTime,
    },
    tokio::sync::watch,
};

struct Shared {
    current: watch::Sender<Option<Arc<Frame>>>,
    sequence: AtomicU64,
}

/// Holds the most recently captured frame.
///
/// Cloning a `FrameBuffer` yields another handle to the same buffer, so the
/// capture task and the command pipeline can each own one. The internal lock
/// only covers swapping or cloning an `Arc`, never any I/O.
#[derive(Clone)]
pub struct FrameBuffer {
    shared: Arc<Shared>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            shared: Arc::new(Shared {
                current,
                sequence: AtomicU64::new(0),
            }),
        }
    }

    /// Replace the current frame and notify observers.
    ///
    /// The buffer's reference to the previous frame is dropped before this
    /// returns; its memory goes away once no observer still holds it.
    pub fn set(&self, frame: Frame) {
        let previous = self.shared.current.send_replace(Some(Arc::new(frame)));
        drop(previous);
    }

    /// Push interface for image sources: stamps and stores a new capture.
    pub fn on_new_frame(&self, image: Image) {
        let sequence = self.shared.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        self.set(Frame {
            image,
            sequence,
            captured_at: SystemTime::now(),
        });
    }

    /// An independent copy of the latest frame, or `None` before the first capture.
    ///
    /// Never waits for a new frame.
    pub fn get_copy(&self) -> Option<Frame> {
        let current = self.shared.current.borrow().clone();
        current.map(|frame| Frame::clone(&frame))
    }

    pub fn has_frame(&self) -> bool {
        self.shared.current.borrow().is_some()
    }

    /// Subscribe to "new frame" notifications.
    ///
    /// Each observer only ever sees the latest frame: frames set while it was
    /// busy are skipped, and the capture source is never held up. Frames set
    /// before subscribing are not reported. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> FrameReceiver {
        FrameReceiver {
            receiver: self.shared.current.subscribe(),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.shared.current.receiver_count()
    }
}

/// Receiving end of a frame subscription.
pub struct FrameReceiver {
    receiver: watch::Receiver<Option<Arc<Frame>>>,
}

impl FrameReceiver {
    /// Wait for a frame newer than the last one seen.
    /// Returns `None` once every `FrameBuffer` handle is gone.
    pub async fn recv(&mut self) -> Option<Arc<Frame>> {
        loop {
            self.receiver.changed().await.ok()?;
            if let Some(frame) = self.receiver.borrow_and_update().clone() {
                return Some(frame);
            }
        }
    }

    /// The latest frame if it has not been seen yet.
    pub fn try_recv(&mut self) -> Option<Arc<Frame>> {
        if !self.receiver.has_changed().unwrap_or(false) {
            return None;
        }
        self.receiver.borrow_and_update().clone()
    }
}
