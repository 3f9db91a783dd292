use {
    crate::{FrameBuffer, VideoError},
    futures_core::Stream,
    futures_util::StreamExt,
    image::Image,
    std::{
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        time::Duration,
    },
    tokio::task::JoinHandle,
};

// delay before pulling again after a source error
const WAIT_BEFORE_RETRY_MS: u64 = 100;

/// Background task pumping frames from an image source into a `FrameBuffer`.
///
/// The task stops when the source ends, when `stop` is called, or when the
/// `Capture` is dropped.
pub struct Capture {
    cancel: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<()>>,
}

impl Capture {
    pub fn spawn<S>(source: S, buffer: FrameBuffer) -> Self
    where
        S: Stream<Item = Result<Image, VideoError>> + Send + Unpin + 'static,
    {
        let cancel = Arc::new(AtomicBool::new(false));
        let join_handle = tokio::spawn(Self::pump(source, buffer, Arc::clone(&cancel)));
        Self {
            cancel,
            join_handle: Some(join_handle),
        }
    }

    async fn pump<S>(mut source: S, buffer: FrameBuffer, cancel: Arc<AtomicBool>)
    where
        S: Stream<Item = Result<Image, VideoError>> + Unpin,
    {
        log::info!("capture: starting");
        while !cancel.load(Ordering::Relaxed) {
            match source.next().await {
                Some(Ok(image)) => buffer.on_new_frame(image),
                Some(Err(error)) => {
                    log::error!("capture: source failed: {}", error);
                    tokio::time::sleep(Duration::from_millis(WAIT_BEFORE_RETRY_MS)).await;
                }
                None => {
                    log::info!("capture: source ended");
                    break;
                }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.join_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop capturing and wait for the task to wind down.
    pub async fn stop(mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(handle) = self.join_handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}

impl Drop for Capture {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(handle) = self.join_handle.take() {
            handle.abort();
        }
    }
}
