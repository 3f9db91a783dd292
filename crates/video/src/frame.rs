use {image::Image, std::time::SystemTime};

/// A captured video frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub image: Image,
    /// Monotonic per-buffer capture counter, starting at 1.
    pub sequence: u64,
    pub captured_at: SystemTime,
}
