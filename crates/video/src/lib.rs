//! Frame capture for the command pipeline.
//!
//! An image source (any `Stream` of images) is pumped into a `FrameBuffer`
//! by a `Capture` task; the pipeline takes independent copies of the latest
//! frame while observers get best-effort notifications.

pub mod capture;
pub mod error;
pub mod frame;
pub mod framebuffer;
pub mod testpattern;

pub use capture::Capture;
pub use error::VideoError;
pub use frame::Frame;
pub use framebuffer::{FrameBuffer, FrameReceiver};
pub use testpattern::TestPattern;
