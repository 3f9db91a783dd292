use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    Stream(String),
    Image(image::ImageError),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Stream(msg) => write!(f, "stream error: {msg}"),
            VideoError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<image::ImageError> for VideoError {
    fn from(err: image::ImageError) -> Self {
        VideoError::Image(err)
    }
}
