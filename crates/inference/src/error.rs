use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum InferError {
    Input(String),
    Runtime(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::Input(msg) => write!(f, "input error: {msg}"),
            InferError::Runtime(msg) => write!(f, "runtime error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<image::ImageError> for InferError {
    fn from(err: image::ImageError) -> Self {
        InferError::Input(err.to_string())
    }
}
