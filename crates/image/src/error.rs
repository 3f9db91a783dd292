use {base::TensorError, std::fmt};

#[derive(Debug)]
pub enum ImageError {
    Tensor(TensorError),
    Size(String),
    Resize(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
            ImageError::Size(msg) => write!(f, "size error: {msg}"),
            ImageError::Resize(msg) => write!(f, "resize error: {msg}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<TensorError> for ImageError {
    fn from(err: TensorError) -> Self {
        ImageError::Tensor(err)
    }
}
