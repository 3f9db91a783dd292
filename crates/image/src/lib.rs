//! RGB image type and the preprocessing steps applied before model input.

pub mod error;
pub mod image;

pub use error::ImageError;
pub use image::{CHANNELS, Image};

use crates_image::{RgbImage, imageops::FilterType};

fn resize_inner(image: Image, width: usize, height: usize) -> Result<Image, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::Size(format!(
            "cannot resize to {width}x{height}"
        )));
    }
    if image.width() == width && image.height() == height {
        return Ok(image);
    }
    let (src_width, src_height) = (image.width() as u32, image.height() as u32);
    let buffer = RgbImage::from_raw(src_width, src_height, image.into_data())
        .ok_or_else(|| ImageError::Resize("buffer does not match dimensions".to_string()))?;
    let resized =
        crates_image::imageops::resize(&buffer, width as u32, height as u32, FilterType::Triangle);
    Image::new(width, height, resized.into_raw())
}

/// Resizes an image to exactly `width` x `height`, ignoring aspect ratio.
///
/// The CPU-bound work runs on tokio's blocking thread pool.
///
/// # Errors
///
/// Returns `ImageError::Size` for a zero target dimension and
/// `ImageError::Resize` if the blocking task fails.
pub async fn resize(image: Image, width: usize, height: usize) -> Result<Image, ImageError> {
    tokio::task::spawn_blocking(move || resize_inner(image, width, height))
        .await
        .map_err(|e| ImageError::Resize(e.to_string()))?
}
