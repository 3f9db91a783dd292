use {crate::ImageError, base::Tensor};

/// Number of channels in every `Image` (packed RGB).
pub const CHANNELS: usize = 3;

/// An 8-bit RGB image in HWC layout: `[height, width, 3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    tensor: Tensor<u8>,
}

impl Image {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::Size(format!("empty image {width}x{height}")));
        }
        Ok(Self {
            tensor: Tensor::new(vec![height, width, CHANNELS], data)?,
        })
    }

    /// An image filled with a single color.
    pub fn solid(width: usize, height: usize, rgb: [u8; 3]) -> Result<Self, ImageError> {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take(width.saturating_mul(height).saturating_mul(CHANNELS))
            .collect();
        Self::new(width, height, data)
    }

    pub fn height(&self) -> usize {
        self.tensor.shape[0]
    }

    pub fn width(&self) -> usize {
        self.tensor.shape[1]
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let offset = (y * self.width() + x) * CHANNELS;
        let p = &self.tensor.data[offset..offset + CHANNELS];
        Some([p[0], p[1], p[2]])
    }

    pub fn data(&self) -> &[u8] {
        &self.tensor.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.tensor.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.tensor.data
    }
}
