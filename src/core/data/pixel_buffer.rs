use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

/// Packs an intensity into every colour channel of a `0x00RRGGBB` pixel.
#[inline]
#[must_use]
pub fn grayscale(value: u8) -> u32 {
    let v = u32::from(value);
    v | v << 8 | v << 16
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    Allocation { pixels: usize },
    BoundsMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { pixels } => {
                write!(f, "could not allocate a pixel buffer of {} pixels", pixels)
            }
            Self::BoundsMismatch {
                viewport_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "viewport size {} does not match buffer size {}",
                    viewport_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Row-major `0x00RRGGBB` pixels covering one viewport.
#[derive(Debug, PartialEq)]
pub struct PixelBuffer {
    viewport: Viewport,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Allocates a zeroed (black) buffer, reporting allocation failure instead
    /// of aborting.
    pub fn new(viewport: Viewport) -> Result<Self, PixelBufferError> {
        let count = viewport.pixel_count();
        let mut pixels = Vec::new();

        pixels
            .try_reserve_exact(count)
            .map_err(|_| PixelBufferError::Allocation { pixels: count })?;
        pixels.resize(count, 0);

        Ok(Self { viewport, pixels })
    }

    pub fn from_data(viewport: Viewport, pixels: Vec<u32>) -> Result<Self, PixelBufferError> {
        if viewport.pixel_count() != pixels.len() {
            return Err(PixelBufferError::BoundsMismatch {
                viewport_size: viewport.pixel_count(),
                buffer_size: pixels.len(),
            });
        }

        Ok(Self { viewport, pixels })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<u32> {
        if !self.viewport.contains(point) {
            return None;
        }

        let index = point.y as usize * self.viewport.width() as usize + point.x as usize;
        Some(self.pixels[index])
    }
}
