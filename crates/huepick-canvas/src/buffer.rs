//! RGBA8 pixel buffers in CPU memory.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A rectangular chunk of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this region lies entirely inside a `width` x `height` buffer.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        let right = u64::from(self.x) + u64::from(self.width);
        let bottom = u64::from(self.y) + u64::from(self.height);
        right <= u64::from(width) && bottom <= u64::from(height)
    }
}

impl FromStr for Region {
    type Err = CanvasError;

    /// Parse `X,Y,WIDTH,HEIGHT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CanvasError::InvalidRegion(s.to_string());
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<u32>().map_err(|_| invalid()))
            .collect::<CanvasResult<Vec<_>>>()?;
        match parts.as_slice() {
            &[x, y, width, height] => Ok(Self::new(x, y, width, height)),
            _ => Err(invalid()),
        }
    }
}

/// Row-major RGBA8 pixel data, 4 bytes per pixel, no row padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        Ok(Self {
            width,
            height,
            data: vec![0u8; byte_len(width, height)?],
        })
    }

    /// Wrap existing RGBA8 bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> CanvasResult<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(CanvasError::DimensionMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    /// Pixels of row `y`.
    pub fn row(&self, y: u32) -> Option<&[[u8; 4]]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.pixels()[start..start + self.width as usize])
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| self.pixels()[i])
    }

    /// Write one pixel. Returns `false` if `(x, y)` is outside the buffer.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels_mut()[i] = rgba;
                true
            }
            None => false,
        }
    }

    /// Copy out a rectangular chunk.
    pub fn region(&self, region: Region) -> CanvasResult<PixelBuffer> {
        if !region.fits(self.width, self.height) {
            return Err(CanvasError::RegionOutOfBounds {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                buffer_width: self.width,
                buffer_height: self.height,
            });
        }

        let mut data = Vec::with_capacity(byte_len(region.width, region.height)?);
        let row_start = region.x as usize * BYTES_PER_PIXEL;
        let row_len = region.width as usize * BYTES_PER_PIXEL;
        let stride = self.width as usize * BYTES_PER_PIXEL;
        for y in region.y..region.y + region.height {
            let start = y as usize * stride + row_start;
            data.extend_from_slice(&self.data[start..start + row_len]);
        }

        Ok(Self {
            width: region.width,
            height: region.height,
            data,
        })
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}

/// Byte size of a `width` x `height` RGBA8 buffer, or `TooLarge` on overflow.
fn byte_len(width: u32, height: u32) -> CanvasResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or(CanvasError::TooLarge { width, height })
}
