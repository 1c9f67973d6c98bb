//! CPU surface for painting - f32 RGBA storage

use crate::types::CompositeOp;

/// An RGBA CPU surface for painting
/// Stores pixels as straight-alpha [f32; 4]
pub struct CpuSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a] as f32
    pixels: Vec<[f32; 4]>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0.0, 0.0, 0.0, 0.0]; pixel_count],
        }
    }

    /// Clear the surface to a solid color
    pub fn clear(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<[f32; 4]> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: [f32; 4]) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Composite a source pixel onto the surface
    ///
    /// `opacity` scales the source alpha (0.0 to 1.0). Out-of-bounds
    /// coordinates are ignored.
    #[inline]
    pub fn composite_pixel(&mut self, x: i32, y: i32, src: [f32; 4], opacity: f32, op: CompositeOp) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let dst = self.pixels[index];
        let src_alpha = (src[3] * opacity).clamp(0.0, 1.0);
        if src_alpha <= 0.0 {
            return;
        }
        let inv_src_alpha = 1.0 - src_alpha;

        self.pixels[index] = match op {
            CompositeOp::Over => [
                src[0] * src_alpha + dst[0] * inv_src_alpha,
                src[1] * src_alpha + dst[1] * inv_src_alpha,
                src[2] * src_alpha + dst[2] * inv_src_alpha,
                src_alpha + dst[3] * inv_src_alpha,
            ],
            // Separable modes keep the destination alpha
            CompositeOp::Multiply => {
                let mix = |s: f32, d: f32| d * s * src_alpha + d * inv_src_alpha;
                [mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), dst[3]]
            }
            CompositeOp::Screen => {
                let mix = |s: f32, d: f32| (s + d - s * d) * src_alpha + d * inv_src_alpha;
                [mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), dst[3]]
            }
            // Destination-out: fade the pixel towards transparent
            CompositeOp::Erase => [
                dst[0] * inv_src_alpha,
                dst[1] * inv_src_alpha,
                dst[2] * inv_src_alpha,
                dst[3] * inv_src_alpha,
            ],
        };
    }

    /// Get raw pixel data as bytes, e.g. for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }
}
