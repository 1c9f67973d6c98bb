//! Dab pixel buffers and alpha masks
//!
//! A [`Dab`] is the color content stamped by one paint operation. Mask
//! brushes produce an [`AlphaMask`] which [`compute_dab`] fills with the
//! paint color.

use crate::types::ColorModel;
use crate::validation::{validate_buffer_len, ValidationError};

/// Single-channel coverage buffer, values in 0.0-1.0
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl AlphaMask {
    /// Create a fully transparent mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; (width as usize) * (height as usize)],
        }
    }

    /// Wrap existing coverage values (row-major). Values are clamped to 0.0-1.0.
    pub fn from_values(width: u32, height: u32, mut data: Vec<f32>) -> Result<Self, ValidationError> {
        validate_buffer_len(width, height, data.len())?;
        for value in &mut data {
            *value = value.clamp(0.0, 1.0);
        }
        Ok(Self { width, height, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coverage at (x, y), 0.0 outside the mask
    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    #[inline]
    pub(crate) fn set_alpha(&mut self, x: u32, y: u32, alpha: f32) {
        if x < self.width && y < self.height {
            self.data[(y as usize) * (self.width as usize) + (x as usize)] = alpha.clamp(0.0, 1.0);
        }
    }

    pub fn values(&self) -> &[f32] {
        &self.data
    }
}

/// A rectangular RGBA buffer holding one stamp of brush content
#[derive(Debug, Clone, PartialEq)]
pub struct Dab {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl Dab {
    /// Create a fully transparent dab
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; (width as usize) * (height as usize)],
        }
    }

    /// Wrap existing pixels (row-major, straight alpha)
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[f32; 4]>) -> Result<Self, ValidationError> {
        validate_buffer_len(width, height, pixels.len())?;
        Ok(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), None outside the dab
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    #[inline]
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
        }
    }

    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Raw bytes of the pixel buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// The alpha channel as a mask
    pub fn alpha_mask(&self) -> AlphaMask {
        AlphaMask {
            width: self.width,
            height: self.height,
            data: self.pixels.iter().map(|p| p[3]).collect(),
        }
    }

    /// Convert every pixel into the given color model
    pub fn into_color_model(mut self, model: ColorModel) -> Self {
        if model != ColorModel::Rgba {
            for pixel in &mut self.pixels {
                *pixel = model.convert(*pixel);
            }
        }
        self
    }
}

/// Fill a mask with the paint color
///
/// The color is converted to the device model once. Each dab pixel carries
/// that color with the mask coverage as its alpha.
pub fn compute_dab(mask: &AlphaMask, color: [f32; 4], model: ColorModel) -> Dab {
    let native = model.convert(color);
    let pixels = mask
        .data
        .iter()
        .map(|&alpha| [native[0], native[1], native[2], alpha])
        .collect();
    Dab {
        width: mask.width,
        height: mask.height,
        pixels,
    }
}
