use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Composite operators for blending dab pixels into a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum CompositeOp {
    #[default]
    Over = 0,
    Multiply = 1,
    Screen = 2,
    Erase = 3,
}

/// Native color representation of a paint device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum ColorModel {
    #[default]
    Rgba = 0,
    /// Luma replicated into the RGB channels
    Grayscale = 1,
}

impl ColorModel {
    /// Convert a straight RGBA color into this model
    #[inline]
    pub fn convert(self, color: [f32; 4]) -> [f32; 4] {
        match self {
            ColorModel::Rgba => color,
            ColorModel::Grayscale => {
                // Rec. 709 luma
                let luma = 0.2126 * color[0] + 0.7152 * color[1] + 0.0722 * color[2];
                [luma, luma, luma, color[3]]
            }
        }
    }
}

/// Kind of content a brush produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum BrushType {
    /// Alpha mask filled with the paint color
    Mask = 0,
    /// Pre-rendered color image
    Image = 1,
    /// Image chosen from a set of images
    PipeImage = 2,
}

/// A single pointer or stylus sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Position in device pixel coordinates
    pub position: Vec2,
    /// Normalized pressure, usually 0.0-1.0
    pub pressure: f32,
    pub tilt_x: f32,
    pub tilt_y: f32,
}

impl PointerSample {
    /// Create a sample with no tilt
    pub fn new(x: f32, y: f32, pressure: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            pressure,
            tilt_x: 0.0,
            tilt_y: 0.0,
        }
    }

    /// Set the tilt of this sample
    pub fn with_tilt(mut self, tilt_x: f32, tilt_y: f32) -> Self {
        self.tilt_x = tilt_x;
        self.tilt_y = tilt_y;
        self
    }
}
