//! Paint devices and the canvas that bounds them

use crate::geometry::Rect;
use crate::surface::CpuSurface;
use crate::types::ColorModel;

/// The image a device belongs to. Only its bounds matter for painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canvas rectangle, always anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
}

/// Pixel storage plus the color model it is expressed in
pub struct PaintDevice {
    surface: CpuSurface,
    color_model: ColorModel,
    canvas: Option<Canvas>,
}

impl PaintDevice {
    /// A free-standing device with no owning canvas
    pub fn new(width: u32, height: u32, color_model: ColorModel) -> Self {
        Self {
            surface: CpuSurface::new(width, height),
            color_model,
            canvas: None,
        }
    }

    /// A device sized to and owned by `canvas`
    pub fn for_canvas(canvas: Canvas, color_model: ColorModel) -> Self {
        Self {
            surface: CpuSurface::new(canvas.width, canvas.height),
            color_model,
            canvas: Some(canvas),
        }
    }

    #[inline]
    pub fn color_model(&self) -> ColorModel {
        self.color_model
    }

    /// The canvas this device belongs to, if any
    #[inline]
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.surface.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.surface.height
    }

    /// Extent of the pixel storage
    pub fn extent(&self) -> Rect {
        Rect::new(0, 0, self.surface.width as i32, self.surface.height as i32)
    }

    #[inline]
    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut CpuSurface {
        &mut self.surface
    }

    /// Fill the whole device with a color, converted to the device model
    pub fn fill(&mut self, color: [f32; 4]) {
        self.surface.clear(self.color_model.convert(color));
    }
}
