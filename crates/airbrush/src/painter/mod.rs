//! Painter session state
//!
//! A [`Painter`] lives for one painting session. It owns the target device,
//! the active brush and paint settings, caches the most recent dab and
//! pressure, and accumulates the dirty region for redraw.

mod blit;
mod selection;

use std::sync::Arc;

use airbrush_config::{AirbrushConfig, ConfigError, DEFAULT_TILE_SIZE};

use crate::brush::{Brush, BrushPreset, MaskBrush};
use crate::dab::Dab;
use crate::device::{Canvas, PaintDevice};
use crate::dirty::{DirtyRegion, TileCoord};
use crate::geometry::Rect;
use crate::types::{ColorModel, CompositeOp};

pub use selection::Selection;

/// Shared mutable state of a painting session
pub struct Painter {
    /// Target device (None if nothing to paint on)
    device: Option<PaintDevice>,
    /// Active brush
    brush: Option<Box<dyn Brush>>,
    /// Current paint color (straight RGBA)
    paint_color: [f32; 4],
    /// Composite operator used by paint operations
    composite_op: CompositeOp,
    /// Optional selection restricting blits
    selection: Option<Selection>,
    /// Most recently resolved dab
    dab: Option<Arc<Dab>>,
    /// Pressure of the most recent paint operation
    pressure: f32,
    /// Region changed since the last redraw
    dirty: DirtyRegion,
    /// Tile size used when mapping the dirty region to tiles
    tile_size: u32,
}

impl Painter {
    /// Create a painter targeting `device`
    pub fn new(device: PaintDevice) -> Self {
        Self {
            device: Some(device),
            ..Self::without_device()
        }
    }

    /// Create a painter with no target device. Paint operations are no-ops.
    pub fn without_device() -> Self {
        Self {
            device: None,
            brush: None,
            paint_color: [0.0, 0.0, 0.0, 1.0], // Default to black
            composite_op: CompositeOp::default(),
            selection: None,
            dab: None,
            pressure: 0.0,
            dirty: DirtyRegion::new(),
            tile_size: DEFAULT_TILE_SIZE,
        }
    }

    /// Build a painter with a canvas-backed device and a mask brush from config
    pub fn from_config(config: &AirbrushConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let color_model = if config.paint.grayscale {
            ColorModel::Grayscale
        } else {
            ColorModel::Rgba
        };
        let canvas = Canvas::new(config.canvas.width, config.canvas.height);
        let mut painter = Self::new(PaintDevice::for_canvas(canvas, color_model))
            .with_brush(MaskBrush::new(BrushPreset::from(&config.brush)));
        painter.set_paint_color(config.paint.color);
        painter.tile_size = config.canvas.tile_size;
        Ok(painter)
    }

    /// Builder-style brush assignment
    pub fn with_brush(mut self, brush: impl Brush + 'static) -> Self {
        self.brush = Some(Box::new(brush));
        self
    }

    pub fn set_brush(&mut self, brush: Box<dyn Brush>) {
        self.brush = Some(brush);
    }

    pub fn brush(&self) -> Option<&dyn Brush> {
        self.brush.as_deref()
    }

    pub fn device(&self) -> Option<&PaintDevice> {
        self.device.as_ref()
    }

    pub fn device_mut(&mut self) -> Option<&mut PaintDevice> {
        self.device.as_mut()
    }

    /// Detach the device, ending painting on it
    pub fn take_device(&mut self) -> Option<PaintDevice> {
        self.device.take()
    }

    pub fn paint_color(&self) -> [f32; 4] {
        self.paint_color
    }

    pub fn set_paint_color(&mut self, color: [f32; 4]) {
        self.paint_color = color;
    }

    pub fn composite_op(&self) -> CompositeOp {
        self.composite_op
    }

    pub fn set_composite_op(&mut self, op: CompositeOp) {
        self.composite_op = op;
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    /// The cached dab from the most recent paint operation
    pub fn dab(&self) -> Option<&Dab> {
        self.dab.as_deref()
    }

    pub fn set_dab(&mut self, dab: Arc<Dab>) {
        self.dab = Some(dab);
    }

    /// The cached pressure from the most recent paint operation
    pub fn pressure(&self) -> f32 {
        self.pressure
    }

    pub fn set_pressure(&mut self, pressure: f32) {
        self.pressure = pressure;
    }

    /// Extend the dirty region
    pub fn add_dirty_rect(&mut self, rect: Rect) {
        self.dirty.add(rect);
    }

    pub fn dirty_region(&self) -> &DirtyRegion {
        &self.dirty
    }

    /// Take the dirty region for redraw, leaving it empty
    pub fn take_dirty_region(&mut self) -> DirtyRegion {
        std::mem::take(&mut self.dirty)
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Take dirty tiles of the device for upload
    ///
    /// Returns the tiles touched since the last call, clipped to the device
    /// extent. The dirty region is cleared.
    pub fn take_dirty_tiles(&mut self) -> Vec<TileCoord> {
        let region = self.take_dirty_region();
        match self.device.as_ref() {
            Some(device) => region.tiles(self.tile_size, device.extent()),
            None => Vec::new(),
        }
    }
}
