//! Airbrush paint operation
//!
//! Each sample stamps one dab at a low fixed opacity, so paint builds up
//! gradually as samples overlap. Placement is sub-pixel accurate: the dab
//! origin snaps to the pixel grid while the brush samples its content at
//! the fractional remainder.

use std::sync::Arc;

use tracing::{debug, trace};

use super::{DabOutcome, PaintOp};
use crate::brush::{DabRequest, DabSource};
use crate::constants::AIRBRUSH_OPACITY;
use crate::device::Canvas;
use crate::geometry::Rect;
use crate::painter::Painter;
use crate::types::PointerSample;
use crate::validation::split_coordinate;

/// Airbrush operation bound to a painter for the duration of a stroke
pub struct AirbrushOp<'p> {
    painter: Option<&'p mut Painter>,
}

impl<'p> AirbrushOp<'p> {
    pub fn new(painter: &'p mut Painter) -> Self {
        Self {
            painter: Some(painter),
        }
    }

    /// An operation with no painter; every sample is skipped
    pub fn detached() -> Self {
        Self { painter: None }
    }

    pub fn painter(&self) -> Option<&Painter> {
        self.painter.as_deref()
    }
}

/// Whether a dab of `size` placed at (x, y) misses `bounds` entirely
fn is_off_canvas(x: i32, y: i32, size: &Rect, bounds: &Rect) -> bool {
    x >= bounds.right()
        || y >= bounds.bottom()
        || x.saturating_add(size.width) <= bounds.x
        || y.saturating_add(size.height) <= bounds.y
}

impl PaintOp for AirbrushOp<'_> {
    fn paint_at(&mut self, sample: PointerSample) -> DabOutcome {
        let Some(painter) = self.painter.as_deref_mut() else {
            trace!("AirbrushOp::paint_at: no painter, skipping");
            return DabOutcome::SkippedNoPainter;
        };
        let Some(device) = painter.device() else {
            trace!("AirbrushOp::paint_at: no device, skipping");
            return DabOutcome::SkippedNoDevice;
        };
        let color_model = device.color_model();
        let canvas_bounds = device.canvas().map(Canvas::bounds);

        let Some(brush) = painter.brush() else {
            trace!("AirbrushOp::paint_at: no brush, skipping");
            return DabOutcome::SkippedNoBrush;
        };

        let pressure = sample.pressure;
        if !pressure.is_finite() {
            trace!("AirbrushOp::paint_at: non-finite pressure {}, skipping", pressure);
            return DabOutcome::SkippedDegenerateGeometry;
        }
        let pt = sample.position - brush.hot_spot(pressure);
        if !pt.is_finite() {
            trace!("AirbrushOp::paint_at: non-finite position {:?}, skipping", pt);
            return DabOutcome::SkippedDegenerateGeometry;
        }

        let (x, x_frac) = split_coordinate(pt.x);
        let (y, y_frac) = split_coordinate(pt.y);

        let request = DabRequest {
            color_model,
            paint_color: painter.paint_color(),
            pressure,
            x_frac,
            y_frac,
        };
        let dab = Arc::new(brush.resolve_dab(&request));
        let dab_rect = Rect::new(0, 0, brush.mask_width(pressure), brush.mask_height(pressure));

        // Cache for anything reading the painter's current dab and pressure
        painter.set_dab(Arc::clone(&dab));
        painter.set_pressure(pressure);

        if let Some(bounds) = canvas_bounds {
            if is_off_canvas(x, y, &dab_rect, &bounds) {
                trace!(
                    "AirbrushOp::paint_at: dab {}x{} at ({}, {}) outside canvas {:?}",
                    dab_rect.width, dab_rect.height, x, y, bounds
                );
                return DabOutcome::SkippedOffCanvas;
            }
        }

        if dab_rect.is_null() || dab_rect.is_empty() || !dab_rect.is_valid() {
            trace!("AirbrushOp::paint_at: degenerate dab rect {:?}", dab_rect);
            return DabOutcome::SkippedDegenerateGeometry;
        }

        let op = painter.composite_op();
        painter.blt_selection(x, y, op, &dab, AIRBRUSH_OPACITY, 0, 0, dab_rect.width, dab_rect.height);

        let dirty = dab_rect.translated_to(x, y);
        painter.add_dirty_rect(dirty);

        debug!(
            "AirbrushOp::paint_at: ({:.2}, {:.2}) p={:.2} -> {}x{} at ({}, {}) frac=({:.2}, {:.2})",
            sample.position.x, sample.position.y, pressure, dirty.width, dirty.height, x, y, x_frac, y_frac
        );

        DabOutcome::Composited(dirty)
    }
}
