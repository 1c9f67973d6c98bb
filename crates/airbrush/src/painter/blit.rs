//! Selection-aware blitting of dabs onto the painter's device

use tracing::trace;

use super::Painter;
use crate::constants::{OPACITY_OPAQUE, OPACITY_TRANSPARENT};
use crate::dab::Dab;
use crate::types::CompositeOp;

impl Painter {
    /// Composite a region of `dab` onto the device at (x, y)
    ///
    /// Copies the `width` x `height` block starting at (`src_x`, `src_y`) in
    /// the dab. Each dab pixel's alpha is scaled by `opacity / OPACITY_OPAQUE`
    /// and by the selection coverage of its destination pixel. Destination
    /// pixels outside the device and source pixels outside the dab are
    /// skipped. Does nothing without a device.
    #[allow(clippy::too_many_arguments)]
    pub fn blt_selection(
        &mut self,
        x: i32,
        y: i32,
        op: CompositeOp,
        dab: &Dab,
        opacity: u8,
        src_x: i32,
        src_y: i32,
        width: i32,
        height: i32,
    ) {
        let Some(device) = self.device.as_mut() else {
            return;
        };
        if width <= 0 || height <= 0 || opacity == OPACITY_TRANSPARENT {
            return;
        }

        let opacity = opacity as f32 / OPACITY_OPAQUE as f32;
        let selection = self.selection.as_ref();
        let surface = device.surface_mut();

        for row in 0..height {
            let sy = src_y + row;
            if sy < 0 {
                continue;
            }
            for col in 0..width {
                let sx = src_x + col;
                if sx < 0 {
                    continue;
                }
                let Some(src) = dab.pixel(sx as u32, sy as u32) else {
                    continue;
                };

                let dx = x.saturating_add(col);
                let dy = y.saturating_add(row);
                let coverage = match selection {
                    Some(selection) => selection.coverage(dx, dy),
                    None => 1.0,
                };
                if coverage <= 0.0 {
                    continue;
                }

                surface.composite_pixel(dx, dy, src, opacity * coverage, op);
            }
        }

        trace!(
            "blt_selection: {}x{} at ({}, {}) op={:?} opacity={:.3}",
            width, height, x, y, op, opacity
        );
    }
}
