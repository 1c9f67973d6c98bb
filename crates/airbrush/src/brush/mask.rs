//! Procedural soft circular brush

use airbrush_config::MAX_BRUSH_SIZE;

use super::{calculate_hardness_falloff, Brush, BrushPreset, DabRequest, DabSource};
use crate::dab::{compute_dab, AlphaMask, Dab};
use crate::types::BrushType;

/// A round brush whose diameter follows pressure
#[derive(Debug, Clone)]
pub struct MaskBrush {
    preset: BrushPreset,
}

impl MaskBrush {
    pub fn new(preset: BrushPreset) -> Self {
        Self { preset }
    }

    pub fn preset(&self) -> &BrushPreset {
        &self.preset
    }

    /// Side of the square mask. One pixel wider than the circle to leave
    /// room for the sub-pixel shift. Diameters are capped at `MAX_BRUSH_SIZE`.
    fn mask_side(&self, pressure: f32) -> i32 {
        let diameter = self.preset.size_for_pressure(pressure);
        if diameter.is_nan() || diameter <= 0.0 {
            return 0;
        }
        (diameter.min(MAX_BRUSH_SIZE).ceil() as i32).saturating_add(1)
    }
}

impl DabSource for MaskBrush {
    fn resolve_dab(&self, request: &DabRequest) -> Dab {
        let mask = self.mask(request.pressure, request.x_frac, request.y_frac);
        compute_dab(&mask, request.paint_color, request.color_model)
    }
}

impl Brush for MaskBrush {
    fn brush_type(&self) -> BrushType {
        BrushType::Mask
    }

    fn mask_width(&self, pressure: f32) -> i32 {
        self.mask_side(pressure)
    }

    fn mask_height(&self, pressure: f32) -> i32 {
        self.mask_side(pressure)
    }

    fn mask(&self, pressure: f32, x_frac: f32, y_frac: f32) -> AlphaMask {
        let side = self.mask_side(pressure) as u32;
        let mut mask = AlphaMask::new(side, side);
        if side == 0 {
            return mask;
        }

        let radius = self.preset.size_for_pressure(pressure).min(MAX_BRUSH_SIZE) / 2.0;
        let center_x = radius + x_frac;
        let center_y = radius + y_frac;

        for py in 0..side {
            for px in 0..side {
                // Distance from circle center to pixel center
                let dx = (px as f32 + 0.5) - center_x;
                let dy = (py as f32 + 0.5) - center_y;
                let distance_normalized = (dx * dx + dy * dy).sqrt() / radius;

                let falloff = calculate_hardness_falloff(distance_normalized, self.preset.hardness);
                if falloff > 0.0 {
                    mask.set_alpha(px, py, falloff);
                }
            }
        }

        mask
    }
}
