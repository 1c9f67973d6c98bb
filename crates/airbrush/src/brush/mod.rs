//! Brushes that supply dab content
//!
//! Every brush implements [`DabSource`], so callers resolve a dab without
//! inspecting the brush kind:
//! - [`MaskBrush`] - procedural soft circle, filled with the paint color
//! - [`ImageBrush`] - pre-rendered color image, scaled by pressure
//! - [`PipedImageBrush`] - a set of images, one picked per pressure

mod image_brush;
mod mask;
mod pipe;

use glam::Vec2;

use airbrush_config::{BrushConfig, MAX_BRUSH_SIZE};

use crate::constants::MIN_SPACING;
use crate::dab::{AlphaMask, Dab};
use crate::types::{BrushType, ColorModel};

pub use image_brush::ImageBrush;
pub use mask::MaskBrush;
pub use pipe::PipedImageBrush;

/// Brush preset configuration
#[derive(Debug, Clone)]
pub struct BrushPreset {
    /// Human-readable name
    pub name: String,
    /// Diameter at pressure 0
    pub min_size: f32,
    /// Diameter at pressure 1
    pub max_size: f32,
    /// Hardness: 0.0 = soft, 1.0 = hard
    pub hardness: f32,
    /// Spacing as fraction of size (e.g., 0.25 = 25% of diameter)
    pub spacing: f32,
}

impl Default for BrushPreset {
    fn default() -> Self {
        Self::from(&BrushConfig::default())
    }
}

impl From<&BrushConfig> for BrushPreset {
    fn from(config: &BrushConfig) -> Self {
        Self::new(
            "Airbrush",
            config.min_size,
            config.max_size,
            config.hardness,
            config.spacing,
        )
    }
}

impl BrushPreset {
    /// Create a new brush preset with the given parameters
    pub fn new(
        name: impl Into<String>,
        min_size: f32,
        max_size: f32,
        hardness: f32,
        spacing: f32,
    ) -> Self {
        Self {
            name: name.into(),
            min_size: min_size.clamp(0.0, MAX_BRUSH_SIZE),
            max_size: max_size.clamp(0.0, MAX_BRUSH_SIZE),
            hardness: hardness.clamp(0.0, 1.0),
            spacing: spacing.max(MIN_SPACING), // Prevent zero spacing
        }
    }

    /// Calculate brush diameter based on pressure
    pub fn size_for_pressure(&self, pressure: f32) -> f32 {
        let pressure = pressure.clamp(0.0, 1.0);
        self.min_size + (self.max_size - self.min_size) * pressure
    }
}

/// Everything a brush needs to render one dab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DabRequest {
    /// Color model of the target device
    pub color_model: ColorModel,
    /// Current paint color (straight RGBA)
    pub paint_color: [f32; 4],
    pub pressure: f32,
    /// Sub-pixel offset in x, 0.0-1.0
    pub x_frac: f32,
    /// Sub-pixel offset in y, 0.0-1.0
    pub y_frac: f32,
}

/// Produces the dab for a paint operation
pub trait DabSource {
    fn resolve_dab(&self, request: &DabRequest) -> Dab;
}

/// Brush geometry and content
pub trait Brush: DabSource {
    fn brush_type(&self) -> BrushType;

    /// Mask width in pixels at this pressure, never negative
    fn mask_width(&self, pressure: f32) -> i32;

    /// Mask height in pixels at this pressure, never negative
    fn mask_height(&self, pressure: f32) -> i32;

    /// Offset of the dab anchor from its top-left corner
    fn hot_spot(&self, pressure: f32) -> Vec2 {
        Vec2::new(
            self.mask_width(pressure) as f32 / 2.0,
            self.mask_height(pressure) as f32 / 2.0,
        )
    }

    /// Coverage mask sampled at the given sub-pixel offset
    fn mask(&self, pressure: f32, x_frac: f32, y_frac: f32) -> AlphaMask;

    /// Color image in `color_model`, or None for brushes that only have a mask
    fn image(&self, _color_model: ColorModel, _pressure: f32, _x_frac: f32, _y_frac: f32) -> Option<Dab> {
        None
    }
}

/// Calculate falloff based on hardness
/// distance_normalized is 0 at center, 1 at edge
/// hardness is 0.0 (soft) to 1.0 (hard)
#[inline]
pub fn calculate_hardness_falloff(distance_normalized: f32, hardness: f32) -> f32 {
    if distance_normalized > 1.0 {
        return 0.0;
    }
    if hardness >= 1.0 {
        return 1.0;
    }
    let t = distance_normalized.max(0.0);
    let soft = 1.0 - t; // Linear falloff for soft brush
    // Interpolate between soft and hard based on hardness
    soft * (1.0 - hardness) + hardness
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_preset_default() {
        let preset = BrushPreset::default();
        let config = BrushConfig::default();
        assert_eq!(preset.min_size, config.min_size);
        assert_eq!(preset.max_size, config.max_size);
        assert!(preset.spacing > 0.0);
    }

    #[test]
    fn test_brush_preset_size_for_pressure() {
        let preset = BrushPreset {
            min_size: 10.0,
            max_size: 50.0,
            ..Default::default()
        };

        assert!((preset.size_for_pressure(0.0) - 10.0).abs() < 0.001);
        assert!((preset.size_for_pressure(1.0) - 50.0).abs() < 0.001);
        assert!((preset.size_for_pressure(0.5) - 30.0).abs() < 0.001);
        // Out-of-range pressure is clamped
        assert!((preset.size_for_pressure(3.0) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_brush_preset_clamps_inputs() {
        let preset = BrushPreset::new("x", -5.0, 10.0, 2.0, 0.0);
        assert_eq!(preset.min_size, 0.0);
        assert_eq!(BrushPreset::new("x", 0.0, 1e10, 0.5, 0.25).max_size, MAX_BRUSH_SIZE);
        assert_eq!(preset.hardness, 1.0);
        assert_eq!(preset.spacing, MIN_SPACING);
    }

    #[test]
    fn test_hardness_falloff() {
        // Hard brush (hardness = 1.0)
        assert_eq!(calculate_hardness_falloff(0.0, 1.0), 1.0);
        assert_eq!(calculate_hardness_falloff(0.5, 1.0), 1.0);
        assert_eq!(calculate_hardness_falloff(1.0, 1.0), 1.0);

        // Soft brush (hardness = 0.0)
        assert_eq!(calculate_hardness_falloff(0.0, 0.0), 1.0);
        assert_eq!(calculate_hardness_falloff(0.5, 0.0), 0.5);
        assert_eq!(calculate_hardness_falloff(1.0, 0.0), 0.0);

        // Medium brush (hardness = 0.5)
        let mid = calculate_hardness_falloff(0.5, 0.5);
        assert!(mid > 0.5 && mid < 1.0); // Between soft and hard

        // Outside the circle
        assert_eq!(calculate_hardness_falloff(1.5, 1.0), 0.0);
    }
}
