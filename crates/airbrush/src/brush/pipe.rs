//! Piped image brushes: several tips, selected by pressure

use glam::Vec2;

use super::{Brush, DabRequest, DabSource, ImageBrush};
use crate::dab::{AlphaMask, Dab};
use crate::types::{BrushType, ColorModel};
use crate::validation::ValidationError;

/// An ordered set of image brushes. Higher pressure picks later images.
#[derive(Debug, Clone)]
pub struct PipedImageBrush {
    images: Vec<ImageBrush>,
}

impl PipedImageBrush {
    pub fn new(images: Vec<ImageBrush>) -> Result<Self, ValidationError> {
        if images.is_empty() {
            return Err(ValidationError::EmptyPipe);
        }
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Index of the image used at this pressure
    pub fn index_for_pressure(&self, pressure: f32) -> usize {
        let count = self.images.len();
        let index = (pressure.clamp(0.0, 1.0) * count as f32).floor() as usize;
        index.min(count - 1)
    }

    fn select(&self, pressure: f32) -> &ImageBrush {
        &self.images[self.index_for_pressure(pressure)]
    }
}

impl DabSource for PipedImageBrush {
    fn resolve_dab(&self, request: &DabRequest) -> Dab {
        self.select(request.pressure).resolve_dab(request)
    }
}

impl Brush for PipedImageBrush {
    fn brush_type(&self) -> BrushType {
        BrushType::PipeImage
    }

    fn mask_width(&self, pressure: f32) -> i32 {
        self.select(pressure).mask_width(pressure)
    }

    fn mask_height(&self, pressure: f32) -> i32 {
        self.select(pressure).mask_height(pressure)
    }

    fn hot_spot(&self, pressure: f32) -> Vec2 {
        self.select(pressure).hot_spot(pressure)
    }

    fn mask(&self, pressure: f32, x_frac: f32, y_frac: f32) -> AlphaMask {
        self.select(pressure).mask(pressure, x_frac, y_frac)
    }

    fn image(&self, color_model: ColorModel, pressure: f32, x_frac: f32, y_frac: f32) -> Option<Dab> {
        self.select(pressure).image(color_model, pressure, x_frac, y_frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, color: [f32; 4]) -> ImageBrush {
        let pixels = vec![color; (width * height) as usize];
        ImageBrush::new(Dab::from_pixels(width, height, pixels).unwrap()).unwrap()
    }

    fn pipe() -> PipedImageBrush {
        PipedImageBrush::new(vec![
            solid(2, 2, [1.0, 0.0, 0.0, 1.0]),
            solid(4, 4, [0.0, 1.0, 0.0, 1.0]),
            solid(6, 6, [0.0, 0.0, 1.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_pipe_rejected() {
        assert_eq!(PipedImageBrush::new(Vec::new()).unwrap_err(), ValidationError::EmptyPipe);
    }

    #[test]
    fn test_index_for_pressure() {
        let brush = pipe();
        assert_eq!(brush.index_for_pressure(0.0), 0);
        assert_eq!(brush.index_for_pressure(0.34), 1);
        assert_eq!(brush.index_for_pressure(0.9), 2);
        // Pressure 1.0 and beyond stays on the last image
        assert_eq!(brush.index_for_pressure(1.0), 2);
        assert_eq!(brush.index_for_pressure(-1.0), 0);
    }

    #[test]
    fn test_geometry_follows_selected_image() {
        let brush = pipe();
        // Pressure 0.5 selects the 4x4 image at scale 1.0
        assert_eq!(brush.mask_width(0.5), 5);
        assert_eq!(brush.hot_spot(0.5), Vec2::new(2.5, 2.5));
        assert_eq!(brush.brush_type(), BrushType::PipeImage);
    }

    #[test]
    fn test_resolve_dab_uses_selected_image() {
        let brush = pipe();
        let request = DabRequest {
            color_model: ColorModel::Rgba,
            paint_color: [0.0, 0.0, 0.0, 1.0],
            pressure: 0.9,
            x_frac: 0.0,
            y_frac: 0.0,
        };
        let dab = brush.resolve_dab(&request);
        let pixel = dab.pixel(1, 1).unwrap();
        assert!((pixel[2] - 1.0).abs() < 1e-4);
        assert!(pixel[0].abs() < 1e-4);
    }
}
