//! Brushes stamping a pre-rendered color image

use image::RgbaImage;

use super::{Brush, DabRequest, DabSource};
use crate::constants::{MAX_IMAGE_SCALE, MIN_IMAGE_SCALE};
use crate::dab::{AlphaMask, Dab};
use crate::types::{BrushType, ColorModel};
use crate::validation::{validate_buffer_len, ValidationError};

/// A color brush tip, scaled by pressure and resampled bilinearly
#[derive(Debug, Clone)]
pub struct ImageBrush {
    source: Dab,
}

impl ImageBrush {
    /// Create a brush from straight-alpha RGBA pixels
    pub fn new(source: Dab) -> Result<Self, ValidationError> {
        validate_buffer_len(source.width(), source.height(), source.pixels().len())?;
        Ok(Self { source })
    }

    /// Create a brush from an 8-bit RGBA image
    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self, ValidationError> {
        let pixels = image
            .pixels()
            .map(|p| {
                [
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                    p[3] as f32 / 255.0,
                ]
            })
            .collect();
        Self::new(Dab::from_pixels(image.width(), image.height(), pixels)?)
    }

    pub fn source(&self) -> &Dab {
        &self.source
    }

    /// Pressure 0.5 stamps the image at its native size
    pub fn scale_for_pressure(pressure: f32) -> f32 {
        (pressure.clamp(0.0, 1.0) * 2.0).clamp(MIN_IMAGE_SCALE, MAX_IMAGE_SCALE)
    }

    fn scaled_side(side: u32, pressure: f32) -> i32 {
        ((side as f32 * Self::scale_for_pressure(pressure)).ceil() as i32).saturating_add(1)
    }

    /// Resample the source at the pressure's scale, shifted by the sub-pixel offset
    fn render(&self, pressure: f32, x_frac: f32, y_frac: f32) -> Dab {
        let scale = Self::scale_for_pressure(pressure);
        let width = Self::scaled_side(self.source.width(), pressure) as u32;
        let height = Self::scaled_side(self.source.height(), pressure) as u32;
        let mut dab = Dab::new(width, height);

        for py in 0..height {
            for px in 0..width {
                // Map the destination pixel center back into source texel space
                let u = (px as f32 + 0.5 - x_frac) / scale - 0.5;
                let v = (py as f32 + 0.5 - y_frac) / scale - 0.5;
                dab.set_pixel(px, py, sample_bilinear(&self.source, u, v));
            }
        }

        dab
    }
}

/// Premultiplied texel fetch, transparent outside the image
#[inline]
fn fetch_premultiplied(source: &Dab, x: i64, y: i64) -> [f32; 4] {
    if x < 0 || y < 0 || x > u32::MAX as i64 || y > u32::MAX as i64 {
        return [0.0; 4];
    }
    match source.pixel(x as u32, y as u32) {
        Some(p) => [p[0] * p[3], p[1] * p[3], p[2] * p[3], p[3]],
        None => [0.0; 4],
    }
}

/// Bilinear sample in premultiplied space, returned as straight alpha
fn sample_bilinear(source: &Dab, u: f32, v: f32) -> [f32; 4] {
    let x0 = u.floor();
    let y0 = v.floor();
    let tx = u - x0;
    let ty = v - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let p00 = fetch_premultiplied(source, x0, y0);
    let p10 = fetch_premultiplied(source, x0 + 1, y0);
    let p01 = fetch_premultiplied(source, x0, y0 + 1);
    let p11 = fetch_premultiplied(source, x0 + 1, y0 + 1);

    let mut out = [0.0f32; 4];
    for c in 0..4 {
        let top = p00[c] * (1.0 - tx) + p10[c] * tx;
        let bottom = p01[c] * (1.0 - tx) + p11[c] * tx;
        out[c] = top * (1.0 - ty) + bottom * ty;
    }

    let alpha = out[3];
    if alpha <= 0.0 {
        return [0.0; 4];
    }
    [
        (out[0] / alpha).min(1.0),
        (out[1] / alpha).min(1.0),
        (out[2] / alpha).min(1.0),
        alpha.min(1.0),
    ]
}

impl DabSource for ImageBrush {
    fn resolve_dab(&self, request: &DabRequest) -> Dab {
        self.render(request.pressure, request.x_frac, request.y_frac)
            .into_color_model(request.color_model)
    }
}

impl Brush for ImageBrush {
    fn brush_type(&self) -> BrushType {
        BrushType::Image
    }

    fn mask_width(&self, pressure: f32) -> i32 {
        Self::scaled_side(self.source.width(), pressure)
    }

    fn mask_height(&self, pressure: f32) -> i32 {
        Self::scaled_side(self.source.height(), pressure)
    }

    fn mask(&self, pressure: f32, x_frac: f32, y_frac: f32) -> AlphaMask {
        self.render(pressure, x_frac, y_frac).alpha_mask()
    }

    fn image(&self, color_model: ColorModel, pressure: f32, x_frac: f32, y_frac: f32) -> Option<Dab> {
        Some(self.render(pressure, x_frac, y_frac).into_color_model(color_model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> ImageBrush {
        let pixels = vec![
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0, 0.5],
        ];
        ImageBrush::new(Dab::from_pixels(2, 2, pixels).unwrap()).unwrap()
    }

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn test_scale_for_pressure() {
        assert_eq!(ImageBrush::scale_for_pressure(0.5), 1.0);
        assert_eq!(ImageBrush::scale_for_pressure(1.0), 2.0);
        assert_eq!(ImageBrush::scale_for_pressure(0.0), MIN_IMAGE_SCALE);
    }

    #[test]
    fn test_dimensions() {
        let brush = checker();
        assert_eq!(brush.mask_width(0.5), 3);
        assert_eq!(brush.mask_height(0.5), 3);
        assert_eq!(brush.mask_width(1.0), 5);
        // Never below one texel plus the sub-pixel margin
        assert_eq!(brush.mask_width(0.0), 2);
    }

    #[test]
    fn test_native_scale_reproduces_source() {
        let brush = checker();
        let dab = brush.image(ColorModel::Rgba, 0.5, 0.0, 0.0).unwrap();

        assert!(close(dab.pixel(0, 0).unwrap(), [1.0, 0.0, 0.0, 1.0]));
        assert!(close(dab.pixel(1, 0).unwrap(), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(dab.pixel(0, 1).unwrap(), [0.0, 0.0, 1.0, 1.0]));
        assert!(close(dab.pixel(1, 1).unwrap(), [1.0, 1.0, 1.0, 0.5]));
        // Margin column is transparent
        assert_eq!(dab.pixel(2, 0).unwrap()[3], 0.0);
    }

    #[test]
    fn test_sub_pixel_offset_blends_neighbors() {
        let brush = checker();
        let dab = brush.image(ColorModel::Rgba, 0.5, 0.5, 0.0).unwrap();

        // Halfway between transparent left edge and red
        let left = dab.pixel(0, 0).unwrap();
        assert!((left[3] - 0.5).abs() < 1e-4);
        assert!(close([left[0], left[1], left[2], 1.0], [1.0, 0.0, 0.0, 1.0]));

        // Halfway between red and green, both opaque
        let middle = dab.pixel(1, 0).unwrap();
        assert!(close(middle, [0.5, 0.5, 0.0, 1.0]));
    }

    #[test]
    fn test_image_converted_to_device_model() {
        let brush = checker();
        let dab = brush.image(ColorModel::Grayscale, 0.5, 0.0, 0.0).unwrap();
        let pixel = dab.pixel(1, 0).unwrap();
        assert!((pixel[0] - 0.7152).abs() < 1e-4);
        assert_eq!(pixel[0], pixel[1]);
    }

    #[test]
    fn test_mask_is_image_alpha() {
        let brush = checker();
        let mask = brush.mask(0.5, 0.0, 0.0);
        assert!((mask.alpha_at(1, 1) - 0.5).abs() < 1e-4);
        assert!((mask.alpha_at(0, 0) - 1.0).abs() < 1e-4);
        assert_eq!(mask.alpha_at(2, 2), 0.0);
    }

    #[test]
    fn test_resolve_dab_matches_image() {
        let brush = checker();
        let request = DabRequest {
            color_model: ColorModel::Rgba,
            paint_color: [0.0, 0.0, 0.0, 1.0],
            pressure: 0.8,
            x_frac: 0.3,
            y_frac: 0.7,
        };
        let expected = brush.image(ColorModel::Rgba, 0.8, 0.3, 0.7).unwrap();
        assert_eq!(brush.resolve_dab(&request), expected);
        assert_eq!(brush.brush_type(), BrushType::Image);
    }

    #[test]
    fn test_from_rgba_image() {
        let mut image = RgbaImage::new(3, 2);
        image.put_pixel(2, 1, image::Rgba([255, 0, 0, 255]));

        let brush = ImageBrush::from_rgba_image(&image).unwrap();
        assert_eq!(brush.source().width(), 3);
        assert_eq!(brush.source().pixel(2, 1), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(brush.source().pixel(0, 0), Some([0.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_empty_image_rejected() {
        let image = RgbaImage::new(0, 0);
        assert!(ImageBrush::from_rgba_image(&image).is_err());
    }
}
